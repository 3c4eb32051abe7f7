//! Password sign-in against the hosted service's auth endpoint.
//!
//! The returned `Session` is the authority for admin access; the
//! local-storage flag below is only a cached hint used to decide whether the
//! navbar shows the admin entry before a sign-in happened. It gates nothing.

use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::json;

use super::{SupabaseError, check, config};

/// An authenticated admin session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
    pub email: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[derive(Deserialize)]
struct TokenUser {
    id: String,
    email: Option<String>,
}

pub async fn sign_in(email: &str, password: &str) -> Result<Session, SupabaseError> {
    let url = format!(
        "{}/auth/v1/token?grant_type=password",
        config::SUPABASE_URL
    );
    let response = Request::post(&url)
        .header("apikey", config::SUPABASE_ANON_KEY)
        .header("Content-Type", "application/json")
        .json(&json!({ "email": email, "password": password }))?
        .send()
        .await?;
    let token: TokenResponse = check(response).await?.json().await?;
    Ok(Session {
        access_token: token.access_token,
        user_id: token.user.id,
        email: token.user.email.unwrap_or_default(),
    })
}

const ADMIN_HINT_KEY: &str = "propfirmhub_admin_hint";

pub fn cache_admin_hint(signed_in: bool) {
    if let Some(storage) = local_storage() {
        if signed_in {
            let _ = storage.set_item(ADMIN_HINT_KEY, "true");
        } else {
            let _ = storage.remove_item(ADMIN_HINT_KEY);
        }
    }
}

pub fn admin_hint() -> bool {
    local_storage()
        .and_then(|storage| storage.get_item(ADMIN_HINT_KEY).ok().flatten())
        .is_some_and(|value| value == "true")
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}
