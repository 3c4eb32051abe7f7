//! REST client for the hosted database service.
//!
//! Every collection call goes through the `/rest/v1/<table>` endpoints:
//! reads select whole rows with an `order` clause and optional `eq` filters,
//! mutations ask for the affected row back (`Prefer: return=representation`)
//! so callers can patch their local state from the response instead of
//! refetching.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub mod auth;
pub mod config;
pub mod realtime;

#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

fn authed(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("apikey", config::SUPABASE_ANON_KEY)
        .header(
            "Authorization",
            &format!("Bearer {}", config::SUPABASE_ANON_KEY),
        )
}

async fn check(response: Response) -> Result<Response, SupabaseError> {
    let status = response.status();
    if (200..300).contains(&status) {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(SupabaseError::Status { status, body })
    }
}

fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

/// Reads the whole collection, ordered, optionally narrowed by one
/// `column = value` equality filter.
pub async fn fetch_rows<T: DeserializeOwned>(
    table: &str,
    order: &str,
    filter: Option<(&str, &str)>,
) -> Result<Vec<T>, SupabaseError> {
    let mut url = format!(
        "{}/rest/v1/{}?select=*&order={}",
        config::SUPABASE_URL,
        table,
        order
    );
    if let Some((column, value)) = filter {
        url.push_str(&format!("&{}=eq.{}", column, encode(value)));
    }
    let response = authed(Request::get(&url)).send().await?;
    Ok(check(response).await?.json().await?)
}

/// Reads a single row by id.
pub async fn fetch_one<T: DeserializeOwned>(
    table: &str,
    id: &str,
) -> Result<Option<T>, SupabaseError> {
    let url = format!(
        "{}/rest/v1/{}?select=*&id=eq.{}&limit=1",
        config::SUPABASE_URL,
        table,
        encode(id)
    );
    let response = authed(Request::get(&url)).send().await?;
    let rows: Vec<T> = check(response).await?.json().await?;
    Ok(rows.into_iter().next())
}

/// Inserts one record and returns the stored row (with the server-assigned
/// id and timestamp).
pub async fn insert_row<B: Serialize, T: DeserializeOwned>(
    table: &str,
    payload: &B,
) -> Result<T, SupabaseError> {
    let url = format!("{}/rest/v1/{}", config::SUPABASE_URL, table);
    let response = authed(Request::post(&url))
        .header("Content-Type", "application/json")
        .header("Prefer", "return=representation")
        .json(payload)?
        .send()
        .await?;
    single_row(check(response).await?, "insert").await
}

/// Applies a partial update keyed by id and returns the updated row.
pub async fn update_row<B: Serialize, T: DeserializeOwned>(
    table: &str,
    id: &str,
    patch: &B,
) -> Result<T, SupabaseError> {
    let url = format!(
        "{}/rest/v1/{}?id=eq.{}",
        config::SUPABASE_URL,
        table,
        encode(id)
    );
    let response = authed(Request::patch(&url))
        .header("Content-Type", "application/json")
        .header("Prefer", "return=representation")
        .json(patch)?
        .send()
        .await?;
    single_row(check(response).await?, "update").await
}

/// Deletes one record by id. Deleting an id that no longer exists succeeds
/// with no affected rows, so repeated deletes are harmless.
pub async fn delete_row(table: &str, id: &str) -> Result<(), SupabaseError> {
    let url = format!(
        "{}/rest/v1/{}?id=eq.{}",
        config::SUPABASE_URL,
        table,
        encode(id)
    );
    let response = authed(Request::delete(&url))
        .header("Prefer", "return=minimal")
        .send()
        .await?;
    check(response).await?;
    Ok(())
}

async fn single_row<T: DeserializeOwned>(
    response: Response,
    operation: &str,
) -> Result<T, SupabaseError> {
    let rows: Vec<T> = response.json().await?;
    rows.into_iter()
        .next()
        .ok_or_else(|| SupabaseError::Decode(format!("{operation} returned no rows")))
}
