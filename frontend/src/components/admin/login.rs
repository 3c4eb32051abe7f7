//! Admin sign-in form. Credentials are checked by the hosted service's auth
//! endpoint; on success the session is handed upward and a display hint is
//! cached so the navbar keeps showing the admin entry on revisits.

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use gloo_console::error;

use crate::components::helpers::show_toast;
use crate::supabase::auth::{self, Session};

#[derive(Properties, PartialEq)]
pub struct AdminLoginProps {
    pub on_signed_in: Callback<Session>,
}

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Done(Result<Session, String>),
}

pub struct AdminLogin {
    email: String,
    password: String,
    error: Option<String>,
    busy: bool,
}

impl Component for AdminLogin {
    type Message = Msg;
    type Properties = AdminLoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            error: None,
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(value) => {
                self.email = value;
                true
            }
            Msg::SetPassword(value) => {
                self.password = value;
                true
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                self.busy = true;
                self.error = None;
                let email = self.email.clone();
                let password = self.password.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = auth::sign_in(&email, &password)
                        .await
                        .map_err(|err| err.to_string());
                    link.send_message(Msg::Done(outcome));
                });
                true
            }
            Msg::Done(outcome) => {
                self.busy = false;
                match outcome {
                    Ok(session) => {
                        auth::cache_admin_hint(true);
                        show_toast("Signed in");
                        ctx.props().on_signed_in.emit(session);
                    }
                    Err(message) => {
                        error!("sign-in failed:", message);
                        self.error = Some("Invalid credentials. Please try again.".to_string());
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_email = link.callback(|event: InputEvent| Msg::SetEmail(input_value(&event)));
        let on_password = link.callback(|event: InputEvent| Msg::SetPassword(input_value(&event)));
        let on_submit = link.callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="admin-login">
                <h1>{"Admin Login"}</h1>
                <p>{"Access the PropFirmHub admin panel"}</p>
                <form onsubmit={on_submit}>
                    <div class="form-field">
                        <label>{"Email"}</label>
                        <input
                            type="email"
                            placeholder="Enter admin email"
                            value={self.email.clone()}
                            oninput={on_email}
                            required=true
                        />
                    </div>
                    <div class="form-field">
                        <label>{"Password"}</label>
                        <input
                            type="password"
                            placeholder="Enter admin password"
                            value={self.password.clone()}
                            oninput={on_password}
                            required=true
                        />
                    </div>
                    {
                        if let Some(message) = &self.error {
                            html! { <div class="form-error">{ message }</div> }
                        } else {
                            html! {}
                        }
                    }
                    <button type="submit" class="primary" disabled={self.busy}>
                        { if self.busy { "Signing in..." } else { "Sign In" } }
                    </button>
                </form>
            </div>
        }
    }
}

fn input_value(event: &InputEvent) -> String {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
