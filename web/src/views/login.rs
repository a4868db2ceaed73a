//! Login page.

use dioxus::prelude::*;

use store::Gate;
use ui::{apply_login, use_session, Alert, AlertLevel};

use crate::views::Guarded;
use crate::Route;

#[component]
pub fn Login() -> Element {
    rsx! {
        Guarded {
            gate: Gate::Public,
            LoginForm {}
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let submit = move |_| async move {
        if email().trim().is_empty() || password().is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }
        loading.set(true);
        match api::auth::login(email().trim(), &password()).await {
            Ok(resp) => {
                apply_login(&mut session, resp.user, resp.token);
                nav.push(Route::Dashboard {});
            }
            Err(e) => {
                tracing::error!("login failed: {e}");
                error.set(Some("Invalid email or password".to_string()));
            }
        }
        loading.set(false);
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Login to HomeLedger" }

                if let Some(message) = error() {
                    Alert {
                        level: AlertLevel::Error,
                        message,
                        on_dismiss: move |_| error.set(None),
                    }
                }

                div {
                    class: "form-field",
                    label { "Email" }
                    input {
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    class: "primary full-width",
                    disabled: loading(),
                    onclick: submit,
                    if loading() { "Signing in..." } else { "Login" }
                }
                button {
                    class: "link full-width",
                    onclick: move |_| { nav.push(Route::Register {}); },
                    "Register"
                }
                button {
                    class: "link full-width",
                    onclick: move |_| { nav.push(Route::ForgotPassword {}); },
                    "Forgot password?"
                }
            }
        }
    }
}
