//! Registration page. A successful registration logs the new user in
//! directly; the backend answers with the same user + token body as login.

use dioxus::prelude::*;

use store::Gate;
use ui::{apply_login, use_session, Alert, AlertLevel};

use crate::views::Guarded;
use crate::Route;

#[component]
pub fn Register() -> Element {
    rsx! {
        Guarded {
            gate: Gate::Public,
            RegisterForm {}
        }
    }
}

#[component]
fn RegisterForm() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let submit = move |_| async move {
        if full_name().trim().is_empty() || email().trim().is_empty() || password().is_empty() {
            error.set(Some("All fields are required".to_string()));
            return;
        }
        if password() != confirm() {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }
        loading.set(true);
        match api::auth::register(full_name().trim(), email().trim(), &password()).await {
            Ok(resp) => {
                apply_login(&mut session, resp.user, resp.token);
                nav.push(Route::Dashboard {});
            }
            Err(e) => {
                tracing::error!("registration failed: {e}");
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Create your account" }

                if let Some(message) = error() {
                    Alert {
                        level: AlertLevel::Error,
                        message,
                        on_dismiss: move |_| error.set(None),
                    }
                }

                div {
                    class: "form-field",
                    label { "Full name" }
                    input {
                        r#type: "text",
                        required: true,
                        value: full_name(),
                        oninput: move |evt| full_name.set(evt.value()),
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
                div {
                    class: "form-field",
                    label { "Confirm password" }
                    input {
                        r#type: "password",
                        required: true,
                        value: confirm(),
                        oninput: move |evt| confirm.set(evt.value()),
                    }
                }

                button {
                    class: "primary full-width",
                    disabled: loading(),
                    onclick: submit,
                    if loading() { "Creating..." } else { "Register" }
                }
                button {
                    class: "link full-width",
                    onclick: move |_| { nav.push(Route::Login {}); },
                    "Back to login"
                }
            }
        }
    }
}
