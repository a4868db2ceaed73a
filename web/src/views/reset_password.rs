//! Reset-password page, reached from the emailed link. The link carries
//! `token` and `email` as query parameters; without both the form is
//! unusable and says so.

use dioxus::prelude::*;

use store::Gate;
use ui::{Alert, AlertLevel};

use crate::views::Guarded;
use crate::Route;

#[component]
pub fn ResetPassword(token: String, email: String) -> Element {
    rsx! {
        Guarded {
            gate: Gate::Public,
            ResetPasswordForm { token, email }
        }
    }
}

#[component]
fn ResetPasswordForm(token: String, email: String) -> Element {
    let nav = use_navigator();

    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut message = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let link_broken = token.is_empty() || email.is_empty();

    let submit = {
        let token = token.clone();
        let email = email.clone();
        move |_| {
            let token = token.clone();
            let email = email.clone();
            async move {
                if password() != confirm() {
                    error.set(Some("Passwords do not match.".to_string()));
                    return;
                }
                if password().is_empty() {
                    error.set(Some("Password is required.".to_string()));
                    return;
                }
                loading.set(true);
                error.set(None);
                match api::auth::reset_password(&email, &token, &password()).await {
                    Ok(reply) => message.set(Some(reply.message)),
                    Err(e) => {
                        tracing::error!("reset-password failed: {e}");
                        error.set(Some(
                            "The link may be invalid or expired. Please request a new one."
                                .to_string(),
                        ));
                    }
                }
                loading.set(false);
            }
        }
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Reset Your Password" }

                if link_broken {
                    Alert {
                        level: AlertLevel::Error,
                        message: "Invalid or expired password reset link. Please request a new one.",
                        on_dismiss: move |_| {},
                    }
                }
                if let Some(msg) = message() {
                    Alert {
                        level: AlertLevel::Success,
                        message: msg,
                        on_dismiss: move |_| message.set(None),
                    }
                }
                if let Some(msg) = error() {
                    Alert {
                        level: AlertLevel::Error,
                        message: msg,
                        on_dismiss: move |_| error.set(None),
                    }
                }

                div {
                    class: "form-field",
                    label { "New password" }
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
                    disabled: loading() || link_broken || message().is_some(),
                    onclick: submit,
                    if loading() { "Resetting..." } else { "Reset Password" }
                }
                button {
                    class: "link full-width",
                    onclick: move |_| { nav.push(Route::Login {}); },
                    "Back to Login"
                }
            }
        }
    }
}
