//! Forgot-password page: request a reset link by email.

use dioxus::prelude::*;

use store::Gate;
use ui::{Alert, AlertLevel};

use crate::views::Guarded;
use crate::Route;

#[component]
pub fn ForgotPassword() -> Element {
    rsx! {
        Guarded {
            gate: Gate::Public,
            ForgotPasswordForm {}
        }
    }
}

#[component]
fn ForgotPasswordForm() -> Element {
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut message = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let submit = move |_| async move {
        if email().trim().is_empty() {
            error.set(Some("Email is required".to_string()));
            return;
        }
        loading.set(true);
        error.set(None);
        match api::auth::forgot_password(email().trim()).await {
            Ok(reply) => message.set(Some(reply.message)),
            Err(e) => {
                tracing::error!("forgot-password failed: {e}");
                error.set(Some("An error occurred. Please try again.".to_string()));
            }
        }
        loading.set(false);
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Forgot Password" }
                p {
                    class: "auth-hint",
                    "Enter your email and we'll send you a link to reset your password."
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
                    label { "Email" }
                    input {
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                button {
                    class: "primary full-width",
                    disabled: loading() || message().is_some(),
                    onclick: submit,
                    if loading() { "Sending..." } else { "Send Reset Link" }
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
