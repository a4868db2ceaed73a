//! Settings page: account-wide milk rate and the user's own profile.
//!
//! A successful profile update writes the returned principal back into
//! the session so the top bar reflects it immediately.

use dioxus::prelude::*;

use store::RoutePolicy;
use ui::{apply_principal, use_session, Alert, AlertLevel, NavItem};

use crate::views::{Guarded, PageShell};

#[component]
pub fn Settings() -> Element {
    rsx! {
        Guarded {
            gate: RoutePolicy::default().settings_gate(),
            PageShell {
                active: NavItem::Settings,
                SettingsPage {}
            }
        }
    }
}

#[component]
fn SettingsPage() -> Element {
    rsx! {
        div {
            class: "page-header",
            h1 { "Settings" }
        }
        MilkRateSection {}
        ProfileSection {}
    }
}

#[component]
fn MilkRateSection() -> Element {
    let settings = use_resource(|| async { api::account::settings().await });

    let mut rate = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // Seed the input from the fetched settings once they arrive.
    use_effect(move || {
        if let Some(Ok(current)) = &*settings.read_unchecked() {
            if rate.peek().is_empty() {
                rate.set(format!("{}", current.milk_rate_per_liter));
            }
        }
    });

    let submit = move |_| async move {
        let Ok(milk_rate_per_liter) = rate().parse::<f64>() else {
            error.set(Some("Rate must be a number".to_string()));
            return;
        };
        saving.set(true);
        let payload = store::models::AccountSettings { milk_rate_per_liter };
        match api::account::update_settings(&payload).await {
            Ok(saved) => {
                rate.set(format!("{}", saved.milk_rate_per_liter));
                notice.set(Some("Milk rate saved.".to_string()));
            }
            Err(e) => {
                tracing::error!("settings update failed: {e}");
                error.set(Some(e.to_string()));
            }
        }
        saving.set(false);
    };

    rsx! {
        section {
            class: "settings-section",
            h2 { "Milk rate" }
            p {
                class: "settings-hint",
                "Price per liter used when costing new milk entries."
            }

            if let Some(message) = error() {
                Alert {
                    level: AlertLevel::Error,
                    message,
                    on_dismiss: move |_| error.set(None),
                }
            }
            if let Some(message) = notice() {
                Alert {
                    level: AlertLevel::Success,
                    message,
                    on_dismiss: move |_| notice.set(None),
                }
            }

            div {
                class: "form-field",
                label { "Rate per liter" }
                input {
                    r#type: "number",
                    step: "0.01",
                    min: "0",
                    value: rate(),
                    oninput: move |evt| rate.set(evt.value()),
                }
            }
            button {
                class: "primary",
                disabled: saving(),
                onclick: submit,
                if saving() { "Saving..." } else { "Save" }
            }
        }
    }
}

#[component]
fn ProfileSection() -> Element {
    let mut session = use_session();

    let principal = session().principal;
    let mut full_name = use_signal(|| {
        principal
            .as_ref()
            .map(|p| p.full_name.clone())
            .unwrap_or_default()
    });
    let mut avatar = use_signal(|| Option::<api::Upload>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let user_id = principal.as_ref().map(|p| p.id).unwrap_or(0);

    let pick_file = move |evt: Event<FormData>| async move {
        if let Some(engine) = evt.files() {
            if let Some(name) = engine.files().first().cloned() {
                if let Some(bytes) = engine.read_file(&name).await {
                    avatar.set(Some(api::Upload {
                        file_name: name,
                        bytes,
                    }));
                }
            }
        }
    };

    let submit = move |_| async move {
        if full_name().trim().is_empty() {
            error.set(Some("Full name is required".to_string()));
            return;
        }
        saving.set(true);
        match api::account::update_profile(user_id, full_name().trim(), avatar()).await {
            Ok(updated) => {
                apply_principal(&mut session, updated);
                avatar.set(None);
                notice.set(Some("Profile updated.".to_string()));
            }
            Err(e) => {
                tracing::error!("profile update failed: {e}");
                error.set(Some(e.to_string()));
            }
        }
        saving.set(false);
    };

    rsx! {
        section {
            class: "settings-section",
            h2 { "Profile" }

            if let Some(message) = error() {
                Alert {
                    level: AlertLevel::Error,
                    message,
                    on_dismiss: move |_| error.set(None),
                }
            }
            if let Some(message) = notice() {
                Alert {
                    level: AlertLevel::Success,
                    message,
                    on_dismiss: move |_| notice.set(None),
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
                label { "Profile image" }
                input {
                    r#type: "file",
                    accept: "image/*",
                    onchange: pick_file,
                }
                if let Some(upload) = avatar() {
                    span { class: "file-name", {upload.file_name.clone()} }
                }
            }
            button {
                class: "primary",
                disabled: saving(),
                onclick: submit,
                if saving() { "Saving..." } else { "Save profile" }
            }
        }
    }
}
