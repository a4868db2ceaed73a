//! Invite page (Admin only): share a record with a viewer by email, list
//! outstanding and accepted grants, and revoke pending ones.

use dioxus::prelude::*;

use store::{Grant, InvitedViewer};
use ui::{use_session, Alert, AlertLevel, NavItem};

use crate::views::{Guarded, PageShell};

#[component]
pub fn Invite() -> Element {
    rsx! {
        Guarded {
            gate: store::Gate::AdminOnly,
            PageShell {
                active: NavItem::Invite,
                InvitePage {}
            }
        }
    }
}

#[component]
fn InvitePage() -> Element {
    let session = use_session();
    let admin_id = session().principal.map(|p| p.id).unwrap_or(0);

    let mut viewers =
        use_resource(move || async move { api::auth::invited_viewers(admin_id).await });
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let revoke = move |(viewer_id, record_name): (i64, String)| async move {
        match api::auth::revoke_viewer(viewer_id, &record_name).await {
            Ok(()) => {
                notice.set(Some(format!("Access to \"{record_name}\" revoked.")));
                viewers.restart();
            }
            Err(e) => {
                tracing::error!("revoke failed: {e}");
                error.set(Some("Could not revoke the invitation.".to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Invite Viewers" }
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

        InviteForm {
            admin_id,
            on_invited: move |_| {
                notice.set(Some("Invitation sent.".to_string()));
                viewers.restart();
            },
        }

        h2 { "Invited viewers" }
        {match &*viewers.read_unchecked() {
            Some(Ok(list)) if list.is_empty() => rsx! {
                div { class: "empty-state", "You have not invited anyone yet." }
            },
            Some(Ok(list)) => rsx! {
                for viewer in list.clone() {
                    ViewerCard {
                        key: "{viewer.viewer_id}",
                        viewer: viewer.clone(),
                        on_revoke: move |args| async move { revoke(args).await },
                    }
                }
            },
            Some(Err(e)) => {
                tracing::error!("invited viewers load failed: {e}");
                rsx! {
                    div { class: "page-error", "Could not load invited viewers." }
                }
            }
            None => rsx! {
                div { class: "page-loading", "Loading..." }
            },
        }}
    }
}

#[component]
fn InviteForm(admin_id: i64, on_invited: EventHandler<()>) -> Element {
    let records = use_resource(|| async { api::record::records().await });

    let mut email = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut record_name = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let submit = move |_| async move {
        if email().trim().is_empty() || full_name().trim().is_empty() {
            error.set(Some("Email and full name are required".to_string()));
            return;
        }
        if record_name().is_empty() {
            error.set(Some("Pick a record to share".to_string()));
            return;
        }
        saving.set(true);
        match api::auth::invite_viewer(admin_id, email().trim(), full_name().trim(), &record_name())
            .await
        {
            Ok(_) => {
                email.set(String::new());
                full_name.set(String::new());
                record_name.set(String::new());
                on_invited.call(());
            }
            Err(e) => {
                tracing::error!("invite failed: {e}");
                error.set(Some(e.to_string()));
            }
        }
        saving.set(false);
    };

    rsx! {
        div {
            class: "entry-form",
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
                label { "Record" }
                select {
                    value: record_name(),
                    onchange: move |evt| record_name.set(evt.value()),
                    option { value: "", "Select a record" }
                    if let Some(Ok(list)) = &*records.read_unchecked() {
                        for record in list.clone() {
                            option { value: record.name.clone(), {record.name.clone()} }
                        }
                    }
                }
            }
            button {
                class: "primary",
                disabled: saving(),
                onclick: submit,
                if saving() { "Inviting..." } else { "Send Invitation" }
            }
        }
    }
}

#[component]
fn ViewerCard(viewer: InvitedViewer, on_revoke: EventHandler<(i64, String)>) -> Element {
    let viewer_id = viewer.viewer_id;

    rsx! {
        div {
            class: "viewer-card",
            div {
                class: "viewer-card-header",
                span { class: "viewer-name", {viewer.viewer_full_name.clone()} }
                span { class: "viewer-email", {viewer.viewer_email.clone()} }
            }
            div {
                class: "grant-list",
                for grant in viewer.records.clone() {
                    GrantChip {
                        grant: grant.clone(),
                        on_revoke: move |record_name| on_revoke.call((viewer_id, record_name)),
                    }
                }
            }
        }
    }
}

#[component]
fn GrantChip(grant: Grant, on_revoke: EventHandler<String>) -> Element {
    let record_name = grant.record_name.clone();

    rsx! {
        div {
            class: "grant-chip",
            span { {grant.record_name.clone()} }
            span { class: "grant-state", {grant.state.label()} }
            if grant.can_revoke() {
                button {
                    class: "danger",
                    onclick: move |_| on_revoke.call(record_name.clone()),
                    "Revoke"
                }
            }
        }
    }
}
