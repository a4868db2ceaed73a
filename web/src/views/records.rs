//! Records page: the list of ledger containers, with Admin-only create
//! and delete. Clicking a row opens the record's ledger.

use dioxus::prelude::*;

use store::models::{Record, RecordKind};
use ui::{use_session, Alert, AlertLevel, NavItem};

use crate::views::{Guarded, PageShell};
use crate::Route;

#[component]
pub fn Records() -> Element {
    rsx! {
        Guarded {
            gate: store::Gate::Protected,
            PageShell {
                active: NavItem::Records,
                RecordsPage {}
            }
        }
    }
}

#[component]
fn RecordsPage() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let mut records = use_resource(|| async { api::record::records().await });
    let mut show_add = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let is_admin = session()
        .principal
        .map(|p| p.role.is_admin())
        .unwrap_or(false);

    let delete = move |id: i64| async move {
        match api::record::delete_record(id).await {
            Ok(()) => records.restart(),
            Err(e) => {
                tracing::error!("record delete failed: {e}");
                error.set(Some(if e.is_auth_failure() {
                    "Your session has expired. Please log in again.".to_string()
                } else {
                    "Could not delete the record.".to_string()
                }));
            }
        }
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Records" }
            if is_admin {
                button {
                    class: "primary",
                    onclick: move |_| show_add.set(true),
                    "Add Record"
                }
            }
        }

        if let Some(message) = error() {
            Alert {
                level: AlertLevel::Error,
                message,
                on_dismiss: move |_| error.set(None),
            }
        }

        if show_add() {
            AddRecordDialog {
                on_close: move |_| show_add.set(false),
                on_created: move |_| {
                    show_add.set(false);
                    records.restart();
                },
            }
        }

        {match &*records.read_unchecked() {
            Some(Ok(list)) if list.is_empty() => rsx! {
                div {
                    class: "empty-state",
                    if is_admin {
                        "No records yet. Add one to start tracking."
                    } else {
                        "Nothing has been shared with you yet."
                    }
                }
            },
            Some(Ok(list)) => rsx! {
                table {
                    class: "ledger-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Type" }
                            if is_admin { th {} }
                        }
                    }
                    tbody {
                        for record in list.clone() {
                            RecordRow {
                                key: "{record.id}",
                                record: record.clone(),
                                is_admin,
                                on_open: move |id| { nav.push(Route::RecordDetail { record_id: id }); },
                                on_delete: move |id| async move { delete(id).await },
                            }
                        }
                    }
                }
            },
            Some(Err(e)) => {
                tracing::error!("records load failed: {e}");
                rsx! {
                    div { class: "page-error", "Could not load records. Please try again." }
                }
            }
            None => rsx! {
                div { class: "page-loading", "Loading..." }
            },
        }}
    }
}

#[component]
fn RecordRow(
    record: Record,
    is_admin: bool,
    on_open: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = record.id;
    rsx! {
        tr {
            class: "record-row",
            td {
                onclick: move |_| on_open.call(id),
                {record.name.clone()}
            }
            td {
                onclick: move |_| on_open.call(id),
                {record.kind.label()}
            }
            if is_admin {
                td {
                    class: "row-actions",
                    button {
                        class: "danger",
                        onclick: move |_| on_delete.call(id),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn AddRecordDialog(on_close: EventHandler<()>, on_created: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut kind = use_signal(|| RecordKind::Milk);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let submit = move |_| async move {
        if name().trim().is_empty() {
            error.set(Some("Name is required".to_string()));
            return;
        }
        saving.set(true);
        match api::record::create_record(name().trim(), kind()).await {
            Ok(_) => on_created.call(()),
            Err(e) => {
                tracing::error!("record create failed: {e}");
                error.set(Some(e.to_string()));
            }
        }
        saving.set(false);
    };

    rsx! {
        div {
            class: "dialog-backdrop",
            div {
                class: "dialog",
                h2 { "New Record" }

                if let Some(message) = error() {
                    Alert {
                        level: AlertLevel::Error,
                        message,
                        on_dismiss: move |_| error.set(None),
                    }
                }

                div {
                    class: "form-field",
                    label { "Name" }
                    input {
                        r#type: "text",
                        required: true,
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Type" }
                    select {
                        value: kind().label(),
                        onchange: move |evt| {
                            if let Ok(k) = evt.value().parse() {
                                kind.set(k);
                            }
                        },
                        for k in RecordKind::ALL {
                            option { value: k.label(), {k.label()} }
                        }
                    }
                }

                div {
                    class: "dialog-actions",
                    button {
                        class: "link",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "primary",
                        disabled: saving(),
                        onclick: submit,
                        if saving() { "Creating..." } else { "Create" }
                    }
                }
            }
        }
    }
}
