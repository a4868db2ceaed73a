//! Record detail: the ledger of one record, rendered per record type.
//!
//! Each ledger shows three tabs: the full entry list, a single month of
//! it, and the monthly analytics history the server keeps. Entry
//! mutation is Admin-only; Viewers get the tables without the forms.

use dioxus::prelude::*;

use store::models::{MilkStatus, Record, RecordKind};
use store::summary::{
    milk_in_month, month_label, previous_months, BillSummary, MilkSummary, RentSummary,
};
use ui::{current_month, use_session, Alert, AlertLevel, NavItem};

use crate::views::{Guarded, PageShell};

#[derive(Clone, Copy, PartialEq)]
enum LedgerTab {
    Entries,
    Monthly,
    Analytics,
}

#[component]
pub fn RecordDetail(record_id: i64) -> Element {
    rsx! {
        Guarded {
            gate: store::Gate::Protected,
            PageShell {
                active: NavItem::Records,
                RecordDetailPage { record_id }
            }
        }
    }
}

#[component]
fn RecordDetailPage(record_id: i64) -> Element {
    let record = use_resource(move || async move {
        api::record::records()
            .await
            .map(|list| list.into_iter().find(|r| r.id == record_id))
    });

    match &*record.read_unchecked() {
        Some(Ok(Some(record))) => rsx! {
            div {
                class: "page-header",
                h1 { {record.name.clone()} }
                span { class: "record-kind-badge", {record.kind.label()} }
            }
            {match record.kind {
                RecordKind::Milk => rsx! { MilkLedger { record: record.clone() } },
                RecordKind::Bill => rsx! { BillLedger { record: record.clone() } },
                RecordKind::Rent => rsx! { RentLedger { record: record.clone() } },
            }}
        },
        Some(Ok(None)) => rsx! {
            div { class: "page-error", "This record does not exist or is not shared with you." }
        },
        Some(Err(e)) => {
            tracing::error!("record lookup failed: {e}");
            rsx! {
                div { class: "page-error", "Could not load the record. Please try again." }
            }
        }
        None => rsx! {
            div { class: "page-loading", "Loading..." }
        },
    }
}

fn use_is_admin() -> (bool, i64) {
    let session = use_session();
    session()
        .principal
        .map(|p| (p.role.is_admin(), p.id))
        .unwrap_or((false, 0))
}

#[component]
fn LedgerTabs(tab: Signal<LedgerTab>) -> Element {
    let tabs = [
        (LedgerTab::Entries, "Entries"),
        (LedgerTab::Monthly, "Monthly"),
        (LedgerTab::Analytics, "Analytics"),
    ];
    rsx! {
        div {
            class: "tab-bar",
            for (value, label) in tabs {
                button {
                    class: if tab() == value { "tab tab--active" } else { "tab" },
                    onclick: move |_| tab.set(value),
                    {label}
                }
            }
        }
    }
}

// --- milk ---

#[component]
fn MilkLedger(record: Record) -> Element {
    let (is_admin, admin_id) = use_is_admin();
    let record_id = record.id;

    let mut entries = use_resource(move || async move { api::ledger::milk_entries(record_id).await });
    let tab = use_signal(|| LedgerTab::Entries);
    let mut month = use_signal(current_month);
    let mut error = use_signal(|| Option::<String>::None);

    let delete = move |id: i64| async move {
        match api::ledger::delete_milk(id).await {
            Ok(()) => entries.restart(),
            Err(e) => {
                tracing::error!("milk delete failed: {e}");
                error.set(Some("Could not delete the entry.".to_string()));
            }
        }
    };

    rsx! {
        if let Some(message) = error() {
            Alert {
                level: AlertLevel::Error,
                message,
                on_dismiss: move |_| error.set(None),
            }
        }

        if is_admin {
            AddMilkForm {
                record_id,
                admin_id,
                on_added: move |_| entries.restart(),
            }
        }

        LedgerTabs { tab }

        {match &*entries.read_unchecked() {
            Some(Ok(list)) => match tab() {
                LedgerTab::Entries => rsx! {
                    MilkTable {
                        entries: list.clone(),
                        is_admin,
                        on_delete: move |id| async move { delete(id).await },
                    }
                },
                LedgerTab::Monthly => {
                    let filtered: Vec<_> = milk_in_month(list, &month()).into_iter().cloned().collect();
                    rsx! {
                        MonthPicker { month }
                        MilkTable {
                            entries: filtered,
                            is_admin,
                            on_delete: move |id| async move { delete(id).await },
                        }
                    }
                }
                LedgerTab::Analytics => rsx! {
                    MilkAnalyticsTable { record_id }
                },
            },
            Some(Err(e)) => {
                tracing::error!("milk entries load failed: {e}");
                rsx! {
                    div { class: "page-error", "Could not load milk entries." }
                }
            }
            None => rsx! {
                div { class: "page-loading", "Loading..." }
            },
        }}
    }
}

#[component]
fn AddMilkForm(record_id: i64, admin_id: i64, on_added: EventHandler<()>) -> Element {
    let mut date = use_signal(String::new);
    let mut quantity = use_signal(String::new);
    let mut status = use_signal(|| MilkStatus::Active);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let on_leave = status() == MilkStatus::Leave;

    let submit = move |_| async move {
        let Ok(parsed_date) = date().parse::<chrono::NaiveDate>() else {
            error.set(Some("A valid date is required".to_string()));
            return;
        };
        let quantity_liters = if status() == MilkStatus::Leave {
            0.0
        } else {
            match quantity().parse::<f64>() {
                Ok(q) if q > 0.0 => q,
                _ => {
                    error.set(Some("Quantity must be a positive number".to_string()));
                    return;
                }
            }
        };
        saving.set(true);
        let entry = api::ledger::NewMilkEntry {
            record_id,
            date: parsed_date,
            quantity_liters,
            status: status(),
            admin_id,
        };
        match api::ledger::create_milk(&entry).await {
            Ok(_) => {
                date.set(String::new());
                quantity.set(String::new());
                on_added.call(());
            }
            Err(e) => {
                tracing::error!("milk create failed: {e}");
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
                label { "Date" }
                input {
                    r#type: "date",
                    required: true,
                    value: date(),
                    oninput: move |evt| date.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Liters" }
                input {
                    r#type: "number",
                    step: "0.25",
                    min: "0",
                    disabled: on_leave,
                    value: quantity(),
                    oninput: move |evt| quantity.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Status" }
                select {
                    value: if on_leave { "Leave" } else { "Active" },
                    onchange: move |evt| {
                        status.set(if evt.value() == "Leave" {
                            MilkStatus::Leave
                        } else {
                            MilkStatus::Active
                        });
                    },
                    option { value: "Active", "Delivered" }
                    option { value: "Leave", "Leave" }
                }
            }
            button {
                class: "primary",
                disabled: saving(),
                onclick: submit,
                if saving() { "Adding..." } else { "Add Entry" }
            }
        }
    }
}

#[component]
fn MilkTable(
    entries: Vec<store::models::MilkEntry>,
    is_admin: bool,
    on_delete: EventHandler<i64>,
) -> Element {
    let summary = MilkSummary::from_entries(&entries);

    rsx! {
        if entries.is_empty() {
            div { class: "empty-state", "No milk entries." }
        } else {
            table {
                class: "ledger-table",
                thead {
                    tr {
                        th { "Date" }
                        th { "Liters" }
                        th { "Status" }
                        th { "Cost" }
                        if is_admin { th {} }
                    }
                }
                tbody {
                    for entry in entries.iter().cloned() {
                        tr {
                            key: "{entry.id}",
                            td { {entry.date.format("%Y-%m-%d").to_string()} }
                            td { {format!("{:.2}", entry.quantity_liters)} }
                            td {
                                {match entry.status {
                                    MilkStatus::Active => "Delivered",
                                    MilkStatus::Leave => "Leave",
                                }}
                            }
                            td { {format!("{:.2}", entry.effective_cost())} }
                            if is_admin {
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "danger",
                                        onclick: move |_| on_delete.call(entry.id),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "ledger-summary",
                span { {format!("{} days ({} bought, {} leave)",
                    summary.days, summary.bought_days, summary.leave_days)} }
                span { {format!("{:.2} L", summary.total_liters)} }
                span { {format!("Total {:.2}", summary.total_cost)} }
            }
        }
    }
}

#[component]
fn MilkAnalyticsTable(record_id: i64) -> Element {
    let history =
        use_resource(move || async move { api::ledger::milk_analytics_history(record_id).await });

    match &*history.read_unchecked() {
        Some(Ok(rows)) if rows.is_empty() => rsx! {
            div { class: "empty-state", "No analytics yet." }
        },
        Some(Ok(rows)) => rsx! {
            table {
                class: "ledger-table",
                thead {
                    tr {
                        th { "Month" }
                        th { "Liters" }
                        th { "Bought days" }
                        th { "Leave days" }
                        th { "Cost" }
                    }
                }
                tbody {
                    for row in rows.clone() {
                        tr {
                            td { {row.month.as_deref().map(month_label).unwrap_or_default()} }
                            td { {format!("{:.2}", row.total_quantity)} }
                            td { "{row.bought_days}" }
                            td { "{row.leave_days}" }
                            td { {format!("{:.2}", row.total_cost)} }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => {
            tracing::error!("milk analytics load failed: {e}");
            rsx! {
                div { class: "page-error", "Could not load analytics." }
            }
        }
        None => rsx! {
            div { class: "page-loading", "Loading..." }
        },
    }
}

// --- bills ---

#[component]
fn BillLedger(record: Record) -> Element {
    let (is_admin, admin_id) = use_is_admin();
    let record_id = record.id;

    let mut entries = use_resource(move || async move { api::ledger::bill_entries(record_id).await });
    let tab = use_signal(|| LedgerTab::Entries);
    let mut month = use_signal(current_month);
    let mut error = use_signal(|| Option::<String>::None);

    let delete = move |id: i64| async move {
        match api::ledger::delete_bill(id).await {
            Ok(()) => entries.restart(),
            Err(e) => {
                tracing::error!("bill delete failed: {e}");
                error.set(Some("Could not delete the entry.".to_string()));
            }
        }
    };

    rsx! {
        if let Some(message) = error() {
            Alert {
                level: AlertLevel::Error,
                message,
                on_dismiss: move |_| error.set(None),
            }
        }

        if is_admin {
            AddBillForm {
                record_id,
                admin_id,
                on_added: move |_| entries.restart(),
            }
        }

        LedgerTabs { tab }

        {match &*entries.read_unchecked() {
            Some(Ok(list)) => match tab() {
                LedgerTab::Entries => rsx! {
                    BillTable {
                        entries: list.clone(),
                        is_admin,
                        on_delete: move |id| async move { delete(id).await },
                    }
                },
                LedgerTab::Monthly => {
                    let filtered: Vec<_> =
                        list.iter().filter(|e| e.month == month()).cloned().collect();
                    rsx! {
                        MonthPicker { month }
                        BillTable {
                            entries: filtered,
                            is_admin,
                            on_delete: move |id| async move { delete(id).await },
                        }
                    }
                }
                LedgerTab::Analytics => rsx! {
                    BillAnalyticsTable { record_id }
                },
            },
            Some(Err(e)) => {
                tracing::error!("bill entries load failed: {e}");
                rsx! {
                    div { class: "page-error", "Could not load bill entries." }
                }
            }
            None => rsx! {
                div { class: "page-loading", "Loading..." }
            },
        }}
    }
}

#[component]
fn AddBillForm(record_id: i64, admin_id: i64, on_added: EventHandler<()>) -> Element {
    let mut month = use_signal(current_month);
    let mut amount = use_signal(String::new);
    let mut reference = use_signal(String::new);
    let mut receipt = use_signal(|| Option::<api::Upload>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let pick_file = move |evt: Event<FormData>| async move {
        if let Some(engine) = evt.files() {
            if let Some(name) = engine.files().first().cloned() {
                if let Some(bytes) = engine.read_file(&name).await {
                    receipt.set(Some(api::Upload {
                        file_name: name,
                        bytes,
                    }));
                }
            }
        }
    };

    let submit = move |_| async move {
        let Ok(amount_value) = amount().parse::<f64>() else {
            error.set(Some("Amount must be a number".to_string()));
            return;
        };
        if reference().trim().is_empty() {
            error.set(Some("Reference number is required".to_string()));
            return;
        }
        saving.set(true);
        let entry = api::ledger::NewBillEntry {
            record_id,
            month: month(),
            amount: amount_value,
            reference_number: reference().trim().to_string(),
            admin_id,
            receipt: receipt(),
        };
        match api::ledger::create_bill(entry).await {
            Ok(_) => {
                amount.set(String::new());
                reference.set(String::new());
                receipt.set(None);
                on_added.call(());
            }
            Err(e) => {
                tracing::error!("bill create failed: {e}");
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
                label { "Month" }
                input {
                    r#type: "month",
                    required: true,
                    value: month(),
                    oninput: move |evt| month.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Amount" }
                input {
                    r#type: "number",
                    step: "0.01",
                    min: "0",
                    required: true,
                    value: amount(),
                    oninput: move |evt| amount.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Reference number" }
                input {
                    r#type: "text",
                    required: true,
                    value: reference(),
                    oninput: move |evt| reference.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Receipt (optional)" }
                input {
                    r#type: "file",
                    accept: "image/*",
                    onchange: pick_file,
                }
                if let Some(upload) = receipt() {
                    span { class: "file-name", {upload.file_name.clone()} }
                }
            }
            button {
                class: "primary",
                disabled: saving(),
                onclick: submit,
                if saving() { "Adding..." } else { "Add Bill" }
            }
        }
    }
}

#[component]
fn BillTable(
    entries: Vec<store::models::BillEntry>,
    is_admin: bool,
    on_delete: EventHandler<i64>,
) -> Element {
    let summary = BillSummary::from_entries(&entries);

    rsx! {
        if entries.is_empty() {
            div { class: "empty-state", "No bill entries." }
        } else {
            table {
                class: "ledger-table",
                thead {
                    tr {
                        th { "Month" }
                        th { "Reference" }
                        th { "Amount" }
                        th { "Receipt" }
                        if is_admin { th {} }
                    }
                }
                tbody {
                    for entry in entries.iter().cloned() {
                        tr {
                            key: "{entry.id}",
                            td { {month_label(&entry.month)} }
                            td { {entry.reference_number.clone()} }
                            td { {format!("{:.2}", entry.amount)} }
                            td {
                                if let Some(path) = entry.file_path.as_deref() {
                                    a {
                                        href: api::config::image_url(Some(path)),
                                        target: "_blank",
                                        "View"
                                    }
                                } else {
                                    "-"
                                }
                            }
                            if is_admin {
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "danger",
                                        onclick: move |_| on_delete.call(entry.id),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "ledger-summary",
                span { {format!("{} bills", summary.count)} }
                span { {format!("Total {:.2}", summary.total_amount)} }
            }
        }
    }
}

#[component]
fn BillAnalyticsTable(record_id: i64) -> Element {
    let history =
        use_resource(move || async move { api::ledger::bill_analytics_history(record_id).await });

    match &*history.read_unchecked() {
        Some(Ok(rows)) if rows.is_empty() => rsx! {
            div { class: "empty-state", "No analytics yet." }
        },
        Some(Ok(rows)) => rsx! {
            table {
                class: "ledger-table",
                thead {
                    tr {
                        th { "Month" }
                        th { "Bills" }
                        th { "Amount" }
                    }
                }
                tbody {
                    for row in rows.clone() {
                        tr {
                            td { {row.month.as_deref().map(month_label).unwrap_or_default()} }
                            td { "{row.bill_count}" }
                            td { {format!("{:.2}", row.total_amount)} }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => {
            tracing::error!("bill analytics load failed: {e}");
            rsx! {
                div { class: "page-error", "Could not load analytics." }
            }
        }
        None => rsx! {
            div { class: "page-loading", "Loading..." }
        },
    }
}

// --- rent ---

#[component]
fn RentLedger(record: Record) -> Element {
    let (is_admin, admin_id) = use_is_admin();
    let record_id = record.id;

    let mut entries = use_resource(move || async move { api::ledger::rent_entries(record_id).await });
    let tab = use_signal(|| LedgerTab::Entries);
    let mut month = use_signal(current_month);
    let mut error = use_signal(|| Option::<String>::None);

    let delete = move |id: i64| async move {
        match api::ledger::delete_rent(id).await {
            Ok(()) => entries.restart(),
            Err(e) => {
                tracing::error!("rent delete failed: {e}");
                error.set(Some("Could not delete the entry.".to_string()));
            }
        }
    };

    rsx! {
        if let Some(message) = error() {
            Alert {
                level: AlertLevel::Error,
                message,
                on_dismiss: move |_| error.set(None),
            }
        }

        if is_admin {
            AddRentForm {
                record_id,
                admin_id,
                on_added: move |_| entries.restart(),
            }
        }

        LedgerTabs { tab }

        {match &*entries.read_unchecked() {
            Some(Ok(list)) => match tab() {
                LedgerTab::Entries => rsx! {
                    RentTable {
                        entries: list.clone(),
                        is_admin,
                        on_delete: move |id| async move { delete(id).await },
                    }
                },
                LedgerTab::Monthly => {
                    let filtered: Vec<_> =
                        list.iter().filter(|e| e.month == month()).cloned().collect();
                    rsx! {
                        MonthPicker { month }
                        RentTable {
                            entries: filtered,
                            is_admin,
                            on_delete: move |id| async move { delete(id).await },
                        }
                    }
                }
                LedgerTab::Analytics => rsx! {
                    RentAnalyticsTable { record_id }
                },
            },
            Some(Err(e)) => {
                tracing::error!("rent entries load failed: {e}");
                rsx! {
                    div { class: "page-error", "Could not load rent entries." }
                }
            }
            None => rsx! {
                div { class: "page-loading", "Loading..." }
            },
        }}
    }
}

#[component]
fn AddRentForm(record_id: i64, admin_id: i64, on_added: EventHandler<()>) -> Element {
    let mut month = use_signal(current_month);
    let mut amount = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let submit = move |_| async move {
        let Ok(amount_value) = amount().parse::<f64>() else {
            error.set(Some("Amount must be a number".to_string()));
            return;
        };
        saving.set(true);
        let entry = api::ledger::NewRentEntry {
            record_id,
            month: month(),
            amount: amount_value,
            admin_id,
        };
        match api::ledger::create_rent(&entry).await {
            Ok(_) => {
                amount.set(String::new());
                on_added.call(());
            }
            Err(e) => {
                tracing::error!("rent create failed: {e}");
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
                label { "Month" }
                input {
                    r#type: "month",
                    required: true,
                    value: month(),
                    oninput: move |evt| month.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Amount" }
                input {
                    r#type: "number",
                    step: "0.01",
                    min: "0",
                    required: true,
                    value: amount(),
                    oninput: move |evt| amount.set(evt.value()),
                }
            }
            button {
                class: "primary",
                disabled: saving(),
                onclick: submit,
                if saving() { "Adding..." } else { "Add Rent" }
            }
        }
    }
}

#[component]
fn RentTable(
    entries: Vec<store::models::RentEntry>,
    is_admin: bool,
    on_delete: EventHandler<i64>,
) -> Element {
    let summary = RentSummary::from_entries(&entries);

    rsx! {
        if entries.is_empty() {
            div { class: "empty-state", "No rent entries." }
        } else {
            table {
                class: "ledger-table",
                thead {
                    tr {
                        th { "Month" }
                        th { "Amount" }
                        if is_admin { th {} }
                    }
                }
                tbody {
                    for entry in entries.iter().cloned() {
                        tr {
                            key: "{entry.id}",
                            td { {month_label(&entry.month)} }
                            td { {format!("{:.2}", entry.amount)} }
                            if is_admin {
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "danger",
                                        onclick: move |_| on_delete.call(entry.id),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "ledger-summary",
                span { {format!("{} payments", summary.count)} }
                span { {format!("Total {:.2}", summary.total_amount)} }
            }
        }
    }
}

#[component]
fn RentAnalyticsTable(record_id: i64) -> Element {
    let history =
        use_resource(move || async move { api::ledger::rent_analytics_history(record_id).await });

    match &*history.read_unchecked() {
        Some(Ok(rows)) if rows.is_empty() => rsx! {
            div { class: "empty-state", "No analytics yet." }
        },
        Some(Ok(rows)) => rsx! {
            table {
                class: "ledger-table",
                thead {
                    tr {
                        th { "Month" }
                        th { "Payments" }
                        th { "Amount" }
                    }
                }
                tbody {
                    for row in rows.clone() {
                        tr {
                            td { {row.month.as_deref().map(month_label).unwrap_or_default()} }
                            td { "{row.rent_count}" }
                            td { {format!("{:.2}", row.total_amount)} }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => {
            tracing::error!("rent analytics load failed: {e}");
            rsx! {
                div { class: "page-error", "Could not load analytics." }
            }
        }
        None => rsx! {
            div { class: "page-loading", "Loading..." }
        },
    }
}

// --- shared ---

#[component]
fn MonthPicker(month: Signal<String>) -> Element {
    let months = previous_months(&current_month(), 12);
    rsx! {
        select {
            class: "month-picker",
            value: month(),
            onchange: move |evt| month.set(evt.value()),
            for key in months {
                option { value: key.clone(), {month_label(&key)} }
            }
        }
    }
}
