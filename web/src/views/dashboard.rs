//! Dashboard: one month at a glance across every record the user can see.
//!
//! The headline cards come from the server's account-wide summary; the
//! per-record tables are built from one analytics call per record. A
//! record whose analytics call fails gets a zeroed row rather than
//! sinking the whole page.

use dioxus::prelude::*;

use store::models::{BillAnalytics, MilkAnalytics, Record, RecordKind, RentAnalytics};
use store::summary::{month_label, previous_months, DashboardTotals};
use ui::{current_month, NavItem};

use crate::views::{Guarded, PageShell};

struct MonthOverview {
    summary: api::account::DashboardSummary,
    records: Vec<Record>,
    milk: Vec<MilkAnalytics>,
    bills: Vec<BillAnalytics>,
    rent: Vec<RentAnalytics>,
}

async fn load_overview(month: &str) -> Result<MonthOverview, api::ApiError> {
    let summary = api::account::dashboard_summary(month).await?;
    let records = api::record::records().await?;

    let mut milk = Vec::new();
    let mut bills = Vec::new();
    let mut rent = Vec::new();
    for record in &records {
        match record.kind {
            RecordKind::Milk => milk.push(
                api::ledger::milk_analytics(record.id, month)
                    .await
                    .unwrap_or(MilkAnalytics {
                        record_id: record.id,
                        ..Default::default()
                    }),
            ),
            RecordKind::Bill => bills.push(
                api::ledger::bill_analytics(record.id, month)
                    .await
                    .unwrap_or(BillAnalytics {
                        record_id: record.id,
                        ..Default::default()
                    }),
            ),
            RecordKind::Rent => rent.push(
                api::ledger::rent_analytics(record.id, month)
                    .await
                    .unwrap_or(RentAnalytics {
                        record_id: record.id,
                        ..Default::default()
                    }),
            ),
        }
    }

    Ok(MonthOverview {
        summary,
        records,
        milk,
        bills,
        rent,
    })
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Guarded {
            gate: store::Gate::Protected,
            PageShell {
                active: NavItem::Dashboard,
                DashboardPage {}
            }
        }
    }
}

#[component]
fn DashboardPage() -> Element {
    let mut month = use_signal(current_month);
    let overview = use_resource(move || async move { load_overview(&month()).await });

    let months = previous_months(&current_month(), 12);

    rsx! {
        div {
            class: "page-header",
            h1 { "Dashboard" }
            select {
                class: "month-picker",
                value: month(),
                onchange: move |evt| month.set(evt.value()),
                for key in months {
                    option { value: key.clone(), {month_label(&key)} }
                }
            }
        }

        {match &*overview.read_unchecked() {
            Some(Ok(overview)) => rsx! {
                OverviewCards { overview: overview.summary.clone() }
                RecordTables {
                    records: overview.records.clone(),
                    milk: overview.milk.clone(),
                    bills: overview.bills.clone(),
                    rent: overview.rent.clone(),
                }
            },
            Some(Err(e)) => {
                tracing::error!("dashboard load failed: {e}");
                rsx! {
                    div { class: "page-error", "Could not load the dashboard. Please try again." }
                }
            }
            None => rsx! {
                div { class: "page-loading", "Loading..." }
            },
        }}
    }
}

#[component]
fn OverviewCards(overview: api::account::DashboardSummary) -> Element {
    rsx! {
        div {
            class: "card-row",
            div {
                class: "stat-card",
                span { class: "stat-label", "Milk" }
                span { class: "stat-value", {format!("{:.2}", overview.total_milk_cost)} }
            }
            div {
                class: "stat-card",
                span { class: "stat-label", "Bills" }
                span { class: "stat-value", {format!("{:.2}", overview.total_bills)} }
            }
            div {
                class: "stat-card",
                span { class: "stat-label", "Rent" }
                span { class: "stat-value", {format!("{:.2}", overview.total_rent)} }
            }
            div {
                class: "stat-card stat-card--total",
                span { class: "stat-label", "Total" }
                span { class: "stat-value", {format!("{:.2}", overview.grand_total())} }
            }
        }
    }
}

fn record_name(records: &[Record], id: i64) -> String {
    records
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| format!("Record #{id}"))
}

#[component]
fn RecordTables(
    records: Vec<Record>,
    milk: Vec<MilkAnalytics>,
    bills: Vec<BillAnalytics>,
    rent: Vec<RentAnalytics>,
) -> Element {
    let totals = DashboardTotals::from_analytics(&milk, &bills, &rent);

    rsx! {
        if !milk.is_empty() {
            section {
                class: "dashboard-section",
                h2 { "Milk" }
                table {
                    class: "ledger-table",
                    thead {
                        tr {
                            th { "Record" }
                            th { "Liters" }
                            th { "Bought days" }
                            th { "Leave days" }
                            th { "Cost" }
                        }
                    }
                    tbody {
                        for row in milk.iter() {
                            tr {
                                key: "{row.record_id}",
                                td { {record_name(&records, row.record_id)} }
                                td { {format!("{:.2}", row.total_quantity)} }
                                td { "{row.bought_days}" }
                                td { "{row.leave_days}" }
                                td { {format!("{:.2}", row.total_cost)} }
                            }
                        }
                    }
                    tfoot {
                        tr {
                            td { "Total" }
                            td { {format!("{:.2}", totals.milk_liters)} }
                            td {}
                            td {}
                            td { {format!("{:.2}", totals.milk_cost)} }
                        }
                    }
                }
            }
        }

        if !bills.is_empty() {
            section {
                class: "dashboard-section",
                h2 { "Bills" }
                table {
                    class: "ledger-table",
                    thead {
                        tr {
                            th { "Record" }
                            th { "Bills" }
                            th { "Amount" }
                        }
                    }
                    tbody {
                        for row in bills.iter() {
                            tr {
                                key: "{row.record_id}",
                                td { {record_name(&records, row.record_id)} }
                                td { "{row.bill_count}" }
                                td { {format!("{:.2}", row.total_amount)} }
                            }
                        }
                    }
                    tfoot {
                        tr {
                            td { "Total" }
                            td {}
                            td { {format!("{:.2}", totals.bill_amount)} }
                        }
                    }
                }
            }
        }

        if !rent.is_empty() {
            section {
                class: "dashboard-section",
                h2 { "Rent" }
                table {
                    class: "ledger-table",
                    thead {
                        tr {
                            th { "Record" }
                            th { "Payments" }
                            th { "Amount" }
                        }
                    }
                    tbody {
                        for row in rent.iter() {
                            tr {
                                key: "{row.record_id}",
                                td { {record_name(&records, row.record_id)} }
                                td { "{row.rent_count}" }
                                td { {format!("{:.2}", row.total_amount)} }
                            }
                        }
                    }
                    tfoot {
                        tr {
                            td { "Total" }
                            td {}
                            td { {format!("{:.2}", totals.rent_amount)} }
                        }
                    }
                }
            }
        }

        if records.is_empty() {
            div {
                class: "empty-state",
                "No records yet. Create one from the Records page to start tracking."
            }
        }
    }
}
