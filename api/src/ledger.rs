//! Ledger entry endpoints (`/milk`, `/bills`, `/rent`) and their
//! per-record analytics.
//!
//! Entry creation is Admin-gated in the UI, but the server is the actual
//! authority; a Viewer hitting these endpoints directly gets a 403. Bill
//! creation goes as `multipart/form-data` to carry the optional receipt
//! image.

use chrono::NaiveDate;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Serialize;
use store::models::{
    BillAnalytics, BillEntry, MilkAnalytics, MilkEntry, MilkStatus, RentAnalytics, RentEntry,
};

use crate::{request, send, send_unit, ApiError, Upload};

// --- milk ---

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMilkEntry {
    pub record_id: i64,
    pub date: NaiveDate,
    pub quantity_liters: f64,
    pub status: MilkStatus,
    pub admin_id: i64,
}

pub async fn milk_entries(record_id: i64) -> Result<Vec<MilkEntry>, ApiError> {
    send(request(Method::GET, &format!("/milk/{record_id}"))).await
}

pub async fn create_milk(entry: &NewMilkEntry) -> Result<MilkEntry, ApiError> {
    send(request(Method::POST, "/milk").json(entry)).await
}

pub async fn delete_milk(id: i64) -> Result<(), ApiError> {
    send_unit(request(Method::DELETE, &format!("/milk/{id}"))).await
}

// --- bills ---

#[derive(Clone, Debug)]
pub struct NewBillEntry {
    pub record_id: i64,
    /// Month key, "YYYY-MM".
    pub month: String,
    pub amount: f64,
    pub reference_number: String,
    pub admin_id: i64,
    pub receipt: Option<Upload>,
}

pub async fn bill_entries(record_id: i64) -> Result<Vec<BillEntry>, ApiError> {
    send(request(Method::GET, &format!("/bills/{record_id}"))).await
}

pub async fn create_bill(entry: NewBillEntry) -> Result<BillEntry, ApiError> {
    let mut form = Form::new()
        .text("recordId", entry.record_id.to_string())
        .text("month", entry.month)
        .text("amount", entry.amount.to_string())
        .text("referenceNumber", entry.reference_number)
        .text("adminId", entry.admin_id.to_string());
    if let Some(receipt) = entry.receipt {
        form = form.part(
            "file",
            Part::bytes(receipt.bytes).file_name(receipt.file_name),
        );
    }
    send(request(Method::POST, "/bills").multipart(form)).await
}

pub async fn delete_bill(id: i64) -> Result<(), ApiError> {
    send_unit(request(Method::DELETE, &format!("/bills/{id}"))).await
}

// --- rent ---

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRentEntry {
    pub record_id: i64,
    /// Month key, "YYYY-MM".
    pub month: String,
    pub amount: f64,
    pub admin_id: i64,
}

pub async fn rent_entries(record_id: i64) -> Result<Vec<RentEntry>, ApiError> {
    send(request(Method::GET, &format!("/rent/{record_id}"))).await
}

pub async fn create_rent(entry: &NewRentEntry) -> Result<RentEntry, ApiError> {
    send(request(Method::POST, "/rent").json(entry)).await
}

pub async fn delete_rent(id: i64) -> Result<(), ApiError> {
    send_unit(request(Method::DELETE, &format!("/rent/{id}"))).await
}

// --- analytics ---

fn analytics_path(group: &str, record_id: i64) -> String {
    format!("/{group}/analytics/{record_id}")
}

/// Aggregate for one record and one month.
pub async fn milk_analytics(record_id: i64, month: &str) -> Result<MilkAnalytics, ApiError> {
    send(request(Method::GET, &analytics_path("milk", record_id)).query(&[("month", month)])).await
}

/// All monthly aggregates the record has, newest first as the server
/// returns them.
pub async fn milk_analytics_history(record_id: i64) -> Result<Vec<MilkAnalytics>, ApiError> {
    send(request(Method::GET, &analytics_path("milk", record_id))).await
}

pub async fn bill_analytics(record_id: i64, month: &str) -> Result<BillAnalytics, ApiError> {
    send(request(Method::GET, &analytics_path("bills", record_id)).query(&[("month", month)])).await
}

pub async fn bill_analytics_history(record_id: i64) -> Result<Vec<BillAnalytics>, ApiError> {
    send(request(Method::GET, &analytics_path("bills", record_id))).await
}

pub async fn rent_analytics(record_id: i64, month: &str) -> Result<RentAnalytics, ApiError> {
    send(request(Method::GET, &analytics_path("rent", record_id)).query(&[("month", month)])).await
}

pub async fn rent_analytics_history(record_id: i64) -> Result<Vec<RentAnalytics>, ApiError> {
    send(request(Method::GET, &analytics_path("rent", record_id))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milk_payload_serialises_date_and_status() {
        let entry = NewMilkEntry {
            record_id: 3,
            date: NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
            quantity_liters: 1.5,
            status: MilkStatus::Active,
            admin_id: 7,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""date":"2026-08-23""#));
        assert!(json.contains(r#""status":"Active""#));
        assert!(json.contains(r#""quantityLiters":1.5"#));
    }

    #[test]
    fn analytics_paths_follow_the_group_layout() {
        assert_eq!(analytics_path("milk", 3), "/milk/analytics/3");
        assert_eq!(analytics_path("bills", 10), "/bills/analytics/10");
        assert_eq!(analytics_path("rent", 1), "/rent/analytics/1");
    }

    #[test]
    fn milk_entry_fixture_decodes() {
        let json = r#"[{
            "id": 41,
            "recordId": 3,
            "date": "2026-08-01",
            "quantityLiters": 2.0,
            "status": "Leave",
            "ratePerLiter": 100.0,
            "totalCost": 0.0
        }]"#;
        let entries: Vec<MilkEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].status, MilkStatus::Leave);
        assert_eq!(entries[0].effective_cost(), 0.0);
    }
}
