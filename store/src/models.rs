//! # Domain models for the HomeLedger client
//!
//! Defines the data structures exchanged with the REST backend and held in
//! client state. Everything here is `Serialize + Deserialize` with camelCase
//! field names to match the backend's JSON bodies.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Principal`] | The authenticated user as stored in the session: id, email, full name, [`Role`], optional profile image path. |
//! | [`Record`] | A named, typed container (Milk/Rent/Bill) that owns dated ledger entries. |
//! | [`MilkEntry`], [`BillEntry`], [`RentEntry`] | Type-specific ledger entries belonging to exactly one record. |
//! | [`MilkAnalytics`], [`BillAnalytics`], [`RentAnalytics`] | Per-record monthly aggregates as returned by the analytics endpoints. |
//! | [`AccountSettings`] | Account-wide settings (currently the milk rate per liter). |
//!
//! All entities are owned and mutated server-side; the client holds
//! re-fetchable copies with no durability guarantee beyond the session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The authenticated user (Admin or Viewer) represented in the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub image_path: Option<String>,
}

impl Principal {
    /// A principal parsed from storage is only usable if it carries a real id.
    pub fn is_valid(&self) -> bool {
        self.id > 0
    }
}

/// Account role. Admins own records and mutate ledgers; Viewers read
/// records that were shared with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Viewer,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// A named, typed container that owns dated ledger entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(default)]
    pub owner_id: Option<i64>,
}

/// The three ledger types a record can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Milk,
    Rent,
    Bill,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Milk, RecordKind::Rent, RecordKind::Bill];

    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Milk => "Milk",
            RecordKind::Rent => "Rent",
            RecordKind::Bill => "Bill",
        }
    }
}

impl std::str::FromStr for RecordKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Milk" => Ok(RecordKind::Milk),
            "Rent" => Ok(RecordKind::Rent),
            "Bill" => Ok(RecordKind::Bill),
            _ => Err(()),
        }
    }
}

/// Daily delivery status for a milk entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilkStatus {
    /// Milk was delivered that day.
    Active,
    /// Delivery was skipped; the day contributes no cost.
    Leave,
}

/// One dated milk delivery entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilkEntry {
    pub id: i64,
    pub record_id: i64,
    pub date: NaiveDate,
    pub quantity_liters: f64,
    pub status: MilkStatus,
    #[serde(default)]
    pub rate_per_liter: f64,
    #[serde(default)]
    pub total_cost: f64,
}

impl MilkEntry {
    /// Cost the entry contributes to totals. Leave days contribute nothing,
    /// whatever value the backend happened to store.
    pub fn effective_cost(&self) -> f64 {
        match self.status {
            MilkStatus::Active => self.total_cost,
            MilkStatus::Leave => 0.0,
        }
    }

    /// Month key ("YYYY-MM") the entry falls in.
    pub fn month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// One monthly bill entry, optionally with an uploaded receipt image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillEntry {
    pub id: i64,
    pub record_id: i64,
    /// Month key, "YYYY-MM".
    pub month: String,
    pub amount: f64,
    pub reference_number: String,
    #[serde(default)]
    pub file_path: Option<String>,
}

/// One monthly rent entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentEntry {
    pub id: i64,
    pub record_id: i64,
    /// Month key, "YYYY-MM".
    pub month: String,
    pub amount: f64,
}

/// Monthly milk aggregate for one record, as computed server-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilkAnalytics {
    pub record_id: i64,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub total_quantity: f64,
    #[serde(default)]
    pub total_cost: f64,
    #[serde(default)]
    pub bought_days: u32,
    #[serde(default)]
    pub leave_days: u32,
}

/// Monthly bill aggregate for one record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillAnalytics {
    pub record_id: i64,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub bill_count: u32,
}

/// Monthly rent aggregate for one record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentAnalytics {
    pub record_id: i64,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub rent_count: u32,
}

/// Account-wide settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    pub milk_rate_per_liter: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_decodes_camel_case() {
        let json = r#"{
            "id": 7,
            "email": "admin@home.example",
            "fullName": "Asma Khan",
            "role": "Admin",
            "imagePath": "profiles\\7\\avatar.jpg"
        }"#;
        let p: Principal = serde_json::from_str(json).unwrap();
        assert_eq!(p.full_name, "Asma Khan");
        assert!(p.role.is_admin());
        assert!(p.is_valid());
    }

    #[test]
    fn principal_without_image_is_valid() {
        let json = r#"{"id": 3, "email": "v@home.example", "fullName": "V", "role": "Viewer"}"#;
        let p: Principal = serde_json::from_str(json).unwrap();
        assert_eq!(p.image_path, None);
        assert!(!p.role.is_admin());
    }

    #[test]
    fn leave_day_contributes_no_cost() {
        let entry = MilkEntry {
            id: 1,
            record_id: 1,
            date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
            quantity_liters: 0.0,
            status: MilkStatus::Leave,
            rate_per_liter: 100.0,
            // A backend revision stored a stale cost on leave days; the
            // client must still treat the day as free.
            total_cost: 100.0,
        };
        assert_eq!(entry.effective_cost(), 0.0);
        assert_eq!(entry.month(), "2026-08");
    }

    #[test]
    fn record_kind_round_trips_wire_name() {
        let json = r#"{"id": 1, "name": "Kitchen Milk", "type": "Milk"}"#;
        let r: Record = serde_json::from_str(json).unwrap();
        assert_eq!(r.kind, RecordKind::Milk);
        assert_eq!(r.owner_id, None);
        assert_eq!("Bill".parse::<RecordKind>(), Ok(RecordKind::Bill));
        assert!("Groceries".parse::<RecordKind>().is_err());
    }
}
