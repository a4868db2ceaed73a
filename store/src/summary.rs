//! # Client-side aggregation
//!
//! Pure reducers over the last fetched entry list. Totals are recomputed
//! from the full list on every render, which keeps them consistent with
//! the last fetch; entry volumes are household-scale, so the O(n) pass is
//! irrelevant.
//!
//! Also home to the "YYYY-MM" month-key arithmetic used by the month
//! pickers and the monthly ledger filter.

use crate::models::{
    BillAnalytics, BillEntry, MilkAnalytics, MilkEntry, MilkStatus, RentAnalytics, RentEntry,
};

/// Totals over a list of milk entries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MilkSummary {
    pub days: usize,
    pub bought_days: usize,
    pub leave_days: usize,
    pub total_liters: f64,
    pub total_cost: f64,
}

impl MilkSummary {
    pub fn from_entries(entries: &[MilkEntry]) -> Self {
        let mut summary = Self {
            days: entries.len(),
            ..Self::default()
        };
        for entry in entries {
            match entry.status {
                MilkStatus::Active => {
                    summary.bought_days += 1;
                    summary.total_liters += entry.quantity_liters;
                }
                MilkStatus::Leave => summary.leave_days += 1,
            }
            summary.total_cost += entry.effective_cost();
        }
        summary
    }
}

/// Totals over a list of bill entries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BillSummary {
    pub count: usize,
    pub total_amount: f64,
}

impl BillSummary {
    pub fn from_entries(entries: &[BillEntry]) -> Self {
        Self {
            count: entries.len(),
            total_amount: entries.iter().map(|e| e.amount).sum(),
        }
    }
}

/// Totals over a list of rent entries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RentSummary {
    pub count: usize,
    pub total_amount: f64,
}

impl RentSummary {
    pub fn from_entries(entries: &[RentEntry]) -> Self {
        Self {
            count: entries.len(),
            total_amount: entries.iter().map(|e| e.amount).sum(),
        }
    }
}

/// Grand totals the dashboard sums from per-record analytics rows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashboardTotals {
    pub milk_liters: f64,
    pub milk_cost: f64,
    pub bill_amount: f64,
    pub rent_amount: f64,
}

impl DashboardTotals {
    pub fn from_analytics(
        milk: &[MilkAnalytics],
        bills: &[BillAnalytics],
        rent: &[RentAnalytics],
    ) -> Self {
        Self {
            milk_liters: milk.iter().map(|a| a.total_quantity).sum(),
            milk_cost: milk.iter().map(|a| a.total_cost).sum(),
            bill_amount: bills.iter().map(|a| a.total_amount).sum(),
            rent_amount: rent.iter().map(|a| a.total_amount).sum(),
        }
    }

    pub fn grand_total(&self) -> f64 {
        self.milk_cost + self.bill_amount + self.rent_amount
    }
}

fn split_month(month: &str) -> Option<(i32, u32)> {
    let (year, month) = month.split_once('-')?;
    let year = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// `n` month keys counting backwards from `from` (inclusive), newest
/// first. Malformed input yields an empty list.
pub fn previous_months(from: &str, n: usize) -> Vec<String> {
    let Some((mut year, mut month)) = split_month(from) else {
        return Vec::new();
    };
    let mut months = Vec::with_capacity(n);
    for _ in 0..n {
        months.push(format!("{year:04}-{month:02}"));
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }
    months
}

/// Human label for a month key: "2026-08" → "August 2026". Malformed keys
/// are shown as-is.
pub fn month_label(month: &str) -> String {
    const NAMES: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    match split_month(month) {
        Some((year, m)) => format!("{} {year}", NAMES[(m - 1) as usize]),
        None => month.to_string(),
    }
}

/// Milk entries falling in the given month.
pub fn milk_in_month<'a>(entries: &'a [MilkEntry], month: &str) -> Vec<&'a MilkEntry> {
    entries.iter().filter(|e| e.month() == month).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn milk(day: u32, liters: f64, status: MilkStatus, cost: f64) -> MilkEntry {
        MilkEntry {
            id: day as i64,
            record_id: 1,
            date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            quantity_liters: liters,
            status,
            rate_per_liter: 100.0,
            total_cost: cost,
        }
    }

    #[test]
    fn milk_summary_counts_leave_days_separately() {
        let entries = vec![
            milk(1, 2.0, MilkStatus::Active, 200.0),
            milk(2, 0.0, MilkStatus::Leave, 0.0),
        ];
        let summary = MilkSummary::from_entries(&entries);
        assert_eq!(summary.days, 2);
        assert_eq!(summary.bought_days, 1);
        assert_eq!(summary.leave_days, 1);
        assert_eq!(summary.total_liters, 2.0);
        assert_eq!(summary.total_cost, 200.0);
    }

    #[test]
    fn bill_and_rent_summaries_sum_amounts() {
        let bills = vec![
            BillEntry {
                id: 1,
                record_id: 1,
                month: "2026-07".into(),
                amount: 4200.0,
                reference_number: "ELEC-07".into(),
                file_path: None,
            },
            BillEntry {
                id: 2,
                record_id: 1,
                month: "2026-08".into(),
                amount: 3800.0,
                reference_number: "ELEC-08".into(),
                file_path: Some("receipts/2.jpg".into()),
            },
        ];
        let summary = BillSummary::from_entries(&bills);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_amount, 8000.0);

        let rent = vec![RentEntry {
            id: 1,
            record_id: 2,
            month: "2026-08".into(),
            amount: 25000.0,
        }];
        assert_eq!(RentSummary::from_entries(&rent).total_amount, 25000.0);
    }

    #[test]
    fn dashboard_totals_sum_per_record_rows() {
        let milk = vec![
            MilkAnalytics {
                record_id: 1,
                total_quantity: 30.0,
                total_cost: 3000.0,
                ..Default::default()
            },
            MilkAnalytics {
                record_id: 2,
                total_quantity: 10.0,
                total_cost: 1000.0,
                ..Default::default()
            },
        ];
        let bills = vec![BillAnalytics {
            record_id: 3,
            total_amount: 4200.0,
            ..Default::default()
        }];
        let rent = vec![RentAnalytics {
            record_id: 4,
            total_amount: 25000.0,
            ..Default::default()
        }];

        let totals = DashboardTotals::from_analytics(&milk, &bills, &rent);
        assert_eq!(totals.milk_liters, 40.0);
        assert_eq!(totals.milk_cost, 4000.0);
        assert_eq!(totals.grand_total(), 33200.0);
    }

    #[test]
    fn previous_months_cross_the_year_boundary() {
        assert_eq!(
            previous_months("2026-02", 4),
            vec!["2026-02", "2026-01", "2025-12", "2025-11"]
        );
        assert!(previous_months("garbage", 4).is_empty());
        assert!(previous_months("2026-13", 4).is_empty());
    }

    #[test]
    fn month_labels_are_human_readable() {
        assert_eq!(month_label("2026-08"), "August 2026");
        assert_eq!(month_label("2025-12"), "December 2025");
        assert_eq!(month_label("bogus"), "bogus");
    }

    #[test]
    fn milk_month_filter_matches_entry_dates() {
        let entries = vec![
            milk(1, 2.0, MilkStatus::Active, 200.0),
            MilkEntry {
                date: NaiveDate::from_ymd_opt(2026, 7, 31).unwrap(),
                ..milk(2, 1.0, MilkStatus::Active, 100.0)
            },
        ];
        let august = milk_in_month(&entries, "2026-08");
        assert_eq!(august.len(), 1);
        assert_eq!(august[0].id, 1);
    }
}
