//! Account-level endpoints: settings, profile updates, and the dashboard
//! headline summary.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use store::models::{AccountSettings, Principal};

use crate::{request, send, ApiError, Upload};

pub async fn settings() -> Result<AccountSettings, ApiError> {
    send(request(Method::GET, "/settings")).await
}

pub async fn update_settings(settings: &AccountSettings) -> Result<AccountSettings, ApiError> {
    send(request(Method::PUT, "/settings").json(settings)).await
}

/// Update the profile of user `id`: new display name and, optionally, a
/// new avatar image. Multipart because of the image. Returns the updated
/// principal, which the caller writes back into the session.
pub async fn update_profile(
    id: i64,
    full_name: &str,
    image: Option<Upload>,
) -> Result<Principal, ApiError> {
    let mut form = Form::new().text("fullName", full_name.to_string());
    if let Some(image) = image {
        form = form.part("image", Part::bytes(image.bytes).file_name(image.file_name));
    }
    send(request(Method::PUT, &format!("/user/{id}")).multipart(form)).await
}

/// Server-computed headline totals for one month across the whole account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_milk_cost: f64,
    #[serde(default)]
    pub total_bills: f64,
    #[serde(default)]
    pub total_rent: f64,
}

impl DashboardSummary {
    pub fn grand_total(&self) -> f64 {
        self.total_milk_cost + self.total_bills + self.total_rent
    }
}

pub async fn dashboard_summary(month: &str) -> Result<DashboardSummary, ApiError> {
    send(request(Method::GET, "/dashboard/summary").query(&[("month", month)])).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_fixture_decodes_and_totals() {
        let json = r#"{"totalMilkCost": 3100.0, "totalBills": 4200.5, "totalRent": 25000.0}"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.grand_total(), 32300.5);
    }

    #[test]
    fn summary_tolerates_missing_fields() {
        let summary: DashboardSummary = serde_json::from_str(r#"{"totalRent": 100.0}"#).unwrap();
        assert_eq!(summary.total_milk_cost, 0.0);
        assert_eq!(summary.grand_total(), 100.0);
    }
}
