//! Record registry endpoints (`/record`).
//!
//! Records are scoped to the account implicitly by the bearer token; the
//! listing takes no filter parameters. Callers re-fetch the full list
//! after every mutation.

use reqwest::Method;
use serde::Serialize;
use store::models::{Record, RecordKind};

use crate::{request, send, send_unit, ApiError};

pub async fn records() -> Result<Vec<Record>, ApiError> {
    send(request(Method::GET, "/record")).await
}

#[derive(Serialize)]
struct NewRecord<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: RecordKind,
}

pub async fn create_record(name: &str, kind: RecordKind) -> Result<Record, ApiError> {
    send(request(Method::POST, "/record").json(&NewRecord { name, kind })).await
}

pub async fn delete_record(id: i64) -> Result<(), ApiError> {
    send_unit(request(Method::DELETE, &format!("/record/{id}"))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_serialises_kind_under_type() {
        let body = NewRecord {
            name: "Kitchen Milk",
            kind: RecordKind::Milk,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"name":"Kitchen Milk","type":"Milk"}"#);
    }

    #[test]
    fn record_list_fixture_decodes() {
        let json = r#"[
            {"id": 1, "name": "Kitchen Milk", "type": "Milk", "ownerId": 7},
            {"id": 2, "name": "Flat Rent", "type": "Rent", "ownerId": 7}
        ]"#;
        let records: Vec<Record> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].kind, RecordKind::Rent);
        assert_eq!(records[0].owner_id, Some(7));
    }
}
