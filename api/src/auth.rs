//! Authentication and record-sharing endpoints (`/auth/*`).

use reqwest::Method;
use serde::{Deserialize, Serialize};
use store::models::Principal;
use store::InvitedViewer;

use crate::{request, send, send_unit, ApiError, ServerMessage};

/// Body of a successful login or registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: Principal,
    pub token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    send(request(Method::POST, "/auth/login").json(&Credentials { email, password })).await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Registration<'a> {
    full_name: &'a str,
    email: &'a str,
    password: &'a str,
}

pub async fn register(
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    send(request(Method::POST, "/auth/register").json(&Registration {
        full_name,
        email,
        password,
    }))
    .await
}

pub async fn forgot_password(email: &str) -> Result<ServerMessage, ApiError> {
    #[derive(Serialize)]
    struct Body<'a> {
        email: &'a str,
    }
    send(request(Method::POST, "/auth/forgot-password").json(&Body { email })).await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordReset<'a> {
    email: &'a str,
    token: &'a str,
    new_password: &'a str,
}

pub async fn reset_password(
    email: &str,
    token: &str,
    new_password: &str,
) -> Result<ServerMessage, ApiError> {
    send(request(Method::POST, "/auth/reset-password").json(&PasswordReset {
        email,
        token,
        new_password,
    }))
    .await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Invitation<'a> {
    email: &'a str,
    full_name: &'a str,
    admin_id: i64,
    record_name: &'a str,
}

/// Create a pending grant for `email` on the record named `record_name`.
/// The record must already exist; the server validates both the address
/// and the name.
pub async fn invite_viewer(
    admin_id: i64,
    email: &str,
    full_name: &str,
    record_name: &str,
) -> Result<(), ApiError> {
    send_unit(request(Method::POST, "/auth/invite").json(&Invitation {
        email,
        full_name,
        admin_id,
        record_name,
    }))
    .await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Revocation<'a> {
    viewer_id: i64,
    record_name: &'a str,
}

/// Remove a still-pending grant. The server rejects revocation of an
/// accepted grant; the UI never offers it.
pub async fn revoke_viewer(viewer_id: i64, record_name: &str) -> Result<(), ApiError> {
    send_unit(request(Method::POST, "/auth/revoke").json(&Revocation {
        viewer_id,
        record_name,
    }))
    .await
}

/// Everyone the admin has invited, with the grants each viewer holds.
pub async fn invited_viewers(admin_id: i64) -> Result<Vec<InvitedViewer>, ApiError> {
    send(request(Method::GET, "/auth/invited-viewers").query(&[("adminId", admin_id)])).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::GrantState;

    #[test]
    fn auth_response_decodes_login_body() {
        let json = r#"{
            "user": {"id": 7, "email": "a@h.example", "fullName": "Asma", "role": "Admin"},
            "token": "jwt-abc"
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "jwt-abc");
        assert!(resp.user.role.is_admin());
    }

    #[test]
    fn invitation_body_is_camel_case() {
        let body = Invitation {
            email: "a@b.com",
            full_name: "Ayesha",
            admin_id: 7,
            record_name: "Kitchen Milk",
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""fullName":"Ayesha""#));
        assert!(json.contains(r#""recordName":"Kitchen Milk""#));
        assert!(json.contains(r#""adminId":7"#));
    }

    #[test]
    fn invited_viewers_fixture_decodes() {
        let json = r#"[{
            "viewerId": 12,
            "viewerEmail": "a@b.com",
            "viewerFullName": "Ayesha",
            "records": [{"recordName": "Kitchen Milk", "isAccepted": false}]
        }]"#;
        let viewers: Vec<store::InvitedViewer> = serde_json::from_str(json).unwrap();
        assert_eq!(viewers.len(), 1);
        assert_eq!(viewers[0].records[0].state, GrantState::Pending);
    }
}
