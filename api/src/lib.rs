//! # API crate — REST client for the HomeLedger backend
//!
//! Every remote call the pages make goes through this crate. Requests are
//! JSON over HTTPS against the configured base URL, with the persisted
//! session's bearer token attached whenever one exists (`Authorization:
//! Bearer <token>`). Receipt and avatar uploads go as `multipart/form-data`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Login, registration, password reset, viewer invitations and revocation |
//! | [`record`] | CRUD over the account's named, typed records |
//! | [`ledger`] | Milk/bill/rent entries and their per-record analytics |
//! | [`account`] | Account settings, profile updates, dashboard summary |
//! | [`config`] | Build-time environment configuration and media URL helpers |
//!
//! ## Conventions
//!
//! Callers re-fetch the authoritative list after every mutation instead of
//! patching local state, so responses from interleaved requests cannot
//! leave the UI showing something the server never had. No timeout is
//! configured; a hung request holds only its page's loading indicator.

use std::sync::OnceLock;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod account;
pub mod auth;
pub mod config;
mod error;
pub mod ledger;
pub mod record;

pub use error::ApiError;
pub use store::models;

/// A file selected by the user, ready to be attached to a multipart
/// request (bill receipt or profile avatar).
#[derive(Clone, Debug, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Generic `{"message": "..."}` body some endpoints answer with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerMessage {
    pub message: String,
}

fn http() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(Client::new)
}

/// Request against `<base>/api<path>` with the bearer token attached when
/// the session holds one.
pub(crate) fn request(method: Method, path: &str) -> RequestBuilder {
    let url = format!("{}/api{}", config::api_base_url(), path);
    let mut req = http().request(method, url);
    if let Some(token) = store::session::active_token() {
        req = req.bearer_auth(token);
    }
    req
}

pub(crate) async fn send<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, ApiError> {
    let resp = expect_success(req).await?;
    Ok(resp.json().await?)
}

pub(crate) async fn send_unit(req: RequestBuilder) -> Result<(), ApiError> {
    expect_success(req).await.map(drop)
}

async fn expect_success(req: RequestBuilder) -> Result<reqwest::Response, ApiError> {
    let resp = req.send().await?;
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = match resp.text().await {
        Ok(body) if !body.trim().is_empty() => body,
        _ => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}
