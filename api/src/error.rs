use thiserror::Error;

/// What can go wrong talking to the backend.
///
/// Pages surface the `Display` text in a dismissible alert and abandon the
/// triggering action; there is no retry or queueing.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: DNS, TLS, connection reset, or a
    /// response body that failed to decode.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// True for 401/403, the signal that the stored token went stale.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_display_the_server_message() {
        let err = ApiError::Status {
            status: 404,
            message: "Record not found".into(),
        };
        assert_eq!(err.to_string(), "Record not found");
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn unauthorized_is_flagged_as_auth_failure() {
        let err = ApiError::Status {
            status: 401,
            message: "Unauthorized".into(),
        };
        assert!(err.is_auth_failure());
    }
}
