//! API error taxonomy.
//!
//! DESIGN
//! ======
//! Every remote-call failure is a value of [`ApiError`]; nothing in the
//! crate panics on a bad response. Callers surface these as user
//! notifications and keep the last good view state intact.

use thiserror::Error;

/// Errors produced by calls against the recruitment backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// 401 — missing or expired bearer token.
    #[error("unauthorized")]
    Unauthorized,

    /// 403 — authenticated but not allowed.
    #[error("no permission")]
    Forbidden,

    /// 404 — entity or endpoint does not exist.
    #[error("not found")]
    NotFound,

    /// 400/422 — the backend refused the payload.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Any other non-success status.
    #[error("backend error (status {status}): {body}")]
    Backend { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success HTTP status to the taxonomy.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            400 | 422 => Self::Rejected(body),
            _ => Self::Backend { status, body },
        }
    }

    /// True when the failure means the session is no longer valid.
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
