//! Typed request failures for backend calls.
//!
//! DESIGN
//! ======
//! Transport failures, non-2xx statuses, and body decode failures map to a
//! closed set of variants instead of ad-hoc strings, so callers can branch
//! on kind (the 401 session-check case) while toasts only need `message()`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

use super::types::ApiErrorBody;

/// A failed backend request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status. `message` is the server's
    /// `error` field when present, else a per-operation fallback.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Human-readable message suitable for a toast.
    pub fn message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Network(m) | Self::Decode(m) => m.clone(),
        }
    }

    /// Whether this failure is an HTTP 401.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Map a non-2xx response to `ApiError::Status`, preferring the server's
/// `error` body field over the operation's fallback message.
pub fn status_error(status: u16, body: &str, fallback: &str) -> ApiError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| fallback.to_owned());
    ApiError::Status { status, message }
}
