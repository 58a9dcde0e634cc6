//! Failure taxonomy for the REST layer.
//!
//! ERROR HANDLING
//! ==============
//! Every HTTP failure is classified into exactly one `ApiError` variant at
//! the request-layer boundary; 401/403 additionally trigger the centralized
//! reaction in `net::http` before the error reaches the caller. Validation
//! failures of locally stored state are logged and healed, never shown.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Classified outcome of a failed REST call or session operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server could not be reached, or the call timed out.
    #[error("could not reach the server: {0}")]
    Network(String),
    /// The server answered, but the payload violates the expected shape.
    #[error("invalid server response: {0}")]
    Protocol(String),
    /// 401 — the session is invalid or has expired.
    #[error("session is invalid or has expired")]
    Authentication,
    /// 403 — authenticated, but the role is insufficient.
    #[error("insufficient permissions for this resource")]
    Authorization,
    /// Locally stored data failed structural validation.
    #[error("invalid local data: {0}")]
    Validation(String),
    /// Any other non-success HTTP status.
    #[error("request failed with status {0}")]
    Status(u16),
}

impl ApiError {
    /// Classify an HTTP status code; success codes return `None`.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(Self::Authentication),
            403 => Some(Self::Authorization),
            other => Some(Self::Status(other)),
        }
    }

    /// Generic message suitable for an error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server. Check your connection and retry.".to_owned(),
            Self::Protocol(_) => "The server returned an invalid response. Please retry.".to_owned(),
            Self::Authentication => "Your session has expired. Please sign in again.".to_owned(),
            Self::Authorization => "You do not have permission to perform this action.".to_owned(),
            Self::Validation(_) => "Some local data was invalid and has been reset.".to_owned(),
            Self::Status(status) => match status {
                400 => "Invalid request. Please check the submitted data.".to_owned(),
                404 => "The requested resource was not found.".to_owned(),
                422 => "The submitted data was rejected by the server.".to_owned(),
                429 => "Too many attempts. Please retry in a few minutes.".to_owned(),
                500 => "Internal server error. Please retry later.".to_owned(),
                503 => "Service temporarily unavailable. Please retry later.".to_owned(),
                other => format!("The request failed with status {other}."),
            },
        }
    }
}
