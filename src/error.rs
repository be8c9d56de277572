//! Error types for the cache panel
//!
//! `ClientError` describes why a call to the remote cache service failed.
//! `ViewError` is the single operator-facing error shown next to the form.

use thiserror::Error;

// == Client Error Enum ==
/// Failure of a single request against the remote cache service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request could not complete (network failure or 5xx)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service reported the key absent or expired
    #[error("Key not found: {0}")]
    NotFound(String),

    /// The service rejected the request payload
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The service answered with an unexpected non-success status
    #[error("Operation failed ({status}): {message}")]
    Operation { status: u16, message: String },

    /// The response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(e.to_string())
    }
}

/// Convenience Result type for remote cache calls.
pub type Result<T> = std::result::Result<T, ClientError>;

// == Error Category ==
/// Classification of the error currently shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Operation,
    Transport,
}

// == View Error Enum ==
/// The ErrorState of the view: at most one is active at a time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Input was malformed; no request was sent
    #[error("{0}")]
    Validation(String),

    /// The requested key is absent or expired
    #[error("{0}")]
    NotFound(String),

    /// The service was reached but reported failure
    #[error("{0}")]
    Operation(String),

    /// The request could not complete
    #[error("{0}")]
    Transport(String),
}

impl ViewError {
    /// Returns the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ViewError::Validation(_) => ErrorCategory::Validation,
            ViewError::NotFound(_) => ErrorCategory::NotFound,
            ViewError::Operation(_) => ErrorCategory::Operation,
            ViewError::Transport(_) => ErrorCategory::Transport,
        }
    }

    /// Returns the message displayed to the operator.
    pub fn message(&self) -> &str {
        match self {
            ViewError::Validation(msg)
            | ViewError::NotFound(msg)
            | ViewError::Operation(msg)
            | ViewError::Transport(msg) => msg,
        }
    }
}
