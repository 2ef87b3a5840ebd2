//! HTTP boundary error type

use thiserror::Error;

/// Errors surfaced by the HTTP adapter
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Request could not be sent or timed out
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// Request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

impl ApiError {
    /// Check if the request never got an HTTP answer (connection refused, TLS, timeout)
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::RequestFailed(_))
    }

    /// Status code of an HTTP error response, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
