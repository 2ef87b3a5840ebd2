//! Service layer error types
//!
//! Abstracts over transport-specific errors so the UI only has to decide
//! which message to show.

use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The HTTP call failed (transport, status, or body)
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The submission could not be encoded
    #[error("Failed to encode request: {0}")]
    Serialize(String),
}

impl ServiceError {
    /// Check if the server was never reached
    pub fn is_transport(&self) -> bool {
        matches!(self, ServiceError::Api(e) if e.is_transport())
    }
}
