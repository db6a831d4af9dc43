//! API Error Types

use thiserror::Error;

use crate::transport::TransportError;

/// Errors surfaced by [`super::ApiClient`] calls
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never got a response
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Non-2xx response
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not the JSON we expected
    #[error("Parse error: {0}")]
    Parse(String),

    /// The server answered `result: false`
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Request body could not be encoded
    #[error("Request build error: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
