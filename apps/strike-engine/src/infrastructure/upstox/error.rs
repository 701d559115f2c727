//! Upstox-specific error types.

use thiserror::Error;

use crate::application::ports::ChainFetchError;

/// Errors from the Upstox adapter.
#[derive(Debug, Error, Clone)]
pub enum UpstoxError {
    /// No access token configured.
    #[error("missing Upstox access token")]
    MissingCredentials,

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// The request never completed (connect failure, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The API returned a non-success status.
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),
}

impl From<UpstoxError> for ChainFetchError {
    fn from(err: UpstoxError) -> Self {
        match err {
            UpstoxError::Api { status, message } => Self::Upstream { status, message },
            UpstoxError::JsonParse(msg) => Self::Malformed(msg),
            UpstoxError::MissingCredentials | UpstoxError::Client(_) | UpstoxError::Network(_) => {
                Self::Network(err.to_string())
            }
        }
    }
}
