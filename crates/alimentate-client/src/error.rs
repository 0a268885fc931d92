//! Error types for the Alimentate client.

use thiserror::Error;

/// Errors that can occur when using the Alimentate client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Client configuration is unusable (bad base URL, etc).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// HTTP request failed before a response arrived.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("Request rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// Server returned an invalid or unparseable response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
