//! Session lifecycle errors.
//!
//! These never escape the session store's public operations (which always
//! settle into a well-defined state); they describe why a transition was refused.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::StorageError;

/// Reasons a session transition did not happen.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum SessionError {
    /// Credentials failed local validation before any request was sent
    #[error("Invalid credentials: {message}")]
    InvalidCredentials {
        /// Validation failure details
        message: String,
    },

    /// Upstream rejected the request or could not be reached
    #[error("Authentication request failed: {message}")]
    Upstream {
        /// Transport or status details
        message: String,
    },

    /// Sign-in succeeded upstream but the payload cannot form a session
    #[error("Incomplete sign-in response: {message}")]
    IncompleteResponse {
        /// Which part was missing
        message: String,
    },

    /// Session was torn down while the sign-in request was in flight
    #[error("Sign-in superseded by sign-out (generation {started} -> {current})")]
    Superseded {
        /// Generation when the request started
        started: u64,
        /// Generation when the response arrived
        current: u64,
    },

    /// Persisted userId is not a positive base-10 integer
    #[error("Malformed persisted userId: {value:?}")]
    MalformedUserId {
        /// Raw persisted value
        value: String,
    },

    /// Persistence failed, in-memory state left untouched
    #[error("Persistence failed: {0}")]
    Storage(#[from] StorageError),
}
