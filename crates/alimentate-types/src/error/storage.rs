//! Durable key-value storage errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a durable key-value storage backend.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum StorageError {
    /// Reading a key failed
    #[error("Failed to read '{key}': {message}")]
    Read {
        /// Key being read
        key: String,
        /// Description of the failure
        message: String,
    },

    /// Writing or removing a key failed
    #[error("Failed to write '{key}': {message}")]
    Write {
        /// Key being written
        key: String,
        /// Description of the failure
        message: String,
    },

    /// Backing file exists but is not a JSON object of strings
    #[error("Storage file {path} is corrupt: {message}")]
    Corrupt {
        /// Filesystem path of the backing file
        path: String,
        /// Parse failure details
        message: String,
    },
}
