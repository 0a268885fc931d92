//! Typed error definitions for Alimentate.
//!
//! Each domain gets its own enum; [`TypedError`] wraps them when a single
//! error type is needed. All errors are serializable, displayable and matchable.

mod config;
mod session;
mod storage;

pub use config::ConfigError;
pub use session::SessionError;
pub use storage::StorageError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a session lifecycle error
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Wraps a durable storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;
