//! # Alimentate Types
//!
//! Core types, models, and error definitions for the Alimentate client.
//!
//! - **`error`** - Typed error hierarchy for session, storage, and configuration
//! - **`models`** - Session state, navigation destinations, auth DTOs, persisted key layout, config
//!
//! ## Architecture Role
//!
//! `alimentate-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!            alimentate-types (this crate)
//!                    │
//!          ┌─────────┴─────────┐
//!          ▼                   ▼
//!  alimentate-client ──► alimentate-session
//!                              │
//!                              ▼
//!                       alimentate-cli
//! ```

pub mod error;
pub mod models;

pub use error::{ConfigError, Result, SessionError, StorageError, TypedError};

pub use models::{
    storage_keys, ApiConfig, AppConfig, Destination, SessionSettings, SessionState,
    SignInRequest, SignInResponse, SignUpRequest, SignUpResponse,
};
