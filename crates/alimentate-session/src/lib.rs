//! # Alimentate Session
//!
//! Client-side authentication lifecycle for Alimentate.
//!
//! ```text
//! alimentate-session/src/
//! ├── store/       # SessionStore: sign-in, sign-up, sign-out, validate, restore
//! ├── storage/     # KeyValueStorage trait, memory + JSON-file backends
//! ├── persisted.rs # Durable session layout: reads, userId parsing, write/purge batches
//! └── modules/     # Data directory and config file handling
//! ```
//!
//! The store never talks to global state: build one [`SessionStore`] at
//! startup and pass it to whatever handles user actions.

pub mod modules;
pub mod persisted;
pub mod storage;
pub mod store;

pub use persisted::PersistedSession;
pub use storage::{
    FileStorage, KeyValueStorage, MemoryStorage, PersistedToken, SharedStorage, StorageBatch,
    StorageOp,
};
pub use store::{SessionCheck, SessionStore};
