//! Durable key-value storage.
//!
//! String keys, string values, synchronous access. Backends must make
//! [`KeyValueStorage::apply`] all-or-nothing from the caller's point of view.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::sync::Arc;

use alimentate_client::TokenSource;
use alimentate_types::{storage_keys, StorageError};

/// A single mutation inside a [`StorageBatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageOp {
    Set { key: String, value: String },
    Remove { key: String },
}

/// Ordered set of mutations committed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageBatch {
    ops: Vec<StorageOp>,
}

impl StorageBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.ops.push(StorageOp::Set { key: key.into(), value: value.into() });
        self
    }

    pub fn remove(mut self, key: impl Into<String>) -> Self {
        self.ops.push(StorageOp::Remove { key: key.into() });
        self
    }

    /// Batch removing every key in `keys`.
    pub fn remove_all(keys: &[&str]) -> Self {
        keys.iter().fold(Self::new(), |batch, key| batch.remove(*key))
    }

    pub fn ops(&self) -> &[StorageOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Host-provided persistent key-value store.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Commit every op in order. The default applies them one by one;
    /// backends that can do better override it.
    fn apply(&self, batch: &StorageBatch) -> Result<(), StorageError> {
        for op in batch.ops() {
            match op {
                StorageOp::Set { key, value } => self.set(key, value)?,
                StorageOp::Remove { key } => self.remove(key)?,
            }
        }
        Ok(())
    }
}

pub type SharedStorage = Arc<dyn KeyValueStorage>;

/// [`TokenSource`] reading the persisted `token` entry on every request.
#[derive(Clone)]
pub struct PersistedToken {
    storage: SharedStorage,
}

impl PersistedToken {
    pub fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }
}

impl TokenSource for PersistedToken {
    fn bearer_token(&self) -> Option<String> {
        match self.storage.get(storage_keys::TOKEN) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Could not read bearer token: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_all_builds_one_op_per_key() {
        let batch = StorageBatch::remove_all(&storage_keys::LINKED_DOMAIN_KEYS);
        assert_eq!(batch.ops().len(), 3);
        assert!(batch.ops().iter().all(|op| matches!(
            op,
            StorageOp::Remove { key } if storage_keys::LINKED_DOMAIN_KEYS.contains(&key.as_str())
        )));
    }

    #[test]
    fn test_persisted_token_reads_live_value() {
        let storage: SharedStorage = Arc::new(MemoryStorage::new());
        let source = PersistedToken::new(storage.clone());
        assert_eq!(source.bearer_token(), None);

        storage.set(storage_keys::TOKEN, "tok-1").unwrap();
        assert_eq!(source.bearer_token().as_deref(), Some("tok-1"));

        storage.set(storage_keys::TOKEN, "").unwrap();
        assert_eq!(source.bearer_token(), None);
    }
}
