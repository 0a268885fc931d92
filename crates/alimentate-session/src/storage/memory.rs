//! In-process storage backend.

use parking_lot::RwLock;
use std::collections::HashMap;

use alimentate_types::StorageError;

use super::{KeyValueStorage, StorageBatch, StorageOp};

/// Volatile storage; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: RwLock::new(entries) }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn apply(&self, batch: &StorageBatch) -> Result<(), StorageError> {
        let mut entries = self.entries.write();
        for op in batch.ops() {
            match op {
                StorageOp::Set { key, value } => {
                    entries.insert(key.clone(), value.clone());
                }
                StorageOp::Remove { key } => {
                    entries.remove(key);
                }
            }
        }
        Ok(())
    }
}
