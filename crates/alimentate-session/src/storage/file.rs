//! JSON-file storage backend.
//!
//! The whole map lives in one JSON object. Every mutation writes a temp file
//! and renames it over the original, so readers never observe a half-written
//! file and a failed write leaves both disk and cache untouched.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use alimentate_types::StorageError;

use crate::modules::paths::storage_path;

use super::{KeyValueStorage, StorageBatch, StorageOp};

type Entries = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl FileStorage {
    /// Open (or lazily create) the storage file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = load_entries(&path)?;
        tracing::debug!("Opened session storage {} ({} entries)", path.display(), entries.len());
        Ok(Self { path, entries: Mutex::new(entries) })
    }

    /// Like [`open`](Self::open), but a corrupt file is moved aside to
    /// `<file>.corrupt` and storage starts empty, so sign-out can still run.
    pub fn open_or_reset(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        match Self::open(&path) {
            Err(StorageError::Corrupt { message, .. }) => {
                tracing::warn!(
                    "Session storage {} is corrupt ({}), starting empty",
                    path.display(),
                    message
                );
                quarantine(&path)?;
                Ok(Self { path, entries: Mutex::new(Entries::new()) })
            }
            other => other,
        }
    }

    /// Open `session_storage.json` in the data directory, resetting it if corrupt.
    pub fn open_default() -> alimentate_types::Result<Self> {
        let path = storage_path()?;
        Ok(Self::open_or_reset(path)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit<F>(&self, first_key: &str, mutate: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Entries),
    {
        let mut entries = self.entries.lock();
        let mut next = entries.clone();
        mutate(&mut next);
        if next == *entries {
            return Ok(());
        }
        write_entries(&self.path, &next).map_err(|message| StorageError::Write {
            key: first_key.to_string(),
            message,
        })?;
        *entries = next;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.commit(key, |entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.commit(key, |entries| {
            entries.remove(key);
        })
    }

    fn apply(&self, batch: &StorageBatch) -> Result<(), StorageError> {
        let first_key = match batch.ops().first() {
            Some(StorageOp::Set { key, .. } | StorageOp::Remove { key }) => key.as_str(),
            None => return Ok(()),
        };
        self.commit(first_key, |entries| {
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
        })
    }
}

fn load_entries(path: &Path) -> Result<Entries, StorageError> {
    if !path.exists() {
        return Ok(Entries::new());
    }

    let content = fs::read_to_string(path).map_err(|e| StorageError::Read {
        key: path.display().to_string(),
        message: e.to_string(),
    })?;
    if content.trim().is_empty() {
        return Ok(Entries::new());
    }

    serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn quarantine(path: &Path) -> Result<(), StorageError> {
    let aside = path.with_extension("json.corrupt");
    match fs::rename(path, &aside) {
        Ok(()) => {
            tracing::info!("Moved corrupt storage to {}", aside.display());
            Ok(())
        }
        // Could not move it; overwrite in place so no stale token survives.
        Err(e) => {
            tracing::warn!("Could not move {} aside: {}", path.display(), e);
            write_entries(path, &Entries::new()).map_err(|message| StorageError::Write {
                key: path.display().to_string(),
                message,
            })
        }
    }
}

fn write_entries(path: &Path, entries: &Entries) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create storage directory: {}", e))?;
        }
    }

    let temp_path = path.with_extension("json.tmp");
    let content = serde_json::to_string_pretty(entries)
        .map_err(|e| format!("Failed to serialize storage: {}", e))?;

    if let Err(e) = fs::write(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(format!("Failed to write temp storage file: {}", e));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        format!("Failed to replace storage file: {}", e)
    })
}
