//! Read-side view of the persisted session and the batches that write it.

use alimentate_types::{storage_keys, SessionError, SignInResponse, StorageError};

use crate::storage::{KeyValueStorage, StorageBatch};

/// Session entries as found in durable storage. Empty strings read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSession {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub username: Option<String>,
}

impl PersistedSession {
    pub fn load(storage: &dyn KeyValueStorage) -> Result<Self, StorageError> {
        let read = |key: &str| -> Result<Option<String>, StorageError> {
            Ok(storage.get(key)?.filter(|v| !v.is_empty()))
        };
        Ok(Self {
            token: read(storage_keys::TOKEN)?,
            user_id: read(storage_keys::USER_ID)?,
            username: read(storage_keys::USERNAME)?,
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

/// Parse a persisted userId: base-10 digits only, strictly positive.
pub fn parse_user_id(raw: &str) -> Result<u64, SessionError> {
    let malformed = || SessionError::MalformedUserId { value: raw.to_string() };
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => Err(malformed()),
        Ok(id) => Ok(id),
    }
}

/// Writes made by a successful sign-in.
pub fn sign_in_batch(response: &SignInResponse) -> StorageBatch {
    StorageBatch::new()
        .set(storage_keys::TOKEN, response.token.as_str())
        .set(storage_keys::USER_ID, response.id.to_string())
        .set(storage_keys::USERNAME, response.username.as_str())
}

/// Purge of the session's own keys (self-healing after corrupt state).
pub fn purge_session_batch() -> StorageBatch {
    StorageBatch::remove_all(&storage_keys::SESSION_KEYS)
}

/// Full teardown, including keys owned by linked domains.
pub fn purge_all_batch() -> StorageBatch {
    let keys: Vec<&str> = storage_keys::all_keys().collect();
    StorageBatch::remove_all(&keys)
}
