//! Session store: the sign-in/sign-out state machine.
//!
//! One store is built at process start and handed to whatever handles UI
//! events. Two states exist, signed out and signed in; every transition goes
//! through [`SessionStore::apply_change`], which commits durable storage
//! before touching memory while holding the state lock.
//!
//! Sign-out and invalidation bump a generation counter. A sign-in whose
//! request was in flight across such a bump discards its response, so a
//! late success cannot resurrect a session the user already ended.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use alimentate_client::AuthApi;
use alimentate_types::{
    storage_keys, Destination, SessionError, SessionSettings, SessionState, SignInRequest,
    SignInResponse, SignUpRequest,
};
use validator::Validate;

use crate::persisted::{
    parse_user_id, purge_all_batch, purge_session_batch, sign_in_batch, PersistedSession,
};
use crate::storage::{SharedStorage, StorageBatch};


/// Outcome of [`SessionStore::validate_session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCheck {
    Valid,
    /// Session was torn down; caller should navigate to `redirect`.
    Invalid { redirect: Destination },
}

impl SessionCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

enum Change {
    /// Enter the signed-in state. `started` is the generation observed before
    /// the sign-in request went out; `None` for local restores.
    SignedIn { next: SessionState, batch: StorageBatch, started: Option<u64> },
    /// Reset to signed out, purging `batch`. Memory is reset even if storage fails.
    SignedOut { batch: StorageBatch },
}

pub struct SessionStore {
    api: Arc<dyn AuthApi>,
    storage: SharedStorage,
    settings: SessionSettings,
    state: RwLock<SessionState>,
    generation: AtomicU64,
}

impl SessionStore {
    /// Build the store and derive its initial state from durable storage.
    pub fn new(api: Arc<dyn AuthApi>, storage: SharedStorage, settings: SessionSettings) -> Self {
        let store = Self {
            api,
            storage,
            settings,
            state: RwLock::new(SessionState::signed_out()),
            generation: AtomicU64::new(0),
        };
        store.restore_from_storage();
        store
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.read().is_signed_in()
    }

    pub fn current_user_id(&self) -> u64 {
        self.state.read().user_id()
    }

    pub fn current_username(&self) -> String {
        self.state.read().username().to_string()
    }

    /// Bearer token as currently persisted.
    pub fn current_token(&self) -> Option<String> {
        match self.storage.get(storage_keys::TOKEN) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Could not read persisted token: {}", e);
                None
            }
        }
    }

    /// Authenticate against the API and, on success, enter the signed-in state.
    ///
    /// Returns the configured post sign-in destination on success and
    /// [`Destination::SignIn`] on any failure. Failures never change state.
    pub async fn sign_in(&self, request: &SignInRequest) -> Destination {
        if let Err(e) = request.validate() {
            let err = SessionError::InvalidCredentials { message: e.to_string() };
            tracing::warn!("Sign-in refused: {}", err);
            return Destination::SignIn;
        }

        let started = self.generation.load(Ordering::SeqCst);
        tracing::info!("Signing in as {}", request.username);

        let response = match self.api.sign_in(request).await {
            Ok(response) => response,
            Err(e) => {
                let err = SessionError::Upstream { message: e.to_string() };
                tracing::warn!("Sign-in failed for {}: {}", request.username, err);
                return Destination::SignIn;
            }
        };

        match self.complete_sign_in(started, &response) {
            Ok(()) => {
                tracing::info!("Signed in as {} (user {})", response.username, response.id);
                self.settings.post_sign_in
            }
            Err(e) => {
                tracing::warn!("Sign-in discarded: {}", e);
                Destination::SignIn
            }
        }
    }

    /// Register a new account. Never touches session state.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Destination {
        if let Err(e) = request.validate() {
            let err = SessionError::InvalidCredentials { message: e.to_string() };
            tracing::warn!("Sign-up refused: {}", err);
            return Destination::SignUp;
        }

        match self.api.sign_up(request).await {
            Ok(response) => {
                tracing::info!("Signed up {}: {}", request.username, response.message);
                Destination::SignIn
            }
            Err(e) => {
                let err = SessionError::Upstream { message: e.to_string() };
                tracing::warn!("Sign-up failed for {}: {}", request.username, err);
                Destination::SignUp
            }
        }
    }

    /// End the session and purge every session-related key, including the
    /// ones linked domains wrote. Idempotent; always lands on sign-in.
    pub fn sign_out(&self) -> Destination {
        if let Err(e) = self.apply_change(Change::SignedOut { batch: purge_all_batch() }) {
            tracing::error!("Signed out, but storage purge failed: {}", e);
        } else {
            tracing::info!("Signed out");
        }
        Destination::SignIn
    }

    /// Local consistency check between memory and durable storage.
    ///
    /// Invalid when no token is persisted, or when a persisted userId
    /// disagrees with the in-memory one. An invalid session is torn down
    /// exactly like [`sign_out`](Self::sign_out). No network call is made.
    pub fn validate_session(&self) -> SessionCheck {
        let reason = match PersistedSession::load(self.storage.as_ref()) {
            Err(e) => Some(format!("storage unreadable: {}", e)),
            Ok(persisted) if !persisted.has_token() => Some("no persisted token".to_string()),
            Ok(persisted) => persisted.user_id.as_deref().and_then(|raw| {
                let current = self.current_user_id();
                // "0" never parses, so it mismatches even a signed-out store.
                match parse_user_id(raw) {
                    Ok(id) if id == current => None,
                    _ => Some(format!("persisted userId {:?} does not match {}", raw, current)),
                }
            }),
        };

        let Some(reason) = reason else {
            tracing::debug!("Session valid");
            return SessionCheck::Valid;
        };

        tracing::warn!("Session invalid ({}), tearing down", reason);
        if let Err(e) = self.apply_change(Change::SignedOut { batch: purge_all_batch() }) {
            tracing::error!("Storage purge after invalid session failed: {}", e);
        }
        SessionCheck::Invalid { redirect: Destination::SignIn }
    }

    /// Re-derive state from durable storage. Idempotent.
    ///
    /// No token: nothing happens. Token with a valid userId: signed in, using
    /// the persisted username or, failing that, the in-memory one when it
    /// belongs to the same userId.
    /// Anything else (missing or malformed userId, no username available)
    /// purges the session keys and leaves the store signed out.
    pub fn restore_from_storage(&self) {
        let persisted = match PersistedSession::load(self.storage.as_ref()) {
            Ok(persisted) => persisted,
            Err(e) => {
                tracing::warn!("Could not read persisted session: {}", e);
                return;
            }
        };

        if !persisted.has_token() {
            tracing::debug!("No persisted token, nothing to restore");
            return;
        }

        let user_id = match persisted.user_id.as_deref().map(parse_user_id) {
            Some(Ok(id)) => id,
            Some(Err(e)) => {
                tracing::warn!("{}, purging session keys", e);
                self.purge_unrestorable();
                return;
            }
            None => {
                tracing::warn!("Persisted token without userId, purging session keys");
                self.purge_unrestorable();
                return;
            }
        };

        // The in-memory username only belongs to the same user.
        let current = self.snapshot();
        let username = match persisted.username {
            Some(username) => username,
            None if current.user_id() == user_id => current.username().to_string(),
            None => String::new(),
        };
        let Some(next) = SessionState::signed_in(user_id, username) else {
            tracing::warn!("No username available for user {}, purging session keys", user_id);
            self.purge_unrestorable();
            return;
        };

        let change = Change::SignedIn { next, batch: StorageBatch::new(), started: None };
        match self.apply_change(change) {
            Ok(()) => tracing::debug!("Restored session for user {}", user_id),
            Err(e) => tracing::warn!("Restore failed: {}", e),
        }
    }

    fn complete_sign_in(&self, started: u64, response: &SignInResponse) -> Result<(), SessionError> {
        if !response.is_complete() {
            return Err(SessionError::IncompleteResponse {
                message: "id, username and token are all required".to_string(),
            });
        }
        let next = SessionState::signed_in(response.id, response.username.as_str()).ok_or_else(
            || SessionError::IncompleteResponse { message: "unusable identity".to_string() },
        )?;
        self.apply_change(Change::SignedIn {
            next,
            batch: sign_in_batch(response),
            started: Some(started),
        })
    }

    fn purge_unrestorable(&self) {
        if let Err(e) = self.apply_change(Change::SignedOut { batch: purge_session_batch() }) {
            tracing::error!("Storage purge failed: {}", e);
        }
    }

    /// The only place memory and durable storage change.
    fn apply_change(&self, change: Change) -> Result<(), SessionError> {
        let mut state = self.state.write();
        match change {
            Change::SignedIn { next, batch, started } => {
                if let Some(started) = started {
                    let current = self.generation.load(Ordering::SeqCst);
                    if current != started {
                        return Err(SessionError::Superseded { started, current });
                    }
                }
                self.storage.apply(&batch)?;
                *state = next;
                Ok(())
            }
            Change::SignedOut { batch } => {
                self.generation.fetch_add(1, Ordering::SeqCst);
                let result = self.storage.apply(&batch);
                *state = SessionState::signed_out();
                result.map_err(SessionError::from)
            }
        }
    }
}
