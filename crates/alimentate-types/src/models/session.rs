//! In-memory session state.

use serde::Serialize;

/// Authenticated-identity state held by the session store.
///
/// Only two shapes exist: signed out (`false`, `0`, `""`) and signed in
/// (`true`, id > 0, non-empty username). Fields are private so no other
/// combination can be built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    signed_in: bool,
    user_id: u64,
    username: String,
}

impl SessionState {
    /// The signed-out state.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// A signed-in state, or `None` if `user_id` is zero or `username` is empty.
    pub fn signed_in(user_id: u64, username: impl Into<String>) -> Option<Self> {
        let username = username.into();
        if user_id == 0 || username.is_empty() {
            return None;
        }
        Some(Self { signed_in: true, user_id, username })
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    /// Authenticated user id, `0` when signed out.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Authenticated username, empty when signed out.
    pub fn username(&self) -> &str {
        &self.username
    }
}
