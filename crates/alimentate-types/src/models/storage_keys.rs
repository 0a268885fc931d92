//! Durable storage layout.
//!
//! Key names are shared with sessions stored by earlier clients and must not
//! change. `userId` is always a base-10 string.

/// Bearer credential.
pub const TOKEN: &str = "token";
/// Authenticated user id.
pub const USER_ID: &str = "userId";
/// Authenticated username.
pub const USERNAME: &str = "username";
/// Profile linked to the user (written by the profiles domain).
pub const PROFILE_ID: &str = "profileId";
/// Tracking record linked to the user (written by the tracking domain).
pub const TRACKING_ID: &str = "trackingId";
/// Tracking goal linked to the user (written by the tracking domain).
pub const TRACKING_GOAL_ID: &str = "trackingGoalId";

/// Keys written by the session itself.
pub const SESSION_KEYS: [&str; 3] = [TOKEN, USER_ID, USERNAME];

/// Keys owned by other domains but purged on sign-out.
pub const LINKED_DOMAIN_KEYS: [&str; 3] = [PROFILE_ID, TRACKING_ID, TRACKING_GOAL_ID];

/// Every key removed by a full session teardown.
pub fn all_keys() -> impl Iterator<Item = &'static str> {
    SESSION_KEYS.into_iter().chain(LINKED_DOMAIN_KEYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys_covers_both_groups_once() {
        let keys: Vec<&str> = all_keys().collect();
        assert_eq!(keys, [TOKEN, USER_ID, USERNAME, PROFILE_ID, TRACKING_ID, TRACKING_GOAL_ID]);
    }
}
