//! Authentication request/response payloads.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Credentials posted to the sign-in endpoint.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct SignInRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl SignInRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration payload posted to the sign-up endpoint.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// Role names requested for the new account
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl SignUpRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into(), roles: Vec::new() }
    }

    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }
}

impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("roles", &self.roles)
            .finish()
    }
}

/// Successful sign-in payload: `{id, username, token}`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInResponse {
    pub id: u64,
    pub username: String,
    pub token: String,
}

impl SignInResponse {
    /// True when the payload carries everything a signed-in session needs.
    pub fn is_complete(&self) -> bool {
        self.id > 0 && !self.username.is_empty() && !self.token.is_empty()
    }
}

impl fmt::Debug for SignInResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInResponse")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Successful sign-up payload: `{message}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpResponse {
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_request_validation() {
        assert!(SignInRequest::new("ana", "x").validate().is_ok());

        let errors = SignInRequest::new("", "x").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));

        let errors = SignInRequest::new("ana", "").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let req = format!("{:?}", SignInRequest::new("ana", "hunter2"));
        assert!(req.contains("ana"));
        assert!(!req.contains("hunter2"));

        let resp = SignInResponse { id: 1, username: "ana".into(), token: "tok-1".into() };
        assert!(!format!("{:?}", resp).contains("tok-1"));
    }

    #[test]
    fn test_sign_up_roles_omitted_when_empty() {
        let json = serde_json::to_value(SignUpRequest::new("ana", "x")).unwrap();
        assert!(json.get("roles").is_none());

        let json = serde_json::to_value(
            SignUpRequest::new("ana", "x").with_roles(vec!["ROLE_USER".into()]),
        )
        .unwrap();
        assert_eq!(json["roles"], serde_json::json!(["ROLE_USER"]));
    }

    #[test]
    fn test_sign_in_response_completeness() {
        let full: SignInResponse =
            serde_json::from_str(r#"{"id":42,"username":"ana","token":"tok-1"}"#).unwrap();
        assert!(full.is_complete());

        let no_token = SignInResponse { token: String::new(), ..full.clone() };
        assert!(!no_token.is_complete());

        let zero_id = SignInResponse { id: 0, ..full };
        assert!(!zero_id.is_complete());
    }
}
