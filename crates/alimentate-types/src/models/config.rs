//! Application configuration models.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::navigation::Destination;

/// Upstream REST API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sign-in endpoint, relative to `base_url`
    #[validate(length(min = 1))]
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,
    /// Sign-up endpoint, relative to `base_url`
    #[validate(length(min = 1))]
    #[serde(default = "default_sign_up_path")]
    pub sign_up_path: String,
    /// Per-request timeout
    #[validate(range(min = 1_u64, max = 600_u64))]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sign_in_path: default_sign_in_path(),
            sign_up_path: default_sign_up_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Session store behaviour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Validate)]
pub struct SessionSettings {
    /// Where a successful sign-in lands (`home` or `profile`)
    #[validate(custom(function = "validate_post_sign_in"))]
    #[serde(default)]
    pub post_sign_in: Destination,
}

/// Full application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    #[serde(default)]
    pub api: ApiConfig,
    #[validate(nested)]
    #[serde(default)]
    pub session: SessionSettings,
}

impl AppConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

fn validate_post_sign_in(dest: &Destination) -> Result<(), ValidationError> {
    match dest {
        Destination::Home | Destination::Profile => Ok(()),
        _ => Err(ValidationError::new("post_sign_in_must_be_home_or_profile")),
    }
}

// Default value functions
pub fn default_base_url() -> String {
    "http://localhost:5037/api/v1".to_string()
}

pub fn default_sign_in_path() -> String {
    "authentication/sign-in".to_string()
}

pub fn default_sign_up_path() -> String {
    "authentication/sign-up".to_string()
}

pub const fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, "http://localhost:5037/api/v1");
        assert_eq!(config.session.post_sign_in, Destination::Home);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api":{"base_url":"https://api.example.com/v1"}}"#).unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com/v1");
        assert_eq!(config.api.sign_in_path, "authentication/sign-in");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = AppConfig::new();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::new();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::new();
        config.session.post_sign_in = Destination::SignUp;
        assert!(config.validate().is_err());

        config.session.post_sign_in = Destination::Profile;
        assert!(config.validate().is_ok());
    }
}
