//! Application config persistence.
//!
//! A missing file yields defaults; anything loaded or saved must pass validation.

use std::fs;
use std::path::Path;

use alimentate_types::{AppConfig, ConfigError};
use validator::Validate;

use super::paths::config_path;

/// Load config from the data directory.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_path()?)
}

/// Save config to the data directory.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path()?, config)
}

/// Load, modify, and save the config in the data directory.
pub fn update_config<F>(updater: F) -> Result<AppConfig, ConfigError>
where
    F: FnOnce(&mut AppConfig),
{
    let path = config_path()?;
    let mut config = load_config_from(&path)?;
    updater(&mut config);
    save_config_to(&path, &config)?;
    Ok(config)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::new());
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::from_read_error(&e))?;
    let config: AppConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;
    config.validate().map_err(|e| ConfigError::from_validation(&e))?;
    Ok(config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    config.validate().map_err(|e| ConfigError::from_validation(&e))?;

    let temp_path = path.with_extension("json.tmp");
    let content =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::from_json_error(&e))?;

    // Atomic write
    fs::write(&temp_path, content).map_err(|e| ConfigError::from_io_error(&e))?;
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ConfigError::from_io_error(&e)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use alimentate_types::Destination;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, AppConfig::new());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alimentate_config.json");

        let mut config = AppConfig::new();
        config.api.base_url = "https://api.example.com/v1".to_string();
        config.session.post_sign_in = Destination::Profile;
        save_config_to(&path, &config).unwrap();

        assert_eq!(load_config_from(&path).unwrap(), config);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alimentate_config.json");

        let mut config = AppConfig::new();
        config.api.timeout_secs = 0;
        let err = save_config_to(&path, &config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(!path.exists());

        fs::write(&path, r#"{"session":{"post_sign_in":"sign-up"}}"#).unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alimentate_config.json");
        fs::write(&path, "{").unwrap();

        assert!(matches!(load_config_from(&path).unwrap_err(), ConfigError::ParseError { .. }));
    }
}
