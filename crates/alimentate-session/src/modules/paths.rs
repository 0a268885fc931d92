//! Path utilities for client data.

use std::fs;
use std::path::PathBuf;

use alimentate_types::ConfigError;

/// Directory name for data storage under the home directory.
pub const DATA_DIR: &str = ".alimentate";
/// Filename for the application config.
pub const CONFIG_FILE: &str = "alimentate_config.json";
/// Filename for durable session storage.
pub const STORAGE_FILE: &str = "session_storage.json";

/// Get the data directory path, creating it if needed.
///
/// Priority:
/// 1. `ALIMENTATE_DATA_DIR` environment variable
/// 2. `~/.alimentate`
pub fn get_data_dir() -> Result<PathBuf, ConfigError> {
    let data_dir = if let Ok(custom_dir) = std::env::var("ALIMENTATE_DATA_DIR") {
        PathBuf::from(custom_dir)
    } else {
        let home = dirs::home_dir().ok_or_else(|| ConfigError::DataDir {
            message: "Cannot get home directory".to_string(),
        })?;
        home.join(DATA_DIR)
    };

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).map_err(|e| ConfigError::DataDir {
            message: format!("Failed to create {}: {}", data_dir.display(), e),
        })?;
    }

    Ok(data_dir)
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_data_dir()?.join(CONFIG_FILE))
}

pub fn storage_path() -> Result<PathBuf, ConfigError> {
    Ok(get_data_dir()?.join(STORAGE_FILE))
}
