use anyhow::Result;
use colored::Colorize;

use alimentate_session::modules::config as session_config;
use alimentate_types::{AppConfig, Destination};

pub fn show_config(json: bool) -> Result<()> {
    let config = session_config::load_config()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", "API Configuration:".cyan().bold());
        println!("  Base URL: {}", config.api.base_url);
        println!("  Sign-in Path: {}", config.api.sign_in_path);
        println!("  Sign-up Path: {}", config.api.sign_up_path);
        println!("  Timeout: {}s", config.api.timeout_secs);
        println!("{}", "Session:".cyan().bold());
        println!("  After Sign-in: {}", config.session.post_sign_in);
    }
    Ok(())
}

pub fn get_config_value(key: &str) -> Result<()> {
    let config = session_config::load_config()?;
    println!("{}", read_key(&config, key)?);
    Ok(())
}

pub fn set_config_value(key: &str, value: &str) -> Result<()> {
    let update = ConfigUpdate::parse(key, value)?;
    session_config::update_config(|config| update.apply(config))?;

    println!("{} Config updated: {} = {}", "✓".green(), key, value);
    Ok(())
}

fn read_key(config: &AppConfig, key: &str) -> Result<String> {
    let value = match key {
        "api.base_url" => config.api.base_url.clone(),
        "api.sign_in_path" => config.api.sign_in_path.clone(),
        "api.sign_up_path" => config.api.sign_up_path.clone(),
        "api.timeout_secs" => config.api.timeout_secs.to_string(),
        "session.post_sign_in" => config.session.post_sign_in.to_string(),
        _ => anyhow::bail!("Unknown config key: {}", key),
    };
    Ok(value)
}

/// A single parsed `config set` assignment.
#[derive(Debug, PartialEq)]
enum ConfigUpdate {
    BaseUrl(String),
    SignInPath(String),
    SignUpPath(String),
    TimeoutSecs(u64),
    PostSignIn(Destination),
}

impl ConfigUpdate {
    fn parse(key: &str, value: &str) -> Result<Self> {
        let update = match key {
            "api.base_url" => Self::BaseUrl(value.to_string()),
            "api.sign_in_path" => Self::SignInPath(value.to_string()),
            "api.sign_up_path" => Self::SignUpPath(value.to_string()),
            "api.timeout_secs" => Self::TimeoutSecs(
                value.parse().map_err(|_| anyhow::anyhow!("Invalid timeout: {}", value))?,
            ),
            "session.post_sign_in" => Self::PostSignIn(
                value.parse().map_err(|_| anyhow::anyhow!("Invalid destination: {}", value))?,
            ),
            _ => anyhow::bail!("Unknown config key: {}", key),
        };
        Ok(update)
    }

    fn apply(self, config: &mut AppConfig) {
        match self {
            Self::BaseUrl(v) => config.api.base_url = v,
            Self::SignInPath(v) => config.api.sign_in_path = v,
            Self::SignUpPath(v) => config.api.sign_up_path = v,
            Self::TimeoutSecs(v) => config.api.timeout_secs = v,
            Self::PostSignIn(v) => config.session.post_sign_in = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        assert_eq!(
            ConfigUpdate::parse("api.timeout_secs", "45").unwrap(),
            ConfigUpdate::TimeoutSecs(45)
        );
        assert_eq!(
            ConfigUpdate::parse("session.post_sign_in", "profile").unwrap(),
            ConfigUpdate::PostSignIn(Destination::Profile)
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(ConfigUpdate::parse("api.timeout_secs", "soon").is_err());
        assert!(ConfigUpdate::parse("session.post_sign_in", "nowhere").is_err());
        assert!(ConfigUpdate::parse("proxy.port", "8080").is_err());
    }

    #[test]
    fn test_apply_then_read_back() {
        let mut config = AppConfig::new();
        ConfigUpdate::parse("api.base_url", "https://api.example.test/v2")
            .unwrap()
            .apply(&mut config);
        assert_eq!(read_key(&config, "api.base_url").unwrap(), "https://api.example.test/v2");
        assert_eq!(read_key(&config, "session.post_sign_in").unwrap(), "home");
        assert!(read_key(&config, "api.token").is_err());
    }
}
