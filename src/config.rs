//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Email prefilled into the sign-in form
    pub last_email: Option<String>,
    /// Show inactive users in the roster by default
    pub show_inactive_users: Option<bool>,
    /// Simulated backend latency in milliseconds
    pub backend_latency_ms: Option<u64>,
    /// Force roster fetches to fail with this message (demo knob)
    pub simulate_directory_error: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "roster", "roster-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.last_email.is_none());
        assert!(config.show_inactive_users.is_none());
        assert!(config.backend_latency_ms.is_none());
        assert!(config.simulate_directory_error.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            last_email: Some("user@example.com".to_string()),
            show_inactive_users: Some(true),
            backend_latency_ms: Some(250),
            simulate_directory_error: None,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.last_email, Some("user@example.com".to_string()));
        assert_eq!(parsed.show_inactive_users, Some(true));
        assert_eq!(parsed.backend_latency_ms, Some(250));
    }

    #[test]
    fn test_partial_serialization() {
        let config = TuiConfig {
            last_email: Some("user@example.com".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.last_email, Some("user@example.com".to_string()));
        assert!(parsed.show_inactive_users.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.last_email.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"last_email": "user@example.com", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.last_email, Some("user@example.com".to_string()));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
