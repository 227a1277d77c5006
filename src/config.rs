//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Estimation service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the estimation service, e.g. "http://localhost:8000"
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ServiceConfig {
    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// UI preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme preference (auto-detect by default)
    pub theme: ThemeMode,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Estimation service settings
    pub service: ServiceConfig,
    /// UI preferences
    pub ui: UiConfig,
}

impl Config {
    /// Gets the platform-specific configuration directory.
    ///
    /// - Linux: `~/.config/unearth/`
    /// - macOS: `~/Library/Application Support/unearth/`
    /// - Windows: `%APPDATA%\unearth\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine platform config directory")?;
        Ok(base.join("unearth"))
    }

    /// Gets the path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns `true` when a configuration file exists.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Loads the configuration from the default location.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing, unreadable, or not valid TOML.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads the configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to the default location, creating the
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Saves the configuration to a specific path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Checks the configuration for values that cannot work.
    ///
    /// # Errors
    ///
    /// Fails on an empty or schemeless endpoint, or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.service.endpoint.trim();
        if endpoint.is_empty() {
            anyhow::bail!("Service endpoint must not be empty");
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            anyhow::bail!(
                "Service endpoint '{}' must start with http:// or https://",
                self.service.endpoint
            );
        }
        if self.service.timeout_secs == 0 {
            anyhow::bail!("Request timeout must be at least 1 second");
        }
        Ok(())
    }

    /// Gets the path of the log file next to the configuration.
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("unearth.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.service.endpoint, "http://localhost:8000");
        assert_eq!(config.service.timeout(), Duration::from_secs(30));
        assert_eq!(config.ui.theme, ThemeMode::Auto);
    }

    #[test]
    fn test_validate_rejects_empty_endpoint() {
        let mut config = Config::default();
        config.service.endpoint = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_schemeless_endpoint() {
        let mut config = Config::default();
        config.service.endpoint = "localhost:8000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.service.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.service.endpoint = "https://estimator.example".to_string();
        config.service.timeout_secs = 5;
        config.ui.theme = ThemeMode::Dark;
        config.save_to(&path)?;

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_load_rejects_invalid_content() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "not valid toml [")?;
        assert!(Config::load_from(&path).is_err());
        Ok(())
    }
}
