use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::LookupError;

/// On-disk configuration. The file is a JSON document with a single
/// `API_KEY` entry, the same shape the provisioning tooling writes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(rename = "API_KEY", default)]
    api_key: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Startup check. A missing or empty key is not fatal: the caller shows
    /// the error once and lookups still go out with an empty key.
    pub fn check_api_key(&self) -> Result<(), LookupError> {
        if self.has_api_key() {
            Ok(())
        } else {
            Err(LookupError::Configuration(
                "API_KEY is missing or empty".to_string(),
            ))
        }
    }

    /// Load config from `path`, or the default location when `None`.
    /// A file that does not exist yet yields the empty default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_file_path()?,
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to `path` (or the default location), creating parent
    /// directories as needed.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_file_path()?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "geoweather", "geoweather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_api_key_from_json() {
        let cfg: Config = serde_json::from_str(r#"{"API_KEY": "0bfd9c8e"}"#).unwrap();
        assert_eq!(cfg.api_key(), "0bfd9c8e");
        assert!(cfg.has_api_key());
        assert!(cfg.check_api_key().is_ok());
    }

    #[test]
    fn missing_key_yields_empty_config() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.api_key(), "");
        assert!(!cfg.has_api_key());
    }

    #[test]
    fn blank_key_is_a_configuration_error() {
        let cfg = Config::new("   ");
        let err = cfg.check_api_key().unwrap_err();
        assert!(matches!(err, LookupError::Configuration(_)));
        assert!(err.to_string().contains("API_KEY is missing or empty"));
    }

    #[test]
    fn serializes_under_the_upstream_key_name() {
        let json = serde_json::to_string(&Config::new("KEY")).unwrap();
        assert_eq!(json, r#"{"API_KEY":"KEY"}"#);
    }
}
