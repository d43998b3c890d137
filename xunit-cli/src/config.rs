//! Configuration management

use anyhow::{Result, Context};
use std::path::Path;
use std::fs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Colour the summary line
    #[serde(default = "default_true")]
    pub color: bool,

    /// Log level used when `--verbose` is not given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path.to_owned(),
            None => match Self::default_config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        Ok(config)
    }

    /// Parsed `log_level`, falling back to INFO when it is not a level name.
    pub fn level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    /// `<config dir>/xunit/config.toml`, if the platform has a config dir
    fn default_config_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|dir| dir.join("xunit").join("config.toml"))
    }
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = CliConfig::load(Some(&temp_dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.color);
        assert_eq!(config.level(), tracing::Level::INFO);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "log_level = \"trace\"\n").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert!(config.color);
        assert_eq!(config.level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "color = \"sometimes\"\n").unwrap();

        let err = CliConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = CliConfig {
            color: false,
            log_level: "loud".to_string(),
        };
        assert_eq!(config.level(), tracing::Level::INFO);
    }
}
