//! Application configuration
//!
//! TOML configuration with a default location under the user config
//! directory. A missing file yields the defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FitTrackError, Result};
use crate::logging::LogConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub log: LogConfig,

    /// Default packet batch file used by `summary` when no --file is given
    pub packets_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from the given path, or from the default
    /// location when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|e| {
            FitTrackError::Configuration(format!("{}: {}", path.display(), e))
        })
    }

    /// Write the configuration to the given path, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)
            .map_err(|e| FitTrackError::Internal(e.to_string()))?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Default config file location under the user config directory
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("fittrack").join("config.toml"))
            .ok_or_else(|| {
                FitTrackError::Configuration("no user config directory".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogFormat, LogLevel};

    #[test]
    fn test_missing_file_yields_defaults() {
        let config =
            AppConfig::load(Some(Path::new("/nonexistent/fittrack.toml"))).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = AppConfig {
            log: LogConfig {
                level: LogLevel::Debug,
                format: LogFormat::Compact,
            },
            packets_file: Some(PathBuf::from("packets.json")),
        };
        config.save(&path).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[log]\nlevel = \"info\"\n").unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.log.level, LogLevel::Info);
        assert_eq!(loaded.log.format, LogFormat::Pretty);
        assert!(loaded.packets_file.is_none());
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log = 3\n").unwrap();

        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, FitTrackError::Configuration(_)));
    }
}
