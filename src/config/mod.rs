//! Configuration management for the tdtool adapter

use crate::error::{Result, TelldusError};
use crate::logging::{parse_level, LogConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

fn default_tdtool() -> PathBuf {
    PathBuf::from("tdtool")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_stderr() -> bool {
    true
}

/// Adapter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelldusConfig {
    /// Path or name of the tdtool executable
    #[serde(default = "default_tdtool")]
    pub tdtool: PathBuf,

    /// Default log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional log file, rotated daily
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Write log output to stderr
    #[serde(default = "default_log_stderr")]
    pub log_stderr: bool,

    /// Include thread IDs in log lines
    #[serde(default)]
    pub log_thread_ids: bool,
}

impl Default for TelldusConfig {
    fn default() -> Self {
        Self {
            tdtool: default_tdtool(),
            log_level: default_log_level(),
            log_file: None,
            log_stderr: default_log_stderr(),
            log_thread_ids: false,
        }
    }
}

impl TelldusConfig {
    /// Load a TOML configuration file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TelldusError::config(format!("Cannot read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            TelldusError::config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Create config from environment
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Load the optional file, then apply environment overrides and validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(tdtool) = env::var("TELLDUS_TDTOOL") {
            if tdtool.trim().is_empty() {
                return Err(TelldusError::config("TELLDUS_TDTOOL is set but empty"));
            }
            self.tdtool = PathBuf::from(tdtool);
        }

        if let Ok(level) = env::var("TELLDUS_LOG_LEVEL") {
            if parse_level(&level).is_none() {
                return Err(TelldusError::config(format!(
                    "Invalid TELLDUS_LOG_LEVEL: {}. Use trace, debug, info, warn or error",
                    level
                )));
            }
            self.log_level = level;
        }

        if let Ok(log_file) = env::var("TELLDUS_LOG_FILE") {
            self.log_file = Some(PathBuf::from(log_file));
        }

        if let Ok(log_stderr) = env::var("TELLDUS_LOG_STDERR") {
            self.log_stderr = log_stderr.to_lowercase() != "false";
        }

        if let Ok(thread_ids) = env::var("TELLDUS_LOG_THREAD_IDS") {
            self.log_thread_ids = thread_ids.to_lowercase() == "true";
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.tdtool.as_os_str().is_empty() {
            return Err(TelldusError::config("tdtool path cannot be empty"));
        }

        if parse_level(&self.log_level).is_none() {
            return Err(TelldusError::config(format!(
                "Invalid log level: {}",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Logging settings derived from this configuration
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: parse_level(&self.log_level).unwrap_or(tracing::Level::INFO),
            file_path: self.log_file.clone(),
            stderr: self.log_stderr,
            thread_ids: self.log_thread_ids,
        }
    }

    /// Replace the tdtool path and re-validate
    pub fn with_tdtool<P: Into<PathBuf>>(mut self, tdtool: P) -> Result<Self> {
        self.tdtool = tdtool.into();
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TelldusConfig::default();
        assert_eq!(config.tdtool, PathBuf::from("tdtool"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut config = TelldusConfig::default();

        config.tdtool = PathBuf::new();
        assert!(config.validate().is_err());

        config.tdtool = PathBuf::from("/usr/bin/tdtool");
        config.log_level = "chatty".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_config_conversion() {
        let config = TelldusConfig {
            log_level: "debug".to_string(),
            log_file: Some(PathBuf::from("/tmp/telldus.log")),
            ..TelldusConfig::default()
        };
        let log = config.log_config();
        assert_eq!(log.level, tracing::Level::DEBUG);
        assert_eq!(log.file_path, Some(PathBuf::from("/tmp/telldus.log")));
        assert!(log.stderr);
        assert!(!log.thread_ids);
    }

    #[test]
    fn test_with_tdtool_revalidates() {
        let config = TelldusConfig::default()
            .with_tdtool("/usr/local/bin/tdtool")
            .unwrap();
        assert_eq!(config.tdtool, PathBuf::from("/usr/local/bin/tdtool"));

        let err = TelldusConfig::default().with_tdtool("").unwrap_err();
        assert!(matches!(err, TelldusError::Config(_)));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: TelldusConfig =
            toml::from_str(r#"tdtool = "/opt/telldus/bin/tdtool""#).unwrap();
        assert_eq!(config.tdtool, PathBuf::from("/opt/telldus/bin/tdtool"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, None);
        assert!(config.log_stderr);
        assert!(!config.log_thread_ids);
    }
}
