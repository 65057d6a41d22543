//! Application configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Top-level configuration.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Presentation preferences.
    ui: UiConfig,
    /// Browser front end settings.
    http: HttpConfig,
    /// Log output settings.
    log: LogConfig,
}

/// Presentation preferences shared by both front ends.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial move-list order.
    ascending: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { ascending: true }
    }
}

/// Address the browser front end listens on.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Host to bind to.
    host: String,
    /// Port to bind to.
    port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Where the terminal front end writes its logs.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file path.
    file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("replay_games.log"),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl AppConfig {
    /// Loads configuration from `path`, or returns defaults when no path is given.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the HTTP host and port with any values given on the command line.
    #[instrument(skip(self))]
    pub fn with_http_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
        assert!(*config.ui().ascending());
        assert_eq!(config.http().host(), "127.0.0.1");
        assert_eq!(*config.http().port(), 3000);
        assert_eq!(config.log().file(), Path::new("replay_games.log"));
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml("[ui]\nascending = false\n\n[http]\nport = 8080\n")
            .expect("valid config");
        assert!(!*config.ui().ascending());
        assert_eq!(*config.http().port(), 8080);
        assert_eq!(config.http().host(), "127.0.0.1");
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = AppConfig::from_toml("[http]\nport = \"eighty\"").expect_err("bad port");
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = AppConfig::default().with_http_overrides(None, Some(4000));
        assert_eq!(config.http().host(), "127.0.0.1");
        assert_eq!(*config.http().port(), 4000);
    }
}
