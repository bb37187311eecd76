use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{CounterConfig, DEFAULT_ENDPOINT};

/// Environment variable consulted for the counting endpoint URL.
pub const ENDPOINT_ENV_VAR: &str = "VISITOR_API_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Which configuration layer supplied the endpoint URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    /// Explicitly supplied by the embedding code.
    Override,
    /// The `VISITOR_API_URL` environment variable.
    Environment,
    /// The config file.
    ConfigFile,
    /// The compiled-in placeholder.
    Default,
}

impl EndpointSource {
    /// Stable identifier for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            EndpointSource::Override => "override",
            EndpointSource::Environment => "environment",
            EndpointSource::ConfigFile => "config_file",
            EndpointSource::Default => "default",
        }
    }
}

impl CounterConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/visitor-counter/config.toml` on Unix/macOS, or
    /// equivalent on other platforms via `dirs::config_dir()`. Falls back to
    /// the current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("visitor-counter").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `CounterConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(CounterConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: CounterConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "endpoint must not be empty".to_string(),
            });
        }

        if self.connect_timeout_seconds == 0 || self.request_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "timeouts must be at least one second".to_string(),
            });
        }

        Ok(())
    }

    /// Resolves the counting endpoint across all layers, newest-binding
    /// first: explicit override, then `VISITOR_API_URL`, then the config
    /// file, then the compiled-in default. Never fails.
    pub fn resolve_endpoint(&self, override_url: Option<&str>) -> (String, EndpointSource) {
        let env_value = env::var(ENDPOINT_ENV_VAR).ok();
        resolve_endpoint(override_url, env_value.as_deref(), &self.endpoint)
    }
}

/// Pure endpoint resolution over the three externally supplied layers.
///
/// Blank values are treated as absent at every layer; a file value equal to
/// the compiled-in placeholder is reported as the default.
pub fn resolve_endpoint(
    override_url: Option<&str>,
    env_value: Option<&str>,
    file_value: &str,
) -> (String, EndpointSource) {
    if let Some(url) = non_blank(override_url) {
        return (url.to_string(), EndpointSource::Override);
    }
    if let Some(url) = non_blank(env_value) {
        return (url.to_string(), EndpointSource::Environment);
    }
    let file_value = file_value.trim();
    if !file_value.is_empty() && file_value != DEFAULT_ENDPOINT {
        return (file_value.to_string(), EndpointSource::ConfigFile);
    }
    (DEFAULT_ENDPOINT.to_string(), EndpointSource::Default)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
