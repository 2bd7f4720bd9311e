//! Runtime configuration.
//!
//! Defaults reproduce the plain `fgroups < input` behaviour. An optional TOML
//! file (named by `FGROUPS_CONFIG`) and individual environment overrides can
//! adjust the fingerprint limit and logging. A `.env` file in the working
//! directory is honoured via `dotenv`.

use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::Path;

use crate::logging::LogLevel;
use crate::model::DEFAULT_MAX_FINGERPRINT_LEN;

pub const ENV_CONFIG_PATH: &str = "FGROUPS_CONFIG";
pub const ENV_MAX_FINGERPRINT_LEN: &str = "FGROUPS_MAX_FINGERPRINT_LEN";
pub const ENV_LOG_LEVEL: &str = "FGROUPS_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "FGROUPS_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Longest accepted fingerprint, in characters.
    pub max_fingerprint_len: usize,
    pub log_level: LogLevel,
    /// Append a timestamped copy of every log entry here.
    pub log_file: Option<String>,
    pub console_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_fingerprint_len: DEFAULT_MAX_FINGERPRINT_LEN,
            log_level: LogLevel::Warning,
            log_file: None,
            console_timestamps: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io { path: String, source: std::io::Error },
    /// The config file is not valid TOML for `Config`.
    Parse(String),
    /// A setting holds a value outside its allowed range.
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config file {}: {}", path, source)
            }
            ConfigError::Parse(msg) => write!(f, "invalid config: {}", msg),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value '{}' for {}", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Loads `.env`, then the optional config file, then per-key overrides
    /// from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `load` but reads variables through `lookup`, so callers can
    /// supply their own environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_CONFIG_PATH) {
            Some(path) if !path.is_empty() => Self::from_file(path)?,
            _ => Self::default(),
        };

        if let Some(value) = lookup(ENV_MAX_FINGERPRINT_LEN) {
            config.max_fingerprint_len =
                value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: ENV_MAX_FINGERPRINT_LEN.to_string(),
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            config.log_level = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_LOG_LEVEL.to_string(),
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(ENV_LOG_FILE) {
            config.log_file = if value.is_empty() { None } else { Some(value) };
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_fingerprint_len == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_fingerprint_len".to_string(),
                value: self.max_fingerprint_len.to_string(),
            });
        }
        Ok(())
    }
}
