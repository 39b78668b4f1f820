// Configuration loading and parsing (config/draftboard.toml).
//
// The file is optional and every key has a default, so a bare checkout runs
// against a backend on localhost.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use draftboard_core::api::parse_base_url;

/// Location of the config file relative to the working directory.
pub const CONFIG_FILE: &str = "config/draftboard.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Root URL of the draft-assistant API; endpoint paths are joined onto it.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Render interval in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { tick_rate_ms: 33 }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: String,
    pub file_name: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            directory: "logs".to_string(),
            file_name: "draftboard.log".to_string(),
            filter: "draftboard_core=info,draftboard_tui=info,warn".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/draftboard.toml` under `base_dir`, falling back
/// to defaults when the file does not exist.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join(CONFIG_FILE);
    let config = if path.exists() {
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        parse_config(&text).map_err(|source| ConfigError::ParseError { path, source })?
    } else {
        Config::default()
    };

    validate(&config)?;
    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|source| ConfigError::ReadError {
        path: PathBuf::from("."),
        source,
    })?;
    load_config_from(&cwd)
}

fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if let Err(e) = parse_base_url(&config.backend.base_url) {
        return Err(ConfigError::ValidationError {
            field: "backend.base_url".into(),
            message: e.to_string(),
        });
    }

    if config.backend.timeout_secs == 0 {
        return Err(ConfigError::ValidationError {
            field: "backend.timeout_secs".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.ui.tick_rate_ms == 0 {
        return Err(ConfigError::ValidationError {
            field: "ui.tick_rate_ms".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.logging.file_name.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "logging.file_name".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
