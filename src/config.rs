//! Runtime configuration and credential gating.
//!
//! The API key comes from the environment and is required before anything
//! executes. Model, shell timeout, and interpreter enablement can be
//! overridden through an optional TOML file.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
const DEFAULT_CONFIG_PATH: &str = "clicrew.toml";
const DEFAULT_SHELL_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GOOGLE_API_KEY environment variable is required")]
    MissingCredential,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub shell_timeout: Duration,
    pub interpreter_enabled: bool,
}

/// Optional TOML overlay. All fields default so an empty file is valid.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    shell_timeout_secs: Option<u64>,
    #[serde(default)]
    interpreter: Option<bool>,
}

impl Config {
    /// Load from the environment plus an optional TOML overlay.
    ///
    /// A missing or empty credential is fatal and reported before any
    /// dispatcher is constructed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingCredential)?;

        let file = match path {
            Some(path) => Self::load_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => ConfigFile::default(),
        };

        Ok(Self {
            api_key,
            model: file.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            shell_timeout: Duration::from_secs(
                file.shell_timeout_secs.unwrap_or(DEFAULT_SHELL_TIMEOUT_SECS),
            ),
            interpreter_enabled: file.interpreter.unwrap_or(true),
        })
    }

    fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
