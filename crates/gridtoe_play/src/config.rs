//! Host configuration loaded from TOML.

use crate::store::DEFAULT_SCORE_KEY;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal host.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Board size used when none is given on the command line.
    #[serde(default = "default_size")]
    default_size: usize,

    /// File holding persisted blobs.
    #[serde(default = "default_store_path")]
    store_path: PathBuf,

    /// Key the score is stored under.
    #[serde(default = "default_score_key")]
    score_key: String,
}

#[instrument]
fn default_size() -> usize {
    gridtoe::MIN_BOARD_SIZE
}

#[instrument]
fn default_store_path() -> PathBuf {
    PathBuf::from("gridtoe_store.json")
}

#[instrument]
fn default_score_key() -> String {
    DEFAULT_SCORE_KEY.to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            default_size: default_size(),
            store_path: default_store_path(),
            score_key: default_score_key(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            default_size = config.default_size,
            store_path = %config.store_path.display(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the store path, e.g. from a command-line flag.
    pub fn with_store_path(mut self, store_path: PathBuf) -> Self {
        self.store_path = store_path;
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
