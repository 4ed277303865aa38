//! Configuration loading for the state container.
//!
//! The store is configured from a small YAML document (typically a section
//! of the deploying service's config file). Every field has a default.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors that can occur when loading store configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// State container configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// Path of the append-only event log file.
    #[serde(default = "default_log_path")]
    pub path: PathBuf,

    /// Whether to force every appended record to disk (`fsync`) before a
    /// write is considered committed. Off by default: the log is still
    /// flushed to the operating system per append.
    #[serde(default)]
    pub fsync: bool,
}

fn default_log_path() -> PathBuf {
    PathBuf::from("muster-events.jsonl")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_log_path(),
            fsync: false,
        }
    }
}

impl StoreConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}
