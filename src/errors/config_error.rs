//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while assembling [`AppConfig`](crate::config::AppConfig).
///
/// Every variant is produced before any client is constructed, so a bad
/// configuration never reaches the network.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required credential is absent from both the environment and YAML
    #[error("Missing required credential: {0}")]
    MissingCredential(&'static str),

    /// A value is present but cannot be parsed or is out of range
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// The YAML file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML file is malformed
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
