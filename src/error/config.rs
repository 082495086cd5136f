//! Configuration error module.
//!
//! Errors raised while loading, parsing, and validating the harness
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The configuration file has an extension no loader understands.
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),

    /// The configuration could not be parsed or deserialized.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A value parsed fine but is not acceptable.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(path) => Self::FileNotFound(PathBuf::from(path)),
            other => Self::ParseError(other.to_string()),
        }
    }
}
