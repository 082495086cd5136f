//! Configuration module for the Lanai Trie harness.
//!
//! Settings are layered: built-in defaults, then an optional file (TOML,
//! YAML, JSON), then environment variables. The merged result is validated
//! before use.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod scenario;
pub mod trie;

pub use scenario::{ExpectationConfig, ScenarioConfig};
pub use trie::{ChildMapKind, TrieConfig};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "LANAI";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for the Lanai Trie harness.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LanaiConfig {
    /// Log configuration
    pub log: LogConfig,

    /// Trie construction settings
    pub trie: TrieConfig,

    /// Scenarios to run; empty means the built-in reference suite
    pub scenarios: Vec<ScenarioConfig>,
}

impl LanaiConfig {
    /// The configured scenarios, or the reference suite when none are set.
    pub fn effective_scenarios(&self) -> Vec<ScenarioConfig> {
        if self.scenarios.is_empty() {
            ScenarioConfig::reference_suite()
        } else {
            self.scenarios.clone()
        }
    }

    /// Default settings with the reference suite spelled out, as written by
    /// `gen-config`.
    pub fn with_reference_suite() -> Self {
        Self {
            scenarios: ScenarioConfig::reference_suite(),
            ..Self::default()
        }
    }
}

impl Validate for LanaiConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.log.validate()?;
        self.trie.validate()?;

        let mut names = HashSet::new();
        for scenario in &self.scenarios {
            scenario.validate()?;
            if !names.insert(scenario.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "Duplicate scenario name: {}",
                    scenario.name
                )));
            }
        }

        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for the Lanai Trie harness.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads, merges, and validates the configuration.
    pub fn load(&self) -> ConfigResult<LanaiConfig> {
        let mut builder = Config::builder().add_source(Config::try_from(&LanaiConfig::default())?);

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => return Err(ConfigError::UnsupportedFormat(path.clone())),
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config: LanaiConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        tracing::debug!(
            scenarios = config.scenarios.len(),
            child_map = %config.trie.child_map,
            "configuration loaded"
        );
        Ok(config)
    }
}
