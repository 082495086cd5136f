//! Scenario configuration module.
//!
//! A scenario is a list of strings to insert into a fresh trie followed by
//! queries with the answers they must produce.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// One query and its expected answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExpectationConfig {
    /// The string to search for
    pub query: String,

    /// Accept a path that is only a prefix of an entry
    pub allow_prefix: bool,

    /// The answer the search must give
    pub result: bool,
}

impl ExpectationConfig {
    /// Builds an expectation.
    pub fn new<S: Into<String>>(query: S, allow_prefix: bool, result: bool) -> Self {
        Self {
            query: query.into(),
            allow_prefix,
            result,
        }
    }
}

/// A named insert/query script.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Name used in logs and reports
    pub name: String,

    /// Strings inserted in order
    pub insert: Vec<String>,

    /// Queries checked in order after all inserts
    pub expect: Vec<ExpectationConfig>,
}

impl ScenarioConfig {
    /// The scenarios run when none are configured.
    pub fn reference_suite() -> Vec<Self> {
        vec![
            Self {
                name: "reference".to_string(),
                insert: vec!["abcd".to_string(), "ab".to_string()],
                expect: vec![
                    ExpectationConfig::new("abc", false, false),
                    ExpectationConfig::new("abc", true, true),
                    ExpectationConfig::new("ab", false, true),
                    ExpectationConfig::new("xyz", false, false),
                    ExpectationConfig::new("xyz", true, false),
                ],
            },
            Self {
                name: "shared-prefix".to_string(),
                insert: vec!["abc".to_string(), "adc".to_string()],
                expect: vec![
                    ExpectationConfig::new("abc", false, true),
                    ExpectationConfig::new("ab", true, true),
                    ExpectationConfig::new("cbv", false, false),
                    ExpectationConfig::new("cv", true, false),
                ],
            },
            Self {
                name: "word-prefix".to_string(),
                insert: vec!["card".to_string(), "cart".to_string()],
                expect: vec![
                    ExpectationConfig::new("", false, false),
                    ExpectationConfig::new("car", true, true),
                    ExpectationConfig::new("cardi", true, false),
                ],
            },
            Self {
                name: "empty-string".to_string(),
                insert: vec![String::new()],
                expect: vec![
                    ExpectationConfig::new("", false, true),
                    ExpectationConfig::new("", true, true),
                    ExpectationConfig::new("a", true, false),
                ],
            },
        ]
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Scenario name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
