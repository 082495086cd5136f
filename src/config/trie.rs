//! Trie configuration module.
//!
//! Selects the child-lookup strategy the harness builds its tries with.

use super::ConfigResult;
use super::Validate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Child map used by every trie the harness builds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChildMapKind {
    /// FNV hash map keyed by label
    #[default]
    Hash,
    /// Dense ASCII table with a hash map for other labels
    Ascii,
}

impl fmt::Display for ChildMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash => f.write_str("hash"),
            Self::Ascii => f.write_str("ascii"),
        }
    }
}

/// Trie construction settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrieConfig {
    /// Child-lookup strategy
    pub child_map: ChildMapKind,
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Every strategy is total over `char`; nothing to reject.
        Ok(())
    }
}
