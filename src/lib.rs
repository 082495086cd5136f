//! Lanai Trie Library
//!
//! A prefix tree over `char` sequences with string-level insert and
//! membership/prefix queries, plus the configuration and scenario harness
//! used by the `lanai_trie` binary.
//!
//! # Architecture
//!
//! - [`data_structures::lanai_trie`]: nodes, child-lookup strategies, the
//!   trie, and its lock-guarded variant
//! - [`config`]: layered harness configuration
//! - [`harness`]: scenario runner that checks query answers
//! - [`error`]: error types for the non-core layers

pub mod config;
pub mod data_structures;
pub mod error;
pub mod harness;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lanai Trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
