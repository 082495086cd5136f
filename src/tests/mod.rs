//! Test modules for the Lanai Trie.
//!
//! - Property-based tests of the trie using proptest
//! - Configuration loading and validation tests
//! - Error display and reporting tests
//! - Shared strategies and fixtures

pub mod lanai_trie_tests;
pub mod test_utils;

pub use test_utils::{key_strategy, keys_strategy, TestFixture};
