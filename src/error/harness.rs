//! Harness error module.
//!
//! A scenario fails as soon as one query disagrees with its expectation.

use thiserror::Error;

/// Errors produced while running trie scenarios.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// A search returned a different answer than the scenario expected.
    #[error(
        "Scenario '{scenario}': search({query:?}, allow_prefix={allow_prefix}) returned {actual}, expected {expected}"
    )]
    ExpectationFailed {
        /// Name of the failing scenario.
        scenario: String,
        /// The queried string.
        query: String,
        /// Whether the query accepted a mere prefix.
        allow_prefix: bool,
        /// The configured answer.
        expected: bool,
        /// The answer the trie gave.
        actual: bool,
    },
}
