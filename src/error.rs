//! Errors reported by the self-check scenarios.
//!
//! The container itself has no error type: a missing index is `None`, and
//! rotating or appending always succeeds.

use thiserror::Error;

/// A failed or unknown self-check scenario.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum SelfCheckError {
    /// A scenario observed something other than what it expected.
    #[error("{scenario}: {check}: expected {expected}, got {actual}")]
    Mismatch {
        /// Name of the scenario.
        scenario: &'static str,
        /// What was being checked, e.g. `get(2)`.
        check: String,
        /// Expected value, `Debug`-formatted.
        expected: String,
        /// Observed value, `Debug`-formatted.
        actual: String,
    },

    /// No scenario is registered under this name.
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
}
