//! Error types for the caeli-distribution crate.

use crate::family::Family;

/// Error type for all fallible operations in the caeli-distribution crate.
///
/// `InsufficientData` and `Degenerate` describe a fitting group that has no
/// usable distribution. Callers transforming a series absorb them and emit
/// missing values for that group; only `InvalidConfig` aborts a whole call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a fitting group has too few usable observations.
    #[error("insufficient data: {family} fit needs at least {needed} values, got {got}")]
    InsufficientData {
        /// Distribution family being fitted.
        family: Family,
        /// Minimum number of usable observations.
        needed: usize,
        /// Number of usable observations present.
        got: usize,
    },

    /// Returned when the sample produces invalid or non-finite parameters.
    #[error("degenerate {family} fit: {reason}")]
    Degenerate {
        /// Distribution family being fitted.
        family: Family,
        /// Description of the failure.
        reason: String,
    },
}
