//! Error types for the caeli-index crate.

use caeli_calendar::CalendarError;
use caeli_distribution::FitError;

/// Error type for all fallible operations in the caeli-index crate.
///
/// Groups that cannot be fitted never surface here; they produce missing
/// output instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IndexError {
    /// Returned when input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when two parallel input slices differ in length.
    #[error("length mismatch: {left_name} has {left} elements, {right_name} has {right}")]
    LengthMismatch {
        /// Name of the first slice.
        left_name: &'static str,
        /// Length of the first slice.
        left: usize,
        /// Name of the second slice.
        right_name: &'static str,
        /// Length of the second slice.
        right: usize,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Fitting configuration error.
    #[error(transparent)]
    Fit(#[from] FitError),

    /// Month or aggregation window error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
