//! Error types for the caeli-calendar crate.

/// Error type for all fallible operations in the caeli-calendar crate.
///
/// Covers validation failures for month numbers and aggregation window
/// lengths.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when an aggregation window is empty or longer than a year.
    #[error("invalid period length: {length} (must be 1..=12)")]
    InvalidLength {
        /// The invalid window length that was provided.
        length: usize,
    },
}
