//! Calendar month newtype.

use crate::error::CalendarError;

/// Calendar month (1..=12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u8);

impl Month {
    /// January.
    pub const JANUARY: Month = Month(1);

    /// Creates a new `Month` from a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn new(month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self(month))
    }

    /// Returns the 1-based month number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the 0-based month index (January = 0).
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns the month `n` months after this one, wrapping past December.
    pub fn add(self, n: usize) -> Self {
        let idx = (self.index() + n % 12) % 12;
        Self(idx as u8 + 1)
    }

    /// Iterates January through December.
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(month: u8) -> Result<Self, Self::Error> {
        Self::new(month)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}
