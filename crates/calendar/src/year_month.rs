//! Year-month pair with ordinal arithmetic.

use chrono::Datelike;

use crate::error::CalendarError;
use crate::month::Month;

/// A calendar month with year context, e.g. September 1998.
///
/// Ordered chronologically. Arithmetic goes through the month ordinal
/// (`year * 12 + month_index`), so year boundaries need no special casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        Ok(Self {
            year,
            month: Month::new(month)?,
        })
    }

    /// Creates a `YearMonth` from any chrono date or timestamp.
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        // chrono guarantees month() in 1..=12
        let month = Month::new(date.month() as u8).unwrap_or(Month::JANUARY);
        Self {
            year: date.year(),
            month,
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month.
    pub fn month(self) -> Month {
        self.month
    }

    /// Month ordinal: `year * 12 + (month - 1)`.
    pub fn ordinal(self) -> i64 {
        i64::from(self.year) * 12 + self.month.index() as i64
    }

    /// Inverse of [`YearMonth::ordinal`].
    pub fn from_ordinal(ordinal: i64) -> Self {
        let year = ordinal.div_euclid(12) as i32;
        let idx = ordinal.rem_euclid(12) as usize;
        Self {
            year,
            month: Month::JANUARY.add(idx),
        }
    }

    /// Returns the year-month `n` months later.
    pub fn add_months(self, n: usize) -> Self {
        Self::from_ordinal(self.ordinal() + n as i64)
    }

    /// Signed number of months from `earlier` to `self`.
    pub fn months_since(self, earlier: YearMonth) -> i64 {
        self.ordinal() - earlier.ordinal()
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}
