//! Aggregation periods: a start month plus a window length in months.

use crate::error::CalendarError;
use crate::month::Month;

/// A run of `length` consecutive months beginning at `start`.
///
/// The label is the start month (`"09"`) for single-month periods and
/// `"start-end"` (`"09-11"`, `"11-01"`) for longer windows. A period whose
/// end month precedes its start month wraps into the following year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    start: Month,
    length: usize,
}

impl Period {
    /// Creates a new period.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] for a start month outside
    /// 1..=12 and [`CalendarError::InvalidLength`] for a length outside
    /// 1..=12. Longer windows would share labels with shorter ones.
    pub fn new(start: u8, length: usize) -> Result<Self, CalendarError> {
        let start = Month::new(start)?;
        if !(1..=12).contains(&length) {
            return Err(CalendarError::InvalidLength { length });
        }
        Ok(Self { start, length })
    }

    /// Returns the first month of the window.
    pub fn start(self) -> Month {
        self.start
    }

    /// Returns the window length in months.
    pub fn length(self) -> usize {
        self.length
    }

    /// Returns the last month of the window.
    pub fn end(self) -> Month {
        self.start.add(self.length - 1)
    }

    /// Returns `true` if the window extends into a following year.
    pub fn wraps_year(self) -> bool {
        self.start.index() + self.length > 12
    }

    /// Column label, e.g. `"04"` or `"11-01"`.
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.length == 1 {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end())
        }
    }
}
