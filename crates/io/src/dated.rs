//! Owned dated series read from disk.

use chrono::NaiveDate;

/// A dated series of observations, `NaN` marking missing values.
///
/// When a PET column was read, `values` already holds the climatic water
/// balance (value minus PET).
#[derive(Debug, Clone, PartialEq)]
pub struct DatedSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl DatedSeries {
    /// Pairs dates and values.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length.
    pub(crate) fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Self {
        assert_eq!(
            dates.len(),
            values.len(),
            "dates and values must have equal length"
        );
        Self { dates, values }
    }

    /// Observation dates in file order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Observation values in file order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if there are no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of missing observations.
    pub fn n_missing(&self) -> usize {
        self.values.iter().filter(|v| !v.is_finite()).count()
    }

    /// First and last date, `None` when empty.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.dates.iter().min()?;
        let last = self.dates.iter().max()?;
        Some((*first, *last))
    }
}
