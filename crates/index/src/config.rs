//! Configuration for the monthly index transformers.

use caeli_calendar::{Month, Period};
use caeli_distribution::FitConfig;

use crate::error::IndexError;

/// Configuration for [`standardize_monthly`](crate::standardize_monthly).
///
/// # Example
///
/// ```
/// use caeli_index::MonthlyConfig;
///
/// let config = MonthlyConfig::new()
///     .with_aggregation(3)
///     .with_months(vec![1, 4, 7, 10]);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.periods().unwrap()[3].label(), "10-12");
/// ```
#[derive(Clone, Debug)]
pub struct MonthlyConfig {
    aggregation: usize,
    months: Option<Vec<u8>>,
    fit: FitConfig,
}

impl MonthlyConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `aggregation = 1`, all twelve start months, default
    /// [`FitConfig`].
    pub fn new() -> Self {
        Self {
            aggregation: 1,
            months: None,
            fit: FitConfig::new(),
        }
    }

    // --- Builder methods ---

    /// Sets the number of consecutive months summed into each window.
    pub fn with_aggregation(mut self, k: usize) -> Self {
        self.aggregation = k;
        self
    }

    /// Restricts output to windows starting in the given months, in order.
    pub fn with_months(mut self, months: Vec<u8>) -> Self {
        self.months = Some(months);
        self
    }

    /// Sets the distribution fitting configuration.
    pub fn with_fit(mut self, fit: FitConfig) -> Self {
        self.fit = fit;
        self
    }

    // --- Accessors ---

    /// Returns the aggregation window length in months.
    pub fn aggregation(&self) -> usize {
        self.aggregation
    }

    /// Returns the selected start months, `None` meaning all twelve.
    pub fn months(&self) -> Option<&[u8]> {
        self.months.as_deref()
    }

    /// Returns the distribution fitting configuration.
    pub fn fit(&self) -> &FitConfig {
        &self.fit
    }

    /// Target periods in output order.
    ///
    /// # Errors
    ///
    /// Returns the first error [`validate`](Self::validate) would report.
    pub fn periods(&self) -> Result<Vec<Period>, IndexError> {
        self.validate()?;
        let starts: Vec<u8> = match &self.months {
            Some(months) => months.clone(),
            None => Month::all().map(Month::get).collect(),
        };
        starts
            .into_iter()
            .map(|m| Period::new(m, self.aggregation).map_err(IndexError::from))
            .collect()
    }

    /// Validates this configuration.
    ///
    /// Checks that `aggregation` is in 1..=12, that `months` (when set) is
    /// non-empty with unique entries in 1..=12, and that the fitting
    /// configuration is valid.
    pub fn validate(&self) -> Result<(), IndexError> {
        if !(1..=12).contains(&self.aggregation) {
            return Err(IndexError::InvalidConfig {
                reason: format!("aggregation must be in 1..=12, got {}", self.aggregation),
            });
        }

        if let Some(months) = &self.months {
            if months.is_empty() {
                return Err(IndexError::InvalidConfig {
                    reason: "months must not be empty".to_string(),
                });
            }
            let mut seen = [false; 12];
            for &m in months {
                if !(1..=12).contains(&m) {
                    return Err(IndexError::InvalidConfig {
                        reason: format!("month {m} outside 1..=12"),
                    });
                }
                let slot = &mut seen[(m - 1) as usize];
                if *slot {
                    return Err(IndexError::InvalidConfig {
                        reason: format!("month {m} listed more than once"),
                    });
                }
                *slot = true;
            }
        }

        self.fit.validate()?;
        Ok(())
    }
}

impl Default for MonthlyConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = MonthlyConfig::new();
        assert_eq!(cfg.aggregation(), 1);
        assert!(cfg.months().is_none());
        assert_eq!(cfg.fit().min_samples(), 4);
    }

    #[test]
    fn default_periods_are_all_months() {
        let periods = MonthlyConfig::new().periods().unwrap();
        let labels: Vec<String> = periods.iter().map(|p| p.label()).collect();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], "01");
        assert_eq!(labels[11], "12");
    }

    #[test]
    fn periods_keep_caller_order() {
        let cfg = MonthlyConfig::new()
            .with_aggregation(2)
            .with_months(vec![12, 3]);
        let labels: Vec<String> = cfg.periods().unwrap().iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["12-01", "03-04"]);
    }

    #[test]
    fn zero_aggregation_rejected() {
        let err = MonthlyConfig::new().with_aggregation(0).validate().unwrap_err();
        assert!(matches!(err, IndexError::InvalidConfig { .. }));
    }

    #[test]
    fn aggregation_longer_than_a_year_rejected() {
        let err = MonthlyConfig::new().with_aggregation(13).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: aggregation must be in 1..=12, got 13"
        );
        assert!(MonthlyConfig::new().with_aggregation(12).validate().is_ok());
    }

    #[test]
    fn empty_months_rejected() {
        let err = MonthlyConfig::new().with_months(vec![]).validate().unwrap_err();
        assert!(matches!(err, IndexError::InvalidConfig { .. }));
    }

    #[test]
    fn out_of_range_month_rejected() {
        for m in [0, 13] {
            let err = MonthlyConfig::new().with_months(vec![1, m]).validate().unwrap_err();
            assert!(matches!(err, IndexError::InvalidConfig { .. }));
        }
    }

    #[test]
    fn duplicate_month_rejected() {
        let err = MonthlyConfig::new()
            .with_months(vec![4, 7, 4])
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: month 4 listed more than once"
        );
    }

    #[test]
    fn invalid_fit_config_rejected() {
        let cfg = MonthlyConfig::new().with_fit(FitConfig::new().with_min_samples(0));
        assert!(matches!(cfg.validate(), Err(IndexError::Fit(_))));
    }
}
