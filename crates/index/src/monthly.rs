//! Monthly indices from dated, sub-monthly observations.

use chrono::Datelike;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::MonthlyConfig;
use crate::error::IndexError;
use crate::resample::MonthlyGrid;
use crate::series::standardize_or_missing;
use crate::table::{IndexKind, MonthlyTable, PeriodColumn};

/// Monthly index table from dated observations of any frequency.
///
/// Observations are summed per calendar month, then per target period
/// (start month plus `config.aggregation()` months). Each period is one
/// fitting group across years; groups are standardized in parallel.
///
/// # Errors
///
/// - [`IndexError::InvalidConfig`] / [`IndexError::Fit`] for an invalid
///   `config`.
/// - [`IndexError::EmptyData`] if there are no observations.
/// - [`IndexError::LengthMismatch`] if `dates` and `values` differ in
///   length.
#[tracing::instrument(skip(dates, values, config), fields(n = values.len()))]
pub fn standardize_monthly<D: Datelike>(
    dates: &[D],
    values: &[f64],
    kind: IndexKind,
    config: &MonthlyConfig,
) -> Result<MonthlyTable, IndexError> {
    let periods = config.periods()?;
    if dates.is_empty() || values.is_empty() {
        return Err(IndexError::EmptyData);
    }
    if dates.len() != values.len() {
        return Err(IndexError::LengthMismatch {
            left_name: "dates",
            left: dates.len(),
            right_name: "values",
            right: values.len(),
        });
    }

    let grid = MonthlyGrid::from_dated(dates, values);
    let family = kind.family();
    let fit = config.fit();

    let columns: Vec<PeriodColumn> = periods
        .par_iter()
        .map(|&period| {
            if period.wraps_year() {
                debug!(
                    period = %period.label(),
                    "window runs into the next year; last row has no amount"
                );
            }
            let amounts = grid.window_sums(period);
            let index = standardize_or_missing(&amounts, family, fit);
            PeriodColumn::new(period, amounts, index)
        })
        .collect();

    info!(
        %kind,
        years = grid.n_years(),
        periods = columns.len(),
        aggregation = config.aggregation(),
        "computed monthly index table"
    );
    Ok(MonthlyTable::new(kind, grid.years(), columns))
}

/// Monthly SPI table from dated precipitation.
///
/// See [`standardize_monthly`].
pub fn spi_monthly<D: Datelike>(
    dates: &[D],
    precip: &[f64],
    config: &MonthlyConfig,
) -> Result<MonthlyTable, IndexError> {
    standardize_monthly(dates, precip, IndexKind::Spi, config)
}

/// Monthly SPEI table from dated climatic water balance.
///
/// See [`standardize_monthly`].
pub fn spei_monthly<D: Datelike>(
    dates: &[D],
    balance: &[f64],
    config: &MonthlyConfig,
) -> Result<MonthlyTable, IndexError> {
    standardize_monthly(dates, balance, IndexKind::Spei, config)
}
