//! Whole-series standardization: one fitting group per call.

use caeli_distribution::{Family, FitConfig, standardize_group};
use tracing::debug;

use crate::error::IndexError;

/// Standardize `values` against `family` fitted to all of them.
///
/// The output has the same length as the input. Missing (non-finite)
/// positions stay `NaN`. A series without a usable fit (too few values,
/// degenerate sample) yields `NaN` everywhere.
///
/// # Errors
///
/// Returns [`IndexError::Fit`] if `config` does not validate.
#[tracing::instrument(level = "debug", skip(values, config), fields(n = values.len()))]
pub fn standardize(
    values: &[f64],
    family: Family,
    config: &FitConfig,
) -> Result<Vec<f64>, IndexError> {
    config.validate()?;
    Ok(standardize_or_missing(values, family, config))
}

/// Standardized Precipitation Index of a precipitation series.
///
/// # Example
///
/// ```
/// use caeli_distribution::FitConfig;
///
/// let precip = [31.0, 0.0, 12.5, 48.2, 20.1, 0.0, 7.7, 25.3];
/// let z = caeli_index::spi(&precip, &FitConfig::new()).unwrap();
/// assert_eq!(z.len(), precip.len());
/// assert!(z[1] < z[6]);
/// ```
pub fn spi(precip: &[f64], config: &FitConfig) -> Result<Vec<f64>, IndexError> {
    standardize(precip, Family::Gamma, config)
}

/// Standardized Precipitation-Evapotranspiration Index of a climatic water
/// balance series (precipitation minus potential evapotranspiration).
pub fn spei(balance: &[f64], config: &FitConfig) -> Result<Vec<f64>, IndexError> {
    standardize(balance, Family::LogLogistic, config)
}

/// Standardize one group, absorbing fit failures into missing output.
///
/// `config` must already be validated.
pub(crate) fn standardize_or_missing(values: &[f64], family: Family, config: &FitConfig) -> Vec<f64> {
    match standardize_group(values, family, config) {
        Ok(z) => z,
        Err(e) => {
            debug!(%family, error = %e, "group has no fit, output is missing");
            vec![f64::NAN; values.len()]
        }
    }
}
