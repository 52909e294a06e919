//! Probability distributions behind the standardized drought indices.
//!
//! Each group of observations (one calendar month, one aggregation window)
//! is fitted to a family, and every observation is then mapped through
//! the fitted CDF onto the standard normal scale.
//!
//! # Pipeline
//!
//! 1. **Partition** the group into valid values and the zero fraction `q`
//!    ([`ZeroAdjustment`])
//! 2. **Fit** the family to the usable values ([`fit`])
//! 3. **Probability**: `q/2` for zeros, `q + (1 - q)·CDF(x)` otherwise
//!    ([`cumulative_probability`])
//! 4. **Standardize**: clamp and take the standard normal quantile
//!    ([`to_zscore`])
//!
//! Missing values (NaN, ±inf) are skipped when fitting and stay NaN.
//!
//! # Families
//!
//! - **Gamma** (SPI): zero location, fitted to strictly positive values by
//!   maximum likelihood, Thom's approximation or the method of moments.
//! - **Log-logistic** (SPEI): three parameters, fitted to every valid value
//!   (negative balances included) by probability-weighted moments.
//!
//! # Quick Start
//!
//! ```
//! use caeli_distribution::{
//!     Family, FitConfig, ZeroAdjustment, cumulative_probability, fit, to_zscore,
//! };
//!
//! let precip = [0.0, 12.0, 30.5, 8.1, 0.0, 22.4, 15.0, 41.2];
//! let config = FitConfig::new();
//!
//! let zeros = ZeroAdjustment::from_samples(&precip, Family::Gamma);
//! let fitted = fit(&precip, Family::Gamma, &config).unwrap();
//! let p = cumulative_probability(22.4, &fitted, zeros.zero_fraction());
//! let z = to_zscore(p, config.probability_epsilon());
//! assert!(z.is_finite());
//! ```

mod config;
mod error;
mod family;
mod fit;
pub(crate) mod gamma;
pub(crate) mod loglogistic;
mod normal;
mod zero;

pub use config::{DEFAULT_MIN_SAMPLES, DEFAULT_PROBABILITY_EPSILON, FitConfig, GammaMethod};
pub use error::FitError;
pub use family::Family;
pub use fit::{FittedDistribution, fit};
pub use gamma::GammaParams;
pub use loglogistic::LogLogisticParams;
pub use normal::to_zscore;
pub use zero::{ZeroAdjustment, cumulative_probability};

/// Standardize one group of observations against a distribution fitted to
/// the same group.
///
/// Returns one z-score per input value, `NaN` where the input is missing.
/// `config` is assumed to be valid.
///
/// # Errors
///
/// Propagates the [`FitError`] from fitting the group.
pub fn standardize_group(
    samples: &[f64],
    family: Family,
    config: &FitConfig,
) -> Result<Vec<f64>, FitError> {
    let zeros = ZeroAdjustment::from_samples(samples, family);
    let fitted = fit::fit_group(zeros.valid(), family, config)?;
    let eps = config.probability_epsilon();
    Ok(samples
        .iter()
        .map(|&x| to_zscore(zeros.cumulative_probability(x, &fitted), eps))
        .collect())
}
