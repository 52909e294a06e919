//! Fitting one group of observations to its family's distribution.

use tracing::trace;

use crate::config::{FitConfig, GammaMethod};
use crate::error::FitError;
use crate::family::Family;
use crate::gamma::{GammaParams, fit_gamma_mle, fit_gamma_mme, fit_gamma_thom};
use crate::loglogistic::LogLogisticParams;

/// A distribution fitted to one group of observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FittedDistribution {
    /// Zero-location gamma fitted to the strictly positive values.
    Gamma(GammaParams),
    /// Three-parameter log-logistic fitted to all valid values.
    LogLogistic(LogLogisticParams),
}

impl FittedDistribution {
    /// Returns the family of this distribution.
    pub fn family(&self) -> Family {
        match self {
            FittedDistribution::Gamma(_) => Family::Gamma,
            FittedDistribution::LogLogistic(_) => Family::LogLogistic,
        }
    }

    /// Cumulative probability of `x` under the fitted distribution.
    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            FittedDistribution::Gamma(p) => p.cdf(x),
            FittedDistribution::LogLogistic(p) => p.cdf(x),
        }
    }
}

/// Fit `family` to a sample.
///
/// Values the family does not accept ([`Family::accepts`]) are ignored.
/// For [`Family::Gamma`] only strictly
/// positive values enter the fit; zeros are accounted for separately by
/// [`ZeroAdjustment`](crate::ZeroAdjustment). For [`Family::LogLogistic`]
/// every finite value is used.
///
/// # Errors
///
/// - [`FitError::InvalidConfig`] if `config` does not validate.
/// - [`FitError::InsufficientData`] if fewer than `config.min_samples()`
///   usable values are present.
/// - [`FitError::Degenerate`] if the estimator yields no valid parameters
///   (constant sample, log-logistic shape <= 1).
pub fn fit(
    samples: &[f64],
    family: Family,
    config: &FitConfig,
) -> Result<FittedDistribution, FitError> {
    config.validate()?;
    fit_group(samples, family, config)
}

/// [`fit`] without re-validating `config`, for callers fitting many groups.
pub(crate) fn fit_group(
    samples: &[f64],
    family: Family,
    config: &FitConfig,
) -> Result<FittedDistribution, FitError> {
    let mut usable: Vec<f64> = samples
        .iter()
        .copied()
        .filter(|&x| family.accepts(x))
        .filter(|&x| !family.has_zero_mass() || x > 0.0)
        .collect();

    if usable.len() < config.min_samples() {
        return Err(FitError::InsufficientData {
            family,
            needed: config.min_samples(),
            got: usable.len(),
        });
    }

    let fitted = match family {
        Family::Gamma => {
            let params = match config.gamma_method() {
                GammaMethod::Mle => fit_gamma_mle(&usable),
                GammaMethod::Thom => fit_gamma_thom(&usable),
                GammaMethod::Mme => fit_gamma_mme(&usable),
            };
            params.map(FittedDistribution::Gamma)
        }
        Family::LogLogistic => {
            usable.sort_by(|a, b| a.total_cmp(b));
            LogLogisticParams::from_pwm(&usable).map(FittedDistribution::LogLogistic)
        }
    };

    let fitted = fitted.ok_or_else(|| FitError::Degenerate {
        family,
        reason: format!(
            "no valid parameters from {} values ({} distinct)",
            usable.len(),
            caeli_stats::count_distinct(&usable)
        ),
    })?;

    trace!(?fitted, n = usable.len(), "fitted distribution");
    Ok(fitted)
}
