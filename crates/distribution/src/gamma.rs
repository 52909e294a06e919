//! Gamma distribution parameters, estimators and statrs bridge.

use caeli_stats::{count_distinct, log_mean_gap, mean, variance};
use statrs::distribution::{ContinuousCDF, Gamma};
use statrs::function::gamma::digamma;

/// Relative tolerance on the shape update that ends the Newton iteration.
const MLE_TOL: f64 = 1e-12;

/// Upper bound on Newton iterations for the maximum likelihood shape.
const MLE_MAX_ITER: usize = 100;

/// Validated parameters for a zero-location Gamma distribution
/// (shape/scale convention).
///
/// Both `shape` (alpha) and `scale` (beta) are finite and positive. The
/// matching [`statrs::distribution::Gamma`] is built once on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaParams {
    shape: f64,
    scale: f64,
    dist: Gamma,
}

impl GammaParams {
    /// Create new gamma parameters after validating that both `shape` and
    /// `scale` are finite and strictly positive.
    pub fn new(shape: f64, scale: f64) -> Option<Self> {
        if !(shape.is_finite() && shape > 0.0 && scale.is_finite() && scale > 0.0) {
            return None;
        }
        // statrs parameterises Gamma by (shape, rate).
        let dist = Gamma::new(shape, 1.0 / scale).ok()?;
        Some(Self { shape, scale, dist })
    }

    /// Estimate gamma parameters from sample mean and variance using the
    /// method of moments (MME).
    ///
    /// - shape = mean² / var
    /// - scale = var / mean
    ///
    /// Returns `None` if `mean` or `var` are not finite and positive.
    pub fn from_moments(mean: f64, var: f64) -> Option<Self> {
        if !mean.is_finite() || mean <= 0.0 || !var.is_finite() || var <= 0.0 {
            return None;
        }
        Self::new((mean * mean) / var, var / mean)
    }

    /// Shape parameter (alpha).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter (beta).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Cumulative probability of `x`. Zero for `x <= 0`.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.dist.cdf(x)
    }
}

/// Thom's approximation of the maximum likelihood shape from the log-mean
/// gap `A = ln(mean) - mean(ln x)`.
pub(crate) fn thom_shape(gap: f64) -> f64 {
    (1.0 + (1.0 + 4.0 * gap / 3.0).sqrt()) / (4.0 * gap)
}

/// Trigamma function via upward recurrence and the asymptotic series.
fn trigamma(x: f64) -> f64 {
    let mut x = x;
    let mut acc = 0.0;
    while x < 10.0 {
        acc += 1.0 / (x * x);
        x += 1.0;
    }
    let inv2 = 1.0 / (x * x);
    let inv3 = inv2 / x;
    acc + 1.0 / x
        + inv2 / 2.0
        + inv3 * (1.0 / 6.0 - inv2 * (1.0 / 30.0 - inv2 * (1.0 / 42.0 - inv2 / 30.0)))
}

/// Log-mean gap of a positive sample, or `None` when it is constant.
fn positive_gap(values: &[f64]) -> Option<f64> {
    if count_distinct(values) < 2 {
        return None;
    }
    log_mean_gap(values).filter(|&a| a.is_finite() && a > 0.0)
}

/// Fit a Gamma distribution by Thom's approximation.
///
/// Returns `None` for an empty, constant or non-positive sample.
pub(crate) fn fit_gamma_thom(values: &[f64]) -> Option<GammaParams> {
    let gap = positive_gap(values)?;
    let shape = thom_shape(gap);
    GammaParams::new(shape, mean(values) / shape)
}

/// Fit a Gamma distribution by maximum likelihood with location zero.
///
/// Solves `ln(shape) - digamma(shape) = A` by Newton iteration from Thom's
/// approximation; `scale = mean / shape`. The left-hand side is strictly
/// decreasing in `shape`, so the root is unique.
pub(crate) fn fit_gamma_mle(values: &[f64]) -> Option<GammaParams> {
    let gap = positive_gap(values)?;
    let mut shape = thom_shape(gap);

    for _ in 0..MLE_MAX_ITER {
        let f = shape.ln() - digamma(shape) - gap;
        let df = 1.0 / shape - trigamma(shape);
        if !f.is_finite() || !df.is_finite() || df == 0.0 {
            break;
        }
        let mut next = shape - f / df;
        if next <= 0.0 {
            next = shape / 2.0;
        }
        let converged = (next - shape).abs() <= MLE_TOL * shape;
        shape = next;
        if converged {
            break;
        }
    }

    GammaParams::new(shape, mean(values) / shape)
}

/// Fit a Gamma distribution to a slice of positive values using the
/// method of moments.
///
/// Returns `None` if there are fewer than 2 values, the sample variance is
/// near zero, or the moment estimates produce invalid parameters.
pub(crate) fn fit_gamma_mme(values: &[f64]) -> Option<GammaParams> {
    if values.len() < 2 {
        return None;
    }
    let var = variance(values);
    if var <= 1e-10 {
        return None;
    }
    GammaParams::from_moments(mean(values), var)
}
