//! Three-parameter log-logistic distribution fitted by probability-weighted
//! moments.

use caeli_stats::probability_weighted_moment;
use statrs::function::gamma::gamma;

/// Validated parameters for a three-parameter log-logistic distribution.
///
/// `F(x) = 1 / (1 + (scale / (x - location))^shape)` for `x > location`,
/// zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLogisticParams {
    location: f64,
    scale: f64,
    shape: f64,
}

impl LogLogisticParams {
    /// Create new parameters after validating that all three are finite and
    /// `scale` and `shape` are strictly positive.
    pub fn new(location: f64, scale: f64, shape: f64) -> Option<Self> {
        if location.is_finite()
            && scale.is_finite()
            && scale > 0.0
            && shape.is_finite()
            && shape > 0.0
        {
            Some(Self {
                location,
                scale,
                shape,
            })
        } else {
            None
        }
    }

    /// Estimate parameters from an ascending-sorted sample using unbiased
    /// probability-weighted moments `w0`, `w1`, `w2`:
    ///
    /// - shape = (2·w1 − w0) / (6·w1 − w0 − 6·w2)
    /// - scale = (w0 − 2·w1)·shape / (Γ(1 + 1/shape)·Γ(1 − 1/shape))
    /// - location = w0 − scale·Γ(1 + 1/shape)·Γ(1 − 1/shape)
    ///
    /// Returns `None` when `shape <= 1` (no finite mean, the moment
    /// equations have no solution) or the estimates are not finite.
    pub fn from_pwm(sorted: &[f64]) -> Option<Self> {
        let w0 = probability_weighted_moment(sorted, 0);
        let w1 = probability_weighted_moment(sorted, 1);
        let w2 = probability_weighted_moment(sorted, 2);

        let shape = (2.0 * w1 - w0) / (6.0 * w1 - w0 - 6.0 * w2);
        if !shape.is_finite() || shape <= 1.0 {
            return None;
        }
        let g = gamma(1.0 + 1.0 / shape) * gamma(1.0 - 1.0 / shape);
        let scale = (w0 - 2.0 * w1) * shape / g;
        let location = w0 - scale * g;
        Self::new(location, scale, shape)
    }

    /// Location parameter (gamma).
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale parameter (alpha).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Shape parameter (beta).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Cumulative probability of `x`.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= self.location {
            return 0.0;
        }
        1.0 / (1.0 + (self.scale / (x - self.location)).powf(self.shape))
    }
}
