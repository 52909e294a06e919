//! Missing-value partitioning and the probability mass at zero.

use crate::family::Family;
use crate::fit::FittedDistribution;

/// Valid observations of a fitting group together with the empirical
/// probability of a zero observation.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroAdjustment {
    valid: Vec<f64>,
    zero_fraction: f64,
}

impl ZeroAdjustment {
    /// Partition `samples` into valid values and the zero fraction.
    ///
    /// Values the family does not accept (non-finite, or negative under
    /// [`Family::Gamma`]) are missing and excluded from every count. The zero
    /// fraction is `count(value == 0) / count(valid)` for families with a
    /// point mass at zero ([`Family::Gamma`]) and 0 otherwise. An empty valid
    /// set has zero fraction 0.
    pub fn from_samples(samples: &[f64], family: Family) -> Self {
        let valid: Vec<f64> = samples
            .iter()
            .copied()
            .filter(|&x| family.accepts(x))
            .collect();
        let zero_fraction = if family.has_zero_mass() && !valid.is_empty() {
            valid.iter().filter(|&&x| x == 0.0).count() as f64 / valid.len() as f64
        } else {
            0.0
        };
        Self {
            valid,
            zero_fraction,
        }
    }

    /// Returns the valid observations in input order.
    pub fn valid(&self) -> &[f64] {
        &self.valid
    }

    /// Returns the fraction of valid observations equal to zero.
    pub fn zero_fraction(&self) -> f64 {
        self.zero_fraction
    }

    /// Cumulative probability of `value` with this group's zero mass.
    pub fn cumulative_probability(&self, value: f64, fit: &FittedDistribution) -> f64 {
        cumulative_probability(value, fit, self.zero_fraction)
    }
}

/// Cumulative probability of `value`, blending in a point mass at zero.
///
/// - missing `value` (non-finite, or negative for gamma) → `NaN`
/// - `value == 0` for a family with zero mass → `zero_fraction / 2`
/// - otherwise → `zero_fraction + (1 - zero_fraction) · CDF(value)`
pub fn cumulative_probability(value: f64, fit: &FittedDistribution, zero_fraction: f64) -> f64 {
    let family = fit.family();
    if !family.accepts(value) {
        return f64::NAN;
    }
    if value == 0.0 && family.has_zero_mass() {
        return zero_fraction / 2.0;
    }
    zero_fraction + (1.0 - zero_fraction) * fit.cdf(value)
}
