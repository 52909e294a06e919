//! Mapping cumulative probabilities onto the standard normal scale.

use statrs::distribution::{ContinuousCDF, Normal};

/// Standard normal quantile of `p` after clamping it to `[eps, 1 - eps]`.
///
/// A missing (`NaN`) probability stays missing. The clamp keeps the result
/// finite for probabilities of exactly 0 or 1.
pub fn to_zscore(p: f64, eps: f64) -> f64 {
    if p.is_nan() {
        return f64::NAN;
    }
    // inverse_cdf panics outside [0, 1]
    let p = p.max(eps).min(1.0 - eps).clamp(0.0, 1.0);
    Normal::standard().inverse_cdf(p)
}
