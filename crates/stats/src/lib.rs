//! Sample statistics used by the drought-index distribution fitters.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator (matching R's `var()`).
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Mean of the natural logarithms.
///
/// Returns `None` if `data` is empty or holds a value that is not strictly
/// positive.
pub fn mean_ln(data: &[f64]) -> Option<f64> {
    if data.is_empty() || data.iter().any(|&x| x <= 0.0 || x.is_nan()) {
        return None;
    }
    Some(data.iter().map(|x| x.ln()).sum::<f64>() / data.len() as f64)
}

/// Log-mean gap `ln(mean) - mean(ln x)` of a strictly positive sample.
///
/// Non-negative by Jensen's inequality and zero only for a constant sample.
/// This is the sufficient statistic of the zero-location gamma likelihood.
pub fn log_mean_gap(data: &[f64]) -> Option<f64> {
    let ml = mean_ln(data)?;
    Some(mean(data).ln() - ml)
}

/// Unbiased probability-weighted moment of order `s` over an
/// ascending-sorted sample.
///
/// `w_s = (1/n) Σ (1 - F_i)^s x_(i)` with plotting position
/// `F_i = (i - 0.35) / n` (1-based `i`).
///
/// **Expects pre-sorted input** (caller's responsibility). Returns 0.0 if
/// empty.
pub fn probability_weighted_moment(sorted: &[f64], s: i32) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    let nf = n as f64;
    sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = (i as f64 + 1.0 - 0.35) / nf;
            (1.0 - f).powi(s) * x
        })
        .sum::<f64>()
        / nf
}

/// Counts the number of distinct values in a slice, using an epsilon
/// tolerance of 1e-10 for floating-point comparison.
pub fn count_distinct(values: &[f64]) -> usize {
    if values.is_empty() {
        return 0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    sorted
        .windows(2)
        .filter(|w| (w[1] - w[0]).abs() > 1e-10)
        .count()
        + 1
}
