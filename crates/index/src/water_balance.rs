//! Climatic water balance, the input series of SPEI.

use crate::error::IndexError;

/// Element-wise `precip - pet`.
///
/// A position is missing (`NaN`) when either input is missing.
///
/// # Errors
///
/// Returns [`IndexError::LengthMismatch`] if the slices differ in length.
pub fn climatic_water_balance(precip: &[f64], pet: &[f64]) -> Result<Vec<f64>, IndexError> {
    if precip.len() != pet.len() {
        return Err(IndexError::LengthMismatch {
            left_name: "precip",
            left: precip.len(),
            right_name: "pet",
            right: pet.len(),
        });
    }
    Ok(precip
        .iter()
        .zip(pet)
        .map(|(&p, &e)| {
            if p.is_finite() && e.is_finite() {
                p - e
            } else {
                f64::NAN
            }
        })
        .collect())
}
