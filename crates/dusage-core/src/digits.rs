//! Digit counting for column-width calculations.

use crate::error::SizeError;

/// Number of base-10 digits needed to print `value`.
///
/// `0` needs one digit.
pub fn num_digits(value: u64) -> u32 {
    value.checked_ilog10().map_or(1, |d| d + 1)
}

/// Number of base-10 digits in the integer part of a fractional magnitude.
///
/// Negative, NaN and infinite values are rejected.
pub fn num_digits_f64(value: f64) -> Result<u32, SizeError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SizeError::InvalidMagnitude { value });
    }

    let whole = value.trunc();
    if whole < u64::MAX as f64 {
        Ok(num_digits(whole as u64))
    } else {
        // log10 rounds onto the next integer for values like 1e23.
        Ok(format!("{whole:.0}").len() as u32)
    }
}
