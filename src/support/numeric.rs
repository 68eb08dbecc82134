//! Floating point helpers that keep `NaN` visible.
//!
//! [`f64::min`] and [`f64::max`] return the other operand when one is `NaN`,
//! which would hide a domain fault behind a cap. These versions return `NaN`
//! if either operand is `NaN`.

/// Smaller of two values, `NaN` if either is `NaN`.
#[must_use]
pub fn min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Larger of two values, `NaN` if either is `NaN`.
#[must_use]
pub fn max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
