//! Numeric conversion helpers.
//!
//! These utilities guard conversions between floating-point and integer
//! domains so call-sites never cast unchecked values.

/// Round a finite, non-negative `f32` up and convert it to `usize`.
///
/// Returns `None` for NaN, infinities, negative values, and values beyond
/// what a buffer length could reasonably hold.
///
/// # Examples
/// ```
/// use swimmer::numeric::ceil_to_usize;
/// assert_eq!(ceil_to_usize(59.2), Some(60));
/// assert_eq!(ceil_to_usize(-1.0), None);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The ceiled value is validated against the u32 domain before casting."
)]
#[must_use]
pub fn ceil_to_usize(value: f32) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    let ceiled = value.ceil();
    if ceiled < 0.0 || f64::from(ceiled) > f64::from(u32::MAX) {
        return None;
    }
    usize::try_from(ceiled as u32).ok()
}

/// Clamp an interpolation factor into `[0, 1]`, mapping NaN to zero.
#[must_use]
pub fn unit_clamp(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
