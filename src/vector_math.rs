//! Basic vector math helper functions.
//! Small helpers for stepping and interpolating between positions.
use glam::Vec3;

/// Returns the unit vector pointing from `from` to `to`.
///
/// Non-finite inputs and coincident points yield `Vec3::ZERO` rather than
/// NaN components.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use swimmer::vector_math::direction_to;
/// let dir = direction_to(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0));
/// assert!((dir.x - 0.6).abs() < 1e-6);
/// assert!((dir.z - 0.8).abs() < 1e-6);
///
/// assert_eq!(direction_to(Vec3::ONE, Vec3::ONE), Vec3::ZERO);
/// ```
#[must_use]
pub fn direction_to(from: Vec3, to: Vec3) -> Vec3 {
    let offset = to - from;
    if !offset.is_finite() {
        return Vec3::ZERO;
    }
    offset.try_normalize().unwrap_or(Vec3::ZERO)
}

/// Moves `from` a fixed `step` along the direction towards `to`.
///
/// The step is not clamped to the remaining distance; callers stop stepping
/// once they are close enough.
#[must_use]
pub fn step_towards(from: Vec3, to: Vec3, step: f32) -> Vec3 {
    from + direction_to(from, to) * step
}

/// Linearly interpolates between `start` and `end` by `factor`.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use swimmer::vector_math::lerp;
/// let mid = lerp(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 0.5);
/// assert_eq!(mid, Vec3::new(5.0, 0.0, 0.0));
/// ```
#[must_use]
pub fn lerp(start: Vec3, end: Vec3, factor: f32) -> Vec3 {
    start.lerp(end, factor)
}
