//! Vertical buoyancy and drag integration.
//!
//! The body is treated as an axis-aligned box. Only the slice below the
//! waterline displaces fluid; drag is quadratic in velocity and uses the
//! fluid or air density depending on which side of the waterline the body's
//! centre sits. Integration is semi-implicit Euler with one step per tick.

use glam::Vec3;

use crate::config::BuoyancyParams;

/// Portion of a box's height below the waterline.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use swimmer::buoyancy::submerged_depth;
/// let half = Vec3::splat(0.5);
/// assert_eq!(submerged_depth(10.0, half, 0.0), 0.0);
/// assert_eq!(submerged_depth(-10.0, half, 0.0), 1.0);
/// assert_eq!(submerged_depth(0.25, half, 0.0), 0.25);
/// ```
#[must_use]
pub fn submerged_depth(centre_y: f32, half_extents: Vec3, waterline: f32) -> f32 {
    let top = (centre_y + half_extents.y - waterline).min(0.0);
    let bottom = (centre_y - half_extents.y - waterline).min(0.0);
    top - bottom
}

/// Horizontal footprint of a box with the given half-extents.
#[must_use]
pub fn footprint(half_extents: Vec3) -> f32 {
    (2.0 * half_extents.x) * (2.0 * half_extents.z)
}

/// Per-body vertical motion state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BuoyancyState {
    /// Vertical velocity carried between ticks.
    pub velocity: f32,
    /// Per-tick force accumulator; zero outside [`Self::integrate`].
    pub acceleration: f32,
}

impl BuoyancyState {
    /// Advances the body one tick and returns its new centre height.
    ///
    /// Drag is computed from the velocity at the start of the tick and is
    /// applied against the sign of the updated velocity.
    pub fn integrate(
        &mut self,
        params: &BuoyancyParams,
        centre_y: f32,
        half_extents: Vec3,
        dt: f32,
    ) -> f32 {
        let area = footprint(half_extents);
        let displaced = area * submerged_depth(centre_y, half_extents, params.waterline);
        let buoyancy = params.fluid_density * params.gravity * displaced;

        let density = if centre_y > params.waterline {
            params.air_density
        } else {
            params.fluid_density
        };
        let drag = params.drag_coefficient * density * (self.velocity * self.velocity * area) / 2.0;

        self.acceleration += buoyancy / params.mass;
        self.acceleration -= params.gravity;
        self.velocity += self.acceleration * dt;

        if self.velocity < 0.0 {
            self.velocity += drag * dt;
        } else {
            self.velocity -= drag * dt;
        }

        self.acceleration = 0.0;
        centre_y + self.velocity * dt
    }
}
