//! World-space placement of an actor and the matrices the renderer consumes.

use bevy::prelude::*;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position, Euler rotation (XYZ, radians), and scale of an actor.
///
/// The swimmer systems mutate `Pose`; a sync system mirrors it into
/// [`Transform`] for the render pipeline.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self::from_position(Vec3::ZERO)
    }
}

impl Pose {
    /// Unrotated, unit-scale pose at `position`.
    #[must_use]
    pub const fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Orientation as a quaternion.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Rotation-only matrix.
    #[must_use]
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation())
    }

    /// Scale, then rotate, then translate.
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation(), self.position)
    }

    /// Inverse-transpose of the world matrix, used to transform normals.
    #[must_use]
    pub fn inverse_transpose(&self) -> Mat4 {
        self.world_matrix().inverse().transpose()
    }

    /// Copies the pose into a bevy [`Transform`].
    pub fn write_to(&self, transform: &mut Transform) {
        transform.translation = self.position;
        transform.rotation = self.orientation();
        transform.scale = self.scale;
    }
}

/// Axis-aligned collision volume read by the buoyancy integrator.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Half the box size along each axis.
    pub half_extents: Vec3,
}

impl Default for Collider {
    fn default() -> Self {
        Self {
            half_extents: Vec3::splat(0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn world_matrix_translates_origin() {
        let pose = Pose::from_position(Vec3::new(1.0, 2.0, 3.0));
        let moved = pose.world_matrix().transform_point3(Vec3::ZERO);
        assert_relative_eq!(moved.x, 1.0);
        assert_relative_eq!(moved.y, 2.0);
        assert_relative_eq!(moved.z, 3.0);
    }

    #[test]
    fn rotation_matrix_turns_about_x() {
        let pose = Pose {
            rotation: Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0),
            ..Pose::default()
        };
        let turned = pose.rotation_matrix().transform_vector3(Vec3::Y);
        assert_relative_eq!(turned.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(turned.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(turned.z, 1.0, epsilon = 1e-6);
        assert_eq!(pose.rotation_matrix().w_axis, Mat4::IDENTITY.w_axis);
    }

    #[test]
    fn inverse_transpose_of_uniform_scale_preserves_normal_direction() {
        let pose = Pose {
            position: Vec3::new(4.0, 0.0, 0.0),
            rotation: Vec3::ZERO,
            scale: Vec3::splat(2.0),
        };
        let normal = pose.inverse_transpose().transform_vector3(Vec3::Y).normalize();
        assert_relative_eq!(normal.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn write_to_copies_translation() {
        let pose = Pose::from_position(Vec3::new(0.0, -1.0, 5.0));
        let mut transform = Transform::default();
        pose.write_to(&mut transform);
        assert_eq!(transform.translation, pose.position);
    }
}
