//! Transform used to place static, authored geometry in the world each frame.

use glam::{Mat4, Quat, Vec2, Vec3};

/// Position, rotation, and scale of a drawable in world space.
///
/// The lander world is planar: geometry lives in the XY plane and rotations
/// are about +Z (counter-clockwise when viewed with +Y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a planar transform: translate to `position`, rotate by
    /// `rotation_z` radians about +Z.
    pub fn planar(position: Vec2, rotation_z: f32) -> Self {
        Self {
            position: position.extend(0.0),
            rotation: Quat::from_rotation_z(rotation_z),
            ..Default::default()
        }
    }

    /// Create the model matrix for this transform.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_matrix_translates_origin() {
        let t = Transform::planar(Vec2::new(3.0, 4.0), 0.7);
        let p = t.to_matrix().transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(3.0, 4.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn planar_rotation_is_counter_clockwise() {
        let t = Transform::planar(Vec2::ZERO, std::f32::consts::FRAC_PI_2);
        let up = t.to_matrix().transform_vector3(Vec3::Y);
        assert!((up - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform::default().to_matrix(), Mat4::IDENTITY);
        assert_eq!(
            Transform::planar(Vec2::X, 0.0).to_matrix(),
            Mat4::from_translation(Vec3::X)
        );
    }
}
