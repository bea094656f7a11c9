//! Orthographic camera over the lander world.

use glam::Mat4;

/// Fixed 2D camera: the full world width fits the window, the visible height
/// follows the aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// World units visible horizontally.
    pub world_width: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
}

impl Camera2D {
    pub fn new(world_width: f32, aspect: f32) -> Self {
        Self { world_width, aspect }
    }

    /// World units visible vertically.
    pub fn visible_height(&self) -> f32 {
        self.world_width / self.aspect.max(f32::EPSILON)
    }

    /// Maps `[0, world_width] x [0, visible_height]` onto clip space.
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.world_width, 0.0, self.visible_height(), -1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn corners_map_to_clip_corners() {
        let cam = Camera2D::new(40.0, 16.0 / 9.0);
        let proj = cam.projection();
        let bl = proj.project_point3(Vec3::ZERO);
        let tr = proj.project_point3(Vec3::new(40.0, 22.5, 0.0));
        assert!((bl.x + 1.0).abs() < 1e-5 && (bl.y + 1.0).abs() < 1e-5);
        assert!((tr.x - 1.0).abs() < 1e-5 && (tr.y - 1.0).abs() < 1e-5);
        assert!((0.0..=1.0).contains(&bl.z));
    }

    #[test]
    fn aspect_controls_visible_height() {
        assert_eq!(Camera2D::new(40.0, 1.0).visible_height(), 40.0);
        let wide = Camera2D::new(40.0, 1280.0 / 720.0);
        assert!((wide.visible_height() - 22.5).abs() < 1e-4);
        assert!(Camera2D::new(40.0, 0.0).visible_height().is_finite());
    }
}
