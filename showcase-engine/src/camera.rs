// camera.rs - Perspective camera rig
//
// Mirrors the renderer's camera on the Rust side so picking can unproject
// without a round trip into JS. Right-handed, GL depth range, +Y up.

use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraRig {
    pub fn new(eye: Vec3, fov_y_deg: f32) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            fov_y_deg,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// World point to normalized device coordinates
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }

    /// Re-derive aspect from a viewport box. Returns false (and leaves the
    /// rig untouched) for a degenerate box.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_projects_to_center() {
        let mut rig = CameraRig::new(Vec3::new(-3.0, 2.0, 6.5), 35.0);
        rig.set_viewport(800, 450);
        let ndc = rig.project(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5, "{ndc:?}");
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn viewport_sets_aspect() {
        let mut rig = CameraRig::new(Vec3::Z * 5.0, 35.0);
        assert!(rig.set_viewport(1280, 720));
        assert!((rig.aspect - 1280.0 / 720.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_viewport_is_ignored() {
        let mut rig = CameraRig::new(Vec3::Z * 5.0, 35.0);
        rig.set_viewport(400, 200);
        assert!(!rig.set_viewport(0, 300));
        assert!(!rig.set_viewport(300, 0));
        assert_eq!(rig.aspect, 2.0);
    }
}
