// pick.rs - Pointer picking against hit-regions
//
// Client pixel -> NDC -> world ray -> nearest triangle. Only the button
// triangles are ever tested; the screens themselves are not pickable.

use glam::{Vec2, Vec3};

use crate::camera::CameraRig;

const EPSILON: f32 = 1e-7;

/// Canvas bounding box in client pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Client pixel to normalized device coordinates, +Y up.
    /// None for an empty canvas.
    pub fn to_ndc(&self, client: Vec2) -> Option<Vec2> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            ((client.x - self.left) / self.width) * 2.0 - 1.0,
            -((client.y - self.top) / self.height) * 2.0 + 1.0,
        ))
    }

    /// Inverse of `to_ndc`
    pub fn to_client(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            self.left + (ndc.x + 1.0) * 0.5 * self.width,
            self.top + (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Ray from the camera eye through an NDC point
    pub fn from_camera(camera: &CameraRig, ndc: Vec2) -> Self {
        let inv = camera.view_projection().inverse();
        let near = inv.project_point3(ndc.extend(-1.0));
        let far = inv.project_point3(ndc.extend(1.0));
        Self {
            origin: camera.eye,
            dir: (far - near).normalize(),
        }
    }
}

/// Flat, two-sided, world-space triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle(pub [Vec3; 3]);

impl Triangle {
    pub fn centroid(&self) -> Vec3 {
        (self.0[0] + self.0[1] + self.0[2]) / 3.0
    }

    /// Möller–Trumbore. Distance along the ray, if hit in front of the origin.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let [a, b, c] = self.0;
        let e1 = b - a;
        let e2 = c - a;
        let p = ray.dir.cross(e2);
        let det = e1.dot(p);
        if det.abs() < EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let s = ray.origin - a;
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(e1);
        let v = ray.dir.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = e2.dot(q) * inv_det;
        (t > EPSILON).then_some(t)
    }
}

/// Nearest hit among tagged regions
pub fn pick_nearest<K: Copy>(regions: &[(K, Triangle)], ray: &Ray) -> Option<(K, f32)> {
    regions
        .iter()
        .filter_map(|(key, tri)| tri.intersect(ray).map(|t| (*key, t)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tri(z: f32) -> Triangle {
        Triangle([
            Vec3::new(-1.0, -1.0, z),
            Vec3::new(1.0, -1.0, z),
            Vec3::new(0.0, 1.0, z),
        ])
    }

    #[test]
    fn ndc_round_trip_through_client() {
        let rect = CanvasRect::new(40.0, 120.0, 800.0, 450.0);
        assert_eq!(rect.to_ndc(Vec2::new(40.0, 120.0)), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(rect.to_ndc(Vec2::new(440.0, 345.0)), Some(Vec2::ZERO));
        let back = rect.to_client(Vec2::new(0.5, -0.25));
        let ndc = rect.to_ndc(back).unwrap();
        assert!((ndc - Vec2::new(0.5, -0.25)).length() < 1e-5);
    }

    #[test]
    fn empty_canvas_has_no_ndc() {
        let rect = CanvasRect::new(0.0, 0.0, 0.0, 300.0);
        assert_eq!(rect.to_ndc(Vec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn ray_hits_front_and_back_faces() {
        let tri = unit_tri(0.0);
        let front = Ray { origin: Vec3::new(0.0, 0.0, 5.0), dir: Vec3::NEG_Z };
        let back = Ray { origin: Vec3::new(0.0, 0.0, -5.0), dir: Vec3::Z };
        assert!((tri.intersect(&front).unwrap() - 5.0).abs() < 1e-5);
        assert!((tri.intersect(&back).unwrap() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_outside_and_behind() {
        let tri = unit_tri(0.0);
        let outside = Ray { origin: Vec3::new(3.0, 0.0, 5.0), dir: Vec3::NEG_Z };
        let away = Ray { origin: Vec3::new(0.0, 0.0, 5.0), dir: Vec3::Z };
        let parallel = Ray { origin: Vec3::new(0.0, 0.0, 5.0), dir: Vec3::X };
        assert_eq!(tri.intersect(&outside), None);
        assert_eq!(tri.intersect(&away), None);
        assert_eq!(tri.intersect(&parallel), None);
    }

    #[test]
    fn nearest_region_wins() {
        let regions = [("far", unit_tri(-2.0)), ("near", unit_tri(1.0))];
        let ray = Ray { origin: Vec3::new(0.0, 0.0, 5.0), dir: Vec3::NEG_Z };
        let (key, t) = pick_nearest(&regions, &ray).unwrap();
        assert_eq!(key, "near");
        assert!((t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn camera_ray_through_projection_hits_target() {
        let mut cam = CameraRig::new(Vec3::new(-3.0, 2.0, 6.5), 35.0);
        cam.set_viewport(800, 450);
        let tri = Triangle([
            Vec3::new(1.75, 0.07, 0.11),
            Vec3::new(1.84, 0.0, 0.11),
            Vec3::new(1.75, -0.07, 0.11),
        ]);
        let ndc = cam.project(tri.centroid()).truncate();
        let ray = Ray::from_camera(&cam, ndc);
        assert!(tri.intersect(&ray).is_some());
    }
}
