//! Primary ray generation.

use crate::sampling::gen_f32;
use rand::RngCore;
use solace_math::{Ray, UVec2, Vec3};

/// Source of primary rays for the bucket renderer.
pub trait RayGenerator: Send + Sync {
    /// Image size in pixels.
    fn resolution(&self) -> UVec2;

    /// A ray through pixel `(x, y)`, jittered within the pixel.
    fn generate(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Ray;
}

/// Pinhole camera.
#[derive(Debug, Clone)]
pub struct PinholeCamera {
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,
    /// Vertical field of view in degrees
    vfov: f32,

    // Cached computed values (set by initialize())
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl PinholeCamera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        let mut camera = Self {
            image_width: 320,
            image_height: 240,
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
        };
        camera.initialize();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width.max(1);
        self.image_height = height.max(1);
        self.initialize();
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self.initialize();
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self.initialize();
        self
    }

    pub fn look_from(&self) -> Vec3 {
        self.look_from
    }

    fn initialize(&mut self) {
        let theta = self.vfov.to_radians();
        let viewport_height = 2.0 * (theta / 2.0).tan();
        let viewport_width = viewport_height * (self.image_width as f32 / self.image_height as f32);

        // Camera basis
        let w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(w).normalize();
        let v = w.cross(u);

        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        let viewport_upper_left = self.look_from - w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }
}

impl Default for PinholeCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl RayGenerator for PinholeCamera {
    fn resolution(&self) -> UVec2 {
        UVec2::new(self.image_width, self.image_height)
    }

    fn generate(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Ray {
        let (dx, dy) = (gen_f32(rng) - 0.5, gen_f32(rng) - 0.5);
        let pixel_sample = self.pixel00_loc
            + (x as f32 + dx) * self.pixel_delta_u
            + (y as f32 + dy) * self.pixel_delta_v;

        Ray::new(self.look_from, (pixel_sample - self.look_from).normalize())
            .with_pixel(UVec2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_center_ray_looks_forward() {
        let camera = PinholeCamera::new()
            .with_resolution(100, 100)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.generate(50, 50, &mut rng);
        assert!(ray.direction().z < -0.99);
        assert_eq!(ray.pixel, UVec2::new(50, 50));
        assert_eq!(ray.origin(), Vec3::ZERO);
    }

    #[test]
    fn test_corners_span_field_of_view() {
        let camera = PinholeCamera::new()
            .with_resolution(64, 64)
            .with_fov(90.0);
        let mut rng = StdRng::seed_from_u64(1);

        // Top-left pixel points up and left
        let ray = camera.generate(0, 0, &mut rng);
        assert!(ray.direction().x < 0.0 && ray.direction().y > 0.0);

        // Bottom-right pixel points down and right
        let ray = camera.generate(63, 63, &mut rng);
        assert!(ray.direction().x > 0.0 && ray.direction().y < 0.0);
    }
}
