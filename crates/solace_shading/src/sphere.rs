//! Sphere geometry for the reference scene.

use solace_math::{Interval, Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere; negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Nearest root strictly inside `ray_t`.
    ///
    /// From inside the sphere the near root is behind the origin, so the
    /// far root is returned.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        let to_center = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let half_b = ray.direction().dot(to_center);
        let c = to_center.length_squared() - self.radius * self.radius;

        let disc = half_b * half_b - a * c;
        if disc < 0.0 || a == 0.0 {
            return None;
        }
        let root = disc.sqrt();

        [(half_b - root) / a, (half_b + root) / a]
            .into_iter()
            .find(|&t| ray_t.surrounds(t))
    }

    /// Outward unit normal at a point on the surface.
    pub fn outward_normal(&self, p: Vec3) -> Vec3 {
        (p - self.center) / self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let t = sphere.hit(&ray, Interval::FORWARD).expect("ray aims at sphere");
        assert!((t - 0.5).abs() < 0.001);
        assert!((sphere.outward_normal(ray.at(t)) - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_from_inside_takes_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = sphere.hit(&ray, Interval::FORWARD).expect("exits the sphere");
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::FORWARD).is_none());

        // Sphere lies beyond the cutoff
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray, Interval::up_to(0.4)).is_none());
    }
}
