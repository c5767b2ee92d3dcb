//! Triangle geometry.
//!
//! Used both as a scene primitive and as the emitting surface of an area
//! light. Intersection uses the Möller-Trumbore algorithm.

use crate::sampling::uniform_sample_triangle;
use solace_math::{Interval, Ray, Vec3};

/// Result of a ray-triangle test.
#[derive(Debug, Clone, Copy)]
pub struct TriangleHit {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Barycentric coordinates of the hit
    pub u: f32,
    pub v: f32,
}

/// A triangle with a unit face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    /// Face normal (unit length)
    pub normal: Vec3,
}

impl Triangle {
    /// Create a new triangle; the normal follows counter-clockwise winding.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();
        Self { v0, v1, v2, normal }
    }

    /// Create a triangle with an explicit normal.
    pub fn with_normal(v0: Vec3, v1: Vec3, v2: Vec3, normal: Vec3) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal: normal.normalize_or_zero(),
        }
    }

    /// Surface area.
    pub fn area(&self) -> f32 {
        0.5 * (self.v1 - self.v0).cross(self.v2 - self.v0).length()
    }

    /// Point at barycentric coordinates `(u, v)` relative to `v1` and `v2`.
    #[inline]
    pub fn point_at(&self, u: f32, v: f32) -> Vec3 {
        (1.0 - u - v) * self.v0 + u * self.v1 + v * self.v2
    }

    /// Uniformly distributed point on the surface for a uniform pair `u`.
    pub fn sample(&self, u: [f32; 2]) -> Vec3 {
        let b = uniform_sample_triangle(u);
        self.point_at(b.x, b.y)
    }

    /// Möller-Trumbore ray-triangle intersection algorithm.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<TriangleHit> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < 1e-8 {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(TriangleHit { t, u, v })
    }
}
