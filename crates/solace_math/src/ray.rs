use crate::{UVec2, Vec3};

/// Distance secondary rays are pushed off the surface they start on.
pub const EPSILON: f32 = 1e-3;

/// A ray segment used for both primary and secondary (specular, shadow) rays.
///
/// The reciprocal of the direction is cached for slab tests. `direction` is
/// private so the cache can never go stale: every way of changing it goes
/// through [`Ray::set_direction`], which recomputes the reciprocal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    inv_direction: Vec3,
    /// Color weight carried along the transport path.
    pub throughput: Vec3,
    /// Refractive index of the medium the ray travels through.
    pub propagating_eta: f32,
    /// Face the origin lies on, if the ray was spawned from a surface.
    pub face_id: Option<u32>,
    /// Pixel this ray contributes to.
    pub pixel: UVec2,
}

impl Ray {
    /// Create a ray in vacuum with unit throughput.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        let mut ray = Self {
            origin,
            direction,
            inv_direction: Vec3::ZERO,
            throughput: Vec3::ONE,
            propagating_eta: 1.0,
            face_id: None,
            pixel: UVec2::ZERO,
        };
        ray.invert_dir();
        ray
    }

    pub fn with_throughput(mut self, throughput: Vec3) -> Self {
        self.throughput = throughput;
        self
    }

    pub fn with_eta(mut self, eta: f32) -> Self {
        self.propagating_eta = eta;
        self
    }

    pub fn with_pixel(mut self, pixel: UVec2) -> Self {
        self.pixel = pixel;
        self
    }

    pub fn with_face(mut self, face_id: Option<u32>) -> Self {
        self.face_id = face_id;
        self
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Componentwise reciprocal of the direction.
    ///
    /// Zero direction components map to infinities; intersection routines
    /// are expected to handle them.
    #[inline]
    pub fn inv_direction(&self) -> Vec3 {
        self.inv_direction
    }

    /// Replace the direction and refresh the cached reciprocal.
    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction;
        self.invert_dir();
    }

    /// Recompute the cached reciprocal of the direction.
    pub fn invert_dir(&mut self) {
        self.inv_direction = Vec3::ONE / self.direction;
    }

    /// Push the origin [`EPSILON`] along `normal`, onto the side the ray is
    /// heading towards, so the ray does not re-hit the surface it starts on.
    pub fn adjust_origin(&mut self, normal: Vec3) {
        let offset = EPSILON * normal;
        if self.direction.dot(normal) < 0.0 {
            self.origin -= offset;
        } else {
            self.origin += offset;
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
