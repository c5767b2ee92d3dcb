//! Hit record passed from scene queries into shading.

use crate::{Brdf, Color};
use solace_math::{UVec2, Vec3};

/// Record of a ray-surface intersection.
///
/// Built by [`Scene::trace`](crate::Scene::trace) and consumed by the shader
/// within the same call. A miss is `None` at the call site, so a record
/// always describes an actual hit.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Geometric (face) normal, used to offset secondary ray origins
    pub gn: Vec3,
    /// Shading normal, used for lighting cosines
    pub sn: Vec3,
    /// Direction back towards the ray origin (unit length)
    pub wo: Vec3,
    /// Refractive index of the medium the incoming ray travelled through
    pub incident_eta: f32,
    /// Material at the intersection point
    pub brdf: &'a Brdf,
    /// Emitted radiance when the surface is itself a light
    pub emission: Option<Color>,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Face that was hit
    pub face_id: Option<u32>,
    /// Pixel the incoming ray belongs to
    pub pixel: UVec2,
}

impl<'a> Intersection<'a> {
    /// Create a record for a non-emitting surface hit.
    ///
    /// The shading normal starts equal to the geometric one.
    pub fn new(p: Vec3, normal: Vec3, wo: Vec3, brdf: &'a Brdf) -> Self {
        Self {
            p,
            gn: normal,
            sn: normal,
            wo,
            incident_eta: 1.0,
            brdf,
            emission: None,
            t: 0.0,
            face_id: None,
            pixel: UVec2::ZERO,
        }
    }

    pub fn with_shading_normal(mut self, sn: Vec3) -> Self {
        self.sn = sn;
        self
    }

    pub fn with_emission(mut self, le: Color) -> Self {
        self.emission = Some(le);
        self
    }

    pub fn with_incident_eta(mut self, eta: f32) -> Self {
        self.incident_eta = eta;
        self
    }

    pub fn with_pixel(mut self, pixel: UVec2) -> Self {
        self.pixel = pixel;
        self
    }

    /// True if the hit surface is an emitter.
    #[inline]
    pub fn is_light(&self) -> bool {
        self.emission.is_some()
    }
}
