//! The scene collaborator seen from the shading core.

use crate::{Intersection, Light};
use solace_math::Ray;

/// Read-only scene queries used during shading.
///
/// Implementations must be safe to query from many worker threads at once;
/// the shading core never mutates the scene.
pub trait Scene: Send + Sync {
    /// Find the nearest intersection along `ray`, if any.
    ///
    /// The record must be fully populated, including `incident_eta` taken
    /// from `ray.propagating_eta` and the ray's pixel.
    fn trace(&self, ray: &Ray) -> Option<Intersection<'_>>;

    /// Whether the segment from the ray origin to `max_distance` along the
    /// ray is unoccluded.
    ///
    /// The caller has already offset the origin. Hits at or beyond
    /// `max_distance` do not occlude.
    fn visibility(&self, ray: &Ray, max_distance: f32) -> bool;

    /// Light sources, in a stable order.
    fn lights(&self) -> &[Light];

    fn num_lights(&self) -> usize {
        self.lights().len()
    }
}
