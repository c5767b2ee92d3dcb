//! Call-counting scene stubs for unit tests.

use crate::{Intersection, Light, Scene};
use solace_math::{Ray, Vec3};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scene whose answers are fixed up front.
///
/// `trace` returns the same record for every ray (or a miss), and
/// `visibility` returns a constant. Every call is counted and traced rays
/// are kept for inspection.
pub(crate) struct StubScene<'m> {
    lights: Vec<Light>,
    visible: bool,
    hit: Option<Intersection<'m>>,
    trace_calls: AtomicUsize,
    visibility_calls: AtomicUsize,
    last_shadow: Mutex<Option<(Vec3, f32)>>,
    traced: Mutex<Vec<Ray>>,
}

impl<'m> StubScene<'m> {
    pub fn new(lights: Vec<Light>) -> Self {
        Self {
            lights,
            visible: true,
            hit: None,
            trace_calls: AtomicUsize::new(0),
            visibility_calls: AtomicUsize::new(0),
            last_shadow: Mutex::new(None),
            traced: Mutex::new(Vec::new()),
        }
    }

    /// Every shadow query reports an occluder.
    pub fn occluded(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Every traced ray hits `isect`.
    pub fn always_hit(mut self, isect: Intersection<'m>) -> Self {
        self.hit = Some(isect);
        self
    }

    pub fn trace_calls(&self) -> usize {
        self.trace_calls.load(Ordering::SeqCst)
    }

    pub fn visibility_calls(&self) -> usize {
        self.visibility_calls.load(Ordering::SeqCst)
    }

    /// Every ray passed to `trace`, in call order.
    pub fn traced_rays(&self) -> Vec<Ray> {
        self.traced.lock().unwrap().clone()
    }

    /// Origin and cutoff of the most recent shadow query.
    pub fn last_shadow_query(&self) -> Option<(Vec3, f32)> {
        *self.last_shadow.lock().unwrap()
    }
}

impl Scene for StubScene<'_> {
    fn trace(&self, ray: &Ray) -> Option<Intersection<'_>> {
        self.trace_calls.fetch_add(1, Ordering::SeqCst);
        self.traced.lock().unwrap().push(*ray);
        self.hit
    }

    fn visibility(&self, ray: &Ray, max_distance: f32) -> bool {
        self.visibility_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_shadow.lock().unwrap() = Some((ray.origin(), max_distance));
        self.visible
    }

    fn lights(&self) -> &[Light] {
        &self.lights
    }
}
