//! Reference scene: a flat list of spheres, triangles and lights.
//!
//! Every query is a linear scan. Good enough for tests and small demo
//! scenes; real scenes plug in their own [`Scene`] implementation.

use crate::{Brdf, Intersection, Light, Scene, SceneError, Sphere, Triangle};
use solace_math::{Interval, Ray, Vec3};

/// Geometry of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Shape {
    /// Nearest hit inside `ray_t` as `(t, outward normal)`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<(f32, Vec3)> {
        match self {
            Shape::Sphere(s) => s
                .hit(ray, ray_t)
                .map(|t| (t, s.outward_normal(ray.at(t)))),
            Shape::Triangle(tri) => tri.hit(ray, ray_t).map(|h| (h.t, tri.normal)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Primitive {
    shape: Shape,
    material: usize,
}

/// Nearest hit found by a scan.
struct Nearest {
    t: f32,
    normal: Vec3,
    face_id: u32,
    /// Index into the light list when the hit is an emitter
    light: Option<usize>,
}

/// A scene held in plain vectors.
pub struct World {
    materials: Vec<Brdf>,
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
    /// Material reported for hits on emitters; emitters are never shaded
    emitter_brdf: Brdf,
}

impl World {
    /// Create a new empty world.
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
            primitives: Vec::new(),
            lights: Vec::new(),
            emitter_brdf: Brdf::default(),
        }
    }

    /// Register a material and return its index.
    pub fn add_material(&mut self, brdf: Brdf) -> Result<usize, SceneError> {
        brdf.validate()?;
        self.materials.push(brdf);
        Ok(self.materials.len() - 1)
    }

    /// Add a sphere using a previously registered material.
    pub fn add_sphere(&mut self, sphere: Sphere, material: usize) -> Result<(), SceneError> {
        self.add_shape(Shape::Sphere(sphere), material)
    }

    /// Add a triangle using a previously registered material.
    pub fn add_triangle(&mut self, triangle: Triangle, material: usize) -> Result<(), SceneError> {
        self.add_shape(Shape::Triangle(triangle), material)
    }

    fn add_shape(&mut self, shape: Shape, material: usize) -> Result<(), SceneError> {
        if material >= self.materials.len() {
            return Err(SceneError::MissingMaterial {
                index: material,
                count: self.materials.len(),
            });
        }
        self.primitives.push(Primitive { shape, material });
        Ok(())
    }

    /// Add a light. Area lights also become visible emitters.
    pub fn add_light(&mut self, light: Light) {
        log::debug!("Adding {:?} light", light.kind());
        self.lights.push(light);
    }

    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    fn nearest(&self, ray: &Ray, ray_t: Interval) -> Option<Nearest> {
        let mut window = ray_t;
        let mut nearest = None;

        for (i, prim) in self.primitives.iter().enumerate() {
            if let Some((t, normal)) = prim.shape.hit(ray, window) {
                window = window.with_max(t);
                nearest = Some(Nearest {
                    t,
                    normal,
                    face_id: i as u32,
                    light: None,
                });
            }
        }

        let emitters = self.lights.iter().enumerate().filter_map(|(i, light)| match light {
            Light::Area(area) => Some((i, area.geometry())),
            _ => None,
        });
        for (i, tri) in emitters {
            if let Some(h) = tri.hit(ray, window) {
                window = window.with_max(h.t);
                nearest = Some(Nearest {
                    t: h.t,
                    normal: tri.normal,
                    face_id: (self.primitives.len() + i) as u32,
                    light: Some(i),
                });
            }
        }

        nearest
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for World {
    fn trace(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let hit = self.nearest(ray, Interval::FORWARD)?;

        let p = ray.at(hit.t);
        let wo = -ray.direction().normalize();

        // Normal always points against the ray
        let front_face = ray.direction().dot(hit.normal) < 0.0;
        let normal = if front_face { hit.normal } else { -hit.normal };

        let (brdf, emission) = match hit.light {
            Some(i) => (&self.emitter_brdf, Some(self.lights[i].radiance())),
            None => (&self.materials[self.primitives[hit.face_id as usize].material], None),
        };

        Some(Intersection {
            p,
            gn: normal,
            sn: normal,
            wo,
            incident_eta: ray.propagating_eta,
            brdf,
            emission,
            t: hit.t,
            face_id: Some(hit.face_id),
            pixel: ray.pixel,
        })
    }

    fn visibility(&self, ray: &Ray, max_distance: f32) -> bool {
        // Directions may be non-unit; convert the distance cutoff to t
        let length = ray.direction().length();
        if length <= 0.0 {
            return true;
        }
        let window = Interval::up_to(max_distance / length);
        !self
            .primitives
            .iter()
            .any(|prim| prim.shape.hit(ray, window).is_some())
    }

    fn lights(&self) -> &[Light] {
        &self.lights
    }
}
