//! Whitted-style shader.
//!
//! Combines three terms at every surface hit:
//! - emission, which short-circuits everything else on light surfaces
//! - recursive specular reflection and transmission, bounded by `max_depth`
//! - one direct-lighting estimate, evaluated at every level

use crate::direct::direct_lighting;
use crate::optics::{cannot_refract, reflect, refract};
use crate::{Color, Intersection, Scene, ShaderConfig, MAX_SUPPORTED_DEPTH};
use rand::RngCore;
use solace_math::Ray;

/// Radiance estimator bound to a scene.
///
/// Holds no mutable state; each worker passes its own random stream, so one
/// shader can be shared by every thread rendering the frame.
pub struct Shader<'s> {
    scene: &'s dyn Scene,
    config: ShaderConfig,
}

impl<'s> Shader<'s> {
    /// Bind `config` to `scene`.
    ///
    /// Only `ShaderConfig::validate` rejects bad settings; here a
    /// `max_depth` above `MAX_SUPPORTED_DEPTH` is clamped with a warning.
    pub fn new(scene: &'s dyn Scene, mut config: ShaderConfig) -> Self {
        if config.max_depth > MAX_SUPPORTED_DEPTH {
            log::warn!(
                "max_depth {} clamped to {MAX_SUPPORTED_DEPTH}",
                config.max_depth
            );
            config.max_depth = MAX_SUPPORTED_DEPTH;
        }
        log::debug!(
            "Shader: max_depth={}, sampling={:?}, {} lights",
            config.max_depth,
            config.sampling,
            scene.num_lights()
        );
        Self { scene, config }
    }

    pub fn config(&self) -> &ShaderConfig {
        &self.config
    }

    pub fn scene(&self) -> &dyn Scene {
        self.scene
    }

    /// Trace a primary ray and shade whatever it hits.
    pub fn radiance(&self, ray: &Ray, rng: &mut dyn RngCore) -> Color {
        let hit = self.scene.trace(ray);
        self.shade(hit.as_ref(), 0, rng)
    }

    /// Estimate radiance leaving `hit` towards the ray that produced it.
    ///
    /// `None` means the ray escaped and yields the background.
    pub fn shade(
        &self,
        hit: Option<&Intersection<'_>>,
        depth: u32,
        rng: &mut dyn RngCore,
    ) -> Color {
        let Some(isect) = hit else {
            return self.config.background;
        };
        if let Some(le) = isect.emission {
            return le;
        }

        let brdf = isect.brdf;
        let mut color = Color::ZERO;

        if brdf.has_specular() && depth < self.config.max_depth {
            color += self.specular_reflection(isect, depth, rng);
        }
        if brdf.has_transmission() && depth < self.config.max_depth {
            color += self.specular_transmission(isect, depth, rng);
        }

        color += direct_lighting(self.scene, isect, rng, self.config.sampling);
        color
    }

    /// Mirror continuation, weighted by `Ks`.
    fn specular_reflection(
        &self,
        isect: &Intersection<'_>,
        depth: u32,
        rng: &mut dyn RngCore,
    ) -> Color {
        let dir = reflect(isect.wo, isect.sn);

        let mut specular = Ray::new(isect.p, dir)
            .with_pixel(isect.pixel)
            .with_face(isect.face_id)
            .with_eta(isect.incident_eta);
        specular.adjust_origin(isect.gn);

        let hit = self.scene.trace(&specular);
        isect.brdf.ks * self.shade(hit.as_ref(), depth + 1, rng)
    }

    /// Refracted continuation, weighted by `Kt`.
    ///
    /// Falls back to the mirror direction under total internal reflection,
    /// in which case the ray stays in the incident medium.
    fn specular_transmission(
        &self,
        isect: &Intersection<'_>,
        depth: u32,
        rng: &mut dyn RngCore,
    ) -> Color {
        let ior = isect.incident_eta / isect.brdf.eta;
        let v = -isect.wo;
        let n = isect.sn;
        let cos_theta = n.dot(-v).min(1.0);

        let tir = cannot_refract(cos_theta, ior);
        let dir = if tir {
            reflect(isect.wo, n)
        } else {
            refract(v, n, ior)
        };
        let eta = if tir {
            isect.incident_eta
        } else {
            isect.brdf.eta
        };

        let mut transmitted = Ray::new(isect.p, dir)
            .with_pixel(isect.pixel)
            .with_face(isect.face_id)
            .with_eta(eta);
        transmitted.adjust_origin(-isect.gn);

        let hit = self.scene.trace(&transmitted);
        isect.brdf.kt * self.shade(hit.as_ref(), depth + 1, rng)
    }
}
