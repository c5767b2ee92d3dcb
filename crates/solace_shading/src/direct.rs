//! Direct-lighting estimator.
//!
//! Estimates single-bounce radiance from the scene's light sources at a
//! surface point. Ambient lights are added unshadowed and weighted by `Ka`;
//! point and area lights are shadow-tested and weighted by `Kd` and the
//! cosine at the shading normal. Nothing is clamped here.

use crate::sampling::{gen_f32, gen_pair, uniform_index};
use crate::{
    AmbientLight, AreaLight, Brdf, Color, Intersection, Light, LightSample, PointLight, Scene,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use solace_math::{Ray, EPSILON};

/// How lights are chosen for each direct-lighting estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectSampling {
    /// Sum the contribution of every light.
    AllLights,
    /// Evaluate one uniformly chosen light and scale by the light count.
    #[default]
    UniformOne,
}

/// Estimate direct illumination at `isect`.
///
/// Scenes without lights contribute black in both modes.
pub fn direct_lighting(
    scene: &dyn Scene,
    isect: &Intersection<'_>,
    rng: &mut dyn RngCore,
    mode: DirectSampling,
) -> Color {
    match mode {
        DirectSampling::AllLights => all_lights(scene, isect, rng),
        DirectSampling::UniformOne => uniform_one(scene, isect, rng),
    }
}

fn all_lights(scene: &dyn Scene, isect: &Intersection<'_>, rng: &mut dyn RngCore) -> Color {
    let mut color = Color::ZERO;
    for light in scene.lights() {
        color += light_contribution(scene, isect, light, rng);
    }
    color
}

fn uniform_one(scene: &dyn Scene, isect: &Intersection<'_>, rng: &mut dyn RngCore) -> Color {
    let lights = scene.lights();
    let Some(index) = uniform_index(gen_f32(rng), lights.len()) else {
        return Color::ZERO;
    };
    light_contribution(scene, isect, &lights[index], rng) * lights.len() as f32
}

/// Contribution of a single light, already divided by its sampling pdf.
fn light_contribution(
    scene: &dyn Scene,
    isect: &Intersection<'_>,
    light: &Light,
    rng: &mut dyn RngCore,
) -> Color {
    match light {
        Light::Ambient(l) => direct_ambient(l, isect.brdf),
        Light::Point(l) => direct_point(l, scene, isect),
        Light::Area(l) => direct_area(l, scene, isect, gen_pair(rng)),
    }
}

/// `Ka × L`; ambient light is never shadow-tested.
pub fn direct_ambient(light: &AmbientLight, brdf: &Brdf) -> Color {
    if !brdf.has_ambient() {
        return Color::ZERO;
    }
    brdf.ka * light.sample().radiance
}

/// `I × Kd × cosθ` if the light is in front of the surface and unoccluded.
pub fn direct_point(light: &PointLight, scene: &dyn Scene, isect: &Intersection<'_>) -> Color {
    if !isect.brdf.has_diffuse() {
        return Color::ZERO;
    }
    shadowed_sample(scene, isect, &light.sample())
}

/// Like [`direct_point`] with the position drawn from `u`, divided by the
/// sample pdf. A non-positive pdf contributes nothing.
pub fn direct_area(
    light: &AreaLight,
    scene: &dyn Scene,
    isect: &Intersection<'_>,
    u: [f32; 2],
) -> Color {
    if !isect.brdf.has_diffuse() {
        return Color::ZERO;
    }
    let sample = light.sample(u);
    if sample.pdf <= 0.0 {
        return Color::ZERO;
    }
    shadowed_sample(scene, isect, &sample) / sample.pdf
}

/// Diffuse response to a positioned light sample, zero when the sample is
/// behind the surface or blocked.
fn shadowed_sample(scene: &dyn Scene, isect: &Intersection<'_>, sample: &LightSample) -> Color {
    let Some(position) = sample.position else {
        return Color::ZERO;
    };

    let to_light = position - isect.p;
    let distance = to_light.length();
    if distance <= 0.0 {
        return Color::ZERO;
    }
    let l_dir = to_light / distance;

    let cos_l = l_dir.dot(isect.sn);
    if cos_l <= 0.0 {
        return Color::ZERO;
    }

    let mut shadow = Ray::new(isect.p, l_dir).with_pixel(isect.pixel);
    shadow.adjust_origin(isect.gn);

    if scene.visibility(&shadow, distance - EPSILON) {
        sample.radiance * isect.brdf.kd * cos_l
    } else {
        Color::ZERO
    }
}
