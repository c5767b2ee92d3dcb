//! Light sources.
//!
//! The set of light types is closed, so lights are an enum and every
//! consumer matches on the variant. Each variant answers two questions:
//! its intrinsic radiance ([`Light::radiance`]) and a sample of the emitter
//! for a uniform random pair ([`Light::sample`]).

use crate::{Color, SceneError, Triangle};
use solace_math::Vec3;

/// Type tag of a light, for logging and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightKind {
    Ambient,
    Point,
    Area,
}

/// Outcome of sampling a light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSample {
    /// Radiance (or intensity) carried by the sample
    pub radiance: Color,
    /// Sampled point on the emitter; `None` for lights without position
    pub position: Option<Vec3>,
    /// Probability density of the sample; callers must check it is positive
    pub pdf: f32,
}

/// Constant radiance reaching every point, never shadowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
}

impl AmbientLight {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn sample(&self) -> LightSample {
        LightSample {
            radiance: self.color,
            position: None,
            pdf: 1.0,
        }
    }
}

/// Infinitesimal emitter at a fixed position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Vec3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    pub fn sample(&self) -> LightSample {
        LightSample {
            radiance: self.intensity,
            position: Some(self.position),
            pdf: 1.0,
        }
    }
}

/// Planar triangular emitter sampled uniformly by area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaLight {
    geometry: Triangle,
    power: Color,
    intensity: Color,
    pdf: f32,
}

impl AreaLight {
    /// Create an area light emitting `power` from `geometry`.
    ///
    /// Fails for a zero-area triangle, which would have no valid pdf.
    pub fn new(power: Color, geometry: Triangle) -> Result<Self, SceneError> {
        let area = geometry.area();
        if !(area.is_finite() && area > 0.0) {
            return Err(SceneError::DegenerateEmitter);
        }
        let pdf = 1.0 / area;
        Ok(Self {
            geometry,
            power,
            intensity: power * pdf,
            pdf,
        })
    }

    pub fn geometry(&self) -> &Triangle {
        &self.geometry
    }

    pub fn power(&self) -> Color {
        self.power
    }

    /// Power spread over the emitter's area.
    pub fn intensity(&self) -> Color {
        self.intensity
    }

    /// Uniform-area density, `1 / area`.
    pub fn pdf(&self) -> f32 {
        self.pdf
    }

    /// Uniform point on the emitter for the pair `u`.
    pub fn sample(&self, u: [f32; 2]) -> LightSample {
        LightSample {
            radiance: self.intensity,
            position: Some(self.geometry.sample(u)),
            pdf: self.pdf,
        }
    }
}

/// A light source in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient(AmbientLight),
    Point(PointLight),
    Area(AreaLight),
}

impl Light {
    pub fn ambient(color: Color) -> Self {
        Light::Ambient(AmbientLight::new(color))
    }

    pub fn point(position: Vec3, intensity: Color) -> Self {
        Light::Point(PointLight::new(position, intensity))
    }

    pub fn area(power: Color, geometry: Triangle) -> Result<Self, SceneError> {
        AreaLight::new(power, geometry).map(Light::Area)
    }

    pub fn kind(&self) -> LightKind {
        match self {
            Light::Ambient(_) => LightKind::Ambient,
            Light::Point(_) => LightKind::Point,
            Light::Area(_) => LightKind::Area,
        }
    }

    /// Intrinsic radiance, independent of any sample.
    ///
    /// Area lights report their total power; this is also the radiance seen
    /// by a ray that hits the emitter directly.
    pub fn radiance(&self) -> Color {
        match self {
            Light::Ambient(l) => l.color,
            Light::Point(l) => l.intensity,
            Light::Area(l) => l.power,
        }
    }

    /// Sample the light for a uniform pair `u` in [0, 1)².
    ///
    /// Ambient and point lights are deterministic (pdf 1, `u` unused).
    /// Area lights return a uniform point on the triangle carrying
    /// `intensity = power / area`, with pdf `1 / area`.
    pub fn sample(&self, u: [f32; 2]) -> LightSample {
        match self {
            Light::Ambient(l) => l.sample(),
            Light::Point(l) => l.sample(),
            Light::Area(l) => l.sample(u),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_half() -> Triangle {
        Triangle::new(
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, 2.0, 2.0),
            Vec3::new(2.0, 2.0, 0.0),
        )
    }

    #[test]
    fn test_ambient_sample_has_no_position() {
        let light = Light::ambient(Color::splat(0.2));
        let s = light.sample([0.3, 0.9]);
        assert_eq!(s.radiance, Color::splat(0.2));
        assert_eq!(s.position, None);
        assert_eq!(s.pdf, 1.0);
        assert_eq!(light.kind(), LightKind::Ambient);
    }

    #[test]
    fn test_point_sample_is_deterministic() {
        let light = Light::point(Vec3::new(1.0, 2.0, 3.0), Color::ONE);
        let a = light.sample([0.1, 0.2]);
        let b = light.sample([0.8, 0.7]);
        assert_eq!(a, b);
        assert_eq!(a.position, Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(a.pdf, 1.0);
        assert_eq!(light.radiance(), Color::ONE);
    }

    #[test]
    fn test_area_light_intensity_and_pdf() {
        let power = Color::new(4.0, 2.0, 1.0);
        let light = AreaLight::new(power, quad_half()).expect("non-degenerate");

        // Area is 2, so pdf 1/2 and intensity power/2
        assert!((light.pdf() - 0.5).abs() < 1e-6);
        assert!((light.intensity() - power * 0.5).length() < 1e-6);
        assert_eq!(Light::Area(light).radiance(), power);
    }

    #[test]
    fn test_area_sample_lands_on_emitter() {
        let light = Light::area(Color::ONE, quad_half()).expect("non-degenerate");
        let s = light.sample([0.25, 0.75]);
        let p = s.position.expect("area lights have positions");
        assert!((p.y - 2.0).abs() < 1e-6);
        assert!(p.x >= 0.0 && p.z >= 0.0 && p.x + p.z <= 2.0 + 1e-5);
        assert!(s.pdf > 0.0);
        assert_eq!(s.radiance * (1.0 / s.pdf), Color::ONE);
    }

    #[test]
    fn test_degenerate_area_light_is_rejected() {
        let flat = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
        assert!(matches!(
            Light::area(Color::ONE, flat),
            Err(SceneError::DegenerateEmitter)
        ));
    }
}
