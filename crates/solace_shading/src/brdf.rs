//! Per-material reflectance coefficients.
//!
//! Materials are reduced to four color coefficients and an index of
//! refraction. A coefficient equal to black switches its transport term off
//! entirely: the shader spawns no ray and the direct-lighting estimator takes
//! no sample for it.

use crate::SceneError;
use solace_math::Vec3;

/// Color type alias (linear RGB, non-negative)
pub type Color = Vec3;

/// True if every channel of `c` is exactly zero.
#[inline]
pub fn is_black(c: Color) -> bool {
    c == Color::ZERO
}

/// Reflectance bundle for one material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brdf {
    /// Ambient reflectance, weights ambient lights
    pub ka: Color,
    /// Diffuse reflectance, weights point and area lights
    pub kd: Color,
    /// Specular reflectance, weights the mirror continuation
    pub ks: Color,
    /// Specular transmittance, weights the refracted continuation
    pub kt: Color,
    /// Index of refraction of the material's interior
    pub eta: f32,
}

impl Default for Brdf {
    fn default() -> Self {
        Self {
            ka: Color::ZERO,
            kd: Color::ZERO,
            ks: Color::ZERO,
            kt: Color::ZERO,
            eta: 1.0,
        }
    }
}

impl Brdf {
    pub fn new(ka: Color, kd: Color, ks: Color, kt: Color, eta: f32) -> Self {
        Self { ka, kd, ks, kt, eta }
    }

    /// Matte surface lit by both ambient and direct lights.
    pub fn diffuse(kd: Color) -> Self {
        Self {
            ka: kd,
            kd,
            ..Default::default()
        }
    }

    /// Perfect mirror.
    pub fn mirror(ks: Color) -> Self {
        Self {
            ks,
            ..Default::default()
        }
    }

    /// Clear dielectric that both reflects and transmits.
    pub fn glass(ks: Color, kt: Color, eta: f32) -> Self {
        Self {
            ks,
            kt,
            eta,
            ..Default::default()
        }
    }

    pub fn with_ambient(mut self, ka: Color) -> Self {
        self.ka = ka;
        self
    }

    pub fn with_diffuse(mut self, kd: Color) -> Self {
        self.kd = kd;
        self
    }

    pub fn with_specular(mut self, ks: Color) -> Self {
        self.ks = ks;
        self
    }

    pub fn with_transmission(mut self, kt: Color, eta: f32) -> Self {
        self.kt = kt;
        self.eta = eta;
        self
    }

    pub fn has_ambient(&self) -> bool {
        !is_black(self.ka)
    }

    pub fn has_diffuse(&self) -> bool {
        !is_black(self.kd)
    }

    pub fn has_specular(&self) -> bool {
        !is_black(self.ks)
    }

    pub fn has_transmission(&self) -> bool {
        !is_black(self.kt)
    }

    /// Check that coefficients are finite and non-negative and that the
    /// index of refraction is positive.
    pub fn validate(&self) -> Result<(), SceneError> {
        let coefficients = [
            ("ka", self.ka),
            ("kd", self.kd),
            ("ks", self.ks),
            ("kt", self.kt),
        ];
        for (name, c) in coefficients {
            if !c.is_finite() || c.min_element() < 0.0 {
                return Err(SceneError::InvalidMaterial(format!(
                    "{name} must be a finite non-negative color, got {c}"
                )));
            }
        }
        if !(self.eta.is_finite() && self.eta > 0.0) {
            return Err(SceneError::InvalidMaterial(format!(
                "eta must be positive, got {}",
                self.eta
            )));
        }
        Ok(())
    }
}
