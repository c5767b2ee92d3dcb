//! Shader and render configuration.
//!
//! Both structs deserialize from JSON with every field optional; missing
//! fields take their defaults.

use crate::{Color, ConfigError, ConfigResult, DirectSampling};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default bound on specular recursion.
///
/// Each reflected or refracted continuation adds exactly one level, so the
/// default allows four nested bounces. Renderers that count two levels per
/// bounce stop after two bounces with the same setting.
pub const MAX_DEPTH: u32 = 4;

/// Largest accepted `max_depth`. Each level can double the number of
/// specular rays, so deeper settings are rejected rather than honoured.
pub const MAX_SUPPORTED_DEPTH: u32 = 16;

/// Shader configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    /// Radiance returned for rays that hit nothing
    pub background: Color,
    /// Maximum number of nested specular continuations
    pub max_depth: u32,
    /// Light selection strategy for direct lighting
    pub sampling: DirectSampling,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            background: Color::ZERO,
            max_depth: MAX_DEPTH,
            sampling: DirectSampling::UniformOne,
        }
    }
}

impl ShaderConfig {
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_sampling(mut self, sampling: DirectSampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.background.is_finite() || self.background.min_element() < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "background must be a finite non-negative color, got {}",
                self.background
            )));
        }
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(ConfigError::Invalid(format!(
                "max_depth {} exceeds {MAX_SUPPORTED_DEPTH}",
                self.max_depth
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        if let Err(err) = config.validate() {
            log::warn!("Rejected shader config: {err}");
            return Err(err);
        }
        Ok(config)
    }

    /// Read a shader configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Settings for a whole render, as read by the command-line renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Primary rays per pixel
    pub samples_per_pixel: u32,
    /// Edge length of a render bucket in pixels
    pub bucket_size: u32,
    /// Base seed; each bucket derives its own stream from it
    pub seed: u64,
    pub shader: ShaderConfig,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            samples_per_pixel: 16,
            bucket_size: crate::DEFAULT_BUCKET_SIZE,
            seed: 0,
            shader: ShaderConfig::default(),
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::Invalid(
                "samples_per_pixel must be at least 1".into(),
            ));
        }
        if self.bucket_size == 0 {
            return Err(ConfigError::Invalid("bucket_size must be at least 1".into()));
        }
        self.shader.validate()
    }

    /// Parse and validate a JSON settings document.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        if let Err(err) = settings.validate() {
            log::warn!("Rejected render settings: {err}");
            return Err(err);
        }
        Ok(settings)
    }

    /// Read settings from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&text)?;
        log::info!("Loaded render settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShaderConfig::default();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.sampling, DirectSampling::UniformOne);
        assert_eq!(config.background, Color::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "sampling": "all_lights", "background": [0.1, 0.2, 0.3] }"#;
        let config = ShaderConfig::from_json_str(json).expect("valid config");
        assert_eq!(config.sampling, DirectSampling::AllLights);
        assert_eq!(config.background, Color::new(0.1, 0.2, 0.3));
        assert_eq!(config.max_depth, MAX_DEPTH);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ShaderConfig::from_json_str(r#"{ "max_depth": 40 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ShaderConfig::from_json_str(r#"{ "background": [-1.0, 0.0, 0.0] }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ShaderConfig::from_json_str(r#"{ "sampling": "every_other" }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_render_settings_roundtrip_through_json() {
        let settings = RenderSettings {
            width: 64,
            height: 32,
            seed: 9,
            shader: ShaderConfig::default().with_max_depth(2),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).expect("serializable");
        let back = RenderSettings::from_json_str(&json).expect("valid settings");
        assert_eq!(back, settings);
    }

    #[test]
    fn test_render_settings_validation() {
        let zero = RenderSettings {
            samples_per_pixel: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let nested = r#"{ "width": 8, "shader": { "max_depth": 99 } }"#;
        assert!(RenderSettings::from_json_str(nested).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RenderSettings::from_path("/nonexistent/solace/settings.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));

        let err = ShaderConfig::from_path("/nonexistent/solace/shader.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_shader_config_from_file() {
        let path = std::env::temp_dir().join(format!("solace-shader-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "max_depth": 2 }"#).expect("temp dir is writable");

        let config = ShaderConfig::from_path(&path);
        let _ = std::fs::remove_file(&path);

        let config = config.expect("valid config");
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.sampling, DirectSampling::UniformOne);
    }
}
