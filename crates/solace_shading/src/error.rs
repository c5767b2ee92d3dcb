//! Errors raised while assembling scenes and loading configuration.
//!
//! Shading itself never fails; these only surface at the edges.

use thiserror::Error;

/// Errors that can occur while building a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("Material index {index} out of range ({count} materials)")]
    MissingMaterial { index: usize, count: usize },

    #[error("Degenerate area light: triangle has zero area")]
    DegenerateEmitter,
}

/// Errors that can occur while loading render configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
