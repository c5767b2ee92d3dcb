//! Solace shading - radiance evaluation for a CPU ray tracer
//!
//! Given the nearest intersection of a ray, [`Shader`] computes the radiance
//! leaving the hit point toward the viewer: direct lighting from ambient,
//! point and area lights, plus recursive mirror reflection and refraction
//! bounded by a configurable depth.
//!
//! Geometry and acceleration live behind the [`Scene`] trait. [`World`] is a
//! small linear-scan implementation used by the demo binary and tests, and
//! [`render`] drives a [`Shader`] over an image in parallel buckets.

mod brdf;
mod bucket;
mod camera;
mod config;
mod direct;
mod error;
mod intersection;
mod light;
pub mod optics;
mod renderer;
pub mod sampling;
mod scene;
mod shader;
mod sphere;
mod triangle;
mod world;

#[cfg(test)]
mod testing;

pub use brdf::{is_black, Brdf, Color};
pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{PinholeCamera, RayGenerator};
pub use config::{RenderSettings, ShaderConfig, MAX_DEPTH, MAX_SUPPORTED_DEPTH};
pub use direct::{direct_ambient, direct_area, direct_lighting, direct_point, DirectSampling};
pub use error::{ConfigError, ConfigResult, SceneError};
pub use intersection::Intersection;
pub use light::{AmbientLight, AreaLight, Light, LightKind, LightSample, PointLight};
pub use renderer::{color_to_rgba, linear_to_gamma, render, ImageBuffer};
pub use scene::Scene;
pub use shader::Shader;
pub use sphere::Sphere;
pub use triangle::{Triangle, TriangleHit};
pub use world::{Shape, World};

/// Re-export the math types the shading API is expressed in
pub use solace_math::{Interval, Ray, UVec2, Vec2, Vec3, EPSILON};
