//! Frame rendering over buckets.
//!
//! Buckets are shaded in parallel with rayon and assembled into an
//! [`ImageBuffer`] of linear radiance. Tone mapping to 8-bit is a simple
//! gamma 2 curve for quick previews.

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::camera::RayGenerator;
use crate::{Color, RenderSettings, Shader};
use rayon::prelude::*;
use solace_math::Interval;
use std::time::Instant;

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let intensity = Interval::new(0.0, 0.999);
    let to_byte = |c: f32| (256.0 * intensity.clamp(linear_to_gamma(c))) as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z), 255]
}

/// Linear radiance image.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let b = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let local_x = i as u32 % b.width;
            let local_y = i as u32 / b.width;
            self.set(b.x + local_x, b.y + local_y, *color);
        }
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }
}

/// Render a full frame, one rayon task per bucket.
pub fn render(
    shader: &Shader<'_>,
    camera: &dyn RayGenerator,
    settings: &RenderSettings,
) -> ImageBuffer {
    let resolution = camera.resolution();
    let buckets = generate_buckets(resolution.x, resolution.y, settings.bucket_size);

    log::info!(
        "Rendering {}x{} @ {} spp in {} buckets",
        resolution.x,
        resolution.y,
        settings.samples_per_pixel,
        buckets.len()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            render_bucket(
                bucket,
                shader,
                camera,
                settings.samples_per_pixel,
                settings.seed,
            )
        })
        .collect();

    let mut image = ImageBuffer::new(resolution.x, resolution.y);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
