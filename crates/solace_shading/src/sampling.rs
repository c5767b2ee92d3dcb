//! Small sampling helpers shared by lights and the estimators.

use rand::{Rng, RngCore};
use solace_math::Vec2;

/// Draw a uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Draw a fresh pair of uniform numbers in [0, 1).
#[inline]
pub fn gen_pair(rng: &mut dyn RngCore) -> [f32; 2] {
    [gen_f32(rng), gen_f32(rng)]
}

/// Map a uniform pair to barycentric weights `(b1, b2)` uniformly
/// distributed over a triangle; `b0 = 1 - b1 - b2`.
#[inline]
pub fn uniform_sample_triangle(u: [f32; 2]) -> Vec2 {
    let su0 = u[0].sqrt();
    Vec2::new(1.0 - su0, u[1] * su0)
}

/// Pick one of `count` items uniformly from `u` in [0, 1).
///
/// Returns `None` when `count` is zero.
#[inline]
pub fn uniform_index(u: f32, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let index = (u * count as f32) as usize;
    Some(index.min(count - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_triangle_barycentrics_stay_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let b = uniform_sample_triangle(gen_pair(&mut rng));
            assert!(b.x >= 0.0 && b.y >= 0.0);
            assert!(b.x + b.y <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_triangle_samples_are_uniform() {
        // Centroid of uniform samples converges to (1/3, 1/3)
        let mut rng = StdRng::seed_from_u64(11);
        let n = 20_000;
        let mut sum = Vec2::ZERO;
        for _ in 0..n {
            sum += uniform_sample_triangle(gen_pair(&mut rng));
        }
        let mean = sum / n as f32;
        assert!((mean.x - 1.0 / 3.0).abs() < 0.01, "{mean}");
        assert!((mean.y - 1.0 / 3.0).abs() < 0.01, "{mean}");
    }

    #[test]
    fn test_uniform_index() {
        assert_eq!(uniform_index(0.0, 4), Some(0));
        assert_eq!(uniform_index(0.26, 4), Some(1));
        assert_eq!(uniform_index(0.999_999, 4), Some(3));
        // Rounding up to 1.0 still lands on the last item
        assert_eq!(uniform_index(1.0, 4), Some(3));
        assert_eq!(uniform_index(0.5, 0), None);
    }
}
