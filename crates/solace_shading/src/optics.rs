//! Mirror reflection and Snell refraction.
//!
//! Both functions take the view vector `v` pointing *away* from the surface
//! for `reflect` and along the incoming path for `refract`, matching how the
//! shader builds its continuation rays.

use solace_math::Vec3;

/// Mirror `v` about `n`: `2(n·v)n - v`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    2.0 * n.dot(v) * n - v
}

/// Refract the incoming direction `v` through a surface with normal `n` and
/// relative index `ior` (incident over transmitted).
///
/// The caller must rule out total internal reflection first, see
/// [`cannot_refract`].
#[inline]
pub fn refract(v: Vec3, n: Vec3, ior: f32) -> Vec3 {
    let cos_theta = n.dot(-v).min(1.0);
    let r_out_perp = ior * (v + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    (r_out_perp + r_out_parallel).normalize()
}

/// Total internal reflection test: `ior · sinθ > 1`.
#[inline]
pub fn cannot_refract(cos_theta: f32, ior: f32) -> bool {
    ior * sin_from_cos(cos_theta) > 1.0
}

/// `sqrt(1 - cos²)`, clamped so rounding never yields NaN.
#[inline]
pub fn sin_from_cos(cos_theta: f32) -> f32 {
    (1.0 - cos_theta * cos_theta).max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3, tol: f32) -> bool {
        (a - b).length() < tol
    }

    #[test]
    fn test_reflect_about_normal() {
        let n = Vec3::Y;
        let v = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!(approx(reflect(v, n), Vec3::new(-1.0, 1.0, 0.0).normalize(), 1e-6));

        // Looking straight down the normal reflects onto itself
        assert!(approx(reflect(n, n), n, 1e-6));
    }

    #[test]
    fn test_reflect_involution() {
        let n = Vec3::new(0.2, 1.0, -0.3).normalize();
        let views = [
            Vec3::new(0.4, 0.7, 0.1),
            Vec3::new(-3.0, 0.5, 2.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        for v in views {
            let twice = reflect(reflect(v, n), n);
            assert!(approx(twice, v, 1e-5), "{v} -> {twice}");
        }
    }

    #[test]
    fn test_refract_normal_incidence_passes_straight() {
        let t = refract(-Vec3::Y, Vec3::Y, 1.0 / 1.5);
        assert!(approx(t, -Vec3::Y, 1e-6));
    }

    #[test]
    fn test_refract_obeys_snell() {
        let n = Vec3::Y;
        let ior: f32 = 1.0 / 1.5;
        let theta_i = 40f32.to_radians();
        let v = Vec3::new(theta_i.sin(), -theta_i.cos(), 0.0);

        let t = refract(v, n, ior);
        let sin_t = t.x;
        assert!((sin_t - ior * theta_i.sin()).abs() < 1e-5);
        assert!(t.y < 0.0);
        assert!((t.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_cannot_refract_threshold() {
        // Leaving glass into air: critical angle asin(1/1.5) ≈ 41.8°
        let ior: f32 = 1.5;
        assert!(!cannot_refract(30f32.to_radians().cos(), ior));
        assert!(cannot_refract(50f32.to_radians().cos(), ior));
        // Entering a denser medium never reflects totally
        assert!(!cannot_refract(0.0, 1.0 / 1.5));
    }

    #[test]
    fn test_refraction_continuous_at_critical_angle() {
        let n = Vec3::Y;
        let ior: f32 = 1.5;
        let critical = (1.0 / ior).asin();

        let dir_at = |theta: f32| Vec3::new(theta.sin(), -theta.cos(), 0.0);

        // Just below the critical angle the transmitted ray grazes the surface
        let below = dir_at(critical - 1e-4);
        assert!(!cannot_refract(n.dot(-below), ior));
        let t = refract(below, n, ior);
        assert!(t.y.abs() < 0.02, "grazing ray expected, got {t}");

        // Approaching the critical angle the refracted ray flattens smoothly
        // towards the tangent, with no jumps between neighbouring angles
        let mut prev = refract(dir_at(critical - 0.2), n, ior);
        for step in 1..=20 {
            let theta = critical - 0.2 + step as f32 * 0.00999;
            let t = refract(dir_at(theta), n, ior);
            assert!((t.length() - 1.0).abs() < 1e-4);
            assert!(t.y.abs() <= prev.y.abs() + 1e-6);
            assert!(approx(t, prev, 0.25), "jump between {prev} and {t}");
            prev = t;
        }
        assert!((prev.x - 1.0).abs() < 1e-3);

        // Just past it the test flips and the ray is mirrored instead
        let above = dir_at(critical + 1e-4);
        assert!(cannot_refract(n.dot(-above), ior));
        let r = reflect(-above, n);
        assert!(r.y > 0.0);
        assert!((r.x - above.x).abs() < 1e-5);
    }
}
