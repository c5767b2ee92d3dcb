// Re-export glam for convenience
pub use glam::*;

// Solace math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::{Ray, EPSILON};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        // Colors multiply componentwise
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
    }
}
