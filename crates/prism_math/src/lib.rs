//! Double-precision math types shared by the scene loader and the renderer.

// Re-export glam's f64 vectors under the names used throughout PRISM
pub use glam::{dvec3, DVec3 as Vec3};

mod aabb;
mod interval;
mod ray;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;

/// Tolerance for parallel-ray and on-surface tests.
pub const EPSILON: f64 = 1e-6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_cross_is_right_handed() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(dvec3(0.0, 1.0, 0.0).cross(Vec3::Z), Vec3::X);
    }
}
