//! Axis-aligned cube primitive.

use prism_math::{Aabb, Ray, Vec3};

/// An axis-aligned cube with uniform edge length.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    bounds: Aabb,
    material_index: usize,
}

impl Cube {
    /// `scale` is the edge length and must be positive.
    pub fn new(center: Vec3, scale: f64, material_index: usize) -> Self {
        Self {
            bounds: Aabb::from_center_size(center, scale),
            material_index,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        self.bounds.intersect(ray)
    }

    /// Face normal at a surface point; edges and corners resolve to the x face first.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        self.bounds.face_normal(point)
    }

    pub fn material_index(&self) -> usize {
        self.material_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_extends_half_scale_from_center() {
        let cube = Cube::new(Vec3::new(1.0, 1.0, 1.0), 2.0, 1);

        // Faces sit at 0 and 2 on every axis
        let ray = Ray::new(Vec3::new(-5.0, 1.0, 1.0), Vec3::X);
        assert_eq!(cube.intersect(&ray), Some(5.0));

        let ray = Ray::new(Vec3::new(1.0, 5.0, 1.0), -Vec3::Y);
        assert_eq!(cube.intersect(&ray), Some(3.0));

        let ray = Ray::new(Vec3::new(2.5, 5.0, 1.0), -Vec3::Y);
        assert_eq!(cube.intersect(&ray), None);
    }

    #[test]
    fn test_unit_cube_hit_and_normal() {
        let cube = Cube::new(Vec3::ZERO, 1.0, 1);
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::X);

        let t = cube.intersect(&ray).expect("ray should hit the cube");
        assert!((t - 4.5).abs() < 1e-9);
        assert_eq!(cube.normal_at(ray.at(t)), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_cube_hit_from_above() {
        let cube = Cube::new(Vec3::new(0.0, -0.5, -5.0), 1.0, 1);
        let ray = Ray::towards(Vec3::new(0.1, 3.0, -5.1), Vec3::new(0.1, -3.0, -5.1));

        let t = cube.intersect(&ray).expect("ray should hit the cube");
        assert!((t - 3.0).abs() < 1e-9);
        assert_eq!(cube.normal_at(ray.at(t)), Vec3::Y);
    }
}
