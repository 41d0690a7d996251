//! Sphere primitive for ray tracing.

use prism_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material_index: usize,
}

impl Sphere {
    /// Create a new sphere. `material_index` is 1-based.
    ///
    /// `radius` must be positive; scene records are checked in [`Surface::from_desc`].
    ///
    /// [`Surface::from_desc`]: crate::Surface::from_desc
    pub fn new(center: Vec3, radius: f64, material_index: usize) -> Self {
        Self {
            center,
            radius,
            material_index,
        }
    }

    /// Nearest non-negative hit distance along a unit-length ray.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let oc = ray.origin() - self.center;
        // Quadratic with a == 1 since the direction is unit length
        let h = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let near = -h - sqrtd;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -h + sqrtd;
        (far >= 0.0).then_some(far)
    }

    /// Outward unit normal at a point on the sphere.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center) / self.radius
    }

    pub fn material_index(&self) -> usize {
        self.material_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_front_surface() {
        for radius in [0.5, 1.0, 3.0] {
            let sphere = Sphere::new(Vec3::ZERO, radius, 1);
            let ray = Ray::new(Vec3::new(0.0, 0.0, -2.0 * radius), Vec3::Z);

            let t = sphere.intersect(&ray).expect("ray should hit the sphere");
            assert!((t - radius).abs() < 1e-6);
        }
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, 1);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(sphere.intersect(&ray), None);

        // Sphere entirely behind the ray
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn test_sphere_hit_from_inside_returns_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, 1);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let t = sphere.intersect(&ray).expect("ray should exit the sphere");
        assert!((t - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_normal() {
        let sphere = Sphere::new(Vec3::new(1.0, 0.0, 0.0), 2.0, 1);

        let normal = sphere.normal_at(Vec3::new(1.0, 2.0, 0.0));
        assert!((normal - Vec3::Y).length() < 1e-12);

        let normal = sphere.normal_at(Vec3::new(-1.0, 0.0, 0.0));
        assert!((normal + Vec3::X).length() < 1e-12);
    }
}
