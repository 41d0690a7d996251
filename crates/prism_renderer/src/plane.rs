//! Infinite plane primitive.

use prism_math::{Ray, Vec3, EPSILON};

/// The set of points P with `normal · P = offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfinitePlane {
    normal: Vec3,
    offset: f64,
    material_index: usize,
}

impl InfinitePlane {
    /// Create a plane, normalizing `normal` and scaling `offset` to match.
    ///
    /// Returns `None` for a zero-length normal.
    pub fn new(normal: Vec3, offset: f64, material_index: usize) -> Option<Self> {
        let length = normal.length();
        if length < EPSILON {
            return None;
        }
        Some(Self {
            normal: normal / length,
            offset: offset / length,
            material_index,
        })
    }

    /// Hit distance along a unit-length ray, if the plane is ahead of it.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (self.offset - self.normal.dot(ray.origin())) / denom;
        (t >= 0.0).then_some(t)
    }

    /// The plane normal is the same everywhere.
    pub fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    pub fn material_index(&self) -> usize {
        self.material_index
    }
}
