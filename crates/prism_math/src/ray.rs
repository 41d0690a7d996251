use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// The renderer keeps `direction` unit-length so that the parameter `t`
/// returned by intersection tests is a true distance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from `origin` towards `target`, normalizing the direction.
    pub fn towards(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, (target - origin).normalize())
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}
