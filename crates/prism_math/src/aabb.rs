use crate::{Interval, Ray, Vec3, EPSILON};

const AXES: [Vec3; 3] = [Vec3::X, Vec3::Y, Vec3::Z];

/// Axis-aligned box, the geometric body of a cube primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create a cube-shaped AABB with edge length `size` around `center`.
    pub fn from_center_size(center: Vec3, size: f64) -> Self {
        let half = Vec3::splat(size / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        Interval::new(self.min[n], self.max[n])
    }

    /// Slab test: the entry distance of `ray` into the box.
    ///
    /// Returns `None` when the ray misses, when the box lies behind the ray,
    /// or when the origin is inside the box (the entry distance is negative).
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let mut ray_t = Interval::UNIVERSE;

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];

            if direction.abs() < EPSILON {
                // Parallel to this pair of slabs: either always between them or never
                if !slab.contains(origin) {
                    return None;
                }
                continue;
            }

            let t1 = (slab.min - origin) / direction;
            let t2 = (slab.max - origin) / direction;
            ray_t = ray_t.intersect(&Interval::new(t1.min(t2), t1.max(t2)));

            if ray_t.is_empty() || ray_t.max < 0.0 {
                return None;
            }
        }

        (ray_t.min >= 0.0).then_some(ray_t.min)
    }

    /// Outward face normal at a point on the surface of the box.
    ///
    /// Axes are tested in x, y, z order and the first face within
    /// [`EPSILON`] wins, so edges and corners report the lowest axis.
    /// Points off the surface fall back to the nearest face.
    pub fn face_normal(&self, p: Vec3) -> Vec3 {
        for (axis, unit) in AXES.iter().enumerate() {
            if (p[axis] - self.min[axis]).abs() < EPSILON {
                return -*unit;
            }
            if (p[axis] - self.max[axis]).abs() < EPSILON {
                return *unit;
            }
        }

        let mut best = (f64::INFINITY, Vec3::ZERO);
        for (axis, unit) in AXES.iter().enumerate() {
            let to_min = (p[axis] - self.min[axis]).abs();
            let to_max = (p[axis] - self.max[axis]).abs();
            if to_min < best.0 {
                best = (to_min, -*unit);
            }
            if to_max < best.0 {
                best = (to_max, *unit);
            }
        }
        best.1
    }
}
