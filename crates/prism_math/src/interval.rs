/// A closed range of ray distances, used to clip a ray against box slabs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Every distance along a ray, before any slab has been applied.
    pub const UNIVERSE: Interval = Interval {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True once clipping has left no distances.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Inclusive membership test.
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Narrows this interval to its overlap with `other`.
    pub fn intersect(&self, other: &Interval) -> Interval {
        Interval::new(self.min.max(other.min), self.max.min(other.max))
    }
}
