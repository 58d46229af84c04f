use crate::math::Vector3;

/// Initial lower bound on every axis; any real coordinate below it improves the box.
pub const LOW_SENTINEL: f64 = 10000.0;
/// Initial upper bound on every axis.
pub const HIGH_SENTINEL: f64 = -10000.0;

const AXIS_LABELS: [char; 3] = ['x', 'y', 'z'];

/// Axis-aligned bounding box accumulated from vertex positions.
///
/// Starts out inverted at the sentinel values and only ever grows. A box
/// that never saw a vertex keeps the sentinels, and they are reported as-is.
/// The sentinels also bound the reduction, so a lone vertex at x = 20000
/// reports x = 10000 - 20000.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub low: Vector3<f64>,
    pub high: Vector3<f64>,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            low: Vector3::splat(LOW_SENTINEL),
            high: Vector3::splat(HIGH_SENTINEL),
        }
    }
}

impl BoundingBox {
    pub fn new() -> Self {
        Self::default()
    }
    /// Grows the box to contain `point`.
    pub fn include(&mut self, point: Vector3<f64>) {
        self.low = self.low.min(point);
        self.high = self.high.max(point);
    }
    /// Returns true while the box is inverted, which only holds before the first vertex.
    pub fn is_sentinel(&self) -> bool {
        self.low.iter().zip(self.high.iter()).any(|(low, high)| low > high)
    }
    /// Returns `(label, low, high)` for the x, y and z axes in order.
    pub fn axes(&self) -> impl Iterator<Item = (char, f64, f64)> + '_ {
        AXIS_LABELS
            .into_iter()
            .zip(self.low.iter().copied())
            .zip(self.high.iter().copied())
            .map(|((label, low), high)| (label, low, high))
    }
}

impl FromIterator<Vector3<f64>> for BoundingBox {
    fn from_iter<I: IntoIterator<Item = Vector3<f64>>>(iter: I) -> Self {
        let mut result = Self::new();
        for point in iter {
            result.include(point);
        }
        result
    }
}
