//! Host camera interface.

use crate::raycast::Ray;

/// A point in screen space, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Horizontal pixel coordinate.
    pub x: f64,
    /// Vertical pixel coordinate.
    pub y: f64,
}

impl ScreenPoint {
    /// Create a screen point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean pixel distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    /// Linear interpolation toward another point.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: (1.0 - t) * self.x + t * other.x,
            y: (1.0 - t) * self.y + t * other.y,
        }
    }
}

impl From<(f64, f64)> for ScreenPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// The host's camera projection.
///
/// Implementations map a screen-space point to a ray in the mesh's local
/// space. The paint operations never touch view matrices themselves; this
/// trait is the entire camera contract.
pub trait ViewProjection {
    /// The ray under a screen point, in mesh-local coordinates.
    fn screen_ray(&self, point: ScreenPoint) -> Ray;
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = ScreenPoint::new(0.0, 0.0);
        let b = ScreenPoint::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn lerp_midpoint() {
        let a = ScreenPoint::new(0.0, 0.0);
        let b = ScreenPoint::new(2.0, 6.0);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid, ScreenPoint::new(1.0, 3.0));
    }
}
