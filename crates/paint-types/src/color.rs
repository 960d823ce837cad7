//! RGBA color type and the tolerance comparator.

use std::ops::{Add, AddAssign, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RGBA color with `f32` channels, nominally in `[0, 1]`.
///
/// The alpha channel participates in color comparison as a fourth channel.
/// In this domain it is typically `1.0` everywhere, but it is not
/// special-cased anywhere.
///
/// # Example
///
/// ```
/// use paint_types::Color;
///
/// let red = Color::rgb(1.0, 0.0, 0.0);
/// assert!(red.approx_eq(Color::RED, 0.0));
/// assert!(!red.approx_eq(Color::BLUE, 0.1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Fully transparent black `(0, 0, 0, 0)`.
    ///
    /// Used as the defined result for degenerate sampling queries.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);

    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Create a color from all four channels.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (`a = 1.0`).
    ///
    /// # Example
    ///
    /// ```
    /// use paint_types::Color;
    ///
    /// let c = Color::rgb(0.2, 0.4, 0.6);
    /// assert_eq!(c.a, 1.0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Return this color with the alpha channel replaced.
    #[inline]
    #[must_use]
    pub const fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    /// Squared Euclidean distance over all four channels.
    #[inline]
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        let da = self.a - other.a;
        da.mul_add(da, db.mul_add(db, dr.mul_add(dr, dg * dg)))
    }

    /// Tolerance-based color equality.
    ///
    /// Two colors are considered equal when their squared channel distance,
    /// divided by 3, does not exceed `tolerance`. The divisor of 3 is kept
    /// for parity with the established tolerance scale of this tool family;
    /// every public operation threads `tolerance` through explicitly.
    ///
    /// The test is symmetric and reflexive for any `tolerance >= 0`, and
    /// monotone in `tolerance`.
    ///
    /// # Example
    ///
    /// ```
    /// use paint_types::Color;
    ///
    /// let a = Color::rgb(1.0, 0.0, 0.0);
    /// let b = Color::rgb(0.95, 0.0, 0.0);
    /// assert!(a.approx_eq(b, 0.005));
    /// assert!(!a.approx_eq(b, 0.0001));
    /// ```
    #[inline]
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f32) -> bool {
        self.distance_squared(other) / 3.0 <= tolerance
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}
