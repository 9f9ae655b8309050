// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{lerp, EPSILON};

/// 2D vector used for sensor points, hit points and cast endpoints.
///
/// * Components encode metres and may represent either points or directions
///   depending on the calling context.
/// * Use [`crate::Transform2::transform_point`] to move a local-space point
///   into world space.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f32; 2]", into = "[f32; 2]"))]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> f32 {
        self.data[1]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y())
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Component-wise product.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(self.x() * other.x(), self.y() * other.y())
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Z component of the 3D cross product (signed parallelogram area).
    pub fn perp_dot(&self, other: &Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f32 {
        self.sub(other).length()
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Linear interpolation towards `other` by `t` (unclamped).
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(lerp(self.x(), other.x(), t), lerp(self.y(), other.y(), t))
    }

    /// Returns `true` if both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    /// Returns `true` when every component differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (self.x() - other.x()).abs() <= tolerance && (self.y() - other.y()).abs() <= tolerance
    }
}

/// Converts a 2-element `[f32; 2]` array into a `Vec2` interpreted as `(x, y)`.
///
/// # Examples
/// ```
/// use sweep_geom::Vec2;
/// let v = Vec2::from([1.0, 2.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0]);
/// ```
impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        value.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn normalize_degenerate_is_zero() {
        assert_eq!(Vec2::new(1e-9, 0.0).normalize(), Vec2::ZERO);
        assert_eq!(Vec2::new(0.0, 2.0).normalize(), Vec2::UNIT_Y);
    }

    #[test]
    fn perp_dot_sign_tracks_orientation() {
        assert!(Vec2::UNIT_X.perp_dot(&Vec2::UNIT_Y) > 0.0);
        assert!(Vec2::UNIT_Y.perp_dot(&Vec2::UNIT_X) < 0.0);
    }
}
