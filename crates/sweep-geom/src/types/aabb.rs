// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec2;

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Values are `f32` and represent metres in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb2 {
    min: Vec2,
    max: Vec2,
}

impl Aabb2 {
    /// Constructs a box from two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: Vec2::new(a.x().min(b.x()), a.y().min(b.y())),
            max: Vec2::new(a.x().max(b.x()), a.y().max(b.y())),
        }
    }

    /// Builds a box centered at `center` with half-extents `hx, hy`.
    ///
    /// Negative half-extents are treated as their absolute value.
    #[must_use]
    pub fn from_center_half_extents(center: Vec2, hx: f32, hy: f32) -> Self {
        let he = Vec2::new(hx.abs(), hy.abs());
        Self {
            min: center.sub(&he),
            max: center.add(&he),
        }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.min.lerp(&self.max, 0.5)
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Vec2) -> bool {
        p.x() >= self.min.x() && p.x() <= self.max.x() && p.y() >= self.min.y() && p.y() <= self.max.y()
    }

    /// Returns `true` if this box overlaps another (inclusive on edges).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.max.x() < other.min.x()
            || self.min.x() > other.max.x()
            || self.max.y() < other.min.y()
            || self.min.y() > other.max.y())
    }

    /// Returns a copy moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vec2) -> Self {
        Self {
            min: self.min.add(offset),
            max: self.max.add(offset),
        }
    }
}
