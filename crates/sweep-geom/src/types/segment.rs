// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Vec2, EPSILON};
use crate::types::aabb::Aabb2;

/// Directed line segment from `from` to `to`.
///
/// Intersection queries return the entry parameter `t ∈ [0, 1]` along the
/// segment (`point_at(t)` gives the contact point). A segment that starts
/// inside a shape reports `t = 0`. Zero-length segments degrade to a point
/// containment test.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    from: Vec2,
    to: Vec2,
}

impl Segment {
    /// Creates a segment between two points.
    #[must_use]
    pub const fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    /// Start point.
    #[must_use]
    pub const fn from(&self) -> Vec2 {
        self.from
    }

    /// End point.
    #[must_use]
    pub const fn to(&self) -> Vec2 {
        self.to
    }

    /// Unnormalised direction `to - from`.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.to.sub(&self.from)
    }

    /// Segment length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.delta().length()
    }

    /// Returns `true` when both endpoints coincide (within `EPSILON`).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.delta().length_squared() <= EPSILON * EPSILON
    }

    /// Point at parameter `t` along the segment.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.from.lerp(&self.to, t)
    }

    /// Entry parameter against an axis-aligned box (slab test), if any.
    #[must_use]
    pub fn intersect_aabb(&self, aabb: &Aabb2) -> Option<f32> {
        let d = self.delta().to_array();
        let p = self.from.to_array();
        let lo = aabb.min().to_array();
        let hi = aabb.max().to_array();

        let mut t_min = 0.0_f32;
        let mut t_max = 1.0_f32;
        for axis in 0..2 {
            if d[axis].abs() <= EPSILON {
                if p[axis] < lo[axis] || p[axis] > hi[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d[axis];
            let mut t1 = (lo[axis] - p[axis]) * inv;
            let mut t2 = (hi[axis] - p[axis]) * inv;
            if t1 > t2 {
                core::mem::swap(&mut t1, &mut t2);
            }
            t_min = t_min.max(t1);
            t_max = t_max.min(t2);
            if t_min > t_max {
                return None;
            }
        }
        Some(t_min)
    }

    /// Entry parameter against a circle, if any.
    #[must_use]
    pub fn intersect_circle(&self, center: &Vec2, radius: f32) -> Option<f32> {
        let f = self.from.sub(center);
        let c = f.length_squared() - radius * radius;
        if c <= 0.0 {
            return Some(0.0);
        }
        if self.is_degenerate() {
            return None;
        }
        let d = self.delta();
        let a = d.length_squared();
        let b = 2.0 * f.dot(&d);
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return None;
        }
        let t = (-b - disc.sqrt()) / (2.0 * a);
        (0.0..=1.0).contains(&t).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_entry_parameter() {
        let b = Aabb2::from_center_half_extents(Vec2::new(5.0, 0.0), 1.0, 1.0);
        let s = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let t = s.intersect_aabb(&b);
        assert_eq!(t, Some(0.4));
        assert_eq!(s.point_at(0.4), Vec2::new(4.0, 0.0));
    }

    #[test]
    fn aabb_miss_and_short_segment() {
        let b = Aabb2::from_center_half_extents(Vec2::new(5.0, 0.0), 1.0, 1.0);
        let above = Segment::new(Vec2::new(0.0, 2.0), Vec2::new(10.0, 2.0));
        let short = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0));
        assert_eq!(above.intersect_aabb(&b), None);
        assert_eq!(short.intersect_aabb(&b), None);
    }

    #[test]
    fn degenerate_segment_is_point_test() {
        let b = Aabb2::from_center_half_extents(Vec2::ZERO, 1.0, 1.0);
        let inside = Segment::new(Vec2::new(0.5, 0.5), Vec2::new(0.5, 0.5));
        let outside = Segment::new(Vec2::new(3.0, 0.0), Vec2::new(3.0, 0.0));
        assert_eq!(inside.intersect_aabb(&b), Some(0.0));
        assert_eq!(outside.intersect_aabb(&b), None);
        assert_eq!(inside.intersect_circle(&Vec2::ZERO, 1.0), Some(0.0));
        assert_eq!(outside.intersect_circle(&Vec2::ZERO, 1.0), None);
    }

    #[test]
    fn circle_entry_parameter() {
        let s = Segment::new(Vec2::new(-4.0, 0.0), Vec2::new(4.0, 0.0));
        assert_eq!(s.intersect_circle(&Vec2::ZERO, 2.0), Some(0.25));
        let behind = Segment::new(Vec2::new(4.0, 0.0), Vec2::new(8.0, 0.0));
        assert_eq!(behind.intersect_circle(&Vec2::ZERO, 2.0), None);
    }
}
