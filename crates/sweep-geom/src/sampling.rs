// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Evenly spaced sample points between two anchors.

use crate::math::Vec2;

/// Returns `count` points linearly interpolated from `start` to `end`.
///
/// Point `i` sits at `t = i / (count - 1)`. The first and last points are
/// assigned from the anchors directly, so they match exactly regardless of
/// float rounding in the step.
///
/// Returns `None` when `count < 2`, since the step would divide by zero.
///
/// # Examples
/// ```
/// use sweep_geom::{lerp_points, Vec2};
/// let pts = lerp_points(Vec2::new(0.0, 0.0), Vec2::new(0.0, 2.0), 3).unwrap();
/// assert_eq!(pts, vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(0.0, 2.0)]);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn lerp_points(start: Vec2, end: Vec2, count: usize) -> Option<Vec<Vec2>> {
    if count < 2 {
        return None;
    }
    let last = count - 1;
    let denom = last as f32;
    let points = (0..count)
        .map(|i| match i {
            0 => start,
            i if i == last => end,
            i => start.lerp(&end, i as f32 / denom),
        })
        .collect();
    Some(points)
}
