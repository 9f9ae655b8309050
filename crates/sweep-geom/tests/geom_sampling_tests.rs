// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Integration tests for sample interpolation and segment casts.

use proptest::prelude::*;
use sweep_geom::{lerp_points, Aabb2, Segment, Transform2, Vec2};

fn coord() -> impl Strategy<Value = f32> {
    -1.0e3_f32..1.0e3_f32
}

proptest! {
    #[test]
    fn samples_start_and_end_on_anchors(
        sx in coord(), sy in coord(), ex in coord(), ey in coord(), count in 2usize..64
    ) {
        let start = Vec2::new(sx, sy);
        let end = Vec2::new(ex, ey);
        let pts = lerp_points(start, end, count).expect("count >= 2");
        prop_assert_eq!(pts.len(), count);
        prop_assert_eq!(pts[0], start);
        prop_assert_eq!(pts[count - 1], end);
    }

    #[test]
    fn samples_are_evenly_spaced(count in 2usize..32, len in 0.5_f32..100.0) {
        let pts = lerp_points(Vec2::ZERO, Vec2::new(0.0, len), count).expect("count >= 2");
        let step = len / (count - 1) as f32;
        for pair in pts.windows(2) {
            let gap = pair[1].y() - pair[0].y();
            prop_assert!((gap - step).abs() <= 1e-3 * len, "gap {} vs step {}", gap, step);
        }
    }
}

#[test]
fn three_samples_along_y() {
    let pts = lerp_points(Vec2::new(0.0, 0.0), Vec2::new(0.0, 2.0), 3).expect("count >= 2");
    assert_eq!(
        pts,
        vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(0.0, 2.0)]
    );
}

#[test]
fn transformed_samples_follow_target() {
    let target = Transform2::from_translation(Vec2::new(5.0, -1.0));
    let pts = lerp_points(Vec2::new(0.0, 0.0), Vec2::new(0.0, 2.0), 3).expect("count >= 2");
    let world: Vec<Vec2> = pts.iter().map(|p| target.transform_point(p)).collect();
    assert_eq!(world[1], Vec2::new(5.0, 0.0));
}

#[test]
fn sweep_through_box_reports_entry_point() {
    // A point moving from x=-2 to x=2 crosses a unit box at the origin.
    let b = Aabb2::from_center_half_extents(Vec2::ZERO, 0.5, 0.5);
    let s = Segment::new(Vec2::new(-2.0, 0.0), Vec2::new(2.0, 0.0));
    let t = s.intersect_aabb(&b).expect("crosses box");
    assert!(s.point_at(t).approx_eq(&Vec2::new(-0.5, 0.0), 1e-6));
}
