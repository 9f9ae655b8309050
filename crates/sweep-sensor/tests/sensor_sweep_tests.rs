// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Sweep geometry as seen through the collision backend.

mod common;

use common::{blade_at, raw, vertical_sensor, BLADE, DUMMY};
use core::f32::consts::FRAC_PI_2;
use sweep_dry_tests::{RecordingSink, ScriptedQuery, StaticTransforms};
use sweep_geom::{Segment, Transform2, Vec2};
use sweep_sensor::{
    CastKind, CastKinds, Color, LineWorld, RateLimit, SensorConfig, SweepSensor, TickOutcome,
};

#[test]
fn play_snaps_last_positions_to_current_world_positions() {
    let (mut sensor, _) = vertical_sensor(SensorConfig::default());
    let tf = StaticTransforms::single(
        BLADE,
        Transform2::new(Vec2::new(2.0, 3.0), FRAC_PI_2, Vec2::new(1.0, 1.0)),
    );
    sensor.play(&tf);
    let expected = [Vec2::new(2.0, 3.0), Vec2::new(1.0, 3.0), Vec2::new(0.0, 3.0)];
    for (got, want) in sensor.last_positions().iter().zip(expected) {
        assert!(got.approx_eq(&want, 1e-5), "got {got:?}, want {want:?}");
    }
}

#[test]
fn first_sweep_after_play_is_zero_length() {
    let (mut sensor, receiver) =
        vertical_sensor(SensorConfig::default().with_casts(CastKinds::only(CastKind::Horizontal)));
    let mut world = LineWorld::new();
    // Sits right on sample 1; a stale last position would sweep through it.
    world.add_circle(DUMMY, "on-sample", Vec2::new(5.0, 1.0), 0.2);
    let query = ScriptedQuery::wrapping(world);

    let tf = blade_at(5.0);
    sensor.play(&tf);
    sensor.tick(&query, &tf);

    for seg in query.calls() {
        assert!(seg.is_degenerate(), "expected zero-length cast, got {seg:?}");
    }
    // The sample point is inside the circle, so the point test still fires.
    assert_eq!(receiver.count(), 1);
}

#[test]
fn three_samples_report_one_horizontal_hit_through_y_one() {
    let (mut sensor, receiver) = vertical_sensor(SensorConfig::default());
    let mut world = LineWorld::new();
    let target = world.add_box(DUMMY, "crossing", Vec2::new(0.5, 1.0), 0.1, 0.1);

    let start = blade_at(0.0);
    sensor.play(&start);
    assert_eq!(
        sensor.last_positions(),
        &[Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(0.0, 2.0)]
    );

    let report = sensor.tick(&world, &blade_at(1.0));
    assert_eq!(report.outcome, TickOutcome::Swept);
    assert_eq!(report.casts, 8);
    assert_eq!(receiver.count(), 1);
    let hit = receiver.hits()[0];
    assert_eq!(hit.collider, target);
    assert_eq!(hit.kind, CastKind::Horizontal);
    assert!(hit.point.approx_eq(&Vec2::new(0.4, 1.0), 1e-5));
}

#[test]
fn casts_are_issued_in_fixed_order() {
    let (mut sensor, _) = vertical_sensor(SensorConfig::default());
    let query = ScriptedQuery::new();
    sensor.play(&blade_at(0.0));
    sensor.tick(&query, &blade_at(1.0));

    let p = |x: f32, y: f32| Vec2::new(x, y);
    let expected = vec![
        Segment::new(p(0.0, 0.0), p(1.0, 0.0)), // 0 horizontal
        Segment::new(p(0.0, 0.0), p(1.0, 1.0)), // 0 bottom
        Segment::new(p(0.0, 1.0), p(1.0, 1.0)), // 1 horizontal
        Segment::new(p(0.0, 1.0), p(1.0, 0.0)), // 1 top
        Segment::new(p(0.0, 1.0), p(1.0, 2.0)), // 1 bottom
        Segment::new(p(0.0, 2.0), p(1.0, 2.0)), // 2 horizontal
        Segment::new(p(0.0, 2.0), p(1.0, 1.0)), // 2 top
        Segment::new(p(1.0, 0.0), p(1.0, 2.0)), // vertical
    ];
    assert_eq!(query.calls(), expected);
    assert_eq!(
        sensor.last_positions(),
        &[p(1.0, 0.0), p(1.0, 1.0), p(1.0, 2.0)]
    );
}

#[test]
fn vertical_cast_spans_the_current_strip() {
    let (mut sensor, receiver) =
        vertical_sensor(SensorConfig::default().with_casts(CastKinds::only(CastKind::Vertical)));
    let mut world = LineWorld::new();
    // Between samples 1 and 2, touching neither.
    world.add_box(DUMMY, "between", Vec2::new(3.0, 1.5), 0.1, 0.1);

    let tf = blade_at(3.0);
    sensor.play(&tf);
    let report = sensor.tick(&world, &tf);
    assert_eq!(report.casts, 1);
    assert_eq!(receiver.kinds(), vec![CastKind::Vertical]);
}

#[test]
fn intersection_casts_catch_what_horizontal_misses() {
    let config = SensorConfig::default().with_casts(
        CastKinds::only(CastKind::IntersectionTop).with(CastKind::IntersectionBottom),
    );
    let (mut sensor, receiver) = vertical_sensor(config);
    let mut world = LineWorld::new();
    // Sits in the gap between the horizontal tracks of samples 0 and 1.
    world.add_circle(DUMMY, "gap", Vec2::new(0.5, 0.5), 0.05);

    sensor.play(&blade_at(0.0));
    sensor.tick(&world, &blade_at(1.0));
    assert_eq!(receiver.count(), 1);
    assert_eq!(receiver.kinds(), vec![CastKind::IntersectionBottom]);
}

#[test]
fn transforms_are_looked_up_once_per_sample_per_tick() {
    let (mut sensor, _) = vertical_sensor(SensorConfig::default());
    let tf = blade_at(0.0);
    sensor.play(&tf);
    assert_eq!(tf.lookups(), 3);
    tf.reset_lookups();
    sensor.tick(&ScriptedQuery::new(), &tf);
    assert_eq!(tf.lookups(), 3);
}

#[test]
fn query_failure_skips_rest_of_tick_and_recovers() {
    let (mut sensor, _) = vertical_sensor(SensorConfig::default());
    let query = ScriptedQuery::new();
    sensor.play(&blade_at(0.0));

    // Third call is sample 1's horizontal cast.
    query.fail_on_call(3);
    let report = sensor.tick(&query, &blade_at(1.0));
    assert_eq!(report.outcome, TickOutcome::Aborted);
    assert_eq!(report.casts, 3);
    assert_eq!(query.call_count(), 3);
    // Sample 0 finished its casts; samples 1 and 2 did not.
    assert_eq!(sensor.last_positions()[0], Vec2::new(1.0, 0.0));
    assert_eq!(sensor.last_positions()[1], Vec2::new(0.0, 1.0));
    assert_eq!(sensor.last_positions()[2], Vec2::new(0.0, 2.0));
    assert!(sensor.is_playing());

    let report = sensor.tick(&query, &blade_at(2.0));
    assert_eq!(report.outcome, TickOutcome::Swept);
    assert_eq!(report.casts, 8);
    // Sample 1's horizontal cast now spans both ticks of movement.
    assert_eq!(
        query.calls()[5],
        Segment::new(Vec2::new(0.0, 1.0), Vec2::new(2.0, 1.0))
    );
}

#[test]
fn aborted_sweep_leaves_distance_reference_behind() {
    let config = SensorConfig::default()
        .with_rate_limit(RateLimit::DistanceThreshold { min_distance: 1.0 });
    let (mut sensor, _) = vertical_sensor(config);
    let query = ScriptedQuery::new();
    sensor.play(&blade_at(0.0));

    query.fail_on_call(1);
    let report = sensor.tick(&query, &blade_at(1.0));
    assert_eq!(report.outcome, TickOutcome::Aborted);
    assert_eq!(sensor.last_positions()[2], Vec2::new(0.0, 2.0));

    // Still 1.5 from the last completed sweep of the end sample.
    let report = sensor.tick(&query, &blade_at(1.5));
    assert_eq!(report.outcome, TickOutcome::Swept);
    assert_eq!(sensor.last_positions()[2], Vec2::new(1.5, 2.0));

    let report = sensor.tick(&query, &blade_at(2.0));
    assert_eq!(report.outcome, TickOutcome::RateLimited);
}

#[test]
fn failure_on_the_boundary_cast_still_moves_the_distance_reference() {
    let config = SensorConfig::default()
        .with_rate_limit(RateLimit::DistanceThreshold { min_distance: 1.0 });
    let (mut sensor, _) = vertical_sensor(config);
    let query = ScriptedQuery::new();
    sensor.play(&blade_at(0.0));

    // Call 8 is the vertical cast, after every sample has advanced.
    query.fail_on_call(8);
    let report = sensor.tick(&query, &blade_at(1.0));
    assert_eq!(report.outcome, TickOutcome::Aborted);
    assert_eq!(sensor.last_positions()[2], Vec2::new(1.0, 2.0));

    let report = sensor.tick(&query, &blade_at(1.5));
    assert_eq!(report.outcome, TickOutcome::RateLimited);
}

#[test]
fn debug_lines_use_kind_colours_and_mark_hits() {
    let sink = RecordingSink::new();
    let receiver = sweep_dry_tests::RecordingReceiver::new();
    let mut sensor = SweepSensor::builder(SensorConfig::default().with_play_on_start(false))
        .start_anchor(Vec2::new(0.0, 0.0))
        .end_anchor(Vec2::new(0.0, 2.0))
        .target(BLADE)
        .receiver(receiver)
        .debug_sink(sink.clone())
        .build()
        .expect("valid sensor");

    sensor.play(&blade_at(0.0));
    sensor.tick(&LineWorld::new(), &blade_at(1.0));
    assert_eq!(sink.lines_in(Color::WHITE), 3);
    assert_eq!(sink.lines_in(Color::MAGENTA), 2);
    assert_eq!(sink.lines_in(Color::YELLOW), 2);
    assert_eq!(sink.lines_in(Color::CYAN), 1);
    assert_eq!(sink.lines_in(Color::RED), 0);

    let mut world = LineWorld::new();
    world.add_box(DUMMY, "crossing", Vec2::new(1.5, 1.0), 0.1, 0.1);
    sensor.tick(&world, &blade_at(2.0));
    // One red horizontal cast plus the two strokes of the hit cross.
    assert_eq!(sink.lines_in(Color::RED), 3);
}

#[test]
fn hidden_rays_draw_nothing_but_gizmos_still_work() {
    let sink = RecordingSink::new();
    let mut sensor = SweepSensor::builder(
        SensorConfig::default()
            .with_play_on_start(false)
            .with_debug_rays(false),
    )
    .start_anchor(Vec2::new(0.0, 0.0))
    .end_anchor(Vec2::new(0.0, 2.0))
    .target(BLADE)
    .receiver(sweep_dry_tests::RecordingReceiver::new())
    .debug_sink(sink.clone())
    .build()
    .expect("valid sensor");

    sensor.play(&blade_at(0.0));
    sensor.tick(&ScriptedQuery::always(vec![raw(9, DUMMY)]), &blade_at(1.0));
    assert!(sink.calls().is_empty());

    let mut gizmos = sink.clone();
    sensor.draw_gizmos(&blade_at(1.0), &mut gizmos);
    assert_eq!(sink.markers_in(Color::GREEN), 3);
    assert_eq!(sink.markers_in(Color::YELLOW), 2);
}
