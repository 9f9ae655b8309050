// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]
//! Shared fixtures for sensor integration tests.

use sweep_dry_tests::{RecordingReceiver, StaticTransforms};
use sweep_geom::{Transform2, Vec2};
use sweep_sensor::{ColliderId, LineHit, SensorConfig, SweepSensor, TargetId};

pub const BLADE: TargetId = TargetId(1);
pub const DUMMY: TargetId = TargetId(2);

/// Three samples at local (0,0), (0,1), (0,2); explicit play only.
pub fn vertical_sensor(config: SensorConfig) -> (SweepSensor<RecordingReceiver>, RecordingReceiver) {
    let receiver = RecordingReceiver::new();
    let sensor = SweepSensor::builder(config.with_play_on_start(false))
        .start_anchor(Vec2::new(0.0, 0.0))
        .end_anchor(Vec2::new(0.0, 2.0))
        .target(BLADE)
        .receiver(receiver.clone())
        .build()
        .expect("valid sensor");
    (sensor, receiver)
}

/// Blade translated to `(x, 0)`.
pub fn blade_at(x: f32) -> StaticTransforms {
    StaticTransforms::single(BLADE, Transform2::from_translation(Vec2::new(x, 0.0)))
}

/// A raw hit on `collider` owned by `owner`.
pub fn raw(collider: u64, owner: TargetId) -> LineHit {
    LineHit {
        collider: ColliderId(collider),
        point: Vec2::ZERO,
        owner,
    }
}
