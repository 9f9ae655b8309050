// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Headless swinging-blade scene.
//!
//! A blade spins about the origin with a sensor laid along it. A ring of
//! targets sits within its reach; a [`PulseTimer`] opens and closes hit
//! episodes the way an attack animation would, and every target hit flashes
//! for a short while.

use core::f32::consts::TAU;

use sweep_geom::{Transform2, Vec2};
use sweep_sensor::pulse::{DEFAULT_PAUSE_FOR, DEFAULT_PLAY_FOR};
use sweep_sensor::{
    ColliderId, ConfigError, FlashTimer, Hit, HitReceiver, LineWorld, PulseEvent, PulseTimer,
    SensorConfig, SweepSensor, TargetId, TickOutcome, TickReport,
};
use tracing::{debug, info};

/// The spinning blade.
pub const BLADE: TargetId = TargetId(1);
/// Owner id of the first ring target; the rest follow consecutively.
pub const FIRST_DUMMY: u64 = 100;

const HILT_RADIUS: f32 = 0.35;
const BLADE_START: Vec2 = Vec2::new(0.25, 0.0);
const BLADE_END: Vec2 = Vec2::new(3.0, 0.0);
const RING_RADIUS: f32 = 2.0;
const DUMMY_HALF_SIZE: f32 = 0.25;

/// Scene layout knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneOptions {
    /// Number of targets on the ring.
    pub targets: usize,
    /// Blade angular speed in radians per second.
    pub spin: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            targets: 8,
            spin: TAU,
        }
    }
}

#[derive(Debug, Default)]
struct HitLog(Vec<Hit>);

impl HitReceiver for HitLog {
    fn on_hit(&mut self, hit: &Hit) {
        self.0.push(*hit);
    }
}

/// A ring target that flashes when struck.
#[derive(Debug, Clone)]
pub struct Dummy {
    /// Collider registered in the world.
    pub collider: ColliderId,
    /// Display name.
    pub name: String,
    /// Times this target was reported.
    pub hits: u32,
    flash: FlashTimer,
}

impl Dummy {
    /// Whether the target is currently flashing.
    pub fn is_lit(&self) -> bool {
        self.flash.is_lit()
    }
}

/// Totals over a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Ticks stepped.
    pub ticks: u64,
    /// Ticks that ran a full sweep.
    pub sweeps: u64,
    /// Ticks skipped by the rate limiter.
    pub skipped: u64,
    /// Ticks whose sweep was cut short by a query failure.
    pub aborted: u64,
    /// Linecasts issued.
    pub casts: usize,
    /// Hits delivered.
    pub hits: usize,
    /// Intersections with the blade's own collider.
    pub self_hits: usize,
    /// Episodes opened by the pulse timer.
    pub episodes: u64,
}

impl RunStats {
    fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        match report.outcome {
            TickOutcome::Swept => self.sweeps += 1,
            TickOutcome::RateLimited => self.skipped += 1,
            TickOutcome::Aborted => self.aborted += 1,
            TickOutcome::Idle => {}
        }
        self.casts += report.casts;
        self.hits += report.accepted;
        self.self_hits += report.self_hits;
    }
}

/// Blade, targets, sensor and timers.
#[derive(Debug)]
pub struct Scene {
    world: LineWorld,
    sensor: SweepSensor<HitLog>,
    pulse: PulseTimer,
    dummies: Vec<Dummy>,
    angle: f32,
    spin: f32,
    stats: RunStats,
}

impl Scene {
    /// Builds the scene. Fails if `config` does not validate.
    pub fn new(config: SensorConfig, options: SceneOptions) -> Result<Self, ConfigError> {
        let mut world = LineWorld::new();
        world.add_circle(BLADE, "hilt", Vec2::ZERO, HILT_RADIUS);

        let mut dummies = Vec::with_capacity(options.targets);
        for k in 0..options.targets {
            #[allow(clippy::cast_precision_loss)]
            let theta = TAU * k as f32 / options.targets as f32;
            let center = Vec2::new(theta.cos(), theta.sin()).scale(RING_RADIUS);
            let owner = TargetId(FIRST_DUMMY + k as u64);
            let name = format!("dummy-{k}");
            let collider = if k % 2 == 0 {
                world.add_circle(owner, name.clone(), center, DUMMY_HALF_SIZE)
            } else {
                world.add_box(owner, name.clone(), center, DUMMY_HALF_SIZE, DUMMY_HALF_SIZE)
            };
            dummies.push(Dummy {
                collider,
                name,
                hits: 0,
                flash: FlashTimer::default(),
            });
        }

        let sensor = SweepSensor::builder(config)
            .start_anchor(BLADE_START)
            .end_anchor(BLADE_END)
            .target(BLADE)
            .receiver(HitLog::default())
            .build()?;
        debug!(targets = dummies.len(), "scene built");

        Ok(Self {
            world,
            sensor,
            pulse: PulseTimer::new(0.0, DEFAULT_PLAY_FOR, DEFAULT_PAUSE_FOR),
            dummies,
            angle: 0.0,
            spin: options.spin,
            stats: RunStats::default(),
        })
    }

    /// Advances the blade, the pulse and the sensor by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.angle = (self.angle + self.spin * dt).rem_euclid(TAU);
        let pose = Transform2::identity().with_rotation(self.angle);
        let transforms = move |_: TargetId| pose;

        match self.pulse.advance(dt) {
            Some(PulseEvent::Play) => {
                self.sensor.play(&transforms);
                self.stats.episodes += 1;
            }
            Some(PulseEvent::Stop) => self.sensor.stop(),
            None => {}
        }
        let report = self.sensor.tick(&self.world, &transforms);
        self.stats.record(&report);

        for dummy in &mut self.dummies {
            if dummy.flash.advance(dt) {
                debug!(dummy = %dummy.name, "flash cleared");
            }
        }
        for hit in core::mem::take(&mut self.sensor.receiver_mut().0) {
            if let Some(dummy) = self.dummies.iter_mut().find(|d| d.collider == hit.collider) {
                dummy.hits += 1;
                dummy.flash.trigger();
                info!(dummy = %dummy.name, kind = ?hit.kind, angle = self.angle, "target flashed");
            }
        }
    }

    /// Steps `ticks` times.
    pub fn run(&mut self, ticks: u64, dt: f32) -> RunStats {
        for _ in 0..ticks {
            self.step(dt);
        }
        self.stats
    }

    /// Ring targets in placement order.
    pub fn dummies(&self) -> &[Dummy] {
        &self.dummies
    }
}
