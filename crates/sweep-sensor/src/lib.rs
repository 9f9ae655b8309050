// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sweep sensor core.
//!
//! A [`SweepSensor`] spreads N sample points between two anchors attached to
//! a moving target. Every fixed step it casts lines from where each point was
//! at the previous sweep to where it is now (plus diagonal and boundary
//! casts), asks a host [`LineQuery`] for intersections, and reports each
//! collider to a [`HitReceiver`] at most once per episode.
//!
//! ```
//! use sweep_geom::{Transform2, Vec2};
//! use sweep_sensor::{Hit, LineWorld, SensorConfig, SweepSensor, TargetId};
//!
//! let blade = TargetId(1);
//! let mut world = LineWorld::new();
//! world.add_circle(TargetId(2), "dummy", Vec2::new(1.0, 1.0), 0.25);
//!
//! let mut hits = Vec::new();
//! let mut sensor = SweepSensor::builder(SensorConfig::default())
//!     .start_anchor(Vec2::new(0.0, 0.0))
//!     .end_anchor(Vec2::new(0.0, 2.0))
//!     .target(blade)
//!     .receiver(|hit: &Hit| hits.push(hit.collider))
//!     .build()?;
//!
//! // The target slides right by one unit per step.
//! let at = |x: f32| move |_: TargetId| Transform2::from_translation(Vec2::new(x, 0.0));
//! sensor.play(&at(0.0));
//! sensor.tick(&world, &at(1.0));
//! sensor.tick(&world, &at(2.0));
//! drop(sensor);
//! assert_eq!(hits.len(), 1);
//! # Ok::<(), sweep_sensor::ConfigError>(())
//! ```

/// Host-facing ports (collision query, transforms) and identities.
pub mod backend;
/// Cast kinds and sweep-cast construction.
pub mod cast;
/// Immutable sensor configuration.
pub mod config;
/// Debug visualization sink.
pub mod debug;
/// Episode state machine.
pub mod episode;
/// Hits, receivers and the per-episode hit set.
pub mod hit;
/// Fixed-step pulse and flash timers.
pub mod pulse;
/// Sweep throttling.
pub mod rate;
/// The sensor and its tick driver.
pub mod sensor;
/// In-process reference collision world.
pub mod world;

pub use backend::{ColliderId, LineHit, LineQuery, QueryError, TargetId, TransformSource};
pub use cast::{CastKind, CastKinds, SweepCast};
pub use config::{Anchor, ConfigError, DebugOptions, RateLimit, SensorConfig};
pub use debug::{Color, DebugSink, NullSink};
pub use episode::{Episode, EpisodeState};
pub use hit::{Hit, HitReceiver, HitSet, Verdict};
pub use pulse::{FlashTimer, PulseEvent, PulsePhase, PulseTimer};
pub use rate::RateLimiter;
pub use sensor::{SensorArray, SensorBuilder, SweepSensor, TickOutcome, TickReport};
pub use world::{Collider, LineWorld, Shape};
