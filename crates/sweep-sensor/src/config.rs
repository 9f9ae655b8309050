// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Immutable sensor configuration.
//!
//! A [`SensorConfig`] is captured once when the sensor is built. Changing any
//! option means building a new sensor (or calling
//! [`crate::SweepSensor::initialize_sensors`] for the sampling span).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cast::{CastKind, CastKinds};

/// Default number of sample points along the sensor span.
pub const DEFAULT_SENSOR_COUNT: usize = 3;
/// Default lifetime of debug lines, in seconds.
pub const DEFAULT_RAY_LIFETIME: f32 = 0.4;

/// Which anchor or reference is missing when building a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Start of the sampling span (target-local).
    Start,
    /// End of the sampling span (target-local).
    End,
    /// The moving object the span is attached to.
    Target,
}

impl core::fmt::Display for Anchor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Target => "target",
        };
        f.write_str(name)
    }
}

/// Rejected sensor configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Fewer than two sample points; interpolation would divide by zero.
    #[error("sensor_count must be at least 2 (got {count})")]
    SensorCountTooLow {
        /// Requested sample count.
        count: usize,
    },
    /// Tick-modulus rate of zero.
    #[error("tick rate must be at least 1")]
    ZeroTickRate,
    /// Negative or non-finite minimum travel distance.
    #[error("min_distance must be finite and >= 0 (got {value})")]
    InvalidMinDistance {
        /// Offending value.
        value: f32,
    },
    /// Non-positive or non-finite debug ray lifetime.
    #[error("ray_lifetime must be finite and > 0 (got {value})")]
    InvalidRayLifetime {
        /// Offending value.
        value: f32,
    },
    /// Anchor point or target not provided.
    #[error("missing {0} anchor")]
    MissingAnchor(Anchor),
    /// Anchor point is NaN or infinite.
    #[error("{0} anchor is not finite")]
    NonFiniteAnchor(Anchor),
    /// No hit receiver was provided.
    #[error("missing hit receiver")]
    MissingReceiver,
}

/// How often the sweep runs while an episode is active.
///
/// Both policies have an "always run" setting: `TickModulus { rate: 1 }` and
/// `DistanceThreshold { min_distance: 0.0 }` behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RateLimit {
    /// Sweep on every `rate`-th active tick.
    TickModulus {
        /// Tick period; 1 sweeps every tick.
        rate: u32,
    },
    /// Sweep only once the end anchor has travelled at least `min_distance`
    /// since the previous sweep.
    DistanceThreshold {
        /// Minimum travel in world units; 0 disables the check.
        min_distance: f32,
    },
}

impl RateLimit {
    /// Sweep on every tick.
    pub const fn always() -> Self {
        Self::TickModulus { rate: 1 }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::TickModulus { rate: 0 } => Err(ConfigError::ZeroTickRate),
            Self::DistanceThreshold { min_distance }
                if !min_distance.is_finite() || min_distance < 0.0 =>
            {
                Err(ConfigError::InvalidMinDistance {
                    value: min_distance,
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for RateLimit {
    fn default() -> Self {
        Self::always()
    }
}

/// Debug visualization options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DebugOptions {
    /// Draw every cast (and hit markers) into the debug sink.
    pub show_rays: bool,
    /// Seconds a cast line stays visible; hit markers last 1.5x this.
    pub ray_lifetime: f32,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            show_rays: true,
            ray_lifetime: DEFAULT_RAY_LIFETIME,
        }
    }
}

/// Sensor configuration value object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SensorConfig {
    /// Sample points along the start–end span (>= 2).
    pub sensor_count: usize,
    /// Sweep throttling policy.
    pub rate_limit: RateLimit,
    /// Cast families issued each sweep.
    pub casts: CastKinds,
    /// End the episode right after the first accepted hit.
    pub stop_after_first_hit: bool,
    /// Start an episode automatically on the first tick.
    pub play_on_start: bool,
    /// Debug drawing.
    pub debug: DebugOptions,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            sensor_count: DEFAULT_SENSOR_COUNT,
            rate_limit: RateLimit::always(),
            casts: CastKinds::ALL,
            stop_after_first_hit: false,
            play_on_start: true,
            debug: DebugOptions::default(),
        }
    }
}

impl SensorConfig {
    /// Checks every option, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sensor_count < 2 {
            return Err(ConfigError::SensorCountTooLow {
                count: self.sensor_count,
            });
        }
        self.rate_limit.validate()?;
        let lifetime = self.debug.ray_lifetime;
        if !lifetime.is_finite() || lifetime <= 0.0 {
            return Err(ConfigError::InvalidRayLifetime { value: lifetime });
        }
        Ok(())
    }

    /// Returns a copy with `sensor_count` replaced.
    pub fn with_sensor_count(mut self, count: usize) -> Self {
        self.sensor_count = count;
        self
    }

    /// Returns a copy with the rate limit replaced.
    pub fn with_rate_limit(mut self, rate_limit: RateLimit) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Returns a copy issuing only `casts`.
    pub fn with_casts(mut self, casts: CastKinds) -> Self {
        self.casts = casts;
        self
    }

    /// Returns a copy with `stop_after_first_hit` set.
    pub fn with_stop_after_first_hit(mut self, stop: bool) -> Self {
        self.stop_after_first_hit = stop;
        self
    }

    /// Returns a copy with `play_on_start` set.
    pub fn with_play_on_start(mut self, play: bool) -> Self {
        self.play_on_start = play;
        self
    }

    /// Returns a copy with debug rays toggled.
    pub fn with_debug_rays(mut self, show: bool) -> Self {
        self.debug.show_rays = show;
        self
    }

    /// Whether `kind` casts are issued.
    pub fn casts_enabled(&self, kind: CastKind) -> bool {
        self.casts.contains(kind)
    }
}
