// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sweep throttling.

use sweep_geom::Vec2;

use crate::config::RateLimit;

/// Runtime state for the configured [`RateLimit`] policy.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    policy: RateLimit,
    frames: u32,
    last_end: Option<Vec2>,
}

impl RateLimiter {
    /// Fresh limiter for `policy`.
    pub fn new(policy: RateLimit) -> Self {
        Self {
            policy,
            frames: 0,
            last_end: None,
        }
    }

    /// Configured policy.
    pub fn policy(&self) -> RateLimit {
        self.policy
    }

    /// End-anchor position recorded at the last committed sweep (or reset).
    pub fn last_end(&self) -> Option<Vec2> {
        self.last_end
    }

    /// Restarts counting from `end_anchor`; called when an episode begins.
    pub fn reset(&mut self, end_anchor: Vec2) {
        self.frames = 0;
        self.last_end = Some(end_anchor);
    }

    /// Decides whether this active tick sweeps, given the end anchor's
    /// current world position.
    ///
    /// Tick-modulus: sweeps when the frame counter reaches a multiple of
    /// `rate`, then resets the counter. Distance: sweeps when the end anchor
    /// is at least `min_distance` away from the committed reference. The
    /// reference only moves on [`Self::commit`], so travel accumulates across
    /// skipped ticks and across sweeps that never reached the end anchor.
    pub fn admit(&mut self, end_anchor: Vec2) -> bool {
        match self.policy {
            RateLimit::TickModulus { rate } => {
                self.frames = self.frames.saturating_add(1);
                if self.frames % rate.max(1) != 0 {
                    return false;
                }
                self.frames = 0;
                true
            }
            RateLimit::DistanceThreshold { min_distance } => {
                let travelled = self
                    .last_end
                    .map_or(f32::INFINITY, |last| last.distance(&end_anchor));
                travelled >= min_distance
            }
        }
    }

    /// Records where the end anchor's last position stands after a sweep.
    pub fn commit(&mut self, end_anchor: Vec2) {
        self.last_end = Some(end_anchor);
    }
}
