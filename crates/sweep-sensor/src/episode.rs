// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Episode state machine: `Idle <-> Active`.
//!
//! `begin` always resets the hit set (repeat calls while active are a plain
//! reset). `end` only halts; the hit set survives until the next `begin`.

use tracing::debug;

use crate::backend::{ColliderId, TargetId};
use crate::hit::{HitSet, Verdict};

/// Whether the sensor is sweeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EpisodeState {
    /// Not sweeping.
    #[default]
    Idle,
    /// Sweeping every eligible tick.
    Active,
}

/// The span between a play and the next stop, scoping hit deduplication.
#[derive(Debug, Default, Clone)]
pub struct Episode {
    state: EpisodeState,
    hits: HitSet,
    started: u64,
}

impl Episode {
    /// Idle episode with an empty hit set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> EpisodeState {
        self.state
    }

    /// Whether the episode is active.
    pub fn is_active(&self) -> bool {
        self.state == EpisodeState::Active
    }

    /// Number of episodes begun so far.
    pub fn started(&self) -> u64 {
        self.started
    }

    /// Colliders reported in the current (or last) episode.
    pub fn hits(&self) -> &HitSet {
        &self.hits
    }

    /// Starts a fresh episode, clearing the hit set.
    pub fn begin(&mut self) {
        self.hits.clear();
        self.state = EpisodeState::Active;
        self.started += 1;
        debug!(episode = self.started, "episode started");
    }

    /// Halts the episode. No-op when already idle.
    pub fn end(&mut self) {
        if self.state == EpisodeState::Idle {
            return;
        }
        self.state = EpisodeState::Idle;
        debug!(
            episode = self.started,
            hits = self.hits.len(),
            "episode stopped"
        );
    }

    /// Classifies one raw intersection and records it if accepted.
    pub fn screen(&mut self, own_target: TargetId, owner: TargetId, collider: ColliderId) -> Verdict {
        if owner == own_target {
            return Verdict::SelfHit;
        }
        if !self.is_active() {
            return Verdict::EpisodeClosed;
        }
        if !self.hits.insert(collider) {
            return Verdict::Duplicate;
        }
        Verdict::Accepted
    }
}
