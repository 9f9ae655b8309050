// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Accepted hits, the receiver capability, and the per-episode hit set.

use rustc_hash::FxHashSet;
use sweep_geom::Vec2;

use crate::backend::{ColliderId, TargetId};
use crate::cast::CastKind;

/// A hit delivered to the [`HitReceiver`]: first contact with a collider in
/// the current episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Collider that was crossed.
    pub collider: ColliderId,
    /// Object the collider is attached to.
    pub owner: TargetId,
    /// World-space contact point.
    pub point: Vec2,
    /// Cast family that found it.
    pub kind: CastKind,
}

/// Receives accepted hits.
///
/// Closures taking `&Hit` implement this directly.
pub trait HitReceiver {
    /// Called at most once per collider per episode.
    fn on_hit(&mut self, hit: &Hit);
}

impl<F> HitReceiver for F
where
    F: FnMut(&Hit),
{
    fn on_hit(&mut self, hit: &Hit) {
        self(hit);
    }
}

/// Colliders already reported in the current episode.
#[derive(Debug, Default, Clone)]
pub struct HitSet {
    seen: FxHashSet<ColliderId>,
}

impl HitSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `collider`; returns `true` if it was not present yet.
    pub fn insert(&mut self, collider: ColliderId) -> bool {
        self.seen.insert(collider)
    }

    /// Whether `collider` was already reported.
    pub fn contains(&self, collider: ColliderId) -> bool {
        self.seen.contains(&collider)
    }

    /// Number of distinct colliders reported.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Forgets every collider.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

/// Outcome of screening one raw intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// New collider in an active episode; deliver it.
    Accepted,
    /// Collider attached to the sensor's own target.
    SelfHit,
    /// Collider already reported this episode.
    Duplicate,
    /// Episode ended earlier in this tick.
    EpisodeClosed,
}
