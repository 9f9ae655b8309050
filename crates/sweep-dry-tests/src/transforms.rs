// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mutable per-target transform table.

use std::cell::Cell;
use std::collections::HashMap;
use sweep_geom::{Transform2, Vec2};
use sweep_sensor::{TargetId, TransformSource};

/// [`TransformSource`] backed by a map; unknown targets use the identity.
///
/// Counts lookups so tests can check how often the sensor transforms points.
#[derive(Debug, Default)]
pub struct StaticTransforms {
    table: HashMap<TargetId, Transform2>,
    lookups: Cell<usize>,
}

impl StaticTransforms {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with a single target.
    pub fn single(target: TargetId, transform: Transform2) -> Self {
        let mut t = Self::new();
        t.set(target, transform);
        t
    }

    /// Sets the transform of `target`.
    pub fn set(&mut self, target: TargetId, transform: Transform2) {
        self.table.insert(target, transform);
    }

    /// Moves `target` to a pure translation.
    pub fn place(&mut self, target: TargetId, position: Vec2) {
        let current = self.get(target);
        self.set(target, current.with_translation(position));
    }

    /// Current transform of `target`.
    pub fn get(&self, target: TargetId) -> Transform2 {
        self.table.get(&target).copied().unwrap_or_default()
    }

    /// Number of `to_world` calls so far.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    /// Resets the lookup counter.
    pub fn reset_lookups(&self) {
        self.lookups.set(0);
    }
}

impl TransformSource for StaticTransforms {
    fn to_world(&self, target: TargetId, local: Vec2) -> Vec2 {
        self.lookups.set(self.lookups.get() + 1);
        self.get(target).transform_point(&local)
    }
}
