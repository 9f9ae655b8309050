// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Host-facing ports: collision queries and target transforms.
//!
//! The sensor never owns a collision world. Each tick it borrows a
//! [`LineQuery`] and a [`TransformSource`] from the host; both are read-only
//! so a shared backend may serve several sensors.

use sweep_geom::{Segment, Transform2, Vec2};
use thiserror::Error;

/// Opaque identity of a collider in the host's collision world.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ColliderId(pub u64);

/// Opaque identity of a transform-bearing object (the sensor's target, or the
/// object a collider is attached to).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TargetId(pub u64);

/// One raw intersection reported by a [`LineQuery`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineHit {
    /// Collider that the segment touched.
    pub collider: ColliderId,
    /// World-space contact point.
    pub point: Vec2,
    /// Object the collider is attached to.
    pub owner: TargetId,
}

/// Failure raised by a collision backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The backend could not evaluate the query.
    #[error("collision backend failure: {0}")]
    Backend(String),
}

/// Synchronous line-intersection query over a 2D collision world.
///
/// Implementations return every collider touched by `segment`, ordered by
/// distance from `segment.from()`. Nothing is excluded by default; the sensor
/// filters its own target.
pub trait LineQuery {
    /// Returns all intersections along `segment`.
    fn query(&self, segment: &Segment) -> Result<Vec<LineHit>, QueryError>;
}

/// Local-to-world transform lookup for sensor targets.
pub trait TransformSource {
    /// Maps `local` (in `target` space) to world space.
    fn to_world(&self, target: TargetId, local: Vec2) -> Vec2;
}

impl<F> TransformSource for F
where
    F: Fn(TargetId) -> Transform2,
{
    fn to_world(&self, target: TargetId, local: Vec2) -> Vec2 {
        self(target).transform_point(&local)
    }
}
