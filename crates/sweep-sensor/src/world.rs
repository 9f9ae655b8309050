// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-process reference collision world.
//!
//! `LineWorld` answers [`LineQuery`] with exact segment-vs-shape tests over a
//! flat list of circles and boxes. It is small enough for tests and demos;
//! engine hosts plug in their own backend instead.

use core::cmp::Ordering;

use sweep_geom::{Aabb2, Segment, Vec2};

use crate::backend::{ColliderId, LineHit, LineQuery, QueryError, TargetId};

/// Collider geometry in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Circle with a world-space center.
    Circle {
        /// Center.
        center: Vec2,
        /// Radius.
        radius: f32,
    },
    /// Axis-aligned box.
    Box(Aabb2),
}

impl Shape {
    fn entry(&self, segment: &Segment) -> Option<f32> {
        match self {
            Self::Circle { center, radius } => segment.intersect_circle(center, *radius),
            Self::Box(aabb) => segment.intersect_aabb(aabb),
        }
    }

    fn translated(&self, offset: &Vec2) -> Self {
        match self {
            Self::Circle { center, radius } => Self::Circle {
                center: center.add(offset),
                radius: *radius,
            },
            Self::Box(aabb) => Self::Box(aabb.translated(offset)),
        }
    }
}

/// A collider registered in a [`LineWorld`].
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    /// Stable identity.
    pub id: ColliderId,
    /// Object it is attached to.
    pub owner: TargetId,
    /// Human-readable label for logs.
    pub name: String,
    /// World-space geometry.
    pub shape: Shape,
}

/// Flat list of colliders with exact linecasts.
#[derive(Debug, Default, Clone)]
pub struct LineWorld {
    colliders: Vec<Collider>,
    next_id: u64,
}

impl LineWorld {
    /// Empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collider and returns its id.
    pub fn add(&mut self, owner: TargetId, name: impl Into<String>, shape: Shape) -> ColliderId {
        let id = ColliderId(self.next_id);
        self.next_id += 1;
        self.colliders.push(Collider {
            id,
            owner,
            name: name.into(),
            shape,
        });
        id
    }

    /// Adds a circle collider.
    pub fn add_circle(
        &mut self,
        owner: TargetId,
        name: impl Into<String>,
        center: Vec2,
        radius: f32,
    ) -> ColliderId {
        self.add(owner, name, Shape::Circle { center, radius })
    }

    /// Adds a box collider centered at `center` with half-extents `hx, hy`.
    pub fn add_box(
        &mut self,
        owner: TargetId,
        name: impl Into<String>,
        center: Vec2,
        hx: f32,
        hy: f32,
    ) -> ColliderId {
        self.add(
            owner,
            name,
            Shape::Box(Aabb2::from_center_half_extents(center, hx, hy)),
        )
    }

    /// Moves a collider by `offset`. Returns `false` if `id` is unknown.
    pub fn translate(&mut self, id: ColliderId, offset: Vec2) -> bool {
        match self.colliders.iter_mut().find(|c| c.id == id) {
            Some(c) => {
                c.shape = c.shape.translated(&offset);
                true
            }
            None => false,
        }
    }

    /// Removes a collider, returning it if present.
    pub fn remove(&mut self, id: ColliderId) -> Option<Collider> {
        let idx = self.colliders.iter().position(|c| c.id == id)?;
        Some(self.colliders.remove(idx))
    }

    /// Looks up a collider.
    pub fn get(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.iter().find(|c| c.id == id)
    }

    /// All colliders in insertion order.
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }
}

impl LineQuery for LineWorld {
    fn query(&self, segment: &Segment) -> Result<Vec<LineHit>, QueryError> {
        let mut found: Vec<(f32, LineHit)> = self
            .colliders
            .iter()
            .filter_map(|c| {
                let t = c.shape.entry(segment)?;
                Some((
                    t,
                    LineHit {
                        collider: c.id,
                        point: segment.point_at(t),
                        owner: c.owner,
                    },
                ))
            })
            .collect();
        // Nearest first; ties resolved by id so results are deterministic.
        found.sort_by(|a, b| match a.0.partial_cmp(&b.0) {
            Some(Ordering::Equal) | None => a.1.collider.cmp(&b.1.collider),
            Some(o) => o,
        });
        Ok(found.into_iter().map(|(_, hit)| hit).collect())
    }
}
