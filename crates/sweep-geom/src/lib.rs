// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry primitives for Sweep.

This crate provides:
- 2D vectors (`Vec2`) and rigid 2D transforms with non-uniform scale (`Transform2`).
- Axis-aligned boxes (`Aabb2`) and line segments (`Segment`) with
  segment-vs-shape intersection used by linecast backends.
- Even interpolation of sample points between two anchors (`lerp_points`).
- Discrete simulation ticks (`Tick`).

Design notes:
- Float32 throughout; operations favor clarity and reproducibility.
- Interpolation assigns endpoints exactly instead of accumulating a step, so
  the first and last samples always coincide with their anchors.
"]

/// Scalar helpers and the `Vec2` type.
pub mod math;
/// Sample-point interpolation between two anchors.
pub mod sampling;
/// Time-aware utilities for fixed-step simulation.
pub mod temporal;
/// Foundational geometric types.
pub mod types;

pub use math::Vec2;
pub use sampling::lerp_points;
pub use temporal::tick::Tick;
pub use types::aabb::Aabb2;
pub use types::segment::Segment;
pub use types::transform::Transform2;
