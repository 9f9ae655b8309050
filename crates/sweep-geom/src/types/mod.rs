// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the sensor (transform, AABB, segment).
//!
//! Notes:
//! - Overlap and intersection semantics are inclusive on edges so a cast that
//!   grazes a collider still reports it.
//! - Affine math uses plain `f32` ops without fused multiply-add.

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Line segments and segment-vs-shape intersection."]
pub mod segment;
#[doc = "Rigid 2D transforms with non-uniform scale."]
pub mod transform;
