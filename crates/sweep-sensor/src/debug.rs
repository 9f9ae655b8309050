// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Optional debug visualization sink.
//!
//! Drawing never affects detection; a sensor without a sink behaves exactly
//! like one with [`NullSink`].

use sweep_geom::Vec2;

use crate::cast::CastKind;

/// Half-length of each stroke of the hit "+" marker.
pub const HIT_CROSS_HALF: f32 = 0.2;
/// Hit markers outlive cast lines by this factor.
pub const HIT_MARKER_LIFETIME_SCALE: f32 = 1.5;
/// Radius of sample-point gizmos.
pub const SAMPLE_MARKER_RADIUS: f32 = 0.075;
/// Radius of anchor gizmos.
pub const ANCHOR_MARKER_RADIUS: f32 = 0.1;

/// RGBA colour in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    /// Opaque cyan.
    pub const CYAN: Self = Self([0.0, 1.0, 1.0, 1.0]);
    /// Opaque magenta.
    pub const MAGENTA: Self = Self([1.0, 0.0, 1.0, 1.0]);
    /// Warm yellow.
    pub const YELLOW: Self = Self([1.0, 0.92, 0.016, 1.0]);
    /// Opaque red.
    pub const RED: Self = Self([1.0, 0.0, 0.0, 1.0]);
    /// Opaque green.
    pub const GREEN: Self = Self([0.0, 1.0, 0.0, 1.0]);

    /// Line colour for a cast; red once it touched anything but the sensor.
    pub const fn for_cast(kind: CastKind, hit: bool) -> Self {
        if hit {
            return Self::RED;
        }
        match kind {
            CastKind::Horizontal => Self::WHITE,
            CastKind::Vertical => Self::CYAN,
            CastKind::IntersectionTop => Self::MAGENTA,
            CastKind::IntersectionBottom => Self::YELLOW,
        }
    }
}

/// Receiver of debug primitives.
pub trait DebugSink {
    /// A line visible for `lifetime` seconds.
    fn line(&mut self, from: Vec2, to: Vec2, color: Color, lifetime: f32);
    /// A wire circle marker.
    fn marker(&mut self, center: Vec2, radius: f32, color: Color);
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DebugSink for NullSink {
    fn line(&mut self, _from: Vec2, _to: Vec2, _color: Color, _lifetime: f32) {}
    fn marker(&mut self, _center: Vec2, _radius: f32, _color: Color) {}
}

/// Draws a red "+" centred on `point`.
pub fn draw_hit_cross(sink: &mut dyn DebugSink, point: Vec2, ray_lifetime: f32) {
    let lifetime = ray_lifetime * HIT_MARKER_LIFETIME_SCALE;
    let up = Vec2::new(0.0, HIT_CROSS_HALF);
    let right = Vec2::new(HIT_CROSS_HALF, 0.0);
    sink.line(point.add(&up), point.sub(&up), Color::RED, lifetime);
    sink.line(point.sub(&right), point.add(&right), Color::RED, lifetime);
}
