// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec2;

/// Rigid 2D transform with non-uniform scale used to place sensor targets.
///
/// Conventions:
/// - `translation` in metres (world space).
/// - `rotation` in radians, counter-clockwise positive.
/// - `scale` is non-uniform and applied before rotation/translation.
///
/// `transform_point` evaluates `p' = T * R * S * p` with plain `f32` ops.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform2 {
    translation: Vec2,
    rotation: f32,
    scale: Vec2,
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2 {
    /// Identity transform (no translation, no rotation, unit scale).
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            translation: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }

    /// Creates a transform from components.
    #[must_use]
    pub const fn new(translation: Vec2, rotation: f32, scale: Vec2) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Pure translation with no rotation and unit scale.
    #[must_use]
    pub const fn from_translation(translation: Vec2) -> Self {
        Self {
            translation,
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }

    /// Translation component.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Rotation component in radians.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Scale component.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Returns a copy translated to `translation`.
    #[must_use]
    pub fn with_translation(mut self, translation: Vec2) -> Self {
        self.translation = translation;
        self
    }

    /// Returns a copy rotated to `rotation` radians.
    #[must_use]
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Maps a local-space point into world space.
    #[must_use]
    pub fn transform_point(&self, local: &Vec2) -> Vec2 {
        let scaled = local.mul(&self.scale);
        let (sin, cos) = self.rotation.sin_cos();
        let rotated = Vec2::new(
            scaled.x() * cos - scaled.y() * sin,
            scaled.x() * sin + scaled.y() * cos,
        );
        rotated.add(&self.translation)
    }
}
