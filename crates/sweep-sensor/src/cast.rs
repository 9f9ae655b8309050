// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sweep-cast construction.
//!
//! Order per tick, for each sample index `i` (all kinds enabled):
//! 1. `Horizontal`: `last[i] -> current[i]`, the sample's own movement.
//! 2. `IntersectionTop` (`i > 0`): `last[i] -> current[i - 1]`.
//! 3. `IntersectionBottom` (`i < n - 1`): `last[i] -> current[i + 1]`.
//!
//! then one `Vertical` cast `current[0] -> current[n - 1]` across the whole
//! strip. The caller writes `last[i] = current[i]` only after index `i`'s
//! casts have run; every cast for index `i` reads `last[i]` and nothing else
//! from `last`, so the update never leaks into a later index.

use serde::{Deserialize, Serialize};
use sweep_geom::{Segment, Vec2};

/// Family a sweep cast belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastKind {
    /// A sample point's own movement since the previous sweep.
    Horizontal,
    /// Boundary cast from the first to the last sample point.
    Vertical,
    /// Diagonal from a sample's previous position to its lower neighbour's
    /// current position (`\` shape).
    IntersectionTop,
    /// Diagonal from a sample's previous position to its upper neighbour's
    /// current position (`/` shape).
    IntersectionBottom,
}

impl CastKind {
    /// Every kind, in per-tick emission order.
    pub const ALL: [Self; 4] = [
        Self::Horizontal,
        Self::IntersectionTop,
        Self::IntersectionBottom,
        Self::Vertical,
    ];

    const fn bit(self) -> u8 {
        match self {
            Self::Horizontal => 1,
            Self::Vertical => 1 << 1,
            Self::IntersectionTop => 1 << 2,
            Self::IntersectionBottom => 1 << 3,
        }
    }
}

/// Set of enabled [`CastKind`]s.
///
/// Serialized as a list of kind names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<CastKind>", into = "Vec<CastKind>")]
pub struct CastKinds {
    bits: u8,
}

impl CastKinds {
    /// No casts.
    pub const NONE: Self = Self { bits: 0 };
    /// All four cast kinds.
    pub const ALL: Self = Self { bits: 0b1111 };

    /// Set containing only `kind`.
    pub const fn only(kind: CastKind) -> Self {
        Self { bits: kind.bit() }
    }

    /// Returns a copy that also contains `kind`.
    #[must_use]
    pub const fn with(self, kind: CastKind) -> Self {
        Self {
            bits: self.bits | kind.bit(),
        }
    }

    /// Returns a copy without `kind`.
    #[must_use]
    pub const fn without(self, kind: CastKind) -> Self {
        Self {
            bits: self.bits & !kind.bit(),
        }
    }

    /// Whether `kind` is enabled.
    pub const fn contains(self, kind: CastKind) -> bool {
        self.bits & kind.bit() != 0
    }

    /// Whether no kind is enabled.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Enabled kinds in emission order.
    pub fn iter(self) -> impl Iterator<Item = CastKind> {
        CastKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl Default for CastKinds {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<Vec<CastKind>> for CastKinds {
    fn from(kinds: Vec<CastKind>) -> Self {
        kinds.into_iter().collect()
    }
}

impl From<CastKinds> for Vec<CastKind> {
    fn from(kinds: CastKinds) -> Self {
        kinds.iter().collect()
    }
}

impl FromIterator<CastKind> for CastKinds {
    fn from_iter<I: IntoIterator<Item = CastKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

/// A single line query generated for one tick. Not retained across ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepCast {
    /// World-space start.
    pub from: Vec2,
    /// World-space end.
    pub to: Vec2,
    /// Cast family.
    pub kind: CastKind,
}

impl SweepCast {
    /// Creates a cast.
    pub const fn new(from: Vec2, to: Vec2, kind: CastKind) -> Self {
        Self { from, to, kind }
    }

    /// The cast as a geometric segment.
    pub const fn segment(&self) -> Segment {
        Segment::new(self.from, self.to)
    }
}

/// Casts owned by sample index `i`, in emission order.
///
/// Neighbours missing from `current` (and an `i` outside `last`) yield no cast.
pub(crate) fn sample_casts(
    kinds: CastKinds,
    i: usize,
    last: &[Vec2],
    current: &[Vec2],
) -> impl Iterator<Item = SweepCast> {
    let from = last.get(i).copied();
    let cast = |to: Option<&Vec2>, kind: CastKind| {
        from.zip(to.copied())
            .filter(|_| kinds.contains(kind))
            .map(|(from, to)| SweepCast::new(from, to, kind))
    };
    let horizontal = cast(current.get(i), CastKind::Horizontal);
    let top = cast(
        i.checked_sub(1).and_then(|j| current.get(j)),
        CastKind::IntersectionTop,
    );
    let bottom = cast(current.get(i + 1), CastKind::IntersectionBottom);
    [horizontal, top, bottom].into_iter().flatten()
}

/// The strip-wide boundary cast from the first to the last current position.
pub fn boundary_cast(kinds: CastKinds, current: &[Vec2]) -> Option<SweepCast> {
    if !kinds.contains(CastKind::Vertical) {
        return None;
    }
    let first = current.first()?;
    let last = current.last()?;
    Some(SweepCast::new(*first, *last, CastKind::Vertical))
}

/// Full cast list for one tick without executing anything.
///
/// Equivalent to what [`crate::SweepSensor::tick`] issues when no query
/// fails; useful for previews and tests. `None` if `last` and `current`
/// differ in length.
pub fn plan_sweep(kinds: CastKinds, last: &[Vec2], current: &[Vec2]) -> Option<Vec<SweepCast>> {
    if last.len() != current.len() {
        return None;
    }
    let mut out: Vec<SweepCast> = (0..current.len())
        .flat_map(|i| sample_casts(kinds, i, last, current))
        .collect();
    out.extend(boundary_cast(kinds, current));
    Some(out)
}
