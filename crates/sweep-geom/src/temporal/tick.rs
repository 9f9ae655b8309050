// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Discrete simulation tick.
///
/// The host advances in integer ticks with a fixed `dt`. This newtype keeps
/// tick indices explicit across APIs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tick {
    index: u64,
}

impl Tick {
    /// Creates a new tick with the given index.
    #[must_use]
    pub const fn new(index: u64) -> Self {
        Self { index }
    }

    /// Returns the tick index.
    #[must_use]
    pub const fn index(&self) -> u64 {
        self.index
    }

    /// Returns the following tick (saturating).
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            index: self.index.saturating_add(1),
        }
    }
}
