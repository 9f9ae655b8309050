// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-step timers for driving episodes from the host loop.
//!
//! [`PulseTimer`] alternates `Playing` and `Paused` phases after an optional
//! start delay and reports the edges; the caller forwards
//! [`PulseEvent::Play`] / [`PulseEvent::Stop`] to the sensor (and to whatever
//! animation it syncs with). [`FlashTimer`] is a one-shot "recently hit"
//! flag for targets.

/// Default length of a playing phase, in seconds.
pub const DEFAULT_PLAY_FOR: f32 = 0.6;
/// Default length of a paused phase, in seconds.
pub const DEFAULT_PAUSE_FOR: f32 = 0.75;
/// Default flash duration after a hit, in seconds.
pub const DEFAULT_FLASH_FOR: f32 = 0.15;

/// Phase of a [`PulseTimer`], with the seconds left in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PulsePhase {
    /// Waiting for the first play.
    Delay(f32),
    /// Sensor should be sweeping.
    Playing(f32),
    /// Sensor should be stopped.
    Paused(f32),
}

/// Edge emitted when the phase changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseEvent {
    /// Entered `Playing`: start an episode.
    Play,
    /// Entered `Paused`: stop the episode.
    Stop,
}

/// Looping `Playing -> Paused -> Playing ...` timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseTimer {
    play_for: f32,
    pause_for: f32,
    phase: PulsePhase,
}

impl Default for PulseTimer {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_PLAY_FOR, DEFAULT_PAUSE_FOR)
    }
}

impl PulseTimer {
    /// Timer that waits `start_delay` seconds, then loops.
    ///
    /// Negative durations are treated as zero.
    pub fn new(start_delay: f32, play_for: f32, pause_for: f32) -> Self {
        Self {
            play_for: play_for.max(0.0),
            pause_for: pause_for.max(0.0),
            phase: PulsePhase::Delay(start_delay.max(0.0)),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> PulsePhase {
        self.phase
    }

    /// Advances by `dt` seconds.
    ///
    /// At most one edge is reported per call; time overshooting a phase is
    /// carried into the next one.
    pub fn advance(&mut self, dt: f32) -> Option<PulseEvent> {
        let (left, next, event) = match self.phase {
            PulsePhase::Delay(left) => (left - dt, PulsePhase::Playing(self.play_for), PulseEvent::Play),
            PulsePhase::Playing(left) => (left - dt, PulsePhase::Paused(self.pause_for), PulseEvent::Stop),
            PulsePhase::Paused(left) => (left - dt, PulsePhase::Playing(self.play_for), PulseEvent::Play),
        };
        if left > 0.0 {
            self.phase = match self.phase {
                PulsePhase::Delay(_) => PulsePhase::Delay(left),
                PulsePhase::Playing(_) => PulsePhase::Playing(left),
                PulsePhase::Paused(_) => PulsePhase::Paused(left),
            };
            return None;
        }
        self.phase = match next {
            PulsePhase::Playing(d) => PulsePhase::Playing(d + left),
            PulsePhase::Paused(d) => PulsePhase::Paused(d + left),
            PulsePhase::Delay(d) => PulsePhase::Delay(d + left),
        };
        Some(event)
    }
}

/// "Recently hit" flag that clears after a fixed duration.
///
/// Each new trigger restarts the countdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashTimer {
    duration: f32,
    left: f32,
}

impl Default for FlashTimer {
    fn default() -> Self {
        Self::new(DEFAULT_FLASH_FOR)
    }
}

impl FlashTimer {
    /// Unlit timer with the given flash duration.
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            left: 0.0,
        }
    }

    /// Lights the flag for a full duration.
    pub fn trigger(&mut self) {
        self.left = self.duration;
    }

    /// Advances by `dt`; returns `true` on the step the flag clears.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.left <= 0.0 {
            return false;
        }
        self.left -= dt;
        self.left <= 0.0
    }

    /// Whether the flag is lit.
    pub fn is_lit(&self) -> bool {
        self.left > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delay_plays_on_first_step() {
        let mut t = PulseTimer::default();
        assert_eq!(t.advance(0.02), Some(PulseEvent::Play));
        assert!(matches!(t.phase(), PulsePhase::Playing(_)));
    }

    #[test]
    fn alternates_play_and_stop() {
        let mut t = PulseTimer::new(0.0, 0.5, 0.25);
        let mut events = Vec::new();
        // 0.125 s steps are exact in f32.
        for _ in 0..13 {
            if let Some(e) = t.advance(0.125) {
                events.push(e);
            }
        }
        // play at 0, stop at 0.5, play at 0.75, stop at 1.25, play at 1.5
        assert_eq!(
            events,
            vec![
                PulseEvent::Play,
                PulseEvent::Stop,
                PulseEvent::Play,
                PulseEvent::Stop,
                PulseEvent::Play,
            ]
        );
    }

    #[test]
    fn start_delay_postpones_first_play() {
        let mut t = PulseTimer::new(0.5, 0.6, 0.75);
        assert_eq!(t.advance(0.25), None);
        assert_eq!(t.advance(0.25), Some(PulseEvent::Play));
    }

    #[test]
    fn flash_clears_after_duration_and_retriggers() {
        let mut f = FlashTimer::new(0.25);
        assert!(!f.is_lit());
        f.trigger();
        assert!(f.is_lit());
        assert!(!f.advance(0.125));
        f.trigger();
        assert!(!f.advance(0.125));
        assert!(f.advance(0.125));
        assert!(!f.is_lit());
        assert!(!f.advance(0.125));
    }
}
