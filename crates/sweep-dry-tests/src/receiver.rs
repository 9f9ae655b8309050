// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Recording hit receiver and debug sink.

use std::sync::{Arc, Mutex};
use sweep_geom::Vec2;
use sweep_sensor::{CastKind, ColliderId, Color, DebugSink, Hit, HitReceiver};

/// [`HitReceiver`] that records every delivered hit. Clones share the log.
#[derive(Clone, Default)]
pub struct RecordingReceiver {
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl RecordingReceiver {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hits delivered so far.
    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of hits delivered so far.
    pub fn count(&self) -> usize {
        self.hits.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Number of deliveries for `collider`.
    pub fn count_for(&self, collider: ColliderId) -> usize {
        self.hits
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|h| h.collider == collider)
            .count()
    }

    /// Kinds of the delivered hits, in order.
    pub fn kinds(&self) -> Vec<CastKind> {
        self.hits().iter().map(|h| h.kind).collect()
    }

    /// Forgets all recorded hits.
    pub fn clear(&self) {
        self.hits.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl HitReceiver for RecordingReceiver {
    fn on_hit(&mut self, hit: &Hit) {
        self.hits
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(*hit);
    }
}

/// One primitive captured by [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    /// A line.
    Line {
        /// Start.
        from: Vec2,
        /// End.
        to: Vec2,
        /// Colour.
        color: Color,
        /// Lifetime in seconds.
        lifetime: f32,
    },
    /// A circle marker.
    Marker {
        /// Center.
        center: Vec2,
        /// Radius.
        radius: f32,
        /// Colour.
        color: Color,
    },
}

/// [`DebugSink`] that records draw calls. Clones share the log.
#[derive(Clone, Default)]
pub struct RecordingSink {
    calls: Arc<Mutex<Vec<DrawCall>>>,
}

impl RecordingSink {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls so far.
    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Lines drawn in `color`.
    pub fn lines_in(&self, color: Color) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { color: col, .. } if *col == color))
            .count()
    }

    /// Markers drawn in `color`.
    pub fn markers_in(&self, color: Color) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, DrawCall::Marker { color: col, .. } if *col == color))
            .count()
    }
}

impl DebugSink for RecordingSink {
    fn line(&mut self, from: Vec2, to: Vec2, color: Color, lifetime: f32) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(DrawCall::Line {
                from,
                to,
                color,
                lifetime,
            });
    }

    fn marker(&mut self, center: Vec2, radius: f32, color: Color) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(DrawCall::Marker {
                center,
                radius,
                color,
            });
    }
}
