// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scripted collision backend.

use std::sync::{Arc, Mutex};
use sweep_geom::Segment;
use sweep_sensor::{LineHit, LineQuery, LineWorld, QueryError};

/// [`LineQuery`] double that logs every segment it is asked about.
///
/// Answers come from an optional wrapped [`LineWorld`] followed by any canned
/// hits (returned for every query). A chosen call can be made to fail.
/// Clones share state.
#[derive(Clone, Default)]
pub struct ScriptedQuery {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    world: Option<LineWorld>,
    canned: Vec<LineHit>,
    fail_on_call: Option<usize>,
    calls: Vec<Segment>,
}

impl ScriptedQuery {
    /// Backend that finds nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that answers from `world`.
    pub fn wrapping(world: LineWorld) -> Self {
        let q = Self::new();
        q.lock().world = Some(world);
        q
    }

    /// Backend that returns `hits` for every query, whatever the segment.
    pub fn always(hits: Vec<LineHit>) -> Self {
        let q = Self::new();
        q.lock().canned = hits;
        q
    }

    /// Makes the `n`-th query (1-based, counted from now on) fail.
    pub fn fail_on_call(&self, n: usize) {
        let mut inner = self.lock();
        inner.fail_on_call = Some(inner.calls.len() + n);
    }

    /// Segments queried so far, in order.
    pub fn calls(&self) -> Vec<Segment> {
        self.lock().calls.clone()
    }

    /// Number of queries so far.
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// Forgets the call log.
    pub fn clear_calls(&self) {
        let mut inner = self.lock();
        inner.calls.clear();
        inner.fail_on_call = None;
    }

    /// Mutates the wrapped world, if any.
    pub fn with_world<T>(&self, f: impl FnOnce(&mut LineWorld) -> T) -> Option<T> {
        self.lock().world.as_mut().map(f)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LineQuery for ScriptedQuery {
    fn query(&self, segment: &Segment) -> Result<Vec<LineHit>, QueryError> {
        let mut inner = self.lock();
        inner.calls.push(*segment);
        if inner.fail_on_call == Some(inner.calls.len()) {
            return Err(QueryError::Backend("scripted failure".into()));
        }
        let mut hits = match &inner.world {
            Some(world) => world.query(segment)?,
            None => Vec::new(),
        };
        hits.extend(inner.canned.iter().copied());
        Ok(hits)
    }
}
