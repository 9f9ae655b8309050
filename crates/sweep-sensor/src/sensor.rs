// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The sweep sensor and its tick driver.
//!
//! A [`SweepSensor`] owns its sample array, last positions, episode and rate
//! limiter. The host calls [`SweepSensor::tick`] once per fixed step and
//! lends it a collision backend and a transform source for that call.

use sweep_geom::{lerp_points, Tick, Vec2};
use tracing::{debug, info, trace, warn};

use crate::backend::{LineQuery, QueryError, TargetId, TransformSource};
use crate::cast::{boundary_cast, sample_casts, SweepCast};
use crate::config::{Anchor, ConfigError, SensorConfig};
use crate::debug::{
    draw_hit_cross, Color, DebugSink, ANCHOR_MARKER_RADIUS, SAMPLE_MARKER_RADIUS,
};
use crate::episode::{Episode, EpisodeState};
use crate::hit::{Hit, HitReceiver, HitSet, Verdict};
use crate::rate::RateLimiter;

/// Sample points in target-local space, evenly spread from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorArray {
    start: Vec2,
    end: Vec2,
    points: Vec<Vec2>,
}

impl SensorArray {
    /// Interpolates `count` points between the anchors.
    pub fn new(start: Vec2, end: Vec2, count: usize) -> Result<Self, ConfigError> {
        if !start.is_finite() {
            return Err(ConfigError::NonFiniteAnchor(Anchor::Start));
        }
        if !end.is_finite() {
            return Err(ConfigError::NonFiniteAnchor(Anchor::End));
        }
        let points =
            lerp_points(start, end, count).ok_or(ConfigError::SensorCountTooLow { count })?;
        Ok(Self { start, end, points })
    }

    /// Start anchor (target-local).
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// End anchor (target-local).
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Sample points (target-local).
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of sample points (always >= 2).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Sensor idle; nothing computed.
    Idle,
    /// Active, but the rate limiter skipped this tick; no queries issued.
    RateLimited,
    /// Every enabled cast ran.
    Swept,
    /// A query failed; the remaining casts of this tick were skipped.
    Aborted,
}

/// Per-tick counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Tick index (1-based count of `tick` calls).
    pub tick: Tick,
    /// What happened.
    pub outcome: TickOutcome,
    /// Queries issued (including a failed one).
    pub casts: usize,
    /// Raw intersections returned by the backend.
    pub raw_hits: usize,
    /// Hits delivered to the receiver.
    pub accepted: usize,
    /// Intersections with the sensor's own target.
    pub self_hits: usize,
    /// Intersections with colliders already reported this episode.
    pub duplicates: usize,
    /// Intersections found after the episode stopped mid-tick.
    pub suppressed: usize,
}

impl TickReport {
    fn new(tick: Tick, outcome: TickOutcome) -> Self {
        Self {
            tick,
            outcome,
            casts: 0,
            raw_hits: 0,
            accepted: 0,
            self_hits: 0,
            duplicates: 0,
            suppressed: 0,
        }
    }
}

/// Builder for [`SweepSensor`]; validates everything in [`SensorBuilder::build`].
pub struct SensorBuilder<R> {
    config: SensorConfig,
    start: Option<Vec2>,
    end: Option<Vec2>,
    target: Option<TargetId>,
    receiver: Option<R>,
    debug_sink: Option<Box<dyn DebugSink>>,
}

impl<R: HitReceiver> SensorBuilder<R> {
    /// Start anchor, in target-local space.
    #[must_use]
    pub fn start_anchor(mut self, start: Vec2) -> Self {
        self.start = Some(start);
        self
    }

    /// End anchor, in target-local space.
    #[must_use]
    pub fn end_anchor(mut self, end: Vec2) -> Self {
        self.end = Some(end);
        self
    }

    /// Moving object the anchors are attached to. Its own colliders are
    /// never reported.
    #[must_use]
    pub fn target(mut self, target: TargetId) -> Self {
        self.target = Some(target);
        self
    }

    /// Receiver for accepted hits.
    #[must_use]
    pub fn receiver(mut self, receiver: R) -> Self {
        self.receiver = Some(receiver);
        self
    }

    /// Debug drawing sink; only used when `debug.show_rays` is set.
    #[must_use]
    pub fn debug_sink(mut self, sink: impl DebugSink + 'static) -> Self {
        self.debug_sink = Some(Box::new(sink));
        self
    }

    /// Validates the configuration and anchors and builds an idle sensor.
    pub fn build(self) -> Result<SweepSensor<R>, ConfigError> {
        self.config.validate()?;
        let start = self.start.ok_or(ConfigError::MissingAnchor(Anchor::Start))?;
        let end = self.end.ok_or(ConfigError::MissingAnchor(Anchor::End))?;
        let target = self.target.ok_or(ConfigError::MissingAnchor(Anchor::Target))?;
        let receiver = self.receiver.ok_or(ConfigError::MissingReceiver)?;
        let sensors = SensorArray::new(start, end, self.config.sensor_count)?;
        let n = sensors.len();
        Ok(SweepSensor {
            rate: RateLimiter::new(self.config.rate_limit),
            config: self.config,
            target,
            sensors,
            last_positions: vec![Vec2::ZERO; n],
            current: Vec::with_capacity(n),
            episode: Episode::new(),
            receiver,
            debug_sink: self.debug_sink,
            tick: Tick::default(),
            autoplay_pending: true,
        })
    }
}

/// Swept linecast sensor.
pub struct SweepSensor<R> {
    config: SensorConfig,
    target: TargetId,
    sensors: SensorArray,
    last_positions: Vec<Vec2>,
    current: Vec<Vec2>,
    episode: Episode,
    rate: RateLimiter,
    receiver: R,
    debug_sink: Option<Box<dyn DebugSink>>,
    tick: Tick,
    autoplay_pending: bool,
}

impl<R> core::fmt::Debug for SweepSensor<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SweepSensor")
            .field("config", &self.config)
            .field("target", &self.target)
            .field("sensors", &self.sensors)
            .field("last_positions", &self.last_positions)
            .field("episode", &self.episode)
            .field("tick", &self.tick)
            .finish_non_exhaustive()
    }
}

impl<R: HitReceiver> SweepSensor<R> {
    /// Starts building a sensor with `config`.
    pub fn builder(config: SensorConfig) -> SensorBuilder<R> {
        SensorBuilder {
            config,
            start: None,
            end: None,
            target: None,
            receiver: None,
            debug_sink: None,
        }
    }

    /// Configuration captured at build time.
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Target whose transform carries the sensor.
    pub fn target(&self) -> TargetId {
        self.target
    }

    /// Current sample array.
    pub fn sensors(&self) -> &SensorArray {
        &self.sensors
    }

    /// World positions at the end of the previous sweep (or the last play).
    pub fn last_positions(&self) -> &[Vec2] {
        &self.last_positions
    }

    /// Colliders reported in the current (or last) episode.
    pub fn hit_set(&self) -> &HitSet {
        self.episode.hits()
    }

    /// Episode state.
    pub fn state(&self) -> EpisodeState {
        self.episode.state()
    }

    /// Whether an episode is active.
    pub fn is_playing(&self) -> bool {
        self.episode.is_active()
    }

    /// Number of `tick` calls so far.
    pub fn ticks(&self) -> Tick {
        self.tick
    }

    /// Borrow the hit receiver.
    pub fn receiver(&self) -> &R {
        &self.receiver
    }

    /// Mutably borrow the hit receiver.
    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.receiver
    }

    /// Recomputes the sample array for a new span or count.
    ///
    /// `last_positions` is resized but not repopulated; call [`Self::play`]
    /// afterwards so the next sweep starts from real positions. Any running
    /// episode is stopped, since its last positions no longer line up.
    /// [`Self::config`] is left as built; [`Self::sensors`] holds the live count.
    pub fn initialize_sensors(
        &mut self,
        start: Vec2,
        end: Vec2,
        count: usize,
    ) -> Result<(), ConfigError> {
        let sensors = SensorArray::new(start, end, count)?;
        self.last_positions = vec![Vec2::ZERO; sensors.len()];
        self.current.clear();
        self.sensors = sensors;
        self.stop();
        debug!(count, "sensor array initialised");
        Ok(())
    }

    /// Starts (or restarts) an episode: snaps every last position to the
    /// current world position and clears the hit set.
    ///
    /// The first sweep afterwards therefore casts zero-length horizontal
    /// segments and cannot report hits from stale geometry.
    pub fn play<T>(&mut self, transforms: &T)
    where
        T: TransformSource + ?Sized,
    {
        self.autoplay_pending = false;
        for (last, local) in self.last_positions.iter_mut().zip(self.sensors.points()) {
            *last = transforms.to_world(self.target, *local);
        }
        let end_anchor = self.last_positions.last().copied().unwrap_or_default();
        self.rate.reset(end_anchor);
        self.episode.begin();
    }

    /// Halts sweeping. The hit set is kept until the next [`Self::play`].
    pub fn stop(&mut self) {
        self.autoplay_pending = false;
        self.episode.end();
    }

    /// One fixed step.
    ///
    /// Runs the sweep if an episode is active and the rate limiter admits
    /// the tick. Query failures are logged and end this tick's sweep early;
    /// they never propagate.
    pub fn tick<W, T>(&mut self, world: &W, transforms: &T) -> TickReport
    where
        W: LineQuery + ?Sized,
        T: TransformSource + ?Sized,
    {
        self.tick = self.tick.next();
        if self.autoplay_pending && self.config.play_on_start {
            self.play(transforms);
        }
        if !self.episode.is_active() {
            return TickReport::new(self.tick, TickOutcome::Idle);
        }

        let mut current = core::mem::take(&mut self.current);
        current.clear();
        current.extend(
            self.sensors
                .points()
                .iter()
                .map(|local| transforms.to_world(self.target, *local)),
        );

        let end_anchor = current.last().copied().unwrap_or_default();
        if !self.rate.admit(end_anchor) {
            trace!(tick = self.tick.index(), "sweep skipped by rate limiter");
            self.current = current;
            return TickReport::new(self.tick, TickOutcome::RateLimited);
        }

        let mut report = TickReport::new(self.tick, TickOutcome::Swept);
        if let Err(err) = self.sweep(world, &current, &mut report) {
            warn!(tick = self.tick.index(), %err, "collision query failed; skipping rest of sweep");
            report.outcome = TickOutcome::Aborted;
        }
        // Only samples whose casts all ran have moved; the limiter follows the end one.
        if let Some(end) = self.last_positions.last() {
            self.rate.commit(*end);
        }
        self.current = current;
        report
    }

    fn sweep<W>(
        &mut self,
        world: &W,
        current: &[Vec2],
        report: &mut TickReport,
    ) -> Result<(), QueryError>
    where
        W: LineQuery + ?Sized,
    {
        let kinds = self.config.casts;
        for (i, now) in current.iter().enumerate() {
            for cast in sample_casts(kinds, i, &self.last_positions, current) {
                self.run_cast(world, &cast, report)?;
            }
            self.last_positions[i] = *now;
        }
        if let Some(cast) = boundary_cast(kinds, current) {
            self.run_cast(world, &cast, report)?;
        }
        Ok(())
    }

    fn run_cast<W>(
        &mut self,
        world: &W,
        cast: &SweepCast,
        report: &mut TickReport,
    ) -> Result<(), QueryError>
    where
        W: LineQuery + ?Sized,
    {
        report.casts += 1;
        let hits = world.query(&cast.segment())?;
        trace!(kind = ?cast.kind, from = ?cast.from, to = ?cast.to, hits = hits.len(), "cast");
        report.raw_hits += hits.len();

        let show_rays = self.config.debug.show_rays;
        let lifetime = self.config.debug.ray_lifetime;
        let mut touched = false;
        for raw in hits {
            let verdict = self.episode.screen(self.target, raw.owner, raw.collider);
            if verdict != Verdict::SelfHit {
                touched = true;
            }
            match verdict {
                Verdict::SelfHit => report.self_hits += 1,
                Verdict::Duplicate => report.duplicates += 1,
                Verdict::EpisodeClosed => report.suppressed += 1,
                Verdict::Accepted => {
                    report.accepted += 1;
                    let hit = Hit {
                        collider: raw.collider,
                        owner: raw.owner,
                        point: raw.point,
                        kind: cast.kind,
                    };
                    info!(collider = hit.collider.0, kind = ?hit.kind, point = ?hit.point, "hit detected");
                    if show_rays {
                        if let Some(sink) = self.debug_sink.as_deref_mut() {
                            draw_hit_cross(sink, hit.point, lifetime);
                        }
                    }
                    self.receiver.on_hit(&hit);
                    if self.config.stop_after_first_hit {
                        self.stop();
                    }
                }
            }
        }

        if show_rays {
            if let Some(sink) = self.debug_sink.as_deref_mut() {
                sink.line(cast.from, cast.to, Color::for_cast(cast.kind, touched), lifetime);
            }
        }
        Ok(())
    }

    /// Draws sample-point and anchor markers into `sink`.
    pub fn draw_gizmos<T>(&self, transforms: &T, sink: &mut dyn DebugSink)
    where
        T: TransformSource + ?Sized,
    {
        for local in self.sensors.points() {
            let world = transforms.to_world(self.target, *local);
            sink.marker(world, SAMPLE_MARKER_RADIUS, Color::GREEN);
        }
        for anchor in [self.sensors.start(), self.sensors.end()] {
            let world = transforms.to_world(self.target, anchor);
            sink.marker(world, ANCHOR_MARKER_RADIUS, Color::YELLOW);
        }
    }
}
