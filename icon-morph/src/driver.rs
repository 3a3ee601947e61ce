use std::fmt;
use std::time::{Duration, Instant};

use ratatui::style::Color;
use tracing::{debug, trace, warn};

use crate::config::MorphConfig;
use crate::easing::Easing;
use crate::error::{MorphError, Result};
use crate::geometry::IconGeometry;
use crate::metrics::Metrics;
use crate::shape::{IconShape, Transition};
use crate::solver;
use crate::timeline::{Sample, Tween, validate_duration};

/// Progress bounds. Every transition sits on its second shape at the midpoint.
pub const PROGRESS_START: f64 = 0.0;
pub const PROGRESS_MID: f64 = 1.0;
pub const PROGRESS_END: f64 = 2.0;

/// Canonical pose a jump lands on. Hidden has none: it is only reachable by
/// animating into it.
pub fn rest_pose(shape: IconShape) -> Option<(Transition, f64)> {
    match shape {
        IconShape::Stack => Some((Transition::StackArrow, PROGRESS_START)),
        IconShape::Arrow => Some((Transition::StackArrow, PROGRESS_MID)),
        IconShape::Cross => Some((Transition::StackCross, PROGRESS_MID)),
        IconShape::Check => Some((Transition::StackCheck, PROGRESS_MID)),
        IconShape::Hidden => None,
    }
}

/// Live state of the icon, mutated only through [`MorphDriver`] commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphState {
    pub current: IconShape,
    /// Set while a run is in flight, or after scrubbing with an offset.
    pub target: Option<IconShape>,
    pub transition: Transition,
    pub progress: f64,
    pub running: bool,
}

impl Default for MorphState {
    fn default() -> Self {
        Self {
            current: IconShape::Stack,
            target: None,
            transition: Transition::StackArrow,
            progress: PROGRESS_START,
            running: false,
        }
    }
}

type CompletionListener = Box<dyn FnMut(IconShape) + Send>;

/// Owns the morph state and the in-flight tween, and turns the three
/// commands (jump, animate, scrub) into state changes.
///
/// Commands either succeed or leave the state untouched.
pub struct MorphDriver {
    state: MorphState,
    config: MorphConfig,
    metrics: Metrics,
    tween: Option<Tween>,
    listener: Option<CompletionListener>,
}

impl MorphDriver {
    pub fn new(config: MorphConfig) -> Result<Self> {
        config.validate()?;
        let metrics = config.metrics()?;

        Ok(Self {
            state: MorphState::default(),
            config,
            metrics,
            tween: None,
            listener: None,
        })
    }

    pub fn state(&self) -> &MorphState {
        &self.state
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn current_shape(&self) -> IconShape {
        self.state.current
    }

    pub fn target_shape(&self) -> Option<IconShape> {
        self.state.target
    }

    pub fn transition(&self) -> Transition {
        self.state.transition
    }

    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn set_color(&mut self, color: Color) {
        self.config.color = color;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.config.visible = visible;
    }

    pub fn set_rtl(&mut self, rtl: bool) {
        self.config.rtl = rtl;
    }

    /// Applies to the next run; an in-flight tween keeps its duration.
    pub fn set_duration(&mut self, duration: Duration) -> Result<()> {
        validate_duration(duration)?;
        self.config.duration = duration;
        Ok(())
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.config.easing = easing;
    }

    /// Called with the landed shape once per completed run (natural or
    /// forced), never on cancellation.
    pub fn on_complete(&mut self, listener: impl FnMut(IconShape) + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Snaps to the rest pose of `shape`, cancelling any run in flight.
    pub fn jump_to(&mut self, shape: IconShape) -> Result<()> {
        if shape == self.state.current {
            return Ok(());
        }

        let Some((transition, progress)) = rest_pose(shape) else {
            warn!(from = ?self.state.current, to = ?shape, "rejected jump");
            return Err(MorphError::UnsupportedTransition {
                from: self.state.current,
                to: shape,
            });
        };

        if self.tween.take().is_some() {
            debug!(target_shape = ?self.state.target, "cancelled run");
        }

        self.state = MorphState {
            current: shape,
            target: None,
            transition,
            progress,
            running: false,
        };

        debug!(?shape, ?transition, progress, "jumped");
        Ok(())
    }

    pub fn animate_to(&mut self, shape: IconShape) -> Result<()> {
        self.animate_to_at(shape, Instant::now())
    }

    /// Starts a run toward `shape` at `now`. A run already in flight is
    /// completed first, so its target becomes the starting shape.
    pub fn animate_to_at(&mut self, shape: IconShape, now: Instant) -> Result<()> {
        let origin = match (self.state.running, self.state.target) {
            (true, Some(target)) => target,
            _ => self.state.current,
        };

        if shape == origin {
            self.finish_run();
            return Ok(());
        }

        let (transition, forward) = Transition::resolve(origin, shape).inspect_err(|e| {
            warn!(error = %e, "rejected animation");
        })?;

        let (from, to) = if forward {
            (PROGRESS_START, PROGRESS_MID)
        } else {
            (PROGRESS_MID, PROGRESS_END)
        };
        let tween = Tween::start(from, to, self.config.duration, self.config.easing, now)?;

        self.finish_run();

        self.state.transition = transition;
        self.state.progress = from;
        self.state.target = Some(shape);
        self.state.running = true;
        self.tween = Some(tween);

        debug!(from = ?origin, to = ?shape, ?transition, forward, "started run");
        Ok(())
    }

    /// Puts the icon at `offset` along `transition` directly, e.g. for a
    /// drag gesture. Returns the shape the icon now counts as showing.
    pub fn set_offset(&mut self, transition: Transition, offset: f64) -> Result<IconShape> {
        if !(PROGRESS_START..=PROGRESS_END).contains(&offset) {
            return Err(MorphError::InvalidArgument(format!(
                "offset must be between {PROGRESS_START} and {PROGRESS_END}, got {offset}"
            )));
        }

        let on_first = offset < PROGRESS_MID || offset == PROGRESS_END;
        let (current, target) = if on_first {
            (transition.first(), transition.second())
        } else {
            (transition.second(), transition.first())
        };

        self.state.transition = transition;
        self.state.progress = offset;
        self.state.current = current;
        self.state.target = Some(target);

        trace!(?transition, offset, ?current, "scrubbed");
        Ok(current)
    }

    /// Advances the in-flight run to `now`. Returns the new progress, or
    /// `None` when nothing is running.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        let tween = self.tween.as_mut()?;

        match tween.sample(now) {
            Sample::Running(progress) => {
                trace!(progress, "tick");
                self.state.progress = progress;
            }
            Sample::Finished(progress) => {
                self.state.progress = progress;
                self.complete();
            }
        }

        Some(self.state.progress)
    }

    /// Forces a running animation to its end; otherwise just marks idle.
    pub fn stop(&mut self) {
        if self.tween.is_some() {
            self.finish_run();
        } else {
            self.state.running = false;
        }
    }

    pub fn compute_geometry(&self) -> IconGeometry {
        solver::solve(self.state.transition, self.state.progress, &self.metrics)
    }

    fn finish_run(&mut self) {
        if let Some(tween) = self.tween.as_mut() {
            self.state.progress = tween.finish();
            self.complete();
        }
    }

    fn complete(&mut self) {
        self.tween = None;
        self.state.running = false;

        let Some(landed) = self.state.target.take() else {
            return;
        };

        self.state.current = landed;

        // Hidden stays on its transition; the far end already is its pose.
        if let Some((transition, progress)) = rest_pose(landed) {
            self.state.transition = transition;
            self.state.progress = progress;
        }

        debug!(shape = ?landed, "run complete");

        if let Some(listener) = self.listener.as_mut() {
            listener(landed);
        }
    }
}

impl fmt::Debug for MorphDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MorphDriver")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("tween", &self.tween)
            .finish_non_exhaustive()
    }
}
