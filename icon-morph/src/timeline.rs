use std::time::{Duration, Instant};

use crate::easing::Easing;
use crate::error::{MorphError, Result};

/// One step of a [`Tween`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Running(f64),
    /// Exactly the far end of the range. Reported once per tween.
    Finished(f64),
}

/// Eased sweep over an ascending progress range, sampled against explicit
/// instants so callers own the clock.
///
/// Samples never decrease, and the last one is exactly `to`. Cancelling is
/// just dropping the tween.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    easing: Easing,
    started: Instant,
    last: f64,
    done: bool,
}

impl Tween {
    pub fn start(
        from: f64,
        to: f64,
        duration: Duration,
        easing: Easing,
        now: Instant,
    ) -> Result<Self> {
        validate_duration(duration)?;

        if !from.is_finite() || !to.is_finite() || from >= to {
            return Err(MorphError::InvalidArgument(format!(
                "tween range [{from}, {to}] must be finite and ascending"
            )));
        }

        Ok(Self {
            from,
            to,
            duration,
            easing,
            started: now,
            last: from,
            done: false,
        })
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Progress at `now`. Instants before the start sample as the start.
    pub fn sample(&mut self, now: Instant) -> Sample {
        if self.done {
            return Sample::Finished(self.to);
        }

        let elapsed = now.saturating_duration_since(self.started);
        let raw_t = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);

        if raw_t >= 1.0 {
            return Sample::Finished(self.finish());
        }

        let eased = (self.easing)(raw_t).clamp(0.0, 1.0);
        let value = (self.from + (self.to - self.from) * eased).clamp(self.from, self.to);
        self.last = self.last.max(value);

        Sample::Running(self.last)
    }

    /// Jumps straight to the far end.
    pub fn finish(&mut self) -> f64 {
        self.done = true;
        self.last = self.to;
        self.to
    }
}

pub(crate) fn validate_duration(duration: Duration) -> Result<()> {
    if duration.is_zero() {
        return Err(MorphError::InvalidArgument(
            "transition duration must be non-zero".to_string(),
        ));
    }

    Ok(())
}
