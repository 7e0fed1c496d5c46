use crate::core::clock::{Clock, MonotonicClock};
use crate::core::error::LockoutViolation;
use crate::core::window::SlidingWindow;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

/// Number of most recent non-zero readings the mean is taken over.
pub const WINDOW_CAPACITY: usize = 3;

/// Quiescence interval that follows every zero reading.
pub const LOCKOUT: Duration = Duration::from_secs(1);

/// Successful result of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// The reading was a zero, or the window holds nothing to average.
    NoResult,
    /// Mean of the readings currently in the window.
    Mean(f64),
}

impl Outcome {
    #[inline]
    pub fn mean(&self) -> Option<f64> {
        match self {
            Outcome::Mean(m) => Some(*m),
            Outcome::NoResult => None,
        }
    }

    #[inline]
    pub fn is_no_result(&self) -> bool {
        matches!(self, Outcome::NoResult)
    }
}

/// Running mean of the last [`WINDOW_CAPACITY`] non-zero readings.
///
/// A zero reading is never averaged. Instead it starts a lockout: any
/// non-zero reading submitted less than [`LOCKOUT`] after the zero is
/// rejected with a [`LockoutViolation`], leaving the state untouched. The
/// lockout is enforced by comparing the clock at submission time against
/// the clock at the zero; the averager never sleeps or schedules anything.
///
/// Another zero during a lockout restarts it from that zero.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use zerolock::core::{ManualClock, Outcome, StreamAverager};
///
/// let clock = ManualClock::new();
/// let mut avg = StreamAverager::with_clock(&clock);
///
/// assert_eq!(avg.submit(5.0), Ok(Outcome::Mean(5.0)));
/// assert_eq!(avg.submit(0.0), Ok(Outcome::NoResult));
/// assert!(avg.submit(6.0).is_err());
///
/// clock.advance(Duration::from_secs(1));
/// assert_eq!(avg.submit(6.0), Ok(Outcome::Mean(5.5)));
/// ```
#[derive(Debug, Clone)]
pub struct StreamAverager<C: Clock = MonotonicClock> {
    window: SlidingWindow,
    locked_since: Option<Instant>,
    clock: C,
}

impl StreamAverager<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl Default for StreamAverager<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> StreamAverager<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            window: SlidingWindow::new(WINDOW_CAPACITY),
            locked_since: None,
            clock,
        }
    }

    /// Feeds one reading.
    ///
    /// Returns [`Outcome::NoResult`] for a zero, the window mean for an
    /// accepted non-zero reading, or [`LockoutViolation`] if a non-zero
    /// reading arrives within [`LOCKOUT`] of the most recent zero.
    pub fn submit(&mut self, value: f64) -> Result<Outcome, LockoutViolation> {
        let now = self.clock.now();

        if value == 0.0 {
            debug!(relock = self.locked_since.is_some(), "zero received, locking");
            self.locked_since = Some(now);
            return Ok(Outcome::NoResult);
        }

        if let Some(since) = self.locked_since {
            let elapsed = now.saturating_duration_since(since);
            if elapsed < LOCKOUT {
                debug!(value, elapsed_secs = elapsed.as_secs_f64(), "rejected during lockout");
                return Err(LockoutViolation::new(elapsed));
            }
            debug!(elapsed_secs = elapsed.as_secs_f64(), "lockout over, resuming");
            self.locked_since = None;
        }

        self.window.push(value);
        Ok(self
            .window
            .mean()
            .map_or(Outcome::NoResult, Outcome::Mean))
    }

    /// Readings currently averaged, oldest first.
    pub fn window(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.window.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Whether a zero's lockout is pending.
    ///
    /// Stays `true` after the interval has run out until the next accepted
    /// reading clears it.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked_since.is_some()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
