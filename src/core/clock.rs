use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of monotonic timestamps for a [`StreamAverager`].
///
/// The averager reads the clock exactly once per submission and never
/// sleeps on it, so any implementation only has to answer "what time is it
/// now". Implementations must be monotonic: a later call never returns an
/// earlier instant.
///
/// [`StreamAverager`]: crate::core::StreamAverager
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The process-wide monotonic clock ([`Instant::now`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Starts at the instant it was created and advances by explicit
/// [`advance`](ManualClock::advance) calls, which makes lockout timing
/// deterministic in tests and doc examples.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Time advanced since creation.
    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Instant {
        (**self).now()
    }
}
