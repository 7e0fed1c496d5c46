use std::time::Duration;
use thiserror::Error;

/// A non-zero reading arrived before the lockout that follows a zero had
/// run out.
///
/// The averager state is left exactly as it was before the rejected
/// submission, so the caller may simply submit again later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("resume refused: only {:.3}s elapsed since zero (<1s)", Duration::as_secs_f64(.elapsed))]
pub struct LockoutViolation {
    elapsed: Duration,
}

impl LockoutViolation {
    pub(crate) fn new(elapsed: Duration) -> Self {
        Self { elapsed }
    }

    /// Time measured between the zero and the rejected reading.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_millisecond_precision() {
        let err = LockoutViolation::new(Duration::from_millis(123));
        assert_eq!(
            err.to_string(),
            "resume refused: only 0.123s elapsed since zero (<1s)"
        );
    }

    #[test]
    fn exposes_elapsed_in_both_units() {
        let err = LockoutViolation::new(Duration::from_millis(500));
        assert_eq!(err.elapsed(), Duration::from_millis(500));
        assert!((err.elapsed_secs() - 0.5).abs() < 1e-12);
    }
}
