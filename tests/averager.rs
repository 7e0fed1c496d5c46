//! End-to-end behaviour of the averager through its public API.
//!
//! Timing is driven by a `ManualClock`, so every lockout check is exact.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use zerolock::core::{LOCKOUT, ManualClock, Outcome, StreamAverager, WINDOW_CAPACITY};

fn window<C: zerolock::core::Clock>(avg: &StreamAverager<C>) -> Vec<f64> {
    avg.window().collect()
}

// ============================================================================
// Scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn three_readings_without_zeros() {
        let mut avg = StreamAverager::with_clock(ManualClock::new());
        let means: Vec<_> = [1.0, 2.0, 3.0]
            .into_iter()
            .map(|v| avg.submit(v).unwrap())
            .collect();
        assert_eq!(
            means,
            vec![Outcome::Mean(1.0), Outcome::Mean(1.5), Outcome::Mean(2.0)]
        );
    }

    #[test]
    fn fourth_reading_slides_the_window() {
        let mut avg = StreamAverager::with_clock(ManualClock::new());
        for v in [1.0, 2.0, 3.0] {
            avg.submit(v).unwrap();
        }
        assert_eq!(avg.submit(4.0), Ok(Outcome::Mean(3.0)));
        assert_eq!(window(&avg), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn zero_locks_then_resumes_after_a_second() {
        let clock = ManualClock::new();
        let mut avg = StreamAverager::with_clock(&clock);

        assert_eq!(avg.submit(5.0), Ok(Outcome::Mean(5.0)));
        assert_eq!(avg.submit(0.0), Ok(Outcome::NoResult));
        assert!(avg.is_locked());

        let err = avg.submit(6.0).unwrap_err();
        assert!(err.elapsed() < LOCKOUT);
        assert_eq!(window(&avg), vec![5.0]);

        clock.advance(Duration::from_millis(1000));
        assert_eq!(avg.submit(6.0), Ok(Outcome::Mean(5.5)));
        assert!(!avg.is_locked());
    }

    #[test]
    fn zero_as_first_reading() {
        let mut avg = StreamAverager::with_clock(ManualClock::new());
        assert_eq!(avg.submit(0.0), Ok(Outcome::NoResult));
        assert!(avg.is_empty());
        assert!(avg.is_locked());
    }

    #[test]
    fn real_clock_rejects_immediate_resume() {
        let mut avg = StreamAverager::new();
        avg.submit(0.0).unwrap();
        let err = avg.submit(1.0).unwrap_err();
        assert!(err.elapsed() < LOCKOUT);
        assert!(avg.is_empty());
    }
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use super::*;

    #[test]
    fn window_never_exceeds_capacity_nor_holds_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let clock = ManualClock::new();
        let mut avg = StreamAverager::with_clock(&clock);

        for _ in 0..5_000 {
            let value = if rng.random_bool(0.15) {
                0.0
            } else {
                rng.random_range(-1_000.0..1_000.0)
            };
            clock.advance(Duration::from_millis(rng.random_range(0..1_500)));
            let _ = avg.submit(value);

            assert!(avg.len() <= WINDOW_CAPACITY);
            assert!(avg.window().all(|v| v != 0.0));
        }
    }

    #[test]
    fn sliding_mean_matches_last_three_accepted() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut avg = StreamAverager::with_clock(ManualClock::new());
        let mut accepted = Vec::new();

        for _ in 0..1_000 {
            let mut value: f64 = rng.random_range(-50.0..50.0);
            if value == 0.0 {
                value = 1.0;
            }
            accepted.push(value);

            let got = avg.submit(value).unwrap().mean().unwrap();
            let tail = &accepted[accepted.len().saturating_sub(WINDOW_CAPACITY)..];
            let want = tail.iter().sum::<f64>() / tail.len() as f64;

            assert_eq!(window(&avg), tail);
            assert!((got - want).abs() < 1e-9, "got={got}, want={want}");
        }
    }

    #[test]
    fn matches_a_reference_model_under_random_timing() {
        let mut rng = StdRng::seed_from_u64(1234);
        let clock = ManualClock::new();
        let mut avg = StreamAverager::with_clock(&clock);

        let mut model: Vec<f64> = Vec::new();
        let mut locked_at: Option<Duration> = None;

        for _ in 0..5_000 {
            clock.advance(Duration::from_millis(rng.random_range(0..700)));
            let now = clock.elapsed();
            let value = if rng.random_bool(0.1) {
                0.0
            } else {
                rng.random_range(1.0..10.0)
            };

            let got = avg.submit(value);

            if value == 0.0 {
                locked_at = Some(now);
                assert_eq!(got, Ok(Outcome::NoResult));
            } else if let Some(at) = locked_at.filter(|at| now - *at < LOCKOUT) {
                let err = got.unwrap_err();
                assert_eq!(err.elapsed(), now - at);
            } else {
                locked_at = None;
                model.push(value);
                if model.len() > WINDOW_CAPACITY {
                    model.remove(0);
                }
                let want = model.iter().sum::<f64>() / model.len() as f64;
                let mean = got.unwrap().mean().unwrap();
                assert!((mean - want).abs() < 1e-9);
            }

            assert_eq!(window(&avg), model);
            assert_eq!(avg.is_locked(), locked_at.is_some());
        }
    }

    #[test]
    fn violation_then_retry_equals_never_violating() {
        let run = |violate: bool| {
            let clock = ManualClock::new();
            let mut avg = StreamAverager::with_clock(&clock);
            avg.submit(1.0).unwrap();
            avg.submit(2.0).unwrap();
            avg.submit(0.0).unwrap();
            if violate {
                clock.advance(Duration::from_millis(300));
                assert!(avg.submit(9.0).is_err());
                assert!(avg.submit(8.0).is_err());
                clock.advance(Duration::from_millis(700));
            } else {
                clock.advance(LOCKOUT);
            }
            let last = avg.submit(3.0).unwrap();
            (window(&avg), last, avg.is_locked())
        };

        assert_eq!(run(true), run(false));
        assert_eq!(run(true).0, vec![1.0, 2.0, 3.0]);
    }
}
