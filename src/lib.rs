//! # zerolock
//!
//! Sliding mean over a stream of readings with a zero-triggered lockout.
//!
//! [`core::StreamAverager`] keeps the last three non-zero readings and
//! answers every submission with their mean. A zero is never averaged: it
//! starts a one-second quiescence interval during which any further
//! reading is rejected with [`core::LockoutViolation`]. The interval is
//! checked by comparing clock readings at submission time, so the averager
//! never blocks.
//!
//! [`driver`] holds the line-oriented glue used by the `zerolock` binary:
//! parsing, line sources, report rendering and the read loop.

pub mod core;
pub mod driver;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
