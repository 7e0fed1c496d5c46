mod averager;
mod clock;
mod error;
mod window;

pub use averager::{LOCKOUT, Outcome, StreamAverager, WINDOW_CAPACITY};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::LockoutViolation;
pub use window::SlidingWindow;
