//! Monotonic time and blocking delays

use embassy_time::{Duration, Instant};

/// Time source used for frame pacing and flash delays
pub trait Clock {
    /// Current monotonic time
    fn now(&self) -> Instant;

    /// Block the caller for `duration`
    fn sleep(&mut self, duration: Duration);
}

/// Clock backed by the `embassy-time` driver
///
/// Sleeps are busy-waits; nothing else runs while they block.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}
