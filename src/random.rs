//! Random number source for effects
//!
//! Effects draw all their randomness through [`RandomSource`] so a
//! scripted sequence can stand in for the generator.

use embassy_time::{Duration, Instant};

pub trait RandomSource {
    /// Uniform integer in `low..=high`
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Uniform real in `low..high`
    fn real(&mut self, low: f32, high: f32) -> f32;

    /// Uniform index into a collection of `len` items
    fn pick(&mut self, len: usize) -> usize {
        let last = u32::try_from(len.saturating_sub(1)).unwrap_or(u32::MAX);
        self.int_inclusive(0, last) as usize
    }

    /// Uniform duration in `low..high`, in whole microseconds
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn duration(&mut self, low: Duration, high: Duration) -> Duration {
        let micros = self.real(low.as_micros() as f32, high.as_micros() as f32);
        Duration::from_micros(micros as u64)
    }
}

impl RandomSource for fastrand::Rng {
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.u32(low..=high)
    }

    fn real(&mut self, low: f32, high: f32) -> f32 {
        low + self.f32() * (high - low)
    }
}

/// Create a generator seeded from the clock
///
/// Every boot starts from a different tick count, so patterns differ per boot.
pub fn seeded_rng(now: Instant) -> fastrand::Rng {
    fastrand::Rng::with_seed(now.as_ticks())
}
