//! Saber flash overlay
//!
//! A short burst of on/off flashes spreading around a random pixel.
//! The burst blocks the caller for its whole duration and flushes every
//! pixel write on its own.

use embassy_time::Duration;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    PixelOutput, clock::Clock, color::Color, random::RandomSource, strip::Strip,
};

/// Roll range for the per-tick flash chance
const CHANCE_SCALE: u32 = 1000;

/// Configuration for the saber flash
#[derive(Debug, Clone, Copy)]
pub struct FlashConfig {
    pub enabled: bool,
    /// Flash color; pixels go back to off after each flash
    pub color: Color,
    /// Chance to start a burst on a shimmer tick, out of 1000
    pub chance_per_mille: u32,
    pub min_flashes: u32,
    pub max_flashes: u32,
    /// Bounds of the pause after each on and each off phase
    pub min_delay: Duration,
    pub max_delay: Duration,
    /// Bounds of how many pixels the flash reaches on each side of its start
    pub min_spread: u32,
    pub max_spread: u32,
}

/// Outcome of a single burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashReport {
    /// Logical position the flashes spread from
    pub start: usize,
    /// Number of on/off flashes performed
    pub flashes: u32,
}

#[derive(Debug, Clone)]
pub struct SaberFlash {
    config: FlashConfig,
}

impl SaberFlash {
    pub const fn new(config: FlashConfig) -> Self {
        Self { config }
    }

    /// Roll the per-tick chance of a burst
    ///
    /// Nothing is drawn when the flash is disabled.
    pub fn triggers<R: RandomSource>(&self, rng: &mut R) -> bool {
        self.config.enabled && rng.int_inclusive(1, CHANCE_SCALE) <= self.config.chance_per_mille
    }

    /// Run a full burst
    pub fn run<O: PixelOutput, R: RandomSource, C: Clock, const N: usize>(
        &self,
        strip: &mut Strip<O, N>,
        rng: &mut R,
        clock: &mut C,
    ) -> FlashReport {
        let start = rng.pick(N);
        let flashes = rng.int_inclusive(self.config.min_flashes, self.config.max_flashes);

        #[cfg(feature = "esp32-log")]
        println!(
            "[SaberFlash.run] {} flashes from pixel {}",
            flashes, start
        );

        for _ in 0..flashes {
            let spread = rng.int_inclusive(self.config.min_spread, self.config.max_spread);
            let pixels = span::<N>(start, spread);

            light(strip, &pixels, self.config.color);
            clock.sleep(rng.duration(self.config.min_delay, self.config.max_delay));

            light(strip, &pixels, Color::OFF);
            clock.sleep(rng.duration(self.config.min_delay, self.config.max_delay));
        }

        FlashReport { start, flashes }
    }
}

/// Logical positions within `spread` of `start` that lie on the strip
fn span<const N: usize>(start: usize, spread: u32) -> Vec<usize, N> {
    let spread = spread as usize;
    let mut pixels = Vec::new();
    for logical in start.saturating_sub(spread)..=start.saturating_add(spread) {
        if logical >= N {
            break;
        }
        // Capacity is N and every position is below N, so this never fails
        let _ = pixels.push(logical);
    }
    pixels
}

/// Write `color` to each pixel, showing every write immediately
fn light<O: PixelOutput, const N: usize>(strip: &mut Strip<O, N>, pixels: &[usize], color: Color) {
    for &logical in pixels {
        strip.set(logical, color);
        strip.flush();
    }
}
