//! Shimmer effect
//!
//! Every pixel drifts toward one of two palette colors at its own pace.
//! When a pixel arrives, it picks a new target and a new pace. Each tick
//! may instead be taken over by a [`SaberFlash`] burst, which leaves the
//! shimmer state untouched.

use super::{Effect, FlashConfig, FlashReport, SaberFlash};
use crate::{
    PixelOutput,
    clock::Clock,
    color::{Color, adjust, is_converged},
    random::RandomSource,
    strip::Strip,
};

/// Configuration for the shimmer effect
#[derive(Debug, Clone, Copy)]
pub struct ShimmerConfig {
    /// Colors the pixels drift between
    pub palette: [Color; 2],
    /// Color every pixel starts from
    pub initial: Color,
    /// Bounds of the step sizes drawn at start-up
    pub initial_min_step: f32,
    pub initial_max_step: f32,
    /// Bounds of the step sizes drawn when a pixel reaches its target
    pub min_step: f32,
    pub max_step: f32,
}

/// Drift state of a single pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelState {
    pub current: Color,
    pub target: Color,
    /// Fraction of the remaining distance covered per tick
    pub step: f32,
}

/// What a shimmer tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShimmerTick {
    /// Every pixel moved one step
    Shimmered,
    /// A flash burst ran instead
    Flashed(FlashReport),
}

#[derive(Debug, Clone)]
pub struct ShimmerEngine<const N: usize> {
    palette: [Color; 2],
    min_step: f32,
    max_step: f32,
    pixels: [PixelState; N],
    flash: SaberFlash,
}

impl<const N: usize> ShimmerEngine<N> {
    /// Create a new shimmer effect with random targets and step sizes
    pub fn new<R: RandomSource>(config: &ShimmerConfig, flash: FlashConfig, rng: &mut R) -> Self {
        let mut pixels = [PixelState {
            current: config.initial,
            target: config.palette[0],
            step: config.initial_min_step,
        }; N];
        for pixel in &mut pixels {
            pixel.target = config.palette[rng.pick(config.palette.len())];
        }
        for pixel in &mut pixels {
            pixel.step = rng.real(config.initial_min_step, config.initial_max_step);
        }

        Self {
            palette: config.palette,
            min_step: config.min_step,
            max_step: config.max_step,
            pixels,
            flash: SaberFlash::new(flash),
        }
    }

    pub const fn pixels(&self) -> &[PixelState; N] {
        &self.pixels
    }

    /// Advance every pixel one step, or run a flash burst
    ///
    /// Pixels are written but not flushed; the caller flushes once
    /// after the tick.
    pub fn tick<O: PixelOutput, R: RandomSource, C: Clock>(
        &mut self,
        strip: &mut Strip<O, N>,
        rng: &mut R,
        clock: &mut C,
    ) -> ShimmerTick {
        if self.flash.triggers(rng) {
            return ShimmerTick::Flashed(self.flash.run(strip, rng, clock));
        }

        for (logical, pixel) in self.pixels.iter_mut().enumerate() {
            if is_converged(pixel.current, pixel.target) {
                pixel.target = self.palette[rng.pick(self.palette.len())];
                pixel.step = rng.real(self.min_step, self.max_step);
            }

            let next = adjust(pixel.current, pixel.target, pixel.step)
                .with_brightness(pixel.target.brightness);
            strip.set(logical, next);
            pixel.current = next;
        }

        ShimmerTick::Shimmered
    }
}

impl<const N: usize> Effect<N> for ShimmerEngine<N> {
    fn render<O: PixelOutput, R: RandomSource, C: Clock>(
        &mut self,
        strip: &mut Strip<O, N>,
        rng: &mut R,
        clock: &mut C,
    ) {
        self.tick(strip, rng, clock);
    }
}
