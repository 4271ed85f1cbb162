//! Comet effect
//!
//! A fixed palette travels from the first logical pixel to the last over
//! a solid background. Palette color 0 leads, the rest trail behind it.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Effect;
use crate::{
    PixelOutput, clock::Clock, color::Color, random::RandomSource, strip::Strip,
};

#[derive(Debug, Clone, Copy)]
pub struct CometConfig {
    /// Comet colors, head first
    pub palette: &'static [Color],
    /// Color of every pixel the comet does not cover
    pub background: Color,
}

/// Comet effect with a cycling frame counter
#[derive(Debug, Clone)]
pub struct CometEngine {
    palette: &'static [Color],
    background: Color,
    frame: usize,
}

impl CometEngine {
    pub const fn new(config: &CometConfig) -> Self {
        Self {
            palette: config.palette,
            background: config.background,
            frame: 0,
        }
    }

    /// Frame that the next `advance` renders
    pub const fn frame(&self) -> usize {
        self.frame
    }

    /// Number of frames in one pass over `pixels` LEDs
    ///
    /// The pass ends once the tail has left the far end of the strip.
    pub const fn cycle_len(&self, pixels: usize) -> usize {
        pixels + self.palette.len()
    }

    /// Render a single comet frame
    ///
    /// The head sits at logical position `frame`, palette color `j` at
    /// `frame - j`. Positions off the strip are skipped.
    pub fn render_frame<O: PixelOutput, const N: usize>(
        &self,
        strip: &mut Strip<O, N>,
        frame: usize,
    ) {
        strip.fill(self.background);
        for (j, color) in self.palette.iter().enumerate() {
            if let Some(position) = frame.checked_sub(j) {
                strip.set(position, *color);
            }
        }
    }

    /// Render the current frame and step to the next one
    pub fn advance<O: PixelOutput, const N: usize>(&mut self, strip: &mut Strip<O, N>) {
        self.render_frame(strip, self.frame);

        self.frame += 1;
        if self.frame >= self.cycle_len(N) {
            self.frame = 0;
            #[cfg(feature = "esp32-log")]
            println!("[CometEngine.advance] pass complete, restarting");
        }
    }
}

impl<const N: usize> Effect<N> for CometEngine {
    fn render<O: PixelOutput, R: RandomSource, C: Clock>(
        &mut self,
        strip: &mut Strip<O, N>,
        _rng: &mut R,
        _clock: &mut C,
    ) {
        self.advance(strip);
    }
}
