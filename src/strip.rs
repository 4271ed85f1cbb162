//! Logical view of the LED strip

use crate::{PixelOutput, color::Color, topology::PixelOrder};

/// LED strip addressed by logical (left-to-right) position
///
/// Colors are brightness-scaled and mapped through the pixel order
/// before they reach the output. Positions outside `0..N` are dropped.
#[derive(Debug)]
pub struct Strip<O: PixelOutput, const N: usize> {
    output: O,
    order: PixelOrder<N>,
}

impl<O: PixelOutput, const N: usize> Strip<O, N> {
    pub const fn new(output: O, order: PixelOrder<N>) -> Self {
        Self { output, order }
    }

    /// Write a color to a logical position
    ///
    /// Returns false if the position is outside the strip
    pub fn set(&mut self, logical: usize, color: Color) -> bool {
        let Some(physical) = self.order.physical(logical) else {
            return false;
        };
        self.output.set_pixel(physical, color.to_rgb());
        true
    }

    /// Write a color to every position
    pub fn fill(&mut self, color: Color) {
        for logical in 0..N {
            self.set(logical, color);
        }
    }

    /// Transmit buffered writes to the strip
    pub fn flush(&mut self) {
        self.output.flush();
    }

    /// Get a reference to the output
    pub const fn output(&self) -> &O {
        &self.output
    }
}
