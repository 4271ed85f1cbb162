//! Adapters between the per-pixel output capability and LED drivers

use smart_leds::SmartLedsWrite;

use crate::{OutputDriver, PixelOutput, color::Rgb};

/// Frame buffer in front of an [`OutputDriver`]
///
/// Pixel writes only touch the buffer; `flush` pushes the whole frame.
/// Writes past the end of the buffer are dropped.
#[derive(Debug)]
pub struct FrameBuffer<D: OutputDriver, const N: usize> {
    driver: D,
    frame: [Rgb; N],
}

impl<D: OutputDriver, const N: usize> FrameBuffer<D, N> {
    /// Create a frame buffer with every pixel off
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            frame: [Rgb::default(); N],
        }
    }

    /// Get the buffered frame
    pub const fn frame(&self) -> &[Rgb; N] {
        &self.frame
    }

    /// Get a reference to the driver
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }
}

impl<D: OutputDriver, const N: usize> PixelOutput for FrameBuffer<D, N> {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    fn flush(&mut self) {
        self.driver.write(&self.frame);
    }
}

/// [`OutputDriver`] for any `smart-leds` writer
///
/// Driver errors are dropped: a frame that fails to go out is simply
/// replaced by the next one.
#[derive(Debug)]
pub struct SmartLedsDriver<W> {
    writer: W,
}

impl<W> SmartLedsDriver<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) {
        let _ = self.writer.write(colors.iter().copied());
    }
}
