#![no_std]

pub mod clock;
pub mod color;
pub mod config;
pub mod effect;
pub mod frame_scheduler;
pub mod output;
pub mod random;
pub mod strip;
pub mod topology;

pub use clock::{Clock, SystemClock};
pub use config::LightConfig;
pub use effect::{
    CometConfig, CometEngine, EffectId, EffectSlot, FlashConfig, FlashReport, SaberFlash,
    ShimmerConfig, ShimmerEngine, ShimmerTick,
};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use output::{FrameBuffer, SmartLedsDriver};
pub use random::{RandomSource, seeded_rng};
pub use strip::Strip;
pub use topology::{PixelOrder, TopologyError};

pub use color::{Color, Rgb, adjust};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push a whole frame to the hardware.
/// Wrap it in [`FrameBuffer`] to get a [`PixelOutput`].
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Per-pixel output capability
///
/// Writes land in a buffer and become visible on `flush`.
/// Both operations are infallible at this layer.
pub trait PixelOutput {
    /// Store `color` for the pixel at physical `index`
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Transmit the buffered pixels to the strip
    fn flush(&mut self);
}

impl<T: PixelOutput + ?Sized> PixelOutput for &mut T {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        (**self).set_pixel(index, color);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}
