mod interpolate;

use smart_leds::RGB8;

pub use interpolate::{CONVERGENCE_THRESHOLD, adjust, is_converged};

pub type Rgb = RGB8;

/// Strip color: float RGB channels plus a brightness multiplier
///
/// Channels are nominally 0-255 and stay fractional while interpolating.
/// Brightness (0.0-1.0) is applied to every channel only when the color
/// is written out, see [`Color::to_rgb`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub brightness: f32,
}

impl Color {
    /// Pixel turned off
    pub const OFF: Self = Self::rgb(0, 0, 0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, brightness: f32) -> Self {
        Self { r, g, b, brightness }
    }

    /// Create a color from integer channels
    #[allow(clippy::cast_lossless)]
    pub const fn rgb(r: u8, g: u8, b: u8, brightness: f32) -> Self {
        Self::new(r as f32, g as f32, b as f32, brightness)
    }

    /// Same channels, different brightness
    #[must_use]
    pub const fn with_brightness(self, brightness: f32) -> Self {
        Self { brightness, ..self }
    }

    /// Scale each channel by brightness and truncate to an integer color
    ///
    /// Values are not clamped beyond what the float to `u8` cast does.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb(self) -> Rgb {
        Rgb {
            r: (self.r * self.brightness) as u8,
            g: (self.g * self.brightness) as u8,
            b: (self.b * self.brightness) as u8,
        }
    }
}
