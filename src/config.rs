//! Compile-time configuration of the strip and its effects

use embassy_time::Duration;

use crate::{
    color::Color,
    effect::{CometConfig, EffectId, FlashConfig, ShimmerConfig},
    topology::PixelOrder,
};

pub const NUM_PIXELS: usize = 13;
pub const PATTERN_LENGTH: usize = 7;

/// Minimum time between two frames
pub const FRAME_INTERVAL: Duration = Duration::from_millis(10);

/// Effect the strip runs
pub const EFFECT: EffectId = EffectId::Shimmer;

/// Comet colors, head first
pub const PATTERN: [Color; PATTERN_LENGTH] = [
    Color::rgb(255, 0, 0, 1.0),
    Color::rgb(255, 140, 0, 1.0),
    Color::rgb(255, 255, 0, 1.0),
    Color::rgb(0, 255, 0, 1.0),
    Color::rgb(0, 0, 255, 1.0),
    Color::rgb(255, 0, 255, 1.0),
    Color::rgb(0, 255, 255, 1.0),
];

pub const BACKGROUND: Color = Color::rgb(245, 255, 200, 1.0);

pub const SHIMMER_COLOR_1: Color = Color::rgb(0, 149, 255, 0.8);
pub const SHIMMER_COLOR_2: Color = Color::rgb(0, 174, 255, 0.6);

// Yellow
pub const FLASH_COLOR: Color = Color::rgb(240, 255, 0, 0.5);

/// Left-to-right pixel order of the strip as wired
pub const PIXEL_ORDER: PixelOrder<NUM_PIXELS> =
    match PixelOrder::new([9, 10, 8, 11, 7, 12, 6, 5, 0, 4, 1, 3, 2]) {
        Ok(order) => order,
        Err(_) => panic!("PIXEL_ORDER must use every pixel exactly once"),
    };

pub const COMET: CometConfig = CometConfig {
    palette: &PATTERN,
    background: BACKGROUND,
};

pub const SHIMMER: ShimmerConfig = ShimmerConfig {
    palette: [SHIMMER_COLOR_1, SHIMMER_COLOR_2],
    initial: BACKGROUND,
    initial_min_step: 0.01,
    initial_max_step: 0.1,
    min_step: 0.001,
    max_step: 0.005,
};

#[allow(clippy::cast_possible_truncation)]
pub const FLASH: FlashConfig = FlashConfig {
    enabled: true,
    color: FLASH_COLOR,
    chance_per_mille: 2,
    min_flashes: 4,
    max_flashes: 10,
    min_delay: Duration::from_micros(100),
    max_delay: Duration::from_micros(5_000),
    min_spread: 3,
    max_spread: NUM_PIXELS as u32,
};

/// Configuration for the whole strip
#[derive(Debug, Clone, Copy)]
pub struct LightConfig<const N: usize> {
    pub effect: EffectId,
    pub frame_interval: Duration,
    pub order: PixelOrder<N>,
    pub comet: CometConfig,
    pub shimmer: ShimmerConfig,
    pub flash: FlashConfig,
}

pub const DEFAULT: LightConfig<NUM_PIXELS> = LightConfig {
    effect: EFFECT,
    frame_interval: FRAME_INTERVAL,
    order: PIXEL_ORDER,
    comet: COMET,
    shimmer: SHIMMER,
    flash: FLASH,
};
