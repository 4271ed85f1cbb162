//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod comet;
mod flash;
mod shimmer;

pub use comet::{CometConfig, CometEngine};
pub use flash::{FlashConfig, FlashReport, SaberFlash};
pub use shimmer::{PixelState, ShimmerConfig, ShimmerEngine, ShimmerTick};

use crate::{
    PixelOutput, clock::Clock, config::LightConfig, random::RandomSource, strip::Strip,
};

const EFFECT_NAME_COMET: &str = "comet";
const EFFECT_NAME_SHIMMER: &str = "shimmer";

const EFFECT_ID_COMET: u8 = 0;
const EFFECT_ID_SHIMMER: u8 = 1;

pub trait Effect<const N: usize> {
    /// Render a single frame
    ///
    /// Effects write pixels but leave the final flush to the caller.
    fn render<O: PixelOutput, R: RandomSource, C: Clock>(
        &mut self,
        strip: &mut Strip<O, N>,
        rng: &mut R,
        clock: &mut C,
    );
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot<const N: usize> {
    /// Traveling comet over a background
    Comet(CometEngine),
    /// Two-color shimmer with saber flashes
    Shimmer(ShimmerEngine<N>),
}

/// Known effect ids
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Comet = EFFECT_ID_COMET,
    Shimmer = EFFECT_ID_SHIMMER,
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_COMET => Self::Comet,
            EFFECT_ID_SHIMMER => Self::Shimmer,
            _ => return None,
        })
    }

    /// Build the effect from its configuration
    ///
    /// The shimmer effect draws its initial targets and step sizes from `rng`.
    pub fn to_slot<R: RandomSource, const N: usize>(
        self,
        config: &LightConfig<N>,
        rng: &mut R,
    ) -> EffectSlot<N> {
        match self {
            Self::Comet => EffectSlot::Comet(CometEngine::new(&config.comet)),
            Self::Shimmer => {
                EffectSlot::Shimmer(ShimmerEngine::new(&config.shimmer, config.flash, rng))
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comet => EFFECT_NAME_COMET,
            Self::Shimmer => EFFECT_NAME_SHIMMER,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_COMET => Some(Self::Comet),
            EFFECT_NAME_SHIMMER => Some(Self::Shimmer),
            _ => None,
        }
    }
}

impl<const N: usize> EffectSlot<N> {
    /// Render the current effect
    pub fn render<O: PixelOutput, R: RandomSource, C: Clock>(
        &mut self,
        strip: &mut Strip<O, N>,
        rng: &mut R,
        clock: &mut C,
    ) {
        match self {
            Self::Comet(effect) => effect.render(strip, rng, clock),
            Self::Shimmer(effect) => effect.render(strip, rng, clock),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Comet(_) => EffectId::Comet,
            Self::Shimmer(_) => EffectId::Shimmer,
        }
    }
}
