use libm::fabsf;

use super::Color;

/// Per-channel distance under which two colors count as equal
pub const CONVERGENCE_THRESHOLD: f32 = 1.0;

/// Move `current` toward `target` by `step` of the remaining distance
///
/// Only the RGB channels move; brightness is taken from `current`.
/// A step of 1.0 or more lands on (or past) the target.
#[inline]
pub fn adjust(current: Color, target: Color, step: f32) -> Color {
    Color {
        r: approach(current.r, target.r, step),
        g: approach(current.g, target.g, step),
        b: approach(current.b, target.b, step),
        brightness: current.brightness,
    }
}

/// Check if every RGB channel of `current` is within one unit of `target`
#[inline]
pub fn is_converged(current: Color, target: Color) -> bool {
    fabsf(current.r - target.r) < CONVERGENCE_THRESHOLD
        && fabsf(current.g - target.g) < CONVERGENCE_THRESHOLD
        && fabsf(current.b - target.b) < CONVERGENCE_THRESHOLD
}

#[inline]
fn approach(current: f32, target: f32, step: f32) -> f32 {
    current + step * (target - current)
}
