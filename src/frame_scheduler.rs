//! Frame scheduling and timing utilities.
//!
//! A fixed-interval loop that renders the configured effect and flushes
//! the strip once per frame. Timing is a poll against the clock: a frame
//! is rendered only once the interval since the previous one has passed.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    PixelOutput, clock::Clock, config::LightConfig, effect::EffectSlot,
    random::RandomSource, strip::Strip,
};

/// Result of a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// Whether a frame was rendered and flushed.
    pub rendered: bool,
    /// How long until the next frame is due (zero if already due).
    pub sleep_duration: Duration,
}

/// Frame scheduler that owns the strip, the effect and its collaborators.
///
/// # Usage
///
/// ```ignore
/// let rng = seeded_rng(Instant::now());
/// let mut scheduler = FrameScheduler::new(output, rng, SystemClock, &config::DEFAULT);
/// scheduler.run();
/// ```
pub struct FrameScheduler<O: PixelOutput, R: RandomSource, C: Clock, const N: usize> {
    strip: Strip<O, N>,
    rng: R,
    clock: C,
    effect: EffectSlot<N>,
    interval: Duration,
    last_tick: Instant,
}

impl<O: PixelOutput, R: RandomSource, C: Clock, const N: usize> FrameScheduler<O, R, C, N> {
    /// Create a new frame scheduler.
    ///
    /// The first frame is due one interval after creation.
    pub fn new(output: O, mut rng: R, clock: C, config: &LightConfig<N>) -> Self {
        let effect = config.effect.to_slot(config, &mut rng);
        let last_tick = clock.now();

        #[cfg(feature = "esp32-log")]
        println!(
            "[FrameScheduler.new] {} on {} pixels every {}ms",
            config.effect.as_str(),
            N,
            config.frame_interval.as_millis()
        );

        Self {
            strip: Strip::new(output, config.order),
            rng,
            clock,
            effect,
            interval: config.frame_interval,
            last_tick,
        }
    }

    /// Render and flush a frame if the interval has elapsed.
    ///
    /// A flash burst inside the frame blocks this call until it is over.
    pub fn poll(&mut self) -> FrameResult {
        let now = self.clock.now();
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < self.interval {
            return FrameResult {
                rendered: false,
                sleep_duration: self.interval - elapsed,
            };
        }

        self.last_tick = now;
        self.effect
            .render(&mut self.strip, &mut self.rng, &mut self.clock);
        self.strip.flush();

        let next_deadline = self.last_tick + self.interval;
        FrameResult {
            rendered: true,
            sleep_duration: next_deadline.saturating_duration_since(self.clock.now()),
        }
    }

    /// Run the loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            let result = self.poll();
            if result.sleep_duration > Duration::from_ticks(0) {
                self.clock.sleep(result.sleep_duration);
            }
        }
    }

    /// Get a reference to the strip.
    pub const fn strip(&self) -> &Strip<O, N> {
        &self.strip
    }

    /// Get a reference to the running effect.
    pub const fn effect(&self) -> &EffectSlot<N> {
        &self.effect
    }

    /// Get a reference to the clock.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Get a mutable reference to the clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Time the last frame was rendered (or the scheduler was created).
    pub const fn last_tick(&self) -> Instant {
        self.last_tick
    }
}
