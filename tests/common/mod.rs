#![allow(dead_code)]

use std::collections::VecDeque;

use saber_strip::{Clock, Duration, Instant, OutputDriver, PixelOutput, RandomSource, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Set(usize, Rgb),
    Flush,
}

/// Output that records every call and keeps the last color of each pixel
#[derive(Debug)]
pub struct RecordingOutput {
    pub events: Vec<Event>,
    pub pixels: Vec<Rgb>,
}

impl RecordingOutput {
    pub fn new(len: usize) -> Self {
        Self {
            events: Vec::new(),
            pixels: vec![Rgb::default(); len],
        }
    }

    pub fn flushes(&self) -> usize {
        self.events.iter().filter(|e| **e == Event::Flush).count()
    }

    pub fn writes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Set(..)))
            .count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl PixelOutput for RecordingOutput {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.events.push(Event::Set(index, color));
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn flush(&mut self) {
        self.events.push(Event::Flush);
    }
}

/// Driver that keeps every frame written to it
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

/// Clock that only moves when told to, or when slept on
#[derive(Debug)]
pub struct ManualClock {
    pub now: Instant,
    pub sleeps: Vec<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Instant::from_millis(0),
            sleeps: Vec::new(),
        }
    }

    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        self.now += duration;
    }
}

/// Random source that replays fixed draws and checks their bounds
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    ints: VecDeque<u32>,
    reals: VecDeque<f32>,
}

impl ScriptedRandom {
    pub fn new(ints: &[u32], reals: &[f32]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            reals: reals.iter().copied().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.ints.is_empty() && self.reals.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let value = self.ints.pop_front().expect("integer script exhausted");
        assert!(
            (low..=high).contains(&value),
            "scripted {value} outside {low}..={high}"
        );
        value
    }

    fn real(&mut self, low: f32, high: f32) -> f32 {
        let value = self.reals.pop_front().expect("real script exhausted");
        assert!(
            value >= low && value < high,
            "scripted {value} outside {low}..{high}"
        );
        value
    }
}
