//! Phasor.
//!
//! Generates a rising ramp between 0.0 and 1.0, wrapping back at 1.0. Feeds
//! modulation into delay times for chorus and flanger effects.

// Based on MIT-licensed code (c) 2020 by Electrosmith, Corp

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::SampleRate;

#[derive(Debug, Clone)]
pub struct Phasor {
    sample_rate: SampleRate,
    frequency: f32,
    increment: f32,
    phase: f32,
}

impl Phasor {
    pub fn new(sample_rate: SampleRate) -> Self {
        log::debug!("Phasor running at {} Hz", sample_rate.hz());

        Self {
            sample_rate,
            frequency: 0.0,
            increment: 0.0,
            phase: 0.0,
        }
    }

    pub fn init(&mut self, frequency: f32, initial_phase: f32) {
        self.set_frequency(frequency);
        self.set_phase(initial_phase);
    }

    /// Sets the ramp frequency in Hz. Negative values are clamped to 0.
    #[inline]
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency.max(0.0);
        self.increment = self.frequency / self.sample_rate.hz();
    }

    #[inline]
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Jumps to a phase, wrapped into [0, 1).
    pub fn set_phase(&mut self, phase: f32) {
        let wrapped = phase - phase.floor();

        self.phase = if wrapped.is_finite() && wrapped < 1.0 {
            wrapped
        } else {
            0.0
        };
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Returns the current phase and advances by one sample.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f32 {
        let out = self.phase;
        self.phase += self.increment;

        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        out
    }

    #[inline]
    pub fn render(&mut self, out: &mut [f32]) {
        for out_sample in out.iter_mut() {
            *out_sample = self.next();
        }
    }
}
