#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod sample;
pub mod utils;

pub use error::Error;
pub use sample::{Frame, Sample, Stereo};
pub use utils::delay_line::{DelayLine, DelayLineOps, DelayLineView, DelayState};
pub use utils::phasor::Phasor;

/// Sample rate context for DSP calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRate {
    sample_rate_hz: f32,
    inv_sr: f32,
}

impl SampleRate {
    /// Create a new sample rate context. The rate must be finite and positive.
    pub fn new(sample_rate_hz: f32) -> Result<Self, Error> {
        if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
            log::warn!("Rejected sample rate {} Hz", sample_rate_hz);
            return Err(Error::InvalidSampleRate(sample_rate_hz));
        }

        log::debug!("Sample rate set to {} Hz", sample_rate_hz);

        Ok(Self {
            sample_rate_hz,
            inv_sr: 1.0 / sample_rate_hz,
        })
    }

    /// Sample rate in Hz
    #[inline]
    pub fn hz(&self) -> f32 {
        self.sample_rate_hz
    }

    /// Reciprocal of sample rate (1.0 / sample_rate_hz) for fast multiplication
    #[inline]
    pub fn inv_sr(&self) -> f32 {
        self.inv_sr
    }

    /// Converts a duration to a (fractional) delay in samples.
    #[inline]
    pub fn seconds_to_samples(&self, seconds: f32) -> f32 {
        seconds * self.sample_rate_hz
    }

    #[inline]
    pub fn ms_to_samples(&self, milliseconds: f32) -> f32 {
        milliseconds * 0.001 * self.sample_rate_hz
    }
}
