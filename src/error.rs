//! Error type for configuration-time failures.
//!
//! Only constructors return errors. Once a delay line or phasor exists, every
//! per-sample operation is infallible.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A delay line was given a store without any elements.
    EmptyBuffer,

    /// Sample rate is zero, negative or not finite.
    InvalidSampleRate(f32),

    /// The allocator could not provide a store of the requested length.
    AllocationFailed { length: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyBuffer => write!(f, "Delay line buffer must hold at least one sample"),
            Error::InvalidSampleRate(hz) => write!(f, "Invalid sample rate: {} Hz", hz),
            Error::AllocationFailed { length } => {
                write!(f, "Failed to allocate buffer of {} samples", length)
            }
        }
    }
}

impl core::error::Error for Error {}
