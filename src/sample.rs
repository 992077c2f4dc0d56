//! Element types that can be stored in a delay line.

use core::ops::{Add, Index, IndexMut, Sub};

use num_traits::Zero;

/// Numeric value supporting the arithmetic needed for interpolation:
/// addition, subtraction and multiplication by a scalar.
pub trait Sample: Copy + Zero + Sub<Output = Self> {
    fn scale(self, factor: f32) -> Self;
}

impl Sample for f32 {
    #[inline]
    fn scale(self, factor: f32) -> Self {
        self * factor
    }
}

impl Sample for f64 {
    #[inline]
    fn scale(self, factor: f32) -> Self {
        self * factor as f64
    }
}

/// Multi-channel frame. All arithmetic is applied per channel, so a single
/// delay line can carry several phase-locked signals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<const CHANNELS: usize>(pub [f32; CHANNELS]);

/// Two-channel frame.
pub type Stereo = Frame<2>;

impl<const CHANNELS: usize> Frame<CHANNELS> {
    pub const fn new(channels: [f32; CHANNELS]) -> Self {
        Self(channels)
    }

    pub const fn splat(value: f32) -> Self {
        Self([value; CHANNELS])
    }

    pub fn channels(&self) -> &[f32; CHANNELS] {
        &self.0
    }
}

impl<const CHANNELS: usize> Default for Frame<CHANNELS> {
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl<const CHANNELS: usize> Add for Frame<CHANNELS> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
        self
    }
}

impl<const CHANNELS: usize> Sub for Frame<CHANNELS> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a -= b;
        }
        self
    }
}

impl<const CHANNELS: usize> Zero for Frame<CHANNELS> {
    fn zero() -> Self {
        Self::splat(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(|x| *x == 0.0)
    }
}

impl<const CHANNELS: usize> Index<usize> for Frame<CHANNELS> {
    type Output = f32;

    fn index(&self, channel: usize) -> &f32 {
        &self.0[channel]
    }
}

impl<const CHANNELS: usize> IndexMut<usize> for Frame<CHANNELS> {
    fn index_mut(&mut self, channel: usize) -> &mut f32 {
        &mut self.0[channel]
    }
}

impl<const CHANNELS: usize> Sample for Frame<CHANNELS> {
    #[inline]
    fn scale(mut self, factor: f32) -> Self {
        for x in self.0.iter_mut() {
            *x *= factor;
        }
        self
    }
}
