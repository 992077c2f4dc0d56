//! Delay line.
//!
//! A circular buffer holding the most recent samples of a signal, with
//! integer, linear and cubic Hermite reads plus a first-order allpass unit
//! that uses the buffer as its delay element.
//!
//! The write pointer moves backwards: each [`write`](DelayLineOps::write)
//! stores the sample and then decrements the pointer. A tap at delay `d` is
//! therefore found at `write_ptr + d`. Reading before writing on every tick
//! gives a delay of exactly `d` samples.
//!
//! The operations live in [`DelayLineOps`] so that the same code runs on a
//! buffer owned inline ([`DelayLine`]) or on a caller-supplied slice
//! ([`DelayLineView`]).

// Based on MIT-licensed code (c) 2020 by Electrosmith, Corp

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::error::Error;
use crate::sample::Sample;
use crate::utils::{crossfade, hermite};

/// Cursor and delay amount of a delay line. Holds no samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayState {
    write_ptr: usize,
    delay: usize,
    frac: f32,
}

impl DelayState {
    const fn new() -> Self {
        Self {
            write_ptr: 0,
            delay: 1,
            frac: 0.0,
        }
    }

    pub fn write_ptr(&self) -> usize {
        self.write_ptr
    }
}

/// Splits a fractional delay into whole samples and remainder.
///
/// Non-finite and non-positive values collapse to `(0, 0.0)`.
#[inline]
fn split_delay(delay: f32) -> (usize, f32) {
    if !delay.is_finite() || delay <= 0.0 {
        return (0, 0.0);
    }

    (delay as usize, delay.fract())
}

/// Addressing and interpolation on top of a fixed-size sample store.
///
/// Implementors only hand out their state and store. The store must never be
/// empty and must keep its length for the lifetime of the implementor.
pub trait DelayLineOps<T: Sample> {
    fn state(&self) -> &DelayState;

    fn line(&self) -> &[T];

    fn parts_mut(&mut self) -> (&mut DelayState, &mut [T]);

    /// Capacity of the store in samples.
    #[inline]
    fn max_delay(&self) -> usize {
        self.line().len()
    }

    /// Clears the store, moves the write pointer to 0 and sets the delay to
    /// one sample.
    fn reset(&mut self) {
        let (state, line) = self.parts_mut();
        line.fill(T::zero());
        state.write_ptr = 0;
        state.delay = 1usize.min(line.len() - 1);
        state.frac = 0.0;
    }

    /// Sets an integer delay, clamped to `max_delay() - 1`. Clears the
    /// fractional part.
    #[inline]
    fn set_delay(&mut self, delay: usize) {
        let (state, line) = self.parts_mut();
        state.frac = 0.0;
        state.delay = delay.min(line.len() - 1);
    }

    /// Sets a fractional delay. Only the integer part is clamped to
    /// `max_delay() - 1`; the fractional part is kept as is.
    #[inline]
    fn set_delay_frac(&mut self, delay: f32) {
        let (delay_integral, delay_fractional) = split_delay(delay);
        let (state, line) = self.parts_mut();
        state.frac = delay_fractional;
        state.delay = delay_integral.min(line.len() - 1);
    }

    #[inline]
    fn delay_integral(&self) -> usize {
        self.state().delay
    }

    #[inline]
    fn delay_fractional(&self) -> f32 {
        self.state().frac
    }

    /// Stores a sample and moves the write pointer back by one.
    #[inline]
    fn write(&mut self, sample: T) {
        let (state, line) = self.parts_mut();
        let size = line.len();
        line[state.write_ptr] = sample;
        state.write_ptr = (state.write_ptr + size - 1) % size;
    }

    /// Reads at the stored delay, interpolating linearly if it has a
    /// fractional part.
    #[inline]
    fn read(&self) -> T {
        let state = self.state();
        let line = self.line();
        let size = line.len();
        let t = state.write_ptr + state.delay;
        let a = line[t % size];
        let b = line[(t + 1) % size];

        crossfade(a, b, state.frac)
    }

    /// Reads at an integer delay without touching the stored delay. Not
    /// clamped: delays beyond the capacity wrap around.
    #[inline]
    fn read_with_delay(&self, delay: usize) -> T {
        let line = self.line();
        let size = line.len();
        line[(self.state().write_ptr + delay % size) % size]
    }

    /// Reads at a fractional delay with linear interpolation, without
    /// touching the stored delay. Not clamped: delays beyond the capacity
    /// wrap around.
    #[inline]
    fn read_with_delay_frac(&self, delay: f32) -> T {
        let (delay_integral, delay_fractional) = split_delay(delay);
        let line = self.line();
        let size = line.len();
        let t = self.state().write_ptr + delay_integral % size;
        let a = line[t % size];
        let b = line[(t + 1) % size];

        crossfade(a, b, delay_fractional)
    }

    /// Reads at a fractional delay with four-point Hermite interpolation.
    /// Each of the four taps wraps around the store on its own.
    #[inline]
    fn read_hermite(&self, delay: f32) -> T {
        let (delay_integral, delay_fractional) = split_delay(delay);
        let line = self.line();
        let size = line.len();
        let t = self.state().write_ptr + delay_integral % size + size;
        let xm1 = line[(t - 1) % size];
        let x0 = line[t % size];
        let x1 = line[(t + 1) % size];
        let x2 = line[(t + 2) % size];

        hermite(xm1, x0, x1, x2, delay_fractional)
    }

    #[inline]
    fn write_read(&mut self, sample: T, delay: f32) -> T {
        self.write(sample);
        self.read_with_delay_frac(delay)
    }

    /// First-order allpass using the store as delay element. Writes into the
    /// line, so no separate [`write`](Self::write) is needed on this tick.
    #[inline]
    fn allpass(&mut self, sample: T, delay: usize, coefficient: f32) -> T {
        let read = self.read_with_delay(delay);
        let write = sample + read.scale(coefficient);
        self.write(write);

        write.scale(-coefficient) + read
    }
}

/// Delay line owning its store inline.
///
/// Deliberately neither `Clone` nor `Copy`: duplicating a line duplicates the
/// whole buffer.
#[derive(Debug)]
pub struct DelayLine<T, const MAX_DELAY: usize> {
    state: DelayState,
    line: [T; MAX_DELAY],
}

impl<T, const MAX_DELAY: usize> Default for DelayLine<T, MAX_DELAY>
where
    T: Sample,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const MAX_DELAY: usize> DelayLine<T, MAX_DELAY>
where
    T: Sample,
{
    const NOT_EMPTY: () = assert!(MAX_DELAY > 0, "delay line needs at least one sample");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NOT_EMPTY;

        let mut delay_line = Self {
            state: DelayState::new(),
            line: [T::zero(); MAX_DELAY],
        };
        delay_line.reset();

        delay_line
    }

    pub fn init(&mut self) {
        self.reset();
    }
}

impl<T, const MAX_DELAY: usize> DelayLineOps<T> for DelayLine<T, MAX_DELAY>
where
    T: Sample,
{
    #[inline]
    fn state(&self) -> &DelayState {
        &self.state
    }

    #[inline]
    fn line(&self) -> &[T] {
        &self.line
    }

    #[inline]
    fn parts_mut(&mut self) -> (&mut DelayState, &mut [T]) {
        (&mut self.state, &mut self.line)
    }

    #[inline]
    fn max_delay(&self) -> usize {
        MAX_DELAY
    }
}

/// Delay line working on a caller-supplied store, e.g. a slice of a larger
/// pool or a buffer from [`allocate_buffer`](crate::utils::buffer::allocate_buffer).
#[derive(Debug)]
pub struct DelayLineView<'a, T> {
    state: DelayState,
    line: &'a mut [T],
}

impl<'a, T> DelayLineView<'a, T>
where
    T: Sample,
{
    /// Binds the store and clears it. The store length becomes the capacity.
    pub fn new(buffer: &'a mut [T]) -> Result<Self, Error> {
        if buffer.is_empty() {
            log::warn!("Rejected empty delay line buffer");
            return Err(Error::EmptyBuffer);
        }

        log::debug!("Delay line bound to buffer of {} samples", buffer.len());

        let mut view = Self {
            state: DelayState::new(),
            line: buffer,
        };
        view.reset();

        Ok(view)
    }

    /// Gives the store back to the caller.
    pub fn into_buffer(self) -> &'a mut [T] {
        self.line
    }
}

impl<T> DelayLineOps<T> for DelayLineView<'_, T>
where
    T: Sample,
{
    #[inline]
    fn state(&self) -> &DelayState {
        &self.state
    }

    #[inline]
    fn line(&self) -> &[T] {
        &*self.line
    }

    #[inline]
    fn parts_mut(&mut self) -> (&mut DelayState, &mut [T]) {
        (&mut self.state, &mut *self.line)
    }
}
