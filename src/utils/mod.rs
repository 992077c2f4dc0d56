//! Delay line, phasor and the interpolation kernels they share.

pub mod buffer;
pub mod delay_line;
pub mod phasor;

use crate::sample::Sample;

/// Linear interpolation between `a` and `b`. Returns `a` unchanged for
/// `fade == 0.0`.
#[inline]
pub fn crossfade<T: Sample>(a: T, b: T, fade: f32) -> T {
    a + (b - a).scale(fade)
}

/// Four-point cubic Hermite interpolation between `x0` and `x1` at position
/// `f` in [0, 1), using the outer neighbours `xm1` and `x2` for the slopes.
#[inline]
pub fn hermite<T: Sample>(xm1: T, x0: T, x1: T, x2: T, f: f32) -> T {
    let c = (x1 - xm1).scale(0.5);
    let v = x0 - x1;
    let w = c + v;
    let a = w + v + (x2 - x0).scale(0.5);
    let b_neg = w + a;

    ((a.scale(f) - b_neg).scale(f) + c).scale(f) + x0
}
