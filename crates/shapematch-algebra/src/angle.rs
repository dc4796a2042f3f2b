//! Scalar helpers for working with angles in radians.

pub use std::f64::consts::TAU;

/// Whether `val` lies in the closed interval `[min, max]`.
#[inline]
pub fn in_range(min: f64, val: f64, max: f64) -> bool {
    min <= val && val <= max
}

/// Modulo whose result takes the sign of `n`, unlike `%`.
#[inline]
pub fn signed_mod(a: f64, n: f64) -> f64 {
    a - (a / n).floor() * n
}

/// Wrap an angle into `[0, τ)`.
#[inline]
pub fn wrap_angle(a: f64) -> f64 {
    let wrapped = signed_mod(a, TAU);
    // rounding can land exactly on τ for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Smallest absolute difference between two angles, in `[0, π]`.
#[inline]
pub fn angle_diff(a: f64, b: f64) -> f64 {
    wrap_angle(a - b).min(wrap_angle(b - a))
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f64, b: f64, coef: f64) -> f64 {
    a + (b - a) * coef
}
