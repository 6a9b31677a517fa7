//! Animation time.
//!
//! Time is kept as f64 seconds since mount. Every periodic term reduces its
//! own `time * rate` to a single turn before dropping to f32, so a page left
//! open for days animates as smoothly as a fresh one.

use std::f64::consts::TAU;

/// `time * rate` wrapped into `[0, 2π)`, as f32 radians.
///
/// NaN time stays NaN; callers treat a non-finite target as "do not move".
#[inline]
pub fn cycle_angle(time: f64, rate: f32) -> f32 {
    (time * rate as f64).rem_euclid(TAU) as f32
}
