// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Periodic angle helpers.
//!
//! All phi-sector aware bounds store their average phi in the symmetric
//! range `[-π, π)` produced by [`radian_sym`].

use core::f64::consts::{PI, TAU};

/// Wrap `value` into the half-open range `[start, start + range)`.
///
/// Values already inside the range are returned unchanged, bit for bit.
#[inline]
pub fn wrap_periodic(value: f64, start: f64, range: f64) -> f64 {
    let diff = value - start;
    if (0.0..range).contains(&diff) {
        value
    } else {
        let wrapped = value - range * (diff / range).floor();
        // Rounding can land exactly on the open end.
        if wrapped >= start + range {
            wrapped - range
        } else {
            wrapped
        }
    }
}

/// Normalize an angle into `[-π, π)`.
#[inline]
pub fn radian_sym(phi: f64) -> f64 {
    wrap_periodic(phi, -PI, TAU)
}

/// Normalize an angle into `[0, 2π)`.
#[inline]
pub fn radian_pos(phi: f64) -> f64 {
    wrap_periodic(phi, 0.0, TAU)
}

/// Signed difference `a - b`, folded into `[-π, π)`.
#[inline]
pub fn symmetric_delta(a: f64, b: f64) -> f64 {
    radian_sym(a - b)
}
