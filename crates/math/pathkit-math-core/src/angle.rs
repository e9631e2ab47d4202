//! Heading helpers.
//!
//! Headings are kept in the half-open interval (-π, π].

use std::f64::consts::PI;

const TWO_PI: f64 = 2.0 * PI;

/// Wrap an angle into (-π, π].
///
/// `π` maps to itself and `-π` maps to `π`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    PI - (PI - angle).rem_euclid(TWO_PI)
}
