// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by every vector, matrix and quaternion type.
//!
//! Tolerant comparison uses a hybrid absolute/relative bound:
//!
//! ```text
//! |a - b| <= EPSILON * max(1, |a|, |b|)
//! ```
//!
//! so small values are compared absolutely and large values relatively. All
//! `equals` methods in this crate route through [`approx_eq`]; derived
//! floating-point results should never be compared with `==`.

use core::f64::consts::PI;

/// Tolerance used by approximate equality and degeneracy checks.
pub const EPSILON: f64 = 1e-6;

const DEGREE: f64 = PI / 180.0;

/// Returns `true` when `a` and `b` are equal within [`EPSILON`].
///
/// # Examples
/// ```
/// use glmat::scalar::approx_eq;
/// assert!(approx_eq(1.0, 1.0 + 1e-7));
/// assert!(approx_eq(1.0e9, 1.0e9 + 100.0));
/// assert!(!approx_eq(0.0, 1e-5));
/// ```
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * 1.0_f64.max(a.abs()).max(b.abs())
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f64) -> f64 {
    value * DEGREE
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f64) -> f64 {
    value / DEGREE
}

/// Euclidean norm of an arbitrary number of components.
///
/// Unlike [`f64::hypot`] this does not guard against intermediate overflow;
/// it is the plain `sqrt(sum(v * v))` used for vector lengths and Frobenius
/// norms.
pub fn hypot(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum::<f64>().sqrt()
}
