// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::trace;

use crate::{scalar, Vec2};

/// Column-major 2x2 matrix.
///
/// Storage is `[m00, m01, m10, m11]`: the first two entries form the first
/// column. Vectors are treated as columns and transformed with `M * v`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Mat2 {
    data: [f64; 4],
}

impl_storage!(Mat2, 4, "mat2");
impl_mul_ops!(Mat2);
impl_matrix_linear!(Mat2);

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat2 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Creates a matrix from components in column-major order.
    pub const fn new(m00: f64, m01: f64, m10: f64, m11: f64) -> Self {
        Self { data: [m00, m01, m10, m11] }
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Overwrites every component.
    pub fn set(&mut self, m00: f64, m01: f64, m10: f64, m11: f64) -> &mut Self {
        self.data = [m00, m01, m10, m11];
        self
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let [a0, a1, a2, a3] = self.data;
        Self::new(a0, a2, a1, a3)
    }

    /// Transposes in place by swapping the off-diagonal pair.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        self.data.swap(1, 2);
        self
    }

    /// Returns the inverse, or `None` when the determinant is zero.
    pub fn invert(&self) -> Option<Self> {
        let [a0, a1, a2, a3] = self.data;
        let det = a0 * a3 - a2 * a1;
        if det == 0.0 {
            trace!(matrix = %self, "mat2 invert: singular");
            return None;
        }
        let inv = 1.0 / det;
        Some(Self::new(a3 * inv, -a1 * inv, -a2 * inv, a0 * inv))
    }

    /// Returns the adjugate.
    pub fn adjoint(&self) -> Self {
        let [a0, a1, a2, a3] = self.data;
        Self::new(a3, -a1, -a2, a0)
    }

    /// Determinant.
    pub fn determinant(&self) -> f64 {
        self.data[0] * self.data[3] - self.data[2] * self.data[1]
    }

    /// Matrix product `self * other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let [a0, a1, a2, a3] = self.data;
        let [b0, b1, b2, b3] = other.data;
        Self::new(
            a0 * b0 + a2 * b1,
            a1 * b0 + a3 * b1,
            a0 * b2 + a2 * b3,
            a1 * b2 + a3 * b3,
        )
    }

    /// Post-multiplies by a rotation of `rad` radians.
    pub fn rotate(&self, rad: f64) -> Self {
        let [a0, a1, a2, a3] = self.data;
        let (s, c) = rad.sin_cos();
        Self::new(
            a0 * c + a2 * s,
            a1 * c + a3 * s,
            a0 * -s + a2 * c,
            a1 * -s + a3 * c,
        )
    }

    /// Post-multiplies by a scaling of `v`.
    pub fn scale(&self, v: &Vec2) -> Self {
        let [a0, a1, a2, a3] = self.data;
        let (x, y) = (v.x(), v.y());
        Self::new(a0 * x, a1 * x, a2 * y, a3 * y)
    }

    /// Rotation matrix for `rad` radians.
    pub fn from_rotation(rad: f64) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new(c, s, -s, c)
    }

    /// Scaling matrix for `v`.
    pub fn from_scaling(v: &Vec2) -> Self {
        Self::new(v.x(), 0.0, 0.0, v.y())
    }

    /// Frobenius norm.
    pub fn frob(&self) -> f64 {
        scalar::hypot(&self.data)
    }

    /// Factors the matrix as `(L, D, U)`: unit lower-triangular `L`,
    /// diagonal `D` (left as the identity) and upper-triangular `U`.
    ///
    /// Returns `None` when the leading entry is zero, since no pivot exists
    /// without row exchanges.
    pub fn ldu(&self) -> Option<(Self, Self, Self)> {
        let [a0, a1, a2, a3] = self.data;
        if a0 == 0.0 {
            trace!(matrix = %self, "mat2 ldu: zero pivot");
            return None;
        }
        let l2 = a2 / a0;
        let lower = Self::new(1.0, 0.0, l2, 1.0);
        let upper = Self::new(a0, a1, 0.0, a3 - l2 * a1);
        Some((lower, Self::IDENTITY, upper))
    }
}
