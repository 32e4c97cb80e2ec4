// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::trace;

use crate::{scalar, Vec2};

/// 2D affine transform stored as `[a, b, c, d, tx, ty]`.
///
/// This is the compact form of the 3x3 matrix
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// | 0  0  1  |
/// ```
///
/// whose last row is implicit.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Mat2d {
    data: [f64; 6],
}

impl_storage!(Mat2d, 6, "mat2d");
impl_mul_ops!(Mat2d);
impl_matrix_linear!(Mat2d);

impl Default for Mat2d {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat2d {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Creates a transform from its six components.
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { data: [a, b, c, d, tx, ty] }
    }

    /// Returns the identity transform.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Overwrites every component.
    pub fn set(&mut self, a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> &mut Self {
        self.data = [a, b, c, d, tx, ty];
        self
    }

    /// Returns the inverse, or `None` when the linear part is singular.
    pub fn invert(&self) -> Option<Self> {
        let [aa, ab, ac, ad, atx, aty] = self.data;
        let det = aa * ad - ab * ac;
        if det == 0.0 {
            trace!(matrix = %self, "mat2d invert: singular");
            return None;
        }
        let inv = 1.0 / det;
        Some(Self::new(
            ad * inv,
            -ab * inv,
            -ac * inv,
            aa * inv,
            (ac * aty - ad * atx) * inv,
            (ab * atx - aa * aty) * inv,
        ))
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f64 {
        self.data[0] * self.data[3] - self.data[1] * self.data[2]
    }

    /// Affine product `self * other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let [a0, a1, a2, a3, a4, a5] = self.data;
        let [b0, b1, b2, b3, b4, b5] = other.data;
        Self::new(
            a0 * b0 + a2 * b1,
            a1 * b0 + a3 * b1,
            a0 * b2 + a2 * b3,
            a1 * b2 + a3 * b3,
            a0 * b4 + a2 * b5 + a4,
            a1 * b4 + a3 * b5 + a5,
        )
    }

    /// Post-multiplies by a rotation; translation is unchanged.
    pub fn rotate(&self, rad: f64) -> Self {
        let [a0, a1, a2, a3, a4, a5] = self.data;
        let (s, c) = rad.sin_cos();
        Self::new(
            a0 * c + a2 * s,
            a1 * c + a3 * s,
            a0 * -s + a2 * c,
            a1 * -s + a3 * c,
            a4,
            a5,
        )
    }

    /// Post-multiplies by a scaling; translation is unchanged.
    pub fn scale(&self, v: &Vec2) -> Self {
        let [a0, a1, a2, a3, a4, a5] = self.data;
        let (x, y) = (v.x(), v.y());
        Self::new(a0 * x, a1 * x, a2 * y, a3 * y, a4, a5)
    }

    /// Post-multiplies by a translation.
    pub fn translate(&self, v: &Vec2) -> Self {
        let [a0, a1, a2, a3, a4, a5] = self.data;
        let (x, y) = (v.x(), v.y());
        Self::new(a0, a1, a2, a3, a0 * x + a2 * y + a4, a1 * x + a3 * y + a5)
    }

    /// Rotation transform.
    pub fn from_rotation(rad: f64) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    /// Scaling transform.
    pub fn from_scaling(v: &Vec2) -> Self {
        Self::new(v.x(), 0.0, 0.0, v.y(), 0.0, 0.0)
    }

    /// Translation transform.
    pub fn from_translation(v: &Vec2) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, v.x(), v.y())
    }

    /// Frobenius norm of the full 3x3 form, including the implicit `1` of
    /// the last row.
    pub fn frob(&self) -> f64 {
        let [a, b, c, d, tx, ty] = self.data;
        scalar::hypot(&[a, b, c, d, tx, ty, 1.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frob_counts_implicit_row() {
        assert!(scalar::approx_eq(Mat2d::IDENTITY.frob(), 3.0_f64.sqrt()));
    }

    #[test]
    fn translate_composes_with_linear_part() {
        let m = Mat2d::from_scaling(&Vec2::new(2.0, 3.0)).translate(&Vec2::new(1.0, 1.0));
        assert_eq!(m.to_array(), [2.0, 0.0, 0.0, 3.0, 2.0, 3.0]);
    }

    #[test]
    fn invert_round_trips() {
        let m = Mat2d::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let inv = m.invert().unwrap_or_default();
        assert!(m.multiply(&inv).equals(&Mat2d::IDENTITY));
        assert_eq!(inv.to_array(), [-2.0, 1.0, 1.5, -0.5, 1.0, -2.0]);
    }
}
