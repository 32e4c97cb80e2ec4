// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::trace;

use crate::{scalar, Mat2d, Mat4, Quat, Vec2};

/// Column-major 3x3 matrix.
///
/// Used both as a 3D linear map (rotation/scale, normal matrix) and as a 2D
/// projective map where the third column carries the translation.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Mat3 {
    data: [f64; 9],
}

impl_storage!(Mat3, 9, "mat3");
impl_mul_ops!(Mat3);
impl_matrix_linear!(Mat3);

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        data: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Creates a matrix from components in column-major order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f64,
        m01: f64,
        m02: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m20: f64,
        m21: f64,
        m22: f64,
    ) -> Self {
        Self { data: [m00, m01, m02, m10, m11, m12, m20, m21, m22] }
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Overwrites every component from a column-major array.
    pub fn set(&mut self, data: [f64; 9]) -> &mut Self {
        self.data = data;
        self
    }

    /// Upper-left 3x3 block of a 4x4 matrix.
    pub fn from_mat4(a: &Mat4) -> Self {
        let a = a.as_array();
        Self {
            data: [a[0], a[1], a[2], a[4], a[5], a[6], a[8], a[9], a[10]],
        }
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut out = *self;
        out.transpose_in_place();
        out
    }

    /// Transposes in place by swapping across the diagonal.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        self.data.swap(1, 3);
        self.data.swap(2, 6);
        self.data.swap(5, 7);
        self
    }

    /// Returns the inverse, or `None` when the determinant is zero.
    pub fn invert(&self) -> Option<Self> {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.data;

        let b01 = a22 * a11 - a12 * a21;
        let b11 = -a22 * a10 + a12 * a20;
        let b21 = a21 * a10 - a11 * a20;

        let det = a00 * b01 + a01 * b11 + a02 * b21;
        if det == 0.0 {
            trace!(matrix = %self, "mat3 invert: singular");
            return None;
        }
        let inv = 1.0 / det;

        Some(Self {
            data: [
                b01 * inv,
                (-a22 * a01 + a02 * a21) * inv,
                (a12 * a01 - a02 * a11) * inv,
                b11 * inv,
                (a22 * a00 - a02 * a20) * inv,
                (-a12 * a00 + a02 * a10) * inv,
                b21 * inv,
                (-a21 * a00 + a01 * a20) * inv,
                (a11 * a00 - a01 * a10) * inv,
            ],
        })
    }

    /// Returns the adjugate.
    pub fn adjoint(&self) -> Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.data;
        Self {
            data: [
                a11 * a22 - a12 * a21,
                a02 * a21 - a01 * a22,
                a01 * a12 - a02 * a11,
                a12 * a20 - a10 * a22,
                a00 * a22 - a02 * a20,
                a02 * a10 - a00 * a12,
                a10 * a21 - a11 * a20,
                a01 * a20 - a00 * a21,
                a00 * a11 - a01 * a10,
            ],
        }
    }

    /// Determinant by cofactor expansion along the first column.
    pub fn determinant(&self) -> f64 {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.data;
        a00 * (a22 * a11 - a12 * a21)
            + a01 * (-a22 * a10 + a12 * a20)
            + a02 * (a21 * a10 - a11 * a20)
    }

    /// Matrix product `self * other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let a = &self.data;
        let b = &other.data;
        let mut out = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = a[row] * b[col * 3]
                    + a[3 + row] * b[col * 3 + 1]
                    + a[6 + row] * b[col * 3 + 2];
            }
        }
        Self { data: out }
    }

    /// Post-multiplies by a 2D translation.
    pub fn translate(&self, v: &Vec2) -> Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.data;
        let (x, y) = (v.x(), v.y());
        Self {
            data: [
                a00,
                a01,
                a02,
                a10,
                a11,
                a12,
                x * a00 + y * a10 + a20,
                x * a01 + y * a11 + a21,
                x * a02 + y * a12 + a22,
            ],
        }
    }

    /// Post-multiplies by a 2D rotation of `rad` radians.
    pub fn rotate(&self, rad: f64) -> Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.data;
        let (s, c) = rad.sin_cos();
        Self {
            data: [
                c * a00 + s * a10,
                c * a01 + s * a11,
                c * a02 + s * a12,
                c * a10 - s * a00,
                c * a11 - s * a01,
                c * a12 - s * a02,
                a20,
                a21,
                a22,
            ],
        }
    }

    /// Post-multiplies by a 2D scaling.
    pub fn scale(&self, v: &Vec2) -> Self {
        let mut data = self.data;
        for (i, slot) in data.iter_mut().take(6).enumerate() {
            *slot *= if i < 3 { v.x() } else { v.y() };
        }
        Self { data }
    }

    /// 2D translation matrix.
    pub fn from_translation(v: &Vec2) -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, v.x(), v.y(), 1.0)
    }

    /// 2D rotation matrix.
    pub fn from_rotation(rad: f64) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
    }

    /// 2D scaling matrix.
    pub fn from_scaling(v: &Vec2) -> Self {
        Self::new(v.x(), 0.0, 0.0, 0.0, v.y(), 0.0, 0.0, 0.0, 1.0)
    }

    /// Expands a 2D affine transform into its 3x3 form.
    pub fn from_mat2d(a: &Mat2d) -> Self {
        let [a0, a1, a2, a3, a4, a5] = a.to_array();
        Self::new(a0, a1, 0.0, a2, a3, 0.0, a4, a5, 1.0)
    }

    /// Rotation matrix for a (unit) quaternion.
    pub fn from_quat(q: &Quat) -> Self {
        let [x, y, z, w] = q.to_array();
        let (x2, y2, z2) = (x + x, y + y, z + z);

        let xx = x * x2;
        let yx = y * x2;
        let yy = y * y2;
        let zx = z * x2;
        let zy = z * y2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Self::new(
            1.0 - yy - zz,
            yx + wz,
            zx - wy,
            yx - wz,
            1.0 - xx - zz,
            zy + wx,
            zx + wy,
            zy - wx,
            1.0 - xx - yy,
        )
    }

    /// Normal matrix: the transpose of the inverse of the upper-left 3x3 of
    /// `a`. Returns `None` when `a` is singular.
    pub fn normal_from_mat4(a: &Mat4) -> Option<Self> {
        let [a00, a01, a02, a03, a10, a11, a12, a13, _, _, _, _, a30, a31, a32, a33] = a.to_array();
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = a.cofactor_pairs();

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det == 0.0 {
            trace!(matrix = %a, "normal_from_mat4: singular");
            return None;
        }
        let inv = 1.0 / det;

        Some(Self::new(
            (a11 * b11 - a12 * b10 + a13 * b09) * inv,
            (a12 * b08 - a10 * b11 - a13 * b07) * inv,
            (a10 * b10 - a11 * b08 + a13 * b06) * inv,
            (a02 * b10 - a01 * b11 - a03 * b09) * inv,
            (a00 * b11 - a02 * b08 + a03 * b07) * inv,
            (a01 * b08 - a00 * b10 - a03 * b06) * inv,
            (a31 * b05 - a32 * b04 + a33 * b03) * inv,
            (a32 * b02 - a30 * b05 - a33 * b01) * inv,
            (a30 * b04 - a31 * b02 + a33 * b00) * inv,
        ))
    }

    /// 2D projection mapping pixel coordinates (`0..width`, `0..height`,
    /// y down) into clip space.
    pub fn projection(width: f64, height: f64) -> Self {
        Self::new(2.0 / width, 0.0, 0.0, 0.0, -2.0 / height, 0.0, -1.0, 1.0, 1.0)
    }

    /// Frobenius norm over all nine entries.
    pub fn frob(&self) -> f64 {
        scalar::hypot(&self.data)
    }
}
