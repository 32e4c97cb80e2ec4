// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::trace;

use crate::{scalar, Quat, Quat2, Vec3, EPSILON};

type Column = [f64; 4];

/// Column‑major 4×4 matrix.
///
/// - Stored in column‑major order to match GPU uniform layout; entries
///   12, 13 and 14 hold the translation.
/// - Vectors are columns: `M * v`. [`Mat4::multiply`] composes so that
///   `a.multiply(&b)` applies `b` first.
///
/// # Examples
/// ```
/// use glmat::{Mat4, Vec3};
/// let t = Mat4::from_translation(&Vec3::new(5.0, -3.0, 2.0));
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Mat4 {
    data: [f64; 16],
}

impl_storage!(Mat4, 16, "mat4");
impl_mul_ops!(Mat4);
impl_matrix_linear!(Mat4);

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Asymmetric field of view, in degrees, measured from the view axis to each
/// edge of the frustum. Consumed by [`Mat4::perspective_from_field_of_view`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldOfView {
    /// Angle above the view axis.
    pub up_degrees: f64,
    /// Angle below the view axis.
    pub down_degrees: f64,
    /// Angle left of the view axis.
    pub left_degrees: f64,
    /// Angle right of the view axis.
    pub right_degrees: f64,
}

fn combine(terms: &[(Column, f64)]) -> Column {
    let mut out = [0.0; 4];
    for (col, k) in terms {
        for (o, c) in out.iter_mut().zip(col) {
            *o += c * k;
        }
    }
    out
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, 0.0, // col 0
        0.0, 1.0, 0.0, 0.0, // col 1
        0.0, 0.0, 1.0, 0.0, // col 2
        0.0, 0.0, 0.0, 1.0, // col 3
    ]);

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f64; 16]) -> Self {
        Self { data }
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Overwrites every component from a column-major array.
    pub fn set(&mut self, data: [f64; 16]) -> &mut Self {
        self.data = data;
        self
    }

    fn at(&self, row: usize, col: usize) -> f64 {
        self.data[col * 4 + row]
    }

    fn column(&self, col: usize) -> Column {
        let i = col * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    fn from_columns(cols: [Column; 4]) -> Self {
        let mut data = [0.0; 16];
        for (chunk, col) in data.chunks_exact_mut(4).zip(cols) {
            chunk.copy_from_slice(&col);
        }
        Self { data }
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut out = *self;
        out.transpose_in_place();
        out
    }

    /// Transposes in place by swapping the six off-diagonal pairs.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        for col in 1..4 {
            for row in 0..col {
                self.data.swap(col * 4 + row, row * 4 + col);
            }
        }
        self
    }

    // 2x2 sub-determinants shared by invert, adjoint and the normal matrix.
    pub(crate) fn cofactor_pairs(&self) -> [f64; 12] {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.data;
        [
            a00 * a11 - a01 * a10,
            a00 * a12 - a02 * a10,
            a00 * a13 - a03 * a10,
            a01 * a12 - a02 * a11,
            a01 * a13 - a03 * a11,
            a02 * a13 - a03 * a12,
            a20 * a31 - a21 * a30,
            a20 * a32 - a22 * a30,
            a20 * a33 - a23 * a30,
            a21 * a32 - a22 * a31,
            a21 * a33 - a23 * a31,
            a22 * a33 - a23 * a32,
        ]
    }

    /// Returns the adjugate (transpose of the cofactor matrix).
    pub fn adjoint(&self) -> Self {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.data;
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.cofactor_pairs();
        Self::new([
            a11 * b11 - a12 * b10 + a13 * b09,
            a02 * b10 - a01 * b11 - a03 * b09,
            a31 * b05 - a32 * b04 + a33 * b03,
            a22 * b04 - a21 * b05 - a23 * b03,
            a12 * b08 - a10 * b11 - a13 * b07,
            a00 * b11 - a02 * b08 + a03 * b07,
            a32 * b02 - a30 * b05 - a33 * b01,
            a20 * b05 - a22 * b02 + a23 * b01,
            a10 * b10 - a11 * b08 + a13 * b06,
            a01 * b08 - a00 * b10 - a03 * b06,
            a30 * b04 - a31 * b02 + a33 * b00,
            a21 * b02 - a20 * b04 - a23 * b00,
            a11 * b07 - a10 * b09 - a12 * b06,
            a00 * b09 - a01 * b07 + a02 * b06,
            a31 * b01 - a30 * b03 - a32 * b00,
            a20 * b03 - a21 * b01 + a22 * b00,
        ])
    }

    /// Returns the inverse (adjugate over determinant), or `None` when the
    /// determinant is zero.
    pub fn invert(&self) -> Option<Self> {
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.cofactor_pairs();
        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det == 0.0 {
            trace!(matrix = %self, "mat4 invert: singular");
            return None;
        }
        Some(self.adjoint().multiply_scalar(1.0 / det))
    }

    /// Determinant.
    pub fn determinant(&self) -> f64 {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.data;

        let b0 = a00 * a11 - a01 * a10;
        let b1 = a00 * a12 - a02 * a10;
        let b2 = a01 * a12 - a02 * a11;
        let b3 = a20 * a31 - a21 * a30;
        let b4 = a20 * a32 - a22 * a30;
        let b5 = a21 * a32 - a22 * a31;
        let b6 = a00 * b5 - a01 * b4 + a02 * b3;
        let b7 = a10 * b5 - a11 * b4 + a12 * b3;
        let b8 = a20 * b2 - a21 * b1 + a22 * b0;
        let b9 = a30 * b2 - a31 * b1 + a32 * b0;

        a13 * b6 - a03 * b7 + a33 * b8 - a23 * b9
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// # Examples
    /// ```
    /// use glmat::{Mat4, Vec3};
    /// let a = Mat4::identity();
    /// let b = Mat4::from_scaling(&Vec3::new(2.0, 3.0, 4.0));
    /// assert_eq!(a.multiply(&b), b);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Post-multiplies by a translation; the basis columns are unchanged.
    pub fn translate(&self, v: &Vec3) -> Self {
        let [x, y, z] = v.to_array();
        let c3 = combine(&[
            (self.column(0), x),
            (self.column(1), y),
            (self.column(2), z),
            (self.column(3), 1.0),
        ]);
        Self::from_columns([self.column(0), self.column(1), self.column(2), c3])
    }

    /// Post-multiplies by a scaling; the translation column is unchanged.
    pub fn scale(&self, v: &Vec3) -> Self {
        let [x, y, z] = v.to_array();
        Self::from_columns([
            self.column(0).map(|c| c * x),
            self.column(1).map(|c| c * y),
            self.column(2).map(|c| c * z),
            self.column(3),
        ])
    }

    // Post-multiplies the basis columns by a 3x3 rotation block `b`
    // (column-major) and keeps the translation column.
    fn rotate_basis(&self, b: [f64; 9]) -> Self {
        let (c0, c1, c2) = (self.column(0), self.column(1), self.column(2));
        Self::from_columns([
            combine(&[(c0, b[0]), (c1, b[1]), (c2, b[2])]),
            combine(&[(c0, b[3]), (c1, b[4]), (c2, b[5])]),
            combine(&[(c0, b[6]), (c1, b[7]), (c2, b[8])]),
            self.column(3),
        ])
    }

    /// Post-multiplies by a rotation of `rad` radians around `axis`.
    ///
    /// The axis is normalised internally. Returns `None` when its length is
    /// below [`EPSILON`].
    pub fn rotate(&self, rad: f64, axis: &Vec3) -> Option<Self> {
        axis_rotation_block(rad, axis).map(|b| self.rotate_basis(b))
    }

    /// Post-multiplies by a rotation around the X axis.
    pub fn rotate_x(&self, rad: f64) -> Self {
        let (s, c) = rad.sin_cos();
        let (c1, c2) = (self.column(1), self.column(2));
        Self::from_columns([
            self.column(0),
            combine(&[(c1, c), (c2, s)]),
            combine(&[(c2, c), (c1, -s)]),
            self.column(3),
        ])
    }

    /// Post-multiplies by a rotation around the Y axis.
    pub fn rotate_y(&self, rad: f64) -> Self {
        let (s, c) = rad.sin_cos();
        let (c0, c2) = (self.column(0), self.column(2));
        Self::from_columns([
            combine(&[(c0, c), (c2, -s)]),
            self.column(1),
            combine(&[(c0, s), (c2, c)]),
            self.column(3),
        ])
    }

    /// Post-multiplies by a rotation around the Z axis.
    pub fn rotate_z(&self, rad: f64) -> Self {
        let (s, c) = rad.sin_cos();
        let (c0, c1) = (self.column(0), self.column(1));
        Self::from_columns([
            combine(&[(c0, c), (c1, s)]),
            combine(&[(c1, c), (c0, -s)]),
            self.column(2),
            self.column(3),
        ])
    }

    /// Translation matrix.
    pub fn from_translation(v: &Vec3) -> Self {
        let [x, y, z] = v.to_array();
        Self::new([
            1.0, 0.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, 0.0, // col 1
            0.0, 0.0, 1.0, 0.0, // col 2
            x, y, z, 1.0, // col 3
        ])
    }

    /// Non-uniform scaling matrix.
    pub fn from_scaling(v: &Vec3) -> Self {
        let [x, y, z] = v.to_array();
        Self::new([
            x, 0.0, 0.0, 0.0, // col 0
            0.0, y, 0.0, 0.0, // col 1
            0.0, 0.0, z, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Rotation of `rad` radians around `axis`, or `None` when the axis
    /// length is below [`EPSILON`].
    pub fn from_rotation(rad: f64, axis: &Vec3) -> Option<Self> {
        axis_rotation_block(rad, axis).map(|b| Self::IDENTITY.rotate_basis(b))
    }

    /// Rotation around the X axis.
    pub fn from_rotation_x(rad: f64) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0, // col 0
            0.0, c, s, 0.0, // col 1
            0.0, -s, c, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Rotation around the Y axis.
    pub fn from_rotation_y(rad: f64) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new([
            c, 0.0, -s, 0.0, // col 0
            0.0, 1.0, 0.0, 0.0, // col 1
            s, 0.0, c, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Rotation around the Z axis.
    pub fn from_rotation_z(rad: f64) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new([
            c, s, 0.0, 0.0, // col 0
            -s, c, 0.0, 0.0, // col 1
            0.0, 0.0, 1.0, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Rotation matrix for a (unit) quaternion.
    pub fn from_quat(q: &Quat) -> Self {
        Self::from_rotation_translation_scale(q, &Vec3::ZERO, &Vec3::new(1.0, 1.0, 1.0))
    }

    /// Rotation followed by translation: `T * R(q)`.
    pub fn from_rotation_translation(q: &Quat, v: &Vec3) -> Self {
        Self::from_rotation_translation_scale(q, v, &Vec3::new(1.0, 1.0, 1.0))
    }

    /// `T * R(q) * S`: scale first, then rotate, then translate.
    pub fn from_rotation_translation_scale(q: &Quat, v: &Vec3, s: &Vec3) -> Self {
        let [x, y, z, w] = q.to_array();
        let (x2, y2, z2) = (x + x, y + y, z + z);

        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;
        let [sx, sy, sz] = s.to_array();
        let [tx, ty, tz] = v.to_array();

        Self::new([
            (1.0 - (yy + zz)) * sx,
            (xy + wz) * sx,
            (xz - wy) * sx,
            0.0,
            (xy - wz) * sy,
            (1.0 - (xx + zz)) * sy,
            (yz + wx) * sy,
            0.0,
            (xz + wy) * sz,
            (yz - wx) * sz,
            (1.0 - (xx + yy)) * sz,
            0.0,
            tx,
            ty,
            tz,
            1.0,
        ])
    }

    /// Like [`Mat4::from_rotation_translation_scale`], but rotation and
    /// scaling pivot around `origin`: `T * O * R * S * O⁻¹`.
    pub fn from_rotation_translation_scale_origin(
        q: &Quat,
        v: &Vec3,
        s: &Vec3,
        origin: &Vec3,
    ) -> Self {
        let mut out = Self::from_rotation_translation_scale(q, v, s);
        let pivot = out.transform_direction(origin);
        let [ox, oy, oz] = origin.to_array();
        out.data[12] += ox - pivot.x();
        out.data[13] += oy - pivot.y();
        out.data[14] += oz - pivot.z();
        out
    }

    /// Rigid transform encoded by a dual quaternion.
    ///
    /// The translation is divided by the squared magnitude of the real part
    /// so non-normalised inputs still recover the intended offset.
    pub fn from_quat2(a: &Quat2) -> Self {
        let real = a.real();
        let [bx, by, bz, bw] = real.conjugate().to_array();
        let [ax, ay, az, aw] = a.dual().to_array();

        let mut t = Vec3::new(
            (ax * bw + aw * bx + ay * bz - az * by) * 2.0,
            (ay * bw + aw * by + az * bx - ax * bz) * 2.0,
            (az * bw + aw * bz + ax * by - ay * bx) * 2.0,
        );
        let magnitude = real.squared_length();
        if magnitude > 0.0 {
            t = t.scale(1.0 / magnitude);
        }
        Self::from_rotation_translation(&real, &t)
    }

    /// Translation column.
    pub fn get_translation(&self) -> Vec3 {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Length of each basis column, i.e. the scale a matrix built by
    /// [`Mat4::from_rotation_translation_scale`] was given (for a unit
    /// rotation).
    pub fn get_scaling(&self) -> Vec3 {
        let m = &self.data;
        Vec3::new(
            scalar::hypot(&m[0..3]),
            scalar::hypot(&m[4..7]),
            scalar::hypot(&m[8..11]),
        )
    }

    /// Rotation part as a quaternion.
    ///
    /// Each basis column is divided by its scale, then the quaternion is
    /// extracted from the trace. When the trace is not positive the branch
    /// keyed on the largest diagonal entry is used so the square root never
    /// sees a tiny or negative argument.
    ///
    /// A zero-length basis column leaves no rotation to recover; the
    /// identity quaternion is returned.
    pub fn get_rotation(&self) -> Quat {
        let m = &self.data;
        let scaling = self.get_scaling();
        if scaling.to_array().contains(&0.0) {
            trace!(matrix = %self, "get_rotation: zero-length basis column");
            return Quat::IDENTITY;
        }
        let [is1, is2, is3] = scaling.inverse().to_array();

        let sm11 = m[0] * is1;
        let sm12 = m[1] * is1;
        let sm13 = m[2] * is1;
        let sm21 = m[4] * is2;
        let sm22 = m[5] * is2;
        let sm23 = m[6] * is2;
        let sm31 = m[8] * is3;
        let sm32 = m[9] * is3;
        let sm33 = m[10] * is3;

        let trace = sm11 + sm22 + sm33;
        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Quat::new((sm23 - sm32) / s, (sm31 - sm13) / s, (sm12 - sm21) / s, 0.25 * s)
        } else if sm11 > sm22 && sm11 > sm33 {
            let s = (1.0 + sm11 - sm22 - sm33).sqrt() * 2.0;
            Quat::new(0.25 * s, (sm12 + sm21) / s, (sm31 + sm13) / s, (sm23 - sm32) / s)
        } else if sm22 > sm33 {
            let s = (1.0 + sm22 - sm11 - sm33).sqrt() * 2.0;
            Quat::new((sm12 + sm21) / s, 0.25 * s, (sm23 + sm32) / s, (sm31 - sm13) / s)
        } else {
            let s = (1.0 + sm33 - sm11 - sm22).sqrt() * 2.0;
            Quat::new((sm31 + sm13) / s, (sm23 + sm32) / s, 0.25 * s, (sm12 - sm21) / s)
        }
    }

    /// Perspective frustum with the given clip-plane bounds.
    pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        let rl = 1.0 / (right - left);
        let tb = 1.0 / (top - bottom);
        let nf = 1.0 / (near - far);
        Self::new([
            near * 2.0 * rl,
            0.0,
            0.0,
            0.0,
            0.0,
            near * 2.0 * tb,
            0.0,
            0.0,
            (right + left) * rl,
            (top + bottom) * tb,
            (far + near) * nf,
            -1.0,
            0.0,
            0.0,
            far * near * 2.0 * nf,
            0.0,
        ])
    }

    /// Symmetric perspective projection (OpenGL clip space, `z ∈ [-1, 1]`).
    ///
    /// `fovy` is the vertical field of view in radians. Passing
    /// `f64::INFINITY` as `far` yields an infinite far plane.
    pub fn perspective(fovy: f64, aspect: f64, near: f64, far: f64) -> Self {
        let f = 1.0 / (fovy / 2.0).tan();
        let (m10, m14) = if far == f64::INFINITY {
            (-1.0, -2.0 * near)
        } else {
            let nf = 1.0 / (near - far);
            ((far + near) * nf, 2.0 * far * near * nf)
        };
        Self::new([
            f / aspect,
            0.0,
            0.0,
            0.0,
            0.0,
            f,
            0.0,
            0.0,
            0.0,
            0.0,
            m10,
            -1.0,
            0.0,
            0.0,
            m14,
            0.0,
        ])
    }

    /// Perspective projection from an asymmetric field of view.
    pub fn perspective_from_field_of_view(fov: &FieldOfView, near: f64, far: f64) -> Self {
        let up = scalar::deg_to_rad(fov.up_degrees).tan();
        let down = scalar::deg_to_rad(fov.down_degrees).tan();
        let left = scalar::deg_to_rad(fov.left_degrees).tan();
        let right = scalar::deg_to_rad(fov.right_degrees).tan();
        let x_scale = 2.0 / (left + right);
        let y_scale = 2.0 / (up + down);

        Self::new([
            x_scale,
            0.0,
            0.0,
            0.0,
            0.0,
            y_scale,
            0.0,
            0.0,
            -((left - right) * x_scale * 0.5),
            (up - down) * y_scale * 0.5,
            far / (near - far),
            -1.0,
            0.0,
            0.0,
            (far * near) / (near - far),
            0.0,
        ])
    }

    /// Orthographic projection with the given clip-plane bounds.
    pub fn ortho(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        let lr = 1.0 / (left - right);
        let bt = 1.0 / (bottom - top);
        let nf = 1.0 / (near - far);
        Self::new([
            -2.0 * lr,
            0.0,
            0.0,
            0.0,
            0.0,
            -2.0 * bt,
            0.0,
            0.0,
            0.0,
            0.0,
            2.0 * nf,
            0.0,
            (left + right) * lr,
            (top + bottom) * bt,
            (far + near) * nf,
            1.0,
        ])
    }

    /// View matrix for a camera at `eye` looking at `center`.
    ///
    /// When `eye` and `center` coincide (every component within
    /// [`EPSILON`]) there is no view direction and the identity is returned.
    /// An `up` parallel to the view direction collapses the side axis to
    /// zero instead of producing NaNs.
    pub fn look_at(eye: &Vec3, center: &Vec3, up: &Vec3) -> Self {
        let diff = eye.sub(center);
        if diff.to_array().iter().all(|d| d.abs() < EPSILON) {
            trace!(%eye, %center, "look_at: eye and center coincide");
            return Self::IDENTITY;
        }

        let z = diff.normalize();
        let x = up.cross(&z).normalize();
        let y = z.cross(&x).normalize();

        Self::new([
            x.x(),
            y.x(),
            z.x(),
            0.0,
            x.y(),
            y.y(),
            z.y(),
            0.0,
            x.z(),
            y.z(),
            z.z(),
            0.0,
            -x.dot(eye),
            -y.dot(eye),
            -z.dot(eye),
            1.0,
        ])
    }

    /// Object-to-world matrix that places an object at `eye` with its +Z
    /// axis pointing away from `target`.
    ///
    /// Uses the same axis construction as [`Mat4::look_at`] but keeps the
    /// basis un-inverted and `eye` as the translation.
    pub fn target_to(eye: &Vec3, target: &Vec3, up: &Vec3) -> Self {
        let z = eye.sub(target).normalize();
        let x = up.cross(&z).normalize();
        let y = z.cross(&x);
        let [ex, ey, ez] = eye.to_array();

        Self::new([
            x.x(),
            x.y(),
            x.z(),
            0.0,
            y.x(),
            y.y(),
            y.z(),
            0.0,
            z.x(),
            z.y(),
            z.z(),
            0.0,
            ex,
            ey,
            ez,
            1.0,
        ])
    }

    /// Frobenius norm over all sixteen entries.
    pub fn frob(&self) -> f64 {
        scalar::hypot(&self.data)
    }

    /// Transforms a point (`w = 1`), dividing by the resulting `w`.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        point.transform_mat4(self)
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    ///
    /// Only the rotational and scaling parts of the matrix affect the result.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let [x, y, z] = direction.to_array();
        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z;
        Vec3::new(nx, ny, nz)
    }
}

// Column-major 3x3 rotation block for `rad` around `axis`.
fn axis_rotation_block(rad: f64, axis: &Vec3) -> Option<[f64; 9]> {
    let len = axis.length();
    if len < EPSILON {
        trace!(%axis, "axis rotation: axis length below epsilon");
        return None;
    }
    let [x, y, z] = axis.scale(1.0 / len).to_array();
    let (s, c) = rad.sin_cos();
    let t = 1.0 - c;

    Some([
        x * x * t + c,
        y * x * t + z * s,
        z * x * t - y * s,
        x * y * t - z * s,
        y * y * t + c,
        z * y * t + x * s,
        x * z * t + y * s,
        y * z * t - x * s,
        z * z * t + c,
    ])
}
