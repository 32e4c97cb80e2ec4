// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use rand::Rng;

use crate::{scalar, strided, Mat4, Quat};

/// 4D vector stored as `[x, y, z, w]`.
///
/// Also serves as the raw storage for [`Quat`]: the quaternion's
/// componentwise operations delegate here.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Vec4 {
    data: [f64; 4],
}

impl_storage!(Vec4, 4, "vec4");

impl Vec4 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the zero vector.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Overwrites all components.
    pub fn set(&mut self, x: f64, y: f64, z: f64, w: f64) -> &mut Self {
        self.data = [x, y, z, w];
        self
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f64 {
        self.data[2]
    }

    /// W component.
    pub fn w(&self) -> f64 {
        self.data[3]
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::from(self.data.map(f))
    }

    fn zip(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let mut out = self.data;
        for (a, b) in out.iter_mut().zip(other.data) {
            *a = f(*a, b);
        }
        Self::from(out)
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a + b)
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a - b)
    }

    /// Componentwise product.
    pub fn mul(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a * b)
    }

    /// Componentwise quotient.
    pub fn div(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a / b)
    }

    /// Componentwise `ceil`.
    pub fn ceil(&self) -> Self {
        self.map(f64::ceil)
    }

    /// Componentwise `floor`.
    pub fn floor(&self) -> Self {
        self.map(f64::floor)
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &Self) -> Self {
        self.zip(other, f64::min)
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        self.zip(other, f64::max)
    }

    /// Componentwise rounding (half away from zero).
    pub fn round(&self) -> Self {
        self.map(f64::round)
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f64) -> Self {
        self.map(|a| a * scalar)
    }

    /// Returns `self + other * scale`.
    pub fn scale_and_add(&self, other: &Self, scale: f64) -> Self {
        self.zip(other, |a, b| a + b * scale)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> f64 {
        other.sub(self).length()
    }

    /// Squared Euclidean distance to `other`.
    pub fn squared_distance(&self, other: &Self) -> f64 {
        other.sub(self).squared_length()
    }

    /// Vector length.
    pub fn length(&self) -> f64 {
        scalar::hypot(&self.data)
    }

    /// Squared length.
    pub fn squared_length(&self) -> f64 {
        self.dot(self)
    }

    /// Negates every component.
    pub fn negate(&self) -> Self {
        self.map(|a| -a)
    }

    /// Componentwise reciprocal.
    pub fn inverse(&self) -> Self {
        self.map(|a| 1.0 / a)
    }

    /// Normalises the vector. A zero-length vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self.scale(1.0 / len)
        } else {
            *self
        }
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.data.iter().zip(other.data).map(|(a, b)| a * b).sum()
    }

    /// Four-dimensional "cross product" of three vectors.
    ///
    /// Each output component is the signed 3x3 minor built from `self`, `v`
    /// and `w` with that component's column removed, so the result is
    /// orthogonal to all three inputs.
    pub fn cross(&self, v: &Self, w: &Self) -> Self {
        let [v0, v1, v2, v3] = v.data;
        let [w0, w1, w2, w3] = w.data;
        let a = v0 * w1 - v1 * w0;
        let b = v0 * w2 - v2 * w0;
        let c = v0 * w3 - v3 * w0;
        let d = v1 * w2 - v2 * w1;
        let e = v1 * w3 - v3 * w1;
        let f = v2 * w3 - v3 * w2;
        let [g, h, i, j] = self.data;
        Self::new(
            h * f - i * e + j * d,
            -(g * f) + i * c - j * b,
            g * e - h * c + j * a,
            -(g * d) + h * b - i * a,
        )
    }

    /// Linear interpolation.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        self.zip(other, |a, b| a + t * (b - a))
    }

    /// Random vector uniformly distributed on the 3-sphere of radius `scale`
    /// (Marsaglia's method). A `scale` of zero is treated as one.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> Self {
        let scale = if scale == 0.0 { 1.0 } else { scale };
        let (v1, v2, s1) = unit_disk_sample(rng);
        let (v3, v4, s2) = unit_disk_sample(rng);
        let d = ((1.0 - s1) / s2).sqrt();
        Self::new(scale * v1, scale * v2, scale * v3 * d, scale * v4 * d)
    }

    /// Full homogeneous product `m * v`; no perspective divide.
    pub fn transform_mat4(&self, m: &Mat4) -> Self {
        let [x, y, z, w] = self.data;
        let m = m.as_array();
        Self::new(
            m[0] * x + m[4] * y + m[8] * z + m[12] * w,
            m[1] * x + m[5] * y + m[9] * z + m[13] * w,
            m[2] * x + m[6] * y + m[10] * z + m[14] * w,
            m[3] * x + m[7] * y + m[11] * z + m[15] * w,
        )
    }

    /// Rotates the xyz part by a quaternion (`q v q*`); `w` is preserved.
    pub fn transform_quat(&self, q: &Quat) -> Self {
        let [x, y, z, w] = self.data;
        let [qx, qy, qz, qw] = q.to_array();
        let ix = qw * x + qy * z - qz * y;
        let iy = qw * y + qz * x - qx * z;
        let iz = qw * z + qx * y - qy * x;
        let iw = -qx * x - qy * y - qz * z;
        Self::new(
            ix * qw + iw * -qx + iy * -qz - iz * -qy,
            iy * qw + iw * -qy + iz * -qx - ix * -qz,
            iz * qw + iw * -qz + ix * -qy - iy * -qx,
            w,
        )
    }

    /// Applies `f` to every packed `Vec4` in `buffer`; see [`strided::for_each`].
    pub fn for_each<F: FnMut(Self) -> Self>(
        buffer: &mut [f64],
        stride: usize,
        offset: usize,
        count: Option<usize>,
        f: F,
    ) -> usize {
        strided::for_each::<Self, F>(buffer, stride, offset, count, f)
    }
}

/// Rejection-samples a point strictly inside the unit disk, returning the
/// point and its squared radius.
fn unit_disk_sample<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64, f64) {
    loop {
        let a = rng.gen::<f64>() * 2.0 - 1.0;
        let b = rng.gen::<f64>() * 2.0 - 1.0;
        let s = a * a + b * b;
        if s < 1.0 && s > 0.0 {
            return (a, b, s);
        }
    }
}
