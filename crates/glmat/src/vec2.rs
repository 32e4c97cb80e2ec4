// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use rand::Rng;

use crate::{scalar, strided, Mat2, Mat2d, Mat3, Mat4, Vec3};

/// 2D vector stored as `[x, y]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Vec2 {
    data: [f64; 2],
}

impl_storage!(Vec2, 2, "vec2");

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { data: [x, y] }
    }

    /// Returns the zero vector.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Overwrites both components.
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.data = [x, y];
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

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.data[0]), f(self.data[1]))
    }

    fn zip(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(f(self.data[0], other.data[0]), f(self.data[1], other.data[1]))
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

    /// Negates both components.
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
        self.data[0] * other.data[0] + self.data[1] * other.data[1]
    }

    /// Cross product of two planar vectors, lifted into 3D.
    ///
    /// The result is `[0, 0, ax * by - ay * bx]`: the z component carries
    /// the signed parallelogram area and x/y are always zero.
    pub fn cross(&self, other: &Self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.data[0] * other.data[1] - self.data[1] * other.data[0])
    }

    /// Linear interpolation.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        self.zip(other, |a, b| a + t * (b - a))
    }

    /// Random vector on the circle of radius `scale`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> Self {
        let r = rng.gen::<f64>() * 2.0 * core::f64::consts::PI;
        Self::new(r.cos() * scale, r.sin() * scale)
    }

    /// Transforms with a 2x2 matrix.
    pub fn transform_mat2(&self, m: &Mat2) -> Self {
        let [x, y] = self.data;
        let m = m.as_array();
        Self::new(m[0] * x + m[2] * y, m[1] * x + m[3] * y)
    }

    /// Transforms with a 2D affine matrix.
    pub fn transform_mat2d(&self, m: &Mat2d) -> Self {
        let [x, y] = self.data;
        let m = m.as_array();
        Self::new(m[0] * x + m[2] * y + m[4], m[1] * x + m[3] * y + m[5])
    }

    /// Transforms with a 3x3 matrix, treating the vector as `[x, y, 1]`.
    pub fn transform_mat3(&self, m: &Mat3) -> Self {
        let [x, y] = self.data;
        let m = m.as_array();
        Self::new(m[0] * x + m[3] * y + m[6], m[1] * x + m[4] * y + m[7])
    }

    /// Transforms with a 4x4 matrix, treating the vector as `[x, y, 0, 1]`
    /// and dividing by the resulting `w` (zero is treated as one).
    pub fn transform_mat4(&self, m: &Mat4) -> Self {
        let [x, y] = self.data;
        let m = m.as_array();
        let mut w = m[3] * x + m[7] * y + m[15];
        if w == 0.0 {
            w = 1.0;
        }
        Self::new(
            (m[0] * x + m[4] * y + m[12]) / w,
            (m[1] * x + m[5] * y + m[13]) / w,
        )
    }

    /// Rotates around `origin` by `rad` radians.
    pub fn rotate(&self, origin: &Self, rad: f64) -> Self {
        let p = self.sub(origin);
        let (s, c) = rad.sin_cos();
        Self::new(p.data[0] * c - p.data[1] * s, p.data[0] * s + p.data[1] * c).add(origin)
    }

    /// Angle in radians between two vectors; a zero-length input yields `π/2`.
    pub fn angle(&self, other: &Self) -> f64 {
        let mag = self.length() * other.length();
        let cosine = if mag == 0.0 { 0.0 } else { self.dot(other) / mag };
        cosine.clamp(-1.0, 1.0).acos()
    }

    /// Applies `f` to every packed `Vec2` in `buffer`; see [`strided::for_each`].
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
