// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use rand::Rng;

use crate::{scalar, strided, Mat3, Mat4, Quat, EPSILON};

/// 3D vector stored as `[x, y, z]`.
///
/// * Components may represent either points or directions depending on the
///   calling context; [`Vec3::transform_mat4`] treats the vector as a point
///   (`w = 1`) and performs the perspective divide.
/// * All operations return a new value; `self` is never modified except by
///   [`Vec3::set`] and the indexing operators.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Vec3 {
    data: [f64; 3],
}

impl_storage!(Vec3, 3, "vec3");

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns the zero vector.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Overwrites all components, returning `self` for chaining.
    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.data = [x, y, z];
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

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.data[0]), f(self.data[1]), f(self.data[2]))
    }

    fn zip(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(
            f(self.data[0], other.data[0]),
            f(self.data[1], other.data[1]),
            f(self.data[2], other.data[2]),
        )
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

    /// Vector length (magnitude).
    pub fn length(&self) -> f64 {
        scalar::hypot(&self.data)
    }

    /// Squared magnitude of the vector.
    pub fn squared_length(&self) -> f64 {
        self.dot(self)
    }

    /// Negates every component.
    pub fn negate(&self) -> Self {
        self.map(|a| -a)
    }

    /// Componentwise reciprocal (`1 / c`); zero components become infinite.
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

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Linear interpolation; `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        self.zip(other, |a, b| a + t * (b - a))
    }

    /// Spherical linear interpolation between two unit-length directions.
    ///
    /// When the inputs are (anti)parallel the great circle is undefined and
    /// the result falls back to [`Vec3::lerp`]. For antiparallel inputs that
    /// blend passes through the origin, so `t = 0.5` yields the zero vector
    /// rather than a unit-length direction.
    pub fn slerp(&self, other: &Self, t: f64) -> Self {
        let angle = self.dot(other).clamp(-1.0, 1.0).acos();
        let sin_total = angle.sin();
        if sin_total.abs() < EPSILON {
            return self.lerp(other, t);
        }
        let ratio_a = ((1.0 - t) * angle).sin() / sin_total;
        let ratio_b = (t * angle).sin() / sin_total;
        self.scale(ratio_a).add(&other.scale(ratio_b))
    }

    /// Hermite interpolation from `self` to `d` with tangents `b` and `c`.
    pub fn hermite(&self, b: &Self, c: &Self, d: &Self, t: f64) -> Self {
        let t2 = t * t;
        let f1 = t2 * (2.0 * t - 3.0) + 1.0;
        let f2 = t2 * (t - 2.0) + t;
        let f3 = t2 * (t - 1.0);
        let f4 = t2 * (3.0 - 2.0 * t);
        self.weighted(b, c, d, [f1, f2, f3, f4])
    }

    /// Cubic Bezier interpolation from `self` to `d` with control points `b`
    /// and `c`.
    pub fn bezier(&self, b: &Self, c: &Self, d: &Self, t: f64) -> Self {
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        let f1 = inv2 * inv;
        let f2 = 3.0 * t * inv2;
        let f3 = 3.0 * t2 * inv;
        let f4 = t2 * t;
        self.weighted(b, c, d, [f1, f2, f3, f4])
    }

    fn weighted(&self, b: &Self, c: &Self, d: &Self, w: [f64; 4]) -> Self {
        let mut out = [0.0; 3];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.data[i] * w[0] + b.data[i] * w[1] + c.data[i] * w[2] + d.data[i] * w[3];
        }
        Self::from(out)
    }

    /// Random vector uniformly distributed on the sphere of radius `scale`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> Self {
        let r = rng.gen::<f64>() * 2.0 * core::f64::consts::PI;
        let z = rng.gen::<f64>() * 2.0 - 1.0;
        let z_scale = (1.0 - z * z).sqrt() * scale;
        Self::new(r.cos() * z_scale, r.sin() * z_scale, z * scale)
    }

    /// Transforms the vector with a 3x3 matrix.
    pub fn transform_mat3(&self, m: &Mat3) -> Self {
        let [x, y, z] = self.data;
        let m = m.as_array();
        Self::new(
            x * m[0] + y * m[3] + z * m[6],
            x * m[1] + y * m[4] + z * m[7],
            x * m[2] + y * m[5] + z * m[8],
        )
    }

    /// Transforms the vector as a point (`w = 1`) with a 4x4 matrix and
    /// divides by the resulting `w`. A resulting `w` of zero is treated as
    /// one.
    pub fn transform_mat4(&self, m: &Mat4) -> Self {
        let [x, y, z] = self.data;
        let m = m.as_array();
        let mut w = m[3] * x + m[7] * y + m[11] * z + m[15];
        if w == 0.0 {
            w = 1.0;
        }
        Self::new(
            (m[0] * x + m[4] * y + m[8] * z + m[12]) / w,
            (m[1] * x + m[5] * y + m[9] * z + m[13]) / w,
            (m[2] * x + m[6] * y + m[10] * z + m[14]) / w,
        )
    }

    /// Rotates the vector by a quaternion.
    ///
    /// Uses `v' = v + 2w (q × v) + 2 (q × (q × v))`, which also works with
    /// the real part of a dual quaternion.
    pub fn transform_quat(&self, q: &Quat) -> Self {
        let [qx, qy, qz, qw] = q.to_array();
        let [x, y, z] = self.data;
        let uv = Self::new(qy * z - qz * y, qz * x - qx * z, qx * y - qy * x);
        let uuv = Self::new(
            qy * uv.data[2] - qz * uv.data[1],
            qz * uv.data[0] - qx * uv.data[2],
            qx * uv.data[1] - qy * uv.data[0],
        );
        self.add(&uv.scale(qw * 2.0)).add(&uuv.scale(2.0))
    }

    /// Rotates the vector around the X axis passing through `origin`.
    pub fn rotate_x(&self, origin: &Self, rad: f64) -> Self {
        let p = self.sub(origin);
        let (s, c) = rad.sin_cos();
        Self::new(p.data[0], p.data[1] * c - p.data[2] * s, p.data[1] * s + p.data[2] * c)
            .add(origin)
    }

    /// Rotates the vector around the Y axis passing through `origin`.
    pub fn rotate_y(&self, origin: &Self, rad: f64) -> Self {
        let p = self.sub(origin);
        let (s, c) = rad.sin_cos();
        Self::new(p.data[2] * s + p.data[0] * c, p.data[1], p.data[2] * c - p.data[0] * s)
            .add(origin)
    }

    /// Rotates the vector around the Z axis passing through `origin`.
    pub fn rotate_z(&self, origin: &Self, rad: f64) -> Self {
        let p = self.sub(origin);
        let (s, c) = rad.sin_cos();
        Self::new(p.data[0] * c - p.data[1] * s, p.data[0] * s + p.data[1] * c, p.data[2])
            .add(origin)
    }

    /// Angle in radians between two vectors.
    ///
    /// A zero-length input has no direction; the cosine is taken as `0` and
    /// the result is `π/2`.
    pub fn angle(&self, other: &Self) -> f64 {
        let mag = self.length() * other.length();
        let cosine = if mag == 0.0 { 0.0 } else { self.dot(other) / mag };
        cosine.clamp(-1.0, 1.0).acos()
    }

    /// Applies `f` to every packed `Vec3` in `buffer`; see [`strided::for_each`].
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
