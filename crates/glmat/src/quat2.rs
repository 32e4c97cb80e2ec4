// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::trace;

use crate::{scalar, Mat4, Quat, Vec3, EPSILON};

/// Dual quaternion `real + ε·dual` stored as
/// `[rx, ry, rz, rw, dx, dy, dz, dw]`.
///
/// A dual quaternion encodes a rigid transform when the real part is a unit
/// quaternion (the rotation) and `dot(real, dual) == 0`; the dual part is
/// then `½ · t ⊗ real` for the translation `t`. [`Quat2::normalize`]
/// restores both conditions. [`Quat2::lerp`], [`Quat2::add`] and
/// [`Quat2::scale`] do not preserve them.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Quat2 {
    data: [f64; 8],
}

impl_storage!(Quat2, 8, "quat2");
impl_mul_ops!(Quat2);

impl Default for Quat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Pure quaternion `(v / 2, 0)`.
fn half_pure(v: &Vec3) -> Quat {
    let [x, y, z] = v.scale(0.5).to_array();
    Quat::new(x, y, z, 0.0)
}

impl Quat2 {
    /// The identity transform: real `(0, 0, 0, 1)`, dual zero.
    pub const IDENTITY: Self = Self {
        data: [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
    };

    /// Creates a dual quaternion from its eight components.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        x1: f64,
        y1: f64,
        z1: f64,
        w1: f64,
        x2: f64,
        y2: f64,
        z2: f64,
        w2: f64,
    ) -> Self {
        Self { data: [x1, y1, z1, w1, x2, y2, z2, w2] }
    }

    /// Returns the identity dual quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a dual quaternion from its real and dual parts.
    pub fn from_parts(real: &Quat, dual: &Quat) -> Self {
        let [x1, y1, z1, w1] = real.to_array();
        let [x2, y2, z2, w2] = dual.to_array();
        Self::new(x1, y1, z1, w1, x2, y2, z2, w2)
    }

    /// Overwrites all eight components.
    pub fn set(&mut self, data: [f64; 8]) -> &mut Self {
        self.data = data;
        self
    }

    /// Rigid transform that rotates by `q`, then translates by `t`.
    pub fn from_rotation_translation(q: &Quat, t: &Vec3) -> Self {
        Self::from_parts(q, &half_pure(t).multiply(q))
    }

    /// Pure translation.
    pub fn from_translation(t: &Vec3) -> Self {
        Self::from_parts(&Quat::IDENTITY, &half_pure(t))
    }

    /// Pure rotation.
    pub fn from_rotation(q: &Quat) -> Self {
        Self::from_parts(q, &Quat::from([0.0; 4]))
    }

    /// Rigid transform from the rotation and translation of a 4x4 matrix.
    /// Scale and projective terms are discarded.
    pub fn from_mat4(a: &Mat4) -> Self {
        Self::from_rotation_translation(&a.get_rotation(), &a.get_translation())
    }

    /// Real (rotation) part.
    pub fn real(&self) -> Quat {
        let [x, y, z, w, ..] = self.data;
        Quat::new(x, y, z, w)
    }

    /// Dual (translation-encoding) part.
    pub fn dual(&self) -> Quat {
        let [.., x, y, z, w] = self.data;
        Quat::new(x, y, z, w)
    }

    /// Replaces the real part.
    pub fn set_real(&mut self, q: &Quat) -> &mut Self {
        self.data[..4].copy_from_slice(q.as_array());
        self
    }

    /// Replaces the dual part.
    pub fn set_dual(&mut self, q: &Quat) -> &mut Self {
        self.data[4..].copy_from_slice(q.as_array());
        self
    }

    /// Translation encoded by a normalised dual quaternion:
    /// `2 · dual ⊗ conj(real)`.
    pub fn get_translation(&self) -> Vec3 {
        let t = self.dual().multiply(&self.real().conjugate());
        Vec3::new(t[0], t[1], t[2]).scale(2.0)
    }

    /// Post-multiplies by a translation, so `v` is taken in the local frame
    /// of the existing rotation.
    pub fn translate(&self, v: &Vec3) -> Self {
        let real = self.real();
        Self::from_parts(&real, &real.multiply(&half_pure(v)).add(&self.dual()))
    }

    // Rotates the real part with `rotate` while keeping the translation the
    // dual part encodes.
    fn rotate_real(&self, rotate: impl FnOnce(&Quat) -> Quat) -> Self {
        let real = self.real();
        let carried = self.dual().multiply(&real.conjugate());
        let rotated = rotate(&real);
        Self::from_parts(&rotated, &carried.multiply(&rotated))
    }

    /// Rotates around the local X axis.
    pub fn rotate_x(&self, rad: f64) -> Self {
        self.rotate_real(|q| q.rotate_x(rad))
    }

    /// Rotates around the local Y axis.
    pub fn rotate_y(&self, rad: f64) -> Self {
        self.rotate_real(|q| q.rotate_y(rad))
    }

    /// Rotates around the local Z axis.
    pub fn rotate_z(&self, rad: f64) -> Self {
        self.rotate_real(|q| q.rotate_z(rad))
    }

    /// `self ⊗ q` applied to both parts.
    pub fn rotate_by_quat_append(&self, q: &Quat) -> Self {
        Self::from_parts(&self.real().multiply(q), &self.dual().multiply(q))
    }

    /// `q ⊗ self` applied to both parts.
    pub fn rotate_by_quat_prepend(&self, q: &Quat) -> Self {
        Self::from_parts(&q.multiply(&self.real()), &q.multiply(&self.dual()))
    }

    /// Rotates by `rad` around `axis`, which is normalised internally.
    ///
    /// A zero angle returns an exact copy. An axis shorter than
    /// [`EPSILON`] has no direction and also leaves the value unchanged.
    pub fn rotate_around_axis(&self, axis: &Vec3, rad: f64) -> Self {
        if scalar::approx_eq(rad, 0.0) {
            return *self;
        }
        let len = axis.length();
        if len < EPSILON {
            trace!(%axis, "quat2 rotate_around_axis: axis length below epsilon");
            return *self;
        }
        let q = Quat::from_axis_angle(&axis.scale(1.0 / len), rad);
        self.rotate_by_quat_append(&q)
    }

    /// Componentwise sum of all eight components.
    pub fn add(&self, other: &Self) -> Self {
        let mut data = self.data;
        for (a, b) in data.iter_mut().zip(other.data) {
            *a += b;
        }
        Self { data }
    }

    /// Dual-number product:
    /// `(a₀ ⊗ b₀) + ε(a₀ ⊗ b₁ + a₁ ⊗ b₀)`.
    pub fn multiply(&self, other: &Self) -> Self {
        let (a0, a1) = (self.real(), self.dual());
        let (b0, b1) = (other.real(), other.dual());
        Self::from_parts(&a0.multiply(&b0), &a0.multiply(&b1).add(&a1.multiply(&b0)))
    }

    /// Scales all eight components.
    pub fn scale(&self, s: f64) -> Self {
        Self { data: self.data.map(|a| a * s) }
    }

    /// Dot product of the real parts.
    pub fn dot(&self, other: &Self) -> f64 {
        self.real().dot(&other.real())
    }

    /// Linear blend of all eight components.
    ///
    /// When the real parts lie in opposite hemispheres `other` is negated to
    /// take the shorter path. The result is generally not normalised; pass it
    /// through [`Quat2::normalize`] before using it as a rigid transform.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mt = 1.0 - t;
        let t = if self.dot(other) < 0.0 { -t } else { t };
        let mut data = self.data;
        for (a, b) in data.iter_mut().zip(other.data) {
            *a = *a * mt + b * t;
        }
        Self { data }
    }

    /// Inverse transform. For normalised values [`Quat2::conjugate`] gives
    /// the same result. A zero real part inverts to zero.
    pub fn invert(&self) -> Self {
        let sqlen = self.squared_length();
        if sqlen == 0.0 {
            trace!(value = %self, "quat2 invert: zero real part");
            return Self::from([0.0; 8]);
        }
        self.conjugate().scale(1.0 / sqlen)
    }

    /// Conjugates both parts.
    pub fn conjugate(&self) -> Self {
        Self::from_parts(&self.real().conjugate(), &self.dual().conjugate())
    }

    /// Magnitude of the real part.
    pub fn length(&self) -> f64 {
        self.real().length()
    }

    /// Squared magnitude of the real part.
    pub fn squared_length(&self) -> f64 {
        self.real().squared_length()
    }

    /// Rescales the real part to unit length and removes the dual part's
    /// component along it, so the result is a valid rigid transform. A zero
    /// real part is returned unchanged.
    pub fn normalize(&self) -> Self {
        let magnitude = self.squared_length();
        if magnitude <= 0.0 {
            trace!(value = %self, "quat2 normalize: zero real part");
            return *self;
        }
        let magnitude = magnitude.sqrt();
        let a = self.real().scale(1.0 / magnitude);
        let b = self.dual();
        let dual = b.add(&a.scale(-a.dot(&b))).scale(1.0 / magnitude);
        Self::from_parts(&a, &dual)
    }
}
