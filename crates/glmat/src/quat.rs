// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f64::consts::PI;

use rand::Rng;

use crate::{EulerOrder, Mat3, Mat4, Vec3, Vec4, EPSILON};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * All angles are in radians except the Euler constructors, which take
///   degrees.
/// * Nothing keeps a quaternion unit length implicitly; call
///   [`Quat::normalize`] where it matters. Operations documented as taking a
///   unit quaternion ([`Quat::slerp`], [`Quat::exp`], [`Quat::ln`], ...) give
///   meaningless results for other inputs.
/// * The componentwise operations (add, scale, dot, lerp, length,
///   normalize) are the [`Vec4`] ones.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Quat {
    data: [f64; 4],
}

impl_storage!(Quat, 4, "quat");
impl_mul_ops!(Quat);

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Vec4> for Quat {
    fn from(value: Vec4) -> Self {
        Self::from(value.to_array())
    }
}

impl From<Quat> for Vec4 {
    fn from(value: Quat) -> Self {
        Self::from(value.data)
    }
}

impl Quat {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Overwrites all components.
    pub fn set(&mut self, x: f64, y: f64, z: f64, w: f64) -> &mut Self {
        self.data = [x, y, z, w];
        self
    }

    fn vec4(self) -> Vec4 {
        Vec4::from(self)
    }

    /// Rotation of `rad` radians around a unit-length `axis`.
    pub fn from_axis_angle(axis: &Vec3, rad: f64) -> Self {
        let (s, c) = (rad * 0.5).sin_cos();
        let [x, y, z] = axis.scale(s).to_array();
        Self::new(x, y, z, c)
    }

    /// Splits a unit quaternion into a rotation axis and an angle in
    /// `[0, 2π]`.
    ///
    /// For a (near) identity rotation the axis is arbitrary; `+X` is
    /// returned. Of the equivalent pairs `(axis, -θ)` and `(axis, 2π - θ)`
    /// this favours the latter.
    pub fn get_axis_angle(&self) -> (Vec3, f64) {
        let rad = self.data[3].clamp(-1.0, 1.0).acos() * 2.0;
        let s = (rad / 2.0).sin();
        let axis = if s > EPSILON {
            Vec3::new(self.data[0] / s, self.data[1] / s, self.data[2] / s)
        } else {
            Vec3::UNIT_X
        };
        (axis, rad)
    }

    /// Angular distance in radians between two unit quaternions.
    pub fn get_angle(&self, other: &Self) -> f64 {
        let d = self.dot(other);
        (2.0 * d * d - 1.0).clamp(-1.0, 1.0).acos()
    }

    /// Hamilton product `self ⊗ other`.
    ///
    /// Operand order matters: applied to a vector, the result rotates by
    /// `other` first and then by `self`.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use glmat::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(&Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(&Vec3::UNIT_X, FRAC_PI_2);
    /// assert!(!yaw.multiply(&pitch).equals(&pitch.multiply(&yaw)));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;
        Self::new(
            ax * bw + aw * bx + ay * bz - az * by,
            ay * bw + aw * by + az * bx - ax * bz,
            az * bw + aw * bz + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Rotates by `rad` around the X axis (`self ⊗ (sin, 0, 0, cos)`).
    pub fn rotate_x(&self, rad: f64) -> Self {
        let [ax, ay, az, aw] = self.data;
        let (bx, bw) = (rad * 0.5).sin_cos();
        Self::new(ax * bw + aw * bx, ay * bw + az * bx, az * bw - ay * bx, aw * bw - ax * bx)
    }

    /// Rotates by `rad` around the Y axis (`self ⊗ (0, sin, 0, cos)`).
    pub fn rotate_y(&self, rad: f64) -> Self {
        let [ax, ay, az, aw] = self.data;
        let (by, bw) = (rad * 0.5).sin_cos();
        Self::new(ax * bw - az * by, ay * bw + aw * by, az * bw + ax * by, aw * bw - ay * by)
    }

    /// Rotates by `rad` around the Z axis (`self ⊗ (0, 0, sin, cos)`).
    pub fn rotate_z(&self, rad: f64) -> Self {
        let [ax, ay, az, aw] = self.data;
        let (bz, bw) = (rad * 0.5).sin_cos();
        Self::new(ax * bw + ay * bz, ay * bw - ax * bz, az * bw + aw * bz, aw * bw - az * bz)
    }

    /// Recomputes `w` from `x`, `y`, `z` assuming unit length; the existing
    /// `w` is ignored.
    pub fn calculate_w(&self) -> Self {
        let [x, y, z, _] = self.data;
        Self::new(x, y, z, (1.0 - x * x - y * y - z * z).abs().sqrt())
    }

    /// Quaternion exponential.
    pub fn exp(&self) -> Self {
        let [x, y, z, w] = self.data;
        let r = (x * x + y * y + z * z).sqrt();
        let et = w.exp();
        let s = if r > 0.0 { et * r.sin() / r } else { 0.0 };
        Self::new(x * s, y * s, z * s, et * r.cos())
    }

    /// Quaternion natural logarithm.
    pub fn ln(&self) -> Self {
        let [x, y, z, w] = self.data;
        let r = (x * x + y * y + z * z).sqrt();
        let t = if r > 0.0 { r.atan2(w) / r } else { 0.0 };
        Self::new(x * t, y * t, z * t, 0.5 * (x * x + y * y + z * z + w * w).ln())
    }

    /// Scalar power `exp(b · ln(self))`.
    pub fn pow(&self, b: f64) -> Self {
        self.ln().scale(b).exp()
    }

    /// Shortest-path spherical linear interpolation.
    ///
    /// If the inputs lie in opposite hemispheres `other` is negated first.
    /// When they are nearly parallel (`1 - cos θ <= EPSILON`) the sine
    /// ratio is ill-conditioned and a plain linear blend is used instead.
    pub fn slerp(&self, other: &Self, t: f64) -> Self {
        let mut b = *other;
        let mut cosom = self.dot(&b);
        if cosom < 0.0 {
            cosom = -cosom;
            b = b.negate();
        }

        let (scale0, scale1) = if 1.0 - cosom > EPSILON {
            let omega = cosom.acos();
            let sinom = omega.sin();
            (((1.0 - t) * omega).sin() / sinom, (t * omega).sin() / sinom)
        } else {
            (1.0 - t, t)
        };
        self.scale(scale0).add(&b.scale(scale1))
    }

    /// Spherical quadrangle interpolation from `self` to `d` with control
    /// points `b` and `c`.
    pub fn sqlerp(&self, b: &Self, c: &Self, d: &Self, t: f64) -> Self {
        let outer = self.slerp(d, t);
        let inner = b.slerp(c, t);
        outer.slerp(&inner, 2.0 * t * (1.0 - t))
    }

    /// Uniformly distributed random unit quaternion (Shoemake's method).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let u1: f64 = rng.gen();
        let u2: f64 = rng.gen();
        let u3: f64 = rng.gen();

        let a = (1.0 - u1).sqrt();
        let b = u1.sqrt();
        let (s2, c2) = (2.0 * PI * u2).sin_cos();
        let (s3, c3) = (2.0 * PI * u3).sin_cos();
        Self::new(a * s2, a * c2, b * s3, b * c3)
    }

    /// Multiplicative inverse. The zero quaternion inverts to zero.
    pub fn invert(&self) -> Self {
        let dot = self.squared_length();
        let inv = if dot > 0.0 { 1.0 / dot } else { 0.0 };
        let [x, y, z, w] = self.data;
        Self::new(-x * inv, -y * inv, -z * inv, w * inv)
    }

    /// Conjugate; equals the inverse for unit quaternions.
    pub fn conjugate(&self) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(-x, -y, -z, w)
    }

    /// Quaternion for a 3x3 rotation matrix.
    ///
    /// The largest of `w`, `x`, `y`, `z` is recovered from the trace first
    /// and the rest from off-diagonal sums and differences. The result is
    /// not normalised.
    pub fn from_mat3(m: &Mat3) -> Self {
        let m = m.as_array();
        let trace = m[0] + m[4] + m[8];
        if trace > 0.0 {
            let root = (trace + 1.0).sqrt();
            let w = 0.5 * root;
            let root = 0.5 / root;
            return Self::new((m[5] - m[7]) * root, (m[6] - m[2]) * root, (m[1] - m[3]) * root, w);
        }

        let mut i = 0;
        if m[4] > m[0] {
            i = 1;
        }
        if m[8] > m[i * 3 + i] {
            i = 2;
        }
        let j = (i + 1) % 3;
        let k = (i + 2) % 3;

        let mut out = [0.0; 4];
        let root = (m[i * 3 + i] - m[j * 3 + j] - m[k * 3 + k] + 1.0).sqrt();
        out[i] = 0.5 * root;
        let root = 0.5 / root;
        out[3] = (m[j * 3 + k] - m[k * 3 + j]) * root;
        out[j] = (m[j * 3 + i] + m[i * 3 + j]) * root;
        out[k] = (m[k * 3 + i] + m[i * 3 + k]) * root;
        Self::from(out)
    }

    /// Quaternion from Euler angles in degrees, applied in X, Y, Z order.
    pub fn from_euler(x: f64, y: f64, z: f64) -> Self {
        Self::from_euler_with_order(x, y, z, EulerOrder::Xyz)
    }

    /// Quaternion from Euler angles in degrees with an explicit order.
    pub fn from_euler_with_order(x: f64, y: f64, z: f64, order: EulerOrder) -> Self {
        let half_to_rad = PI / 360.0;
        let (sx, cx) = (x * half_to_rad).sin_cos();
        let (sy, cy) = (y * half_to_rad).sin_cos();
        let (sz, cz) = (z * half_to_rad).sin_cos();

        let (ax, bx) = (sx * cy * cz, cx * sy * sz);
        let (ay, by) = (cx * sy * cz, sx * cy * sz);
        let (az, bz) = (cx * cy * sz, sx * sy * cz);
        let (aw, bw) = (cx * cy * cz, sx * sy * sz);

        match order {
            EulerOrder::Xyz => Self::new(ax + bx, ay - by, az + bz, aw - bw),
            EulerOrder::Xzy => Self::new(ax - bx, ay - by, az + bz, aw + bw),
            EulerOrder::Yxz => Self::new(ax + bx, ay - by, az - bz, aw + bw),
            EulerOrder::Yzx => Self::new(ax + bx, ay + by, az - bz, aw - bw),
            EulerOrder::Zxy => Self::new(ax - bx, ay + by, az + bz, aw - bw),
            EulerOrder::Zyx => Self::new(ax - bx, ay + by, az - bz, aw + bw),
        }
    }

    /// Shortest rotation taking unit vector `a` onto unit vector `b`.
    ///
    /// Nearly identical inputs yield the identity. Nearly opposite inputs
    /// have no unique shortest arc; the result is a half-turn around some
    /// axis perpendicular to `a`.
    pub fn rotation_to(a: &Vec3, b: &Vec3) -> Self {
        let dot = a.dot(b);
        if dot < -0.999_999 {
            let mut axis = Vec3::UNIT_X.cross(a);
            if axis.length() < 0.000_001 {
                axis = Vec3::UNIT_Y.cross(a);
            }
            return Self::from_axis_angle(&axis.normalize(), PI);
        }
        if dot > 0.999_999 {
            return Self::IDENTITY;
        }
        let [x, y, z] = a.cross(b).to_array();
        Self::new(x, y, z, 1.0 + dot).normalize()
    }

    /// Orientation whose local axes are the given orthonormal `right`, `up`
    /// and `-view` vectors.
    pub fn set_axes(view: &Vec3, right: &Vec3, up: &Vec3) -> Self {
        let m = Mat3::new(
            right.x(),
            up.x(),
            -view.x(),
            right.y(),
            up.y(),
            -view.y(),
            right.z(),
            up.z(),
            -view.z(),
        );
        Self::from_mat3(&m).normalize()
    }

    /// 3x3 rotation matrix.
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_quat(self)
    }

    /// 4x4 rotation matrix.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_quat(self)
    }

    /// Componentwise sum.
    pub fn add(&self, other: &Self) -> Self {
        self.vec4().add(&other.vec4()).into()
    }

    /// Scales every component.
    pub fn scale(&self, s: f64) -> Self {
        self.vec4().scale(s).into()
    }

    /// Negates every component (the same rotation for unit quaternions).
    pub fn negate(&self) -> Self {
        self.vec4().negate().into()
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.vec4().dot(&other.vec4())
    }

    /// Componentwise linear interpolation (not normalised).
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        self.vec4().lerp(&other.vec4(), t).into()
    }

    /// Magnitude.
    pub fn length(&self) -> f64 {
        self.vec4().length()
    }

    /// Squared magnitude.
    pub fn squared_length(&self) -> f64 {
        self.vec4().squared_length()
    }

    /// Rescales to unit length; the zero quaternion is returned unchanged.
    pub fn normalize(&self) -> Self {
        self.vec4().normalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::approx_eq;

    #[test]
    fn from_mat3_recovers_half_turns() {
        for axis in [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z] {
            let q = Quat::from_axis_angle(&axis, PI);
            let back = Quat::from_mat3(&q.to_mat3()).normalize();
            assert!(back.equals(&q) || back.equals(&q.negate()), "{axis}: {back}");
        }
    }

    #[test]
    fn invert_of_zero_is_zero() {
        assert_eq!(Quat::from([0.0; 4]).invert().to_array(), [0.0; 4]);
    }

    #[test]
    fn calculate_w_restores_unit_length() {
        let q = Quat::from_axis_angle(&Vec3::UNIT_Z, 1.0);
        let mut r = q;
        r[3] = 99.0;
        assert!(r.calculate_w().equals(&q));
    }

    #[test]
    fn get_axis_angle_of_identity_defaults_to_x() {
        let (axis, angle) = Quat::IDENTITY.get_axis_angle();
        assert_eq!(axis, Vec3::UNIT_X);
        assert!(approx_eq(angle, 0.0));
    }

    #[test]
    fn rotation_to_antiparallel_is_half_turn() {
        let q = Quat::rotation_to(&Vec3::UNIT_X, &Vec3::new(-1.0, 0.0, 0.0));
        let v = Vec3::UNIT_X.transform_quat(&q);
        assert!(v.equals(&Vec3::new(-1.0, 0.0, 0.0)));
        assert!(approx_eq(q.length(), 1.0));
    }
}
