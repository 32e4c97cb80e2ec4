// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixture-driven validation of the vector, matrix, quaternion and PRNG
//! kernels against reference values.

#![allow(missing_docs)]
use once_cell::sync::Lazy;
use rand::RngCore;
use serde::Deserialize;

use glmat::{scalar, EulerOrder, Mat2, Mat2d, Mat3, Mat4, Prng, Quat, Quat2, Vec3};

static RAW_FIXTURES: &str = include_str!("fixtures/math-fixtures.json");

static FIXTURES: Lazy<MathFixtures> = Lazy::new(|| {
    let fixtures: MathFixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse math fixtures");
    fixtures.validate();
    fixtures
});

#[derive(Debug, Deserialize)]
struct MathFixtures {
    #[serde(default)]
    tolerance: Tolerance,
    scalars: ScalarFixtures,
    vec3: Vec3Fixtures,
    mat2: Mat2Fixtures,
    mat2d: Mat2dFixtures,
    mat3: Mat3Fixtures,
    mat4: Mat4Fixtures,
    quat: QuatFixtures,
    quat2: Quat2Fixtures,
    prng: Vec<PrngFixture>,
    prng_splitmix: Vec<PrngSplitMixFixture>,
}

impl MathFixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(!slice.is_empty(), "math fixtures set '{name}' must not be empty");
        }

        ensure("scalars.deg_to_rad", &self.scalars.deg_to_rad);
        ensure("scalars.rad_to_deg", &self.scalars.rad_to_deg);
        ensure("vec3.cross", &self.vec3.cross);
        ensure("vec3.dot", &self.vec3.dot);
        ensure("vec3.normalize", &self.vec3.normalize);
        ensure("vec3.transform_mat4", &self.vec3.transform_mat4);
        ensure("vec3.transform_quat", &self.vec3.transform_quat);
        ensure("mat2.invert", &self.mat2.invert);
        ensure("mat2d.invert", &self.mat2d.invert);
        ensure("mat3.determinant", &self.mat3.determinant);
        ensure("mat3.invert", &self.mat3.invert);
        ensure("mat4.multiply", &self.mat4.multiply);
        ensure("mat4.invert", &self.mat4.invert);
        ensure("mat4.perspective", &self.mat4.perspective);
        ensure("mat4.ortho", &self.mat4.ortho);
        ensure("mat4.look_at", &self.mat4.look_at);
        ensure("quat.multiply", &self.quat.multiply);
        ensure("quat.slerp", &self.quat.slerp);
        ensure("quat.from_axis_angle", &self.quat.from_axis_angle);
        ensure("quat.from_euler", &self.quat.from_euler);
        ensure("quat2.multiply", &self.quat2.multiply);
        ensure("quat2.from_rotation_translation", &self.quat2.from_rotation_translation);
        ensure("prng", &self.prng);
        ensure("prng_splitmix", &self.prng_splitmix);
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    absolute: f64,
    #[serde(default = "Tolerance::default_relative")]
    relative: f64,
}

impl Tolerance {
    const fn default_absolute() -> f64 {
        1e-6
    }

    const fn default_relative() -> f64 {
        1e-6
    }

    fn allowed_error(&self, reference: f64) -> f64 {
        self.absolute.max(self.relative * reference.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
            relative: Self::default_relative(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScalarFixtures {
    deg_to_rad: Vec<UnaryFixture>,
    rad_to_deg: Vec<UnaryFixture>,
}

#[derive(Debug, Deserialize)]
struct UnaryFixture {
    value: f64,
    expected: f64,
}

#[derive(Debug, Deserialize)]
struct Vec3Fixtures {
    cross: Vec<BinaryFixture<3, 3>>,
    dot: Vec<Vec3DotFixture>,
    normalize: Vec<ArrayFixture<3, 3>>,
    transform_mat4: Vec<Vec3Mat4Fixture>,
    transform_quat: Vec<Vec3QuatFixture>,
}

#[derive(Debug, Deserialize)]
struct BinaryFixture<const N: usize, const M: usize> {
    #[serde(with = "array")]
    a: [f64; N],
    #[serde(with = "array")]
    b: [f64; N],
    #[serde(with = "array")]
    expected: [f64; M],
}

#[derive(Debug, Deserialize)]
struct ArrayFixture<const N: usize, const M: usize> {
    #[serde(with = "array")]
    value: [f64; N],
    #[serde(with = "array")]
    expected: [f64; M],
}

#[derive(Debug, Deserialize)]
struct ScalarResultFixture<const N: usize> {
    #[serde(with = "array")]
    value: [f64; N],
    expected: f64,
}

#[derive(Debug, Deserialize)]
struct Vec3DotFixture {
    a: [f64; 3],
    b: [f64; 3],
    expected: f64,
}

#[derive(Debug, Deserialize)]
struct Vec3Mat4Fixture {
    matrix: [f64; 16],
    vector: [f64; 3],
    expected: [f64; 3],
}

#[derive(Debug, Deserialize)]
struct Vec3QuatFixture {
    quat: [f64; 4],
    vector: [f64; 3],
    expected: [f64; 3],
}

#[derive(Debug, Deserialize)]
struct Mat2Fixtures {
    invert: Vec<ArrayFixture<4, 4>>,
}

#[derive(Debug, Deserialize)]
struct Mat2dFixtures {
    invert: Vec<ArrayFixture<6, 6>>,
}

#[derive(Debug, Deserialize)]
struct Mat3Fixtures {
    determinant: Vec<ScalarResultFixture<9>>,
    invert: Vec<ArrayFixture<9, 9>>,
}

#[derive(Debug, Deserialize)]
struct Mat4Fixtures {
    multiply: Vec<BinaryFixture<16, 16>>,
    invert: Vec<ArrayFixture<16, 16>>,
    perspective: Vec<PerspectiveFixture>,
    ortho: Vec<OrthoFixture>,
    look_at: Vec<LookAtFixture>,
}

#[derive(Debug, Deserialize)]
struct PerspectiveFixture {
    fovy: f64,
    aspect: f64,
    near: f64,
    far: f64,
    expected: [f64; 16],
}

#[derive(Debug, Deserialize)]
struct OrthoFixture {
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    far: f64,
    expected: [f64; 16],
}

#[derive(Debug, Deserialize)]
struct LookAtFixture {
    eye: [f64; 3],
    center: [f64; 3],
    up: [f64; 3],
    expected: [f64; 16],
}

#[derive(Debug, Deserialize)]
struct QuatFixtures {
    multiply: Vec<BinaryFixture<4, 4>>,
    slerp: Vec<QuatSlerpFixture>,
    from_axis_angle: Vec<QuatAxisAngleFixture>,
    from_euler: Vec<QuatEulerFixture>,
}

#[derive(Debug, Deserialize)]
struct QuatSlerpFixture {
    a: [f64; 4],
    b: [f64; 4],
    t: f64,
    expected: [f64; 4],
}

#[derive(Debug, Deserialize)]
struct QuatAxisAngleFixture {
    axis: [f64; 3],
    angle: f64,
    expected: [f64; 4],
}

#[derive(Debug, Deserialize)]
struct QuatEulerFixture {
    angles: [f64; 3],
    order: String,
    expected: [f64; 4],
}

#[derive(Debug, Deserialize)]
struct Quat2Fixtures {
    multiply: Vec<BinaryFixture<8, 8>>,
    from_rotation_translation: Vec<Quat2RotationTranslationFixture>,
}

#[derive(Debug, Deserialize)]
struct Quat2RotationTranslationFixture {
    rotation: [f64; 4],
    translation: [f64; 3],
    expected: [f64; 8],
}

#[derive(Debug, Deserialize)]
struct PrngFixture {
    seed: [u64; 2],
    expected_u64: Vec<u64>,
}

#[derive(Debug, Deserialize)]
struct PrngSplitMixFixture {
    seed: u64,
    expected_f64: Vec<f64>,
}

// serde has no `Deserialize` for `[T; N]` with a generic `N`, so the
// const-generic fixture structs read through a `Vec`.
mod array {
    use serde::{de::Error, Deserialize, Deserializer};

    pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[f64; N], D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<f64>::deserialize(deserializer)?;
        let len = values.len();
        <[f64; N]>::try_from(values)
            .map_err(|_| D::Error::custom(format!("expected {N} components, got {len}")))
    }
}

fn assert_scalar(actual: f64, expected: f64, tol: &Tolerance, ctx: &str) {
    let diff = (actual - expected).abs();
    let allowed = tol.allowed_error(expected);
    assert!(
        diff <= allowed,
        "{ctx}: expected {expected}, got {actual} (diff {diff} > {allowed})"
    );
}

fn assert_components(actual: &[f64], expected: &[f64], tol: &Tolerance, ctx: &str) {
    assert_eq!(actual.len(), expected.len(), "{ctx}: component count");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let diff = (a - e).abs();
        let allowed = tol.allowed_error(*e);
        assert!(
            diff <= allowed,
            "{ctx}[{i}]: expected {e}, got {a} (diff {diff} > {allowed})"
        );
    }
}

#[test]
fn scalar_fixtures_all_match() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.scalars.deg_to_rad {
        let actual = scalar::deg_to_rad(fix.value);
        assert_scalar(actual, fix.expected, tol, &format!("deg_to_rad value={}", fix.value));
    }
    for fix in &FIXTURES.scalars.rad_to_deg {
        let actual = scalar::rad_to_deg(fix.value);
        assert_scalar(actual, fix.expected, tol, &format!("rad_to_deg value={}", fix.value));
    }
}

#[test]
fn vec3_fixtures_cover_operations() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.vec3.cross {
        let actual = Vec3::from(fix.a).cross(&Vec3::from(fix.b));
        let ctx = format!("vec3.cross a={:?} b={:?}", fix.a, fix.b);
        assert_components(actual.as_ref(), &fix.expected, tol, &ctx);
    }

    for fix in &FIXTURES.vec3.dot {
        let actual = Vec3::from(fix.a).dot(&Vec3::from(fix.b));
        assert_scalar(actual, fix.expected, tol, &format!("vec3.dot a={:?} b={:?}", fix.a, fix.b));
    }

    for (idx, fix) in FIXTURES.vec3.normalize.iter().enumerate() {
        let actual = Vec3::from(fix.value).normalize();
        let ctx = format!("vec3.normalize#[{idx}] value={:?}", fix.value);
        assert_components(actual.as_ref(), &fix.expected, tol, &ctx);
    }

    for fix in &FIXTURES.vec3.transform_mat4 {
        let actual = Vec3::from(fix.vector).transform_mat4(&Mat4::from(fix.matrix));
        let ctx = format!("vec3.transform_mat4 vector={:?}", fix.vector);
        assert_components(actual.as_ref(), &fix.expected, tol, &ctx);
    }

    for fix in &FIXTURES.vec3.transform_quat {
        let actual = Vec3::from(fix.vector).transform_quat(&Quat::from(fix.quat));
        let ctx = format!("vec3.transform_quat vector={:?} quat={:?}", fix.vector, fix.quat);
        assert_components(actual.as_ref(), &fix.expected, tol, &ctx);
    }
}

#[test]
fn small_matrix_fixtures_validate_inverses() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.mat2.invert {
        let inv = Mat2::from(fix.value).invert().expect("mat2 fixture is invertible");
        assert_components(inv.as_ref(), &fix.expected, tol, "mat2.invert");
    }

    for fix in &FIXTURES.mat2d.invert {
        let inv = Mat2d::from(fix.value).invert().expect("mat2d fixture is invertible");
        assert_components(inv.as_ref(), &fix.expected, tol, "mat2d.invert");
    }

    for fix in &FIXTURES.mat3.determinant {
        let det = Mat3::from(fix.value).determinant();
        assert_scalar(det, fix.expected, tol, &format!("mat3.determinant value={:?}", fix.value));
    }

    for fix in &FIXTURES.mat3.invert {
        let inv = Mat3::from(fix.value).invert().expect("mat3 fixture is invertible");
        assert_components(inv.as_ref(), &fix.expected, tol, "mat3.invert");
    }
}

#[test]
fn mat4_fixtures_validate_transformations() {
    let tol = &FIXTURES.tolerance;
    for (i, fix) in FIXTURES.mat4.multiply.iter().enumerate() {
        let actual = Mat4::from(fix.a).multiply(&Mat4::from(fix.b));
        assert_components(actual.as_ref(), &fix.expected, tol, &format!("mat4.multiply[{i}]"));
    }

    for (i, fix) in FIXTURES.mat4.invert.iter().enumerate() {
        let actual = Mat4::from(fix.value).invert().expect("mat4 fixture is invertible");
        assert_components(actual.as_ref(), &fix.expected, tol, &format!("mat4.invert[{i}]"));
    }

    for fix in &FIXTURES.mat4.perspective {
        let actual = Mat4::perspective(fix.fovy, fix.aspect, fix.near, fix.far);
        let ctx = format!("mat4.perspective fovy={} aspect={}", fix.fovy, fix.aspect);
        assert_components(actual.as_ref(), &fix.expected, tol, &ctx);
    }

    for fix in &FIXTURES.mat4.ortho {
        let actual = Mat4::ortho(fix.left, fix.right, fix.bottom, fix.top, fix.near, fix.far);
        assert_components(actual.as_ref(), &fix.expected, tol, "mat4.ortho");
    }

    for fix in &FIXTURES.mat4.look_at {
        let actual = Mat4::look_at(
            &Vec3::from(fix.eye),
            &Vec3::from(fix.center),
            &Vec3::from(fix.up),
        );
        let ctx = format!("mat4.look_at eye={:?} center={:?}", fix.eye, fix.center);
        assert_components(actual.as_ref(), &fix.expected, tol, &ctx);
    }
}

#[test]
fn quat_fixtures_validate_operations() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.quat.multiply {
        let actual = Quat::from(fix.a).multiply(&Quat::from(fix.b));
        assert_components(actual.as_ref(), &fix.expected, tol, "quat.multiply");
    }

    for fix in &FIXTURES.quat.slerp {
        let actual = Quat::from(fix.a).slerp(&Quat::from(fix.b), fix.t);
        assert_components(actual.as_ref(), &fix.expected, tol, &format!("quat.slerp t={}", fix.t));
    }

    for fix in &FIXTURES.quat.from_axis_angle {
        let actual = Quat::from_axis_angle(&Vec3::from(fix.axis), fix.angle);
        let ctx = format!("quat.from_axis_angle axis={:?} angle={}", fix.axis, fix.angle);
        assert_components(actual.as_ref(), &fix.expected, tol, &ctx);
    }

    for fix in &FIXTURES.quat.from_euler {
        let order: EulerOrder = fix.order.parse().expect("fixture euler order parses");
        let [x, y, z] = fix.angles;
        let actual = Quat::from_euler_with_order(x, y, z, order);
        let ctx = format!("quat.from_euler order={order} angles={:?}", fix.angles);
        assert_components(actual.as_ref(), &fix.expected, tol, &ctx);
    }
}

#[test]
fn quat2_fixtures_validate_operations() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.quat2.multiply {
        let actual = Quat2::from(fix.a).multiply(&Quat2::from(fix.b));
        assert_components(actual.as_ref(), &fix.expected, tol, "quat2.multiply");
    }

    for fix in &FIXTURES.quat2.from_rotation_translation {
        let actual = Quat2::from_rotation_translation(
            &Quat::from(fix.rotation),
            &Vec3::from(fix.translation),
        );
        let ctx = format!("quat2.from_rotation_translation t={:?}", fix.translation);
        assert_components(actual.as_ref(), &fix.expected, tol, &ctx);
    }
}

#[test]
fn prng_sequences_match_fixtures() {
    for fix in &FIXTURES.prng {
        let [s0, s1] = fix.seed;
        let mut rng = Prng::from_seed(s0, s1);
        let actual: Vec<u64> = fix.expected_u64.iter().map(|_| rng.next_u64()).collect();
        assert_eq!(actual, fix.expected_u64, "prng seed={:?}", fix.seed);
    }

    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.prng_splitmix {
        let mut rng = Prng::from_seed_u64(fix.seed);
        for (i, expected) in fix.expected_f64.iter().enumerate() {
            let ctx = format!("prng splitmix seed={} draw {i}", fix.seed);
            assert_scalar(rng.next_f64(), *expected, tol, &ctx);
        }
    }
}
