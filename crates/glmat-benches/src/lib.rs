// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared inputs for the glmat benchmarks.

use glmat::{Mat4, Prng, Quat, Vec3};

/// Packed `[x, y, z]` positions for `n` vertices, deterministic per seed.
pub fn packed_positions(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Prng::from_seed_u64(seed);
    let mut out = Vec::with_capacity(n * 3);
    for _ in 0..n {
        out.extend_from_slice(Vec3::random(&mut rng, 50.0).as_array());
    }
    out
}

/// A model-view-projection matrix shaped like a typical camera setup.
pub fn sample_mvp() -> Mat4 {
    let model = Mat4::from_rotation_translation_scale(
        &Quat::from_euler(20.0, -35.0, 70.0),
        &Vec3::new(1.0, -2.0, 3.0),
        &Vec3::new(2.0, 0.5, 1.5),
    );
    let view = Mat4::look_at(&Vec3::new(0.0, 4.0, 12.0), &Vec3::ZERO, &Vec3::UNIT_Y);
    let proj = Mat4::perspective(core::f64::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 500.0);
    proj * view * model
}

/// `n` random rigid transforms.
pub fn random_affines(n: usize, seed: u64) -> Vec<Mat4> {
    let mut rng = Prng::from_seed_u64(seed);
    (0..n)
        .map(|_| {
            Mat4::from_rotation_translation(&Quat::random(&mut rng), &Vec3::random(&mut rng, 10.0))
        })
        .collect()
}
