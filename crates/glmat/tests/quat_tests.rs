// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f64::consts::{FRAC_PI_2, PI};

use glmat::{scalar, EulerOrder, Mat4, Prng, Quat, Quat2, Vec3, Vec4};

fn same_rotation(a: &Quat, b: &Quat) -> bool {
    a.equals(b) || a.equals(&b.negate())
}

fn rigid() -> Quat2 {
    Quat2::from_rotation_translation(
        &Quat::from_euler(15.0, -40.0, 75.0),
        &Vec3::new(1.0, -2.0, 0.5),
    )
}

#[test]
fn axis_angle_round_trip() {
    let axis = Vec3::new(0.0, -1.0, 0.0);
    let q = Quat::from_axis_angle(&axis, 1.2);
    let (back_axis, angle) = q.get_axis_angle();
    assert!(back_axis.equals(&axis), "{back_axis}");
    assert!(scalar::approx_eq(angle, 1.2));
}

#[test]
fn get_angle_measures_rotation_between() {
    let a = Quat::IDENTITY;
    let b = Quat::from_axis_angle(&Vec3::UNIT_X, 0.5);
    assert!(scalar::approx_eq(a.get_angle(&b), 0.5));
    assert!(scalar::approx_eq(b.get_angle(&b), 0.0));
}

#[test]
fn single_axis_rotations_match_axis_angle() {
    let base = Quat::from_euler(10.0, 20.0, 30.0);
    for (axis, rotated) in [
        (Vec3::UNIT_X, base.rotate_x(0.7)),
        (Vec3::UNIT_Y, base.rotate_y(0.7)),
        (Vec3::UNIT_Z, base.rotate_z(0.7)),
    ] {
        let expected = base.multiply(&Quat::from_axis_angle(&axis, 0.7));
        assert!(rotated.equals(&expected), "{axis}: {rotated} vs {expected}");
    }
}

#[test]
fn multiply_applies_right_operand_first() {
    let yaw = Quat::from_axis_angle(&Vec3::UNIT_Y, FRAC_PI_2);
    let pitch = Quat::from_axis_angle(&Vec3::UNIT_X, FRAC_PI_2);
    let v = Vec3::UNIT_Z;
    let combined = v.transform_quat(&yaw.multiply(&pitch));
    let stepwise = v.transform_quat(&pitch).transform_quat(&yaw);
    assert!(combined.equals(&stepwise));
    assert_eq!(yaw * pitch, yaw.multiply(&pitch));
}

#[test]
fn exp_ln_and_pow() {
    let q = Quat::from_axis_angle(&Vec3::new(1.0, 2.0, 2.0).normalize(), 0.8);
    assert!(q.ln().exp().equals(&q));
    let doubled = Quat::from_axis_angle(&Vec3::new(1.0, 2.0, 2.0).normalize(), 1.6);
    assert!(q.pow(2.0).equals(&doubled), "{}", q.pow(2.0));
    assert!(Quat::IDENTITY.ln().equals(&Quat::new(0.0, 0.0, 0.0, 0.0)));
}

#[test]
fn sqlerp_hits_endpoints() {
    let a = Quat::IDENTITY;
    let b = Quat::from_axis_angle(&Vec3::UNIT_X, 0.4);
    let c = Quat::from_axis_angle(&Vec3::UNIT_Y, 0.9);
    let d = Quat::from_axis_angle(&Vec3::UNIT_Z, 1.3);
    assert!(same_rotation(&a.sqlerp(&b, &c, &d, 0.0), &a));
    assert!(same_rotation(&a.sqlerp(&b, &c, &d, 1.0), &d));
}

#[test]
fn slerp_takes_the_short_way() {
    let a = Quat::IDENTITY;
    let b = Quat::from_axis_angle(&Vec3::UNIT_Z, 0.5).negate();
    let mid = a.slerp(&b, 0.5);
    assert!(same_rotation(&mid, &Quat::from_axis_angle(&Vec3::UNIT_Z, 0.25)), "{mid}");
}

#[test]
fn slerp_of_nearly_equal_inputs_is_finite() {
    let a = Quat::from_axis_angle(&Vec3::UNIT_Y, 1.0);
    let b = Quat::from_axis_angle(&Vec3::UNIT_Y, 1.0 + 1e-9);
    let mid = a.slerp(&b, 0.5);
    assert!(mid.to_array().iter().all(|c| c.is_finite()));
    assert!(mid.equals(&a));
}

#[test]
fn invert_and_conjugate() {
    let q = Quat::new(1.0, 2.0, 3.0, 4.0);
    assert!(q.multiply(&q.invert()).equals(&Quat::IDENTITY));
    assert_eq!(q.conjugate(), Quat::new(-1.0, -2.0, -3.0, 4.0));

    let unit = q.normalize();
    assert!(unit.invert().equals(&unit.conjugate()));
}

#[test]
fn random_quaternions_are_unit_length() {
    let mut rng = Prng::from_seed_u64(99);
    for _ in 0..32 {
        let q = Quat::random(&mut rng);
        assert!(scalar::approx_eq(q.length(), 1.0), "{q}");
    }
}

#[test]
fn euler_angles_compose_in_named_order() {
    let (x, y, z) = (-30.0, 45.0, 60.0);
    let qx = Quat::from_axis_angle(&Vec3::UNIT_X, scalar::deg_to_rad(x));
    let qy = Quat::from_axis_angle(&Vec3::UNIT_Y, scalar::deg_to_rad(y));
    let qz = Quat::from_axis_angle(&Vec3::UNIT_Z, scalar::deg_to_rad(z));
    let axis_quat = |c: char| match c {
        'x' => qx,
        'y' => qy,
        _ => qz,
    };

    for order in EulerOrder::ALL {
        let mut chars = order.as_str().chars().map(axis_quat);
        let (first, second, third) = (
            chars.next().expect("three axes"),
            chars.next().expect("three axes"),
            chars.next().expect("three axes"),
        );
        let expected = first.multiply(&second).multiply(&third);
        let actual = Quat::from_euler_with_order(x, y, z, order);
        assert!(actual.equals(&expected), "{order}: {actual} vs {expected}");
    }
    assert_eq!(Quat::from_euler(x, y, z), Quat::from_euler_with_order(x, y, z, EulerOrder::Xyz));
}

#[test]
fn rotation_to_maps_source_onto_target() {
    let q = Quat::rotation_to(&Vec3::UNIT_X, &Vec3::UNIT_Y);
    assert!(Vec3::UNIT_X.transform_quat(&q).equals(&Vec3::UNIT_Y));
    assert_eq!(Quat::rotation_to(&Vec3::UNIT_Z, &Vec3::UNIT_Z), Quat::IDENTITY);
}

#[test]
fn set_axes_builds_the_matching_frame() {
    assert!(Quat::set_axes(&Vec3::new(0.0, 0.0, -1.0), &Vec3::UNIT_X, &Vec3::UNIT_Y)
        .equals(&Quat::IDENTITY));

    let view = Vec3::new(-1.0, 0.0, 0.0);
    let right = Vec3::new(0.0, 0.0, -1.0);
    let up = Vec3::UNIT_Y;
    let q = Quat::set_axes(&view, &right, &up);
    assert!(right.transform_quat(&q).equals(&Vec3::UNIT_X));
    assert!(up.transform_quat(&q).equals(&Vec3::UNIT_Y));
    assert!(view.transform_quat(&q).equals(&Vec3::new(0.0, 0.0, -1.0)));
}

#[test]
fn calculate_w_and_vec4_conversions() {
    let q = Quat::from_axis_angle(&Vec3::UNIT_X, 2.0);
    let stripped = Quat::new(q[0], q[1], q[2], 0.0);
    assert!(stripped.calculate_w().equals(&q));

    let v = Vec4::from(q);
    assert_eq!(v.to_array(), q.to_array());
    assert_eq!(Quat::from(v), q);
}

#[test]
fn componentwise_ops() {
    let a = Quat::new(1.0, 2.0, 3.0, 4.0);
    let b = Quat::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(a.add(&b), Quat::new(6.0, 8.0, 10.0, 12.0));
    assert_eq!(a.scale(2.0), Quat::new(2.0, 4.0, 6.0, 8.0));
    assert_eq!(a.dot(&b), 70.0);
    assert_eq!(a.lerp(&b, 0.5), Quat::new(3.0, 4.0, 5.0, 6.0));
    assert_eq!(a.squared_length(), 30.0);
    assert!(scalar::approx_eq(a.normalize().length(), 1.0));
    assert_eq!(Quat::default(), Quat::identity());
}

#[test]
fn to_mat4_rotates_like_the_quaternion() {
    let q = Quat::from_euler(30.0, 60.0, -20.0);
    let p = Vec3::new(1.0, 2.0, 3.0);
    assert!(q.to_mat4().transform_point(&p).equals(&p.transform_quat(&q)));
    assert_eq!(q.to_mat4(), Mat4::from_quat(&q));
}

#[test]
fn quat2_translation_parts() {
    let t = Vec3::new(3.0, -1.0, 2.0);
    let dq = Quat2::from_translation(&t);
    assert_eq!(dq.real(), Quat::IDENTITY);
    assert!(dq.get_translation().equals(&t));
    assert_eq!(Quat2::default(), Quat2::IDENTITY);
    assert_eq!(Quat2::from_rotation(&Quat::IDENTITY), Quat2::identity());
}

#[test]
fn quat2_translate_is_local() {
    let q = Quat::from_axis_angle(&Vec3::UNIT_Z, FRAC_PI_2);
    let dq = Quat2::from_rotation_translation(&q, &Vec3::new(1.0, 2.0, 3.0));
    let moved = dq.translate(&Vec3::UNIT_X);
    assert!(moved.get_translation().equals(&Vec3::new(1.0, 3.0, 3.0)));
    assert_eq!(moved.real(), dq.real());
}

#[test]
fn quat2_rotations_match_matrix_post_multiplication() {
    let dq = rigid();
    let m = Mat4::from_quat2(&dq);
    assert!(Mat4::from_quat2(&dq.rotate_x(0.6)).equals(&m.rotate_x(0.6)));
    assert!(Mat4::from_quat2(&dq.rotate_y(0.6)).equals(&m.rotate_y(0.6)));
    assert!(Mat4::from_quat2(&dq.rotate_z(0.6)).equals(&m.rotate_z(0.6)));

    let axis = Vec3::new(1.0, -1.0, 2.0);
    let around = Mat4::from_quat2(&dq.rotate_around_axis(&axis, 0.6));
    let expected = m.rotate(0.6, &axis).expect("non-zero axis");
    assert!(around.equals(&expected));
}

#[test]
fn quat2_rotate_by_quat_append_and_prepend() {
    let dq = rigid();
    let q = Quat::from_axis_angle(&Vec3::UNIT_Y, 1.1);
    let m = Mat4::from_quat2(&dq);
    let r = Mat4::from_quat(&q);
    assert!(Mat4::from_quat2(&dq.rotate_by_quat_append(&q)).equals(&m.multiply(&r)));
    assert!(Mat4::from_quat2(&dq.rotate_by_quat_prepend(&q)).equals(&r.multiply(&m)));
}

#[test]
fn quat2_zero_axis_rotation_is_a_no_op() {
    let dq = rigid();
    assert_eq!(dq.rotate_around_axis(&Vec3::ZERO, 1.0), dq);
}

#[test]
fn quat2_multiply_composes_transforms() {
    let a = rigid();
    let b = Quat2::from_rotation_translation(
        &Quat::from_axis_angle(&Vec3::UNIT_X, -0.3),
        &Vec3::new(0.0, 4.0, -1.0),
    );
    let composed = Mat4::from_quat2(&a.multiply(&b));
    assert!(composed.equals(&Mat4::from_quat2(&a).multiply(&Mat4::from_quat2(&b))));
    assert_eq!(a * b, a.multiply(&b));
}

#[test]
fn quat2_from_mat4_round_trips() {
    let q = Quat::from_euler(5.0, 10.0, 15.0);
    let t = Vec3::new(-4.0, 2.0, 7.0);
    let dq = Quat2::from_mat4(&Mat4::from_rotation_translation(&q, &t));
    assert!(same_rotation(&dq.real(), &q));
    assert!(dq.get_translation().equals(&t));
}

#[test]
fn quat2_invert() {
    let dq = rigid();
    assert!(dq.multiply(&dq.invert()).equals(&Quat2::IDENTITY));
    assert!(dq.invert().equals(&dq.conjugate()));

    let raw = Quat2::new(1.0, 2.0, 3.0, 4.0, 2.0, 5.0, 6.0, -2.0);
    let expected = Quat2::new(-1.0, -2.0, -3.0, 4.0, -2.0, -5.0, -6.0, -2.0).scale(1.0 / 30.0);
    assert!(raw.invert().equals(&expected), "{}", raw.invert());
}

#[test]
fn quat2_lerp_of_translations() {
    let a = Quat2::from_translation(&Vec3::new(0.0, 0.0, 0.0));
    let b = Quat2::from_translation(&Vec3::new(2.0, 4.0, -6.0));
    let mid = a.lerp(&b, 0.5);
    assert!(mid.get_translation().equals(&Vec3::new(1.0, 2.0, -3.0)));
    assert_eq!(mid.real(), Quat::IDENTITY);
}

#[test]
fn quat2_lerp_flips_opposite_hemisphere() {
    let a = Quat2::from_rotation(&Quat::from_axis_angle(&Vec3::UNIT_Y, 0.2));
    let b = Quat2::from_rotation(&Quat::from_axis_angle(&Vec3::UNIT_Y, 0.2).negate());
    let mid = a.lerp(&b, 0.5).normalize();
    assert!(mid.equals(&a), "{mid}");
}

#[test]
fn quat2_componentwise_ops() {
    let a = Quat2::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
    let b = Quat2::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0);
    assert_eq!(a.add(&b), Quat2::new(2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0));
    assert_eq!(a.scale(2.0), Quat2::new(2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0));
    assert_eq!(a.dot(&b), 10.0);
    assert_eq!(a.squared_length(), 30.0);
    assert!(scalar::approx_eq(a.length(), 30.0_f64.sqrt()));
}

#[test]
fn quat2_half_turn_keeps_translation() {
    let dq = Quat2::from_translation(&Vec3::new(1.0, 0.0, 0.0)).rotate_z(PI);
    assert!(dq.get_translation().equals(&Vec3::new(1.0, 0.0, 0.0)));
    let p = Mat4::from_quat2(&dq).transform_point(&Vec3::UNIT_X);
    assert!(p.equals(&Vec3::ZERO), "{p}");
}
