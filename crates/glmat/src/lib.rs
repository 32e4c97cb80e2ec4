// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! glmat: column-major vector, matrix, quaternion and dual-quaternion kernels
//! for 2D/3D graphics transforms.
//!
//! Every type is a `Copy` wrapper around a fixed-size `[f64; N]` in the
//! layout graphics APIs expect, so values can be handed to uniform and vertex
//! buffers directly (see the `bytemuck` feature). Operations take `&self`
//! and return a new value; nothing is mutated behind the caller's back.
//!
//! ```
//! use glmat::{Mat4, Quat, Vec3};
//! use core::f64::consts::FRAC_PI_2;
//!
//! let model = Mat4::from_rotation_translation(
//!     &Quat::from_axis_angle(&Vec3::UNIT_Y, FRAC_PI_2),
//!     &Vec3::new(0.0, 0.0, -5.0),
//! );
//! let p = model.transform_point(&Vec3::UNIT_X);
//! assert!(p.equals(&Vec3::new(0.0, 0.0, -6.0)));
//! ```
//!
//! Degenerate inputs never panic. Inversions and axis rotations that have
//! no answer return `None`; other degenerate cases (zero-length normalize,
//! coincident look-at eye and center) return a documented fallback value.
#![cfg_attr(not(feature = "bytemuck"), forbid(unsafe_code))]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::float_cmp,
    clippy::module_name_repetitions,
    clippy::use_self
)]
// `bytemuck`'s Pod/Zeroable derives expand to `unsafe impl`.
#![cfg_attr(feature = "bytemuck", allow(unsafe_code))]

#[macro_use]
mod macros;

mod error;
mod euler;
mod prng;

pub mod scalar;
pub mod strided;

mod mat2;
mod mat2d;
mod mat3;
mod mat4;
mod quat;
mod quat2;
mod vec2;
mod vec3;
mod vec4;

pub use error::SliceLengthError;
pub use euler::{EulerOrder, ParseEulerOrderError};
pub use mat2::Mat2;
pub use mat2d::Mat2d;
pub use mat3::Mat3;
pub use mat4::{FieldOfView, Mat4};
pub use prng::Prng;
pub use quat::Quat;
pub use quat2::Quat2;
pub use scalar::EPSILON;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
