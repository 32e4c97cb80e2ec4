// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Bulk application of a per-vector function across a flat `f64` buffer.
//!
//! Vertex data usually lives in one interleaved array (position, normal,
//! uv, ...). [`for_each`] walks such an array with a caller-chosen stride
//! and offset, hands each vector to a closure by value and writes the
//! returned vector back in place:
//!
//! ```
//! use glmat::{strided, Mat4, Vec3};
//!
//! // [px, py, pz, u, v] per vertex
//! let mut verts = [1.0, 0.0, 0.0, 0.5, 0.5, 0.0, 1.0, 0.0, 0.25, 0.75];
//! let m = Mat4::from_translation(&Vec3::new(0.0, 0.0, 5.0));
//! let n = strided::for_each::<Vec3, _>(&mut verts, 5, 0, None, |p| p.transform_mat4(&m));
//! assert_eq!(n, 2);
//! assert_eq!(verts, [1.0, 0.0, 5.0, 0.5, 0.5, 0.0, 1.0, 5.0, 0.25, 0.75]);
//! ```

use crate::{Vec2, Vec3, Vec4};

/// Vector types that can be read from and written to a packed `f64` run.
pub trait Packed: Copy {
    /// Number of `f64` components one element occupies.
    const DIM: usize;

    /// Reads one element from the first [`Self::DIM`] entries of `src`.
    fn read(src: &[f64]) -> Self;

    /// Writes the element into the first [`Self::DIM`] entries of `dst`.
    fn write(&self, dst: &mut [f64]);
}

macro_rules! impl_packed {
    ($ty:ident, $dim:literal) => {
        impl Packed for $ty {
            const DIM: usize = $dim;

            fn read(src: &[f64]) -> Self {
                let mut data = [0.0; $dim];
                data.copy_from_slice(&src[..$dim]);
                Self::from(data)
            }

            fn write(&self, dst: &mut [f64]) {
                dst[..$dim].copy_from_slice(self.as_array());
            }
        }
    };
}

impl_packed!(Vec2, 2);
impl_packed!(Vec3, 3);
impl_packed!(Vec4, 4);

/// Applies `f` to each `V` stored in `buffer` and writes the result back.
///
/// * `stride` is the distance in `f64`s between the starts of consecutive
///   elements; `0` means tightly packed (`V::DIM`).
/// * `offset` is the index of the first element's first component.
/// * `count` limits the number of elements visited; `None` walks to the end
///   of the buffer.
///
/// An element whose components would run past the end of `buffer` is
/// skipped. Returns the number of elements visited.
pub fn for_each<V, F>(
    buffer: &mut [f64],
    stride: usize,
    offset: usize,
    count: Option<usize>,
    mut f: F,
) -> usize
where
    V: Packed,
    F: FnMut(V) -> V,
{
    let stride = if stride == 0 { V::DIM } else { stride };
    let end = count.map_or(buffer.len(), |n| {
        n.saturating_mul(stride)
            .saturating_add(offset)
            .min(buffer.len())
    });

    let mut visited = 0;
    let mut i = offset;
    while i < end && i + V::DIM <= buffer.len() {
        let slot = &mut buffer[i..i + V::DIM];
        f(V::read(slot)).write(slot);
        visited += 1;
        match i.checked_add(stride) {
            Some(next) => i = next,
            None => break,
        }
    }
    visited
}
