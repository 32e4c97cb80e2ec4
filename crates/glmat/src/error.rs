// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Returned when a raw slice handed across the API boundary has the wrong
/// number of components for the requested type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} requires {expected} components, got {actual}")]
pub struct SliceLengthError {
    /// Name of the type being constructed (`"vec3"`, `"mat4"`, ...).
    pub kind: &'static str,
    /// Component count of the target type.
    pub expected: usize,
    /// Length of the slice that was supplied.
    pub actual: usize,
}

/// Copies `N` components out of `slice`, or reports the mismatch.
pub(crate) fn array_from_slice<const N: usize>(
    kind: &'static str,
    slice: &[f64],
) -> Result<[f64; N], SliceLengthError> {
    <[f64; N]>::try_from(slice).map_err(|_| SliceLengthError {
        kind,
        expected: N,
        actual: slice.len(),
    })
}
