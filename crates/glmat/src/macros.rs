// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

// Shared trait impls for the fixed-size array wrappers. Every type stores its
// components in a private `data: [f64; N]` field.

/// Raw array interop, indexing, slice conversion and the `name(a, b, ..)`
/// display form.
macro_rules! impl_storage {
    ($ty:ident, $len:literal, $name:literal) => {
        impl $ty {
            /// Returns the components in storage order.
            pub fn to_array(self) -> [f64; $len] {
                self.data
            }

            /// Borrows the components in storage order.
            pub fn as_array(&self) -> &[f64; $len] {
                &self.data
            }

            /// Returns `true` when every component matches bit-for-bit under `==`.
            pub fn exact_equals(&self, other: &Self) -> bool {
                self.data == other.data
            }

            /// Returns `true` when every component matches within
            /// [`crate::scalar::EPSILON`] (see [`crate::scalar::approx_eq`]).
            pub fn equals(&self, other: &Self) -> bool {
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .all(|(a, b)| crate::scalar::approx_eq(*a, *b))
            }
        }

        impl From<[f64; $len]> for $ty {
            fn from(value: [f64; $len]) -> Self {
                Self { data: value }
            }
        }

        impl From<$ty> for [f64; $len] {
            fn from(value: $ty) -> Self {
                value.data
            }
        }

        impl TryFrom<&[f64]> for $ty {
            type Error = crate::SliceLengthError;

            fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
                crate::error::array_from_slice::<$len>($name, value).map(Self::from)
            }
        }

        impl AsRef<[f64]> for $ty {
            fn as_ref(&self) -> &[f64] {
                &self.data
            }
        }

        impl AsMut<[f64]> for $ty {
            fn as_mut(&mut self) -> &mut [f64] {
                &mut self.data
            }
        }

        impl core::ops::Index<usize> for $ty {
            type Output = f64;

            fn index(&self, index: usize) -> &f64 {
                &self.data[index]
            }
        }

        impl core::ops::IndexMut<usize> for $ty {
            fn index_mut(&mut self, index: usize) -> &mut f64 {
                &mut self.data[index]
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(concat!($name, "("))?;
                for (i, value) in self.data.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str(")")
            }
        }
    };
}

/// `Mul`/`MulAssign` sugar for types whose product is `multiply`.
macro_rules! impl_mul_ops {
    ($ty:ident) => {
        impl core::ops::Mul for $ty {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                self.multiply(&rhs)
            }
        }

        impl core::ops::Mul<&$ty> for $ty {
            type Output = Self;

            fn mul(self, rhs: &$ty) -> Self::Output {
                self.multiply(rhs)
            }
        }

        impl core::ops::MulAssign for $ty {
            fn mul_assign(&mut self, rhs: Self) {
                *self = self.multiply(&rhs);
            }
        }

        impl core::ops::MulAssign<&$ty> for $ty {
            fn mul_assign(&mut self, rhs: &$ty) {
                *self = self.multiply(rhs);
            }
        }
    };
}

/// Componentwise `add`, `sub`, `multiply_scalar` and
/// `multiply_scalar_and_add` for the matrix types.
macro_rules! impl_matrix_linear {
    ($ty:ident) => {
        impl $ty {
            fn zip(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
                let mut out = self.data;
                for (a, b) in out.iter_mut().zip(other.data) {
                    *a = f(*a, b);
                }
                Self::from(out)
            }

            /// Componentwise sum.
            pub fn add(&self, other: &Self) -> Self {
                self.zip(other, |a, b| a + b)
            }

            /// Componentwise difference.
            pub fn sub(&self, other: &Self) -> Self {
                self.zip(other, |a, b| a - b)
            }

            /// Multiplies every component by `s`.
            pub fn multiply_scalar(&self, s: f64) -> Self {
                Self::from(self.data.map(|a| a * s))
            }

            /// Returns `self + other * scale`, componentwise.
            pub fn multiply_scalar_and_add(&self, other: &Self, scale: f64) -> Self {
                self.zip(other, |a, b| a + b * scale)
            }
        }
    };
}
