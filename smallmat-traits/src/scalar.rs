//! Scalar type bounds for the unrolled kernels and the decompositions.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex;
use num_traits::{Float, NumCast, One, Zero};

use crate::Conjugate;

/// The arithmetic every unrolled kernel needs: add, subtract, multiply,
/// divide, negate, the two identities, and a conjugate for mirrored reads.
///
/// Determinant kernels never divide, so exact rings such as `i64` satisfy
/// this bound too and get exact determinants. Inverse kernels divide by the
/// determinant, which only makes sense for a true field.
pub trait Field:
    Copy
    + Send
    + Sync
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
    + Conjugate
{
}

impl<T> Field for T where
    T: Copy
        + Send
        + Sync
        + Debug
        + PartialEq
        + Add<Output = T>
        + Mul<Output = T>
        + Sub<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + Zero
        + One
        + Conjugate
{
}

/// A floating-point field element with a magnitude.
///
/// Solver kernels need a Euclidean norm for their pre-scaling step, and the
/// decompositions need pivot magnitudes, so both require
/// `Scalar` rather than plain [`Field`]. Implemented for `f32`, `f64` and
/// `Complex<f32>`, `Complex<f64>`.
pub trait Scalar: Field + 'static {
    /// The real type magnitudes are measured in.
    type Real: Float + Field + 'static;

    /// Absolute value (complex modulus).
    fn modulus(self) -> Self::Real;

    /// Squared absolute value, without the square root.
    fn modulus_sqr(self) -> Self::Real;

    /// Embed a real value.
    fn from_real(value: Self::Real) -> Self;

    /// Real part.
    fn real(self) -> Self::Real;
}

macro_rules! impl_scalar_real {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                type Real = $t;

                #[inline(always)]
                fn modulus(self) -> $t {
                    self.abs()
                }

                #[inline(always)]
                fn modulus_sqr(self) -> $t {
                    self * self
                }

                #[inline(always)]
                fn from_real(value: $t) -> Self {
                    value
                }

                #[inline(always)]
                fn real(self) -> $t {
                    self
                }
            }
        )*
    };
}

impl_scalar_real!(f32, f64);

impl<R> Scalar for Complex<R>
where
    R: Float + Field + 'static,
{
    type Real = R;

    #[inline(always)]
    fn modulus(self) -> R {
        self.norm()
    }

    #[inline(always)]
    fn modulus_sqr(self) -> R {
        self.norm_sqr()
    }

    #[inline(always)]
    fn from_real(value: R) -> Self {
        Complex::new(value, R::zero())
    }

    #[inline(always)]
    fn real(self) -> R {
        self.re
    }
}

/// Convert a dimension into the real type, saturating at the largest
/// representable value.
pub fn real_from_usize<R: Float>(n: usize) -> R {
    <R as NumCast>::from(n).unwrap_or_else(R::max_value)
}
