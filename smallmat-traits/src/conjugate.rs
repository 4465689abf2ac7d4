//! Complex conjugation as an element-level operation.
//!
//! Self-adjoint ("symmetric") kernels read one triangle of a matrix and
//! mirror it as `a_ij = conj(a_ji)`. For real element types this is a plain
//! mirrored read, so every type the kernels accept must say what its
//! conjugate is.

use num_complex::Complex;
use num_traits::Num;

/// Trait for element types that have a conjugate.
///
/// The default implementation returns `self` unchanged, so real-valued types
/// (and custom types such as exact rationals) can simply write:
/// ```ignore
/// impl Conjugate for MyType {}
/// ```
pub trait Conjugate: Copy {
    #[inline(always)]
    fn conj(self) -> Self {
        self
    }
}

// Real types: use the default identity implementation
macro_rules! impl_conjugate_real {
    ($($t:ty),*) => {
        $(impl Conjugate for $t {})*
    };
}

impl_conjugate_real!(f32, f64, i8, i16, i32, i64, i128, isize);

// Complex types: override with actual conjugation
impl<T: Num + Copy + Clone + std::ops::Neg<Output = T>> Conjugate for Complex<T> {
    #[inline(always)]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
}
