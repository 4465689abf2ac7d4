//! Matrix decompositions used when no closed-form kernel applies.
//!
//! Each type is a thin adapter over one of faer's dense factorizations.
//! The input is copied into a faer [`Mat`](faer::Mat) once in
//! [`Decomposition::compute`]; every later
//! [`determinant`](Decomposition::determinant),
//! [`inverse`](Decomposition::inverse) and [`solve`](Decomposition::solve)
//! query runs against the stored factors.
//!
//! | Type | faer factorization | Input | `solve` result |
//! |---|---|---|---|
//! | [`Lu`] | partial-pivot LU | square | exact solution |
//! | [`Cholesky`] | LLT (lower) | Hermitian positive definite | exact solution |
//! | [`Qr`] | Householder QR | rows >= columns | least-squares solution |
//! | [`SingularValue`] | thin SVD | any shape | minimum-norm least-squares solution |
//!
//! # Example
//!
//! ```rust
//! use smallmat_decomp::{Decomposition, Lu};
//! use smallmat_view::DenseMatrix;
//!
//! let a = DenseMatrix::from_rows(&[[4.0_f64, 3.0], [6.0, 3.0]]).unwrap();
//! let lu = Lu::compute(&a).unwrap();
//! let det: f64 = lu.determinant().unwrap();
//! assert!((det + 6.0).abs() < 1e-12);
//! ```

pub mod cholesky;
pub mod lu;
pub mod qr;
pub mod svd;

pub use cholesky::Cholesky;
pub use lu::Lu;
pub use qr::Qr;
pub use svd::SingularValue;

use faer::{Mat, MatRef};
use num_traits::{Float, Zero};
use smallmat_traits::{real_from_usize, Scalar};
use smallmat_view::{Access2D, DenseMatrix, Shape};

/// Element types the decompositions accept: a [`Scalar`] that faer can
/// also factor.
///
/// Both traits name an associated `Real` type; generic code spells out
/// `<T as Scalar>::Real`.
pub trait LinalgScalar: Scalar + faer_traits::ComplexField {}

impl<T> LinalgScalar for T where T: Scalar + faer_traits::ComplexField {}

/// Shared contract of the fallback decompositions.
pub trait Decomposition<T: LinalgScalar>: Sized {
    /// Factor `matrix`.
    fn compute<A: Access2D<T> + ?Sized>(matrix: &A) -> Result<Self>;

    /// Determinant of the factored matrix. Fails for non-square input.
    fn determinant(&self) -> Result<T>;

    /// Inverse (or pseudo-inverse) of the factored matrix.
    fn inverse(&self) -> Result<DenseMatrix<T>>;

    /// Solve `A x = rhs` column by column.
    fn solve<B: Access2D<T> + ?Sized>(&self, rhs: &B) -> Result<DenseMatrix<T>>;
}

// ============================================================================
// Error types
// ============================================================================

/// Errors reported by the decompositions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecompositionError {
    /// The decomposition requires a square matrix.
    #[error("non-square matrix: {0}")]
    NotSquare(Shape),

    /// QR requires at least as many rows as columns.
    #[error("more columns than rows: {0}")]
    Wide(Shape),

    /// A pivot or diagonal entry vanished relative to the matrix scale.
    #[error("matrix is singular or rank deficient")]
    Singular,

    /// A Cholesky diagonal update was not strictly positive.
    #[error("matrix is not positive definite (failed at column {column})")]
    NotPositiveDefinite { column: usize },

    /// The singular value iteration did not converge.
    #[error("singular value decomposition did not converge")]
    NoConvergence,

    /// Right-hand side rows do not match the factored matrix.
    #[error("right-hand side has {found} rows, expected {expected}")]
    ShapeMismatch { expected: usize, found: usize },
}

/// Result type for decomposition operations.
pub type Result<T> = std::result::Result<T, DecompositionError>;

// ============================================================================
// Helpers
// ============================================================================

/// Copy any matrix into an owned faer matrix.
pub(crate) fn to_faer<T: LinalgScalar, A: Access2D<T> + ?Sized>(matrix: &A) -> Mat<T> {
    Mat::from_fn(matrix.count_rows(), matrix.count_columns(), |r, c| {
        matrix.get(r, c)
    })
}

/// Copy a faer matrix back into column-major storage.
pub(crate) fn from_faer<T: LinalgScalar>(matrix: MatRef<'_, T>) -> DenseMatrix<T> {
    DenseMatrix::from_fn(matrix.nrows(), matrix.ncols(), |r, c| matrix[(r, c)])
}

/// Determinant from partial-pivot LU factors: the product of the `U`
/// diagonal, negated for an odd row permutation.
pub(crate) fn lu_determinant<T: LinalgScalar>(lu: &faer::linalg::solvers::PartialPivLu<T>) -> T {
    let u = lu.U();
    let det = (0..u.nrows()).fold(T::one(), |acc, i| acc * u[(i, i)]);
    if permutation_is_odd(lu.P().arrays().0) {
        -det
    } else {
        det
    }
}

/// Parity of a permutation: `n - cycles` transpositions.
fn permutation_is_odd(forward: &[usize]) -> bool {
    let mut seen = vec![false; forward.len()];
    let mut cycles = 0;
    for start in 0..forward.len() {
        if seen[start] {
            continue;
        }
        cycles += 1;
        let mut i = start;
        while !seen[i] {
            seen[i] = true;
            i = forward[i];
        }
    }
    (forward.len() - cycles) % 2 == 1
}

/// Largest modulus on the diagonal of a factor.
fn largest_diagonal<T: LinalgScalar>(factor: MatRef<'_, T>) -> <T as Scalar>::Real {
    let k = factor.nrows().min(factor.ncols());
    (0..k)
        .map(|i| factor[(i, i)].modulus())
        .fold(<T as Scalar>::Real::zero(), |a, b| if b > a { b } else { a })
}

/// `Singular` when any diagonal entry of a triangular factor vanishes
/// relative to the largest one.
pub(crate) fn check_diagonal<T: LinalgScalar>(factor: MatRef<'_, T>, dim: usize) -> Result<()> {
    let tol = tolerance(dim, largest_diagonal(factor));
    let k = factor.nrows().min(factor.ncols());
    for i in 0..k {
        let d = factor[(i, i)].modulus();
        if d == <T as Scalar>::Real::zero() || d <= tol {
            return Err(DecompositionError::Singular);
        }
    }
    Ok(())
}

/// Threshold below which a pivot or singular value counts as zero.
pub(crate) fn tolerance<R: Float>(dim: usize, largest: R) -> R {
    real_from_usize::<R>(dim) * R::epsilon() * largest
}

pub(crate) fn check_rhs<T, B: Access2D<T> + ?Sized>(expected: usize, rhs: &B) -> Result<()> {
    if rhs.count_rows() != expected {
        return Err(DecompositionError::ShapeMismatch {
            expected,
            found: rhs.count_rows(),
        });
    }
    Ok(())
}
