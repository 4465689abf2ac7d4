//! Cholesky decomposition of Hermitian positive-definite matrices, backed
//! by faer's LLT.

use std::fmt;

use faer::linalg::cholesky::llt::factor::LltError;
use faer::linalg::solvers::{Llt, SolveCore};
use faer::{Conj, Mat, Side};
use num_traits::One;
use smallmat_traits::Scalar;
use smallmat_view::{Access2D, DenseMatrix};

use crate::{check_rhs, from_faer, to_faer, Decomposition, DecompositionError, LinalgScalar, Result};

/// `A = L L^H` with lower-triangular `L` and positive real diagonal.
///
/// Only the lower triangle of the input is read.
pub struct Cholesky<T: LinalgScalar> {
    factors: Llt<T>,
    n: usize,
}

impl<T: LinalgScalar> fmt::Debug for Cholesky<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cholesky").field("n", &self.n).finish_non_exhaustive()
    }
}

impl<T: LinalgScalar> Cholesky<T> {
    /// The lower-triangular factor.
    pub fn l(&self) -> DenseMatrix<T> {
        let l = self.factors.L();
        DenseMatrix::from_fn(self.n, self.n, |r, c| if r >= c { l[(r, c)] } else { T::zero() })
    }
}

impl<T: LinalgScalar> Decomposition<T> for Cholesky<T> {
    fn compute<A: Access2D<T> + ?Sized>(matrix: &A) -> Result<Self> {
        if !matrix.is_square() {
            return Err(DecompositionError::NotSquare(matrix.shape()));
        }
        let a = to_faer(matrix);
        let factors = a.as_ref().llt(Side::Lower).map_err(|err| match err {
            LltError::NonPositivePivot { index } => {
                DecompositionError::NotPositiveDefinite { column: index }
            }
        })?;
        Ok(Self {
            factors,
            n: a.nrows(),
        })
    }

    /// `prod |l_ii|^2`, always real.
    fn determinant(&self) -> Result<T> {
        let l = self.factors.L();
        let det = (0..self.n).fold(<T as Scalar>::Real::one(), |acc, i| {
            acc * l[(i, i)].modulus_sqr()
        });
        Ok(T::from_real(det))
    }

    fn inverse(&self) -> Result<DenseMatrix<T>> {
        self.solve(&DenseMatrix::<T>::identity(self.n))
    }

    fn solve<B: Access2D<T> + ?Sized>(&self, rhs: &B) -> Result<DenseMatrix<T>> {
        check_rhs(self.n, rhs)?;
        if self.n == 0 {
            return Ok(DenseMatrix::zeros(0, rhs.count_columns()));
        }
        let mut x: Mat<T> = to_faer(rhs);
        self.factors.solve_in_place_with_conj(Conj::No, x.as_mut());
        Ok(from_faer(x.as_ref()))
    }
}
