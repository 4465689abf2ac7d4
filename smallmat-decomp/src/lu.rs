//! LU decomposition with partial pivoting, backed by faer.

use std::cmp::Ordering;
use std::fmt;

use faer::linalg::solvers::{PartialPivLu, SolveCore};
use faer::{Conj, Mat};
use smallmat_view::{Access2D, DenseMatrix};

use crate::{
    check_diagonal, check_rhs, from_faer, lu_determinant, to_faer, Decomposition,
    DecompositionError, LinalgScalar, Result,
};

/// `P A = L U` with unit lower-triangular `L`.
pub struct Lu<T: LinalgScalar> {
    factors: PartialPivLu<T>,
    n: usize,
}

impl<T: LinalgScalar> fmt::Debug for Lu<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lu").field("n", &self.n).finish_non_exhaustive()
    }
}

impl<T: LinalgScalar> Lu<T> {
    /// The upper-triangular factor.
    pub fn u(&self) -> DenseMatrix<T> {
        let u = self.factors.U();
        DenseMatrix::from_fn(self.n, self.n, |r, c| if r <= c { u[(r, c)] } else { T::zero() })
    }

    /// The unit lower-triangular factor.
    pub fn l(&self) -> DenseMatrix<T> {
        let l = self.factors.L();
        DenseMatrix::from_fn(self.n, self.n, |r, c| match r.cmp(&c) {
            Ordering::Greater => l[(r, c)],
            Ordering::Equal => T::one(),
            Ordering::Less => T::zero(),
        })
    }
}

impl<T: LinalgScalar> Decomposition<T> for Lu<T> {
    fn compute<A: Access2D<T> + ?Sized>(matrix: &A) -> Result<Self> {
        if !matrix.is_square() {
            return Err(DecompositionError::NotSquare(matrix.shape()));
        }
        let a = to_faer(matrix);
        Ok(Self {
            factors: a.as_ref().partial_piv_lu(),
            n: a.nrows(),
        })
    }

    fn determinant(&self) -> Result<T> {
        Ok(lu_determinant(&self.factors))
    }

    fn inverse(&self) -> Result<DenseMatrix<T>> {
        self.solve(&DenseMatrix::<T>::identity(self.n))
    }

    fn solve<B: Access2D<T> + ?Sized>(&self, rhs: &B) -> Result<DenseMatrix<T>> {
        check_rhs(self.n, rhs)?;
        check_diagonal(self.factors.U(), self.n)?;
        if self.n == 0 {
            return Ok(DenseMatrix::zeros(0, rhs.count_columns()));
        }
        let mut x: Mat<T> = to_faer(rhs);
        self.factors.solve_in_place_with_conj(Conj::No, x.as_mut());
        Ok(from_faer(x.as_ref()))
    }
}
