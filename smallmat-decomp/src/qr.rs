//! Householder QR decomposition for tall and square matrices, backed by
//! faer.

use std::fmt;

use faer::linalg::solvers::{Qr as QrFactors, SolveLstsqCore};
use faer::{Conj, Mat};
use smallmat_view::{Access2D, DenseMatrix, Shape, Structure2D};

use crate::{
    check_diagonal, check_rhs, from_faer, lu_determinant, to_faer, Decomposition,
    DecompositionError, LinalgScalar, Result,
};

/// `A = Q R` for `rows >= columns`.
///
/// The input is kept alongside the factors so square matrices can report a
/// determinant with a well-defined sign.
pub struct Qr<T: LinalgScalar> {
    factors: QrFactors<T>,
    source: Mat<T>,
}

impl<T: LinalgScalar> fmt::Debug for Qr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Qr")
            .field("rows", &self.source.nrows())
            .field("columns", &self.source.ncols())
            .finish_non_exhaustive()
    }
}

impl<T: LinalgScalar> Qr<T> {
    /// The upper-triangular factor (`columns x columns`).
    pub fn r(&self) -> DenseMatrix<T> {
        let r = self.factors.thin_R();
        let n = self.source.ncols();
        DenseMatrix::from_fn(n, n, |i, j| if i <= j { r[(i, j)] } else { T::zero() })
    }

    fn shape(&self) -> Shape {
        Shape::new(self.source.nrows(), self.source.ncols())
    }
}

impl<T: LinalgScalar> Decomposition<T> for Qr<T> {
    fn compute<A: Access2D<T> + ?Sized>(matrix: &A) -> Result<Self> {
        if matrix.is_wide() {
            return Err(DecompositionError::Wide(matrix.shape()));
        }
        let source = to_faer(matrix);
        Ok(Self {
            factors: source.as_ref().qr(),
            source,
        })
    }

    /// Square input only. The sign of `det(Q)` depends on the reflector
    /// convention, so the value comes from partial-pivot LU factors of the
    /// stored input.
    fn determinant(&self) -> Result<T> {
        let shape = self.shape();
        if !shape.is_square() {
            return Err(DecompositionError::NotSquare(shape));
        }
        Ok(lu_determinant(&self.source.as_ref().partial_piv_lu()))
    }

    /// Left pseudo-inverse `R^-1 Q^H` (`columns x rows`).
    fn inverse(&self) -> Result<DenseMatrix<T>> {
        self.solve(&DenseMatrix::<T>::identity(self.source.nrows()))
    }

    /// Least-squares solution minimising `|A x - rhs|`.
    fn solve<B: Access2D<T> + ?Sized>(&self, rhs: &B) -> Result<DenseMatrix<T>> {
        let (m, n) = (self.source.nrows(), self.source.ncols());
        check_rhs(m, rhs)?;
        check_diagonal(self.factors.thin_R(), m.max(n))?;
        if n == 0 {
            return Ok(DenseMatrix::zeros(0, rhs.count_columns()));
        }
        let mut b: Mat<T> = to_faer(rhs);
        self.factors.solve_lstsq_in_place_with_conj(Conj::No, b.as_mut());
        // The solution occupies the leading `columns` rows
        Ok(from_faer(b.as_ref().subrows(0, n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    #[test]
    fn test_qr_line_fit() {
        // Fit y = a + b t to (0, 0), (1, 1), (2, 3)
        let a = DenseMatrix::from_rows(&[[1.0, 0.0], [1.0, 1.0], [1.0, 2.0]]).unwrap();
        let y = DenseMatrix::column(&[0.0, 1.0, 3.0]);
        let qr = Qr::compute(&a).unwrap();
        let x = qr.solve(&y).unwrap();
        assert_relative_eq!(x[(0, 0)], -1.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(x[(1, 0)], 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_qr_square_determinant() {
        let a = DenseMatrix::from_rows(&[[4.0, 3.0], [6.0, 3.0]]).unwrap();
        let qr = Qr::compute(&a).unwrap();
        assert_relative_eq!(qr.determinant().unwrap(), -6.0, epsilon = 1e-12);

        let a = DenseMatrix::from_rows(&[[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]])
            .unwrap();
        let qr = Qr::compute(&a).unwrap();
        // 2*(12 - 0) - 0 + 1*(1 - 0) = 25
        assert_relative_eq!(qr.determinant().unwrap(), 25.0, epsilon = 1e-10);
    }

    #[test]
    fn test_qr_left_pseudo_inverse() {
        let a = DenseMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 7.0]]).unwrap();
        let qr = Qr::compute(&a).unwrap();
        let pinv = qr.inverse().unwrap();
        assert_eq!(pinv.shape(), Shape::new(2, 3));
        let id = pinv.matmul(&a).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(id[(i, j)], if i == j { 1.0 } else { 0.0 }, epsilon = 1e-10);
            }
        }
        assert!(qr.determinant().is_err());
    }

    #[test]
    fn test_qr_r_factor() {
        let a = DenseMatrix::from_rows(&[[3.0_f64, 1.0], [4.0, 2.0]]).unwrap();
        let r = Qr::compute(&a).unwrap().r();
        assert_relative_eq!(r[(0, 0)].abs(), 5.0, epsilon = 1e-12);
        assert_eq!(r[(1, 0)], 0.0);
    }

    #[test]
    fn test_qr_rank_deficient() {
        let a = DenseMatrix::from_rows(&[[1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]).unwrap();
        let qr = Qr::compute(&a).unwrap();
        let err = qr.solve(&DenseMatrix::column(&[1.0, 1.0, 1.0])).unwrap_err();
        assert_eq!(err, DecompositionError::Singular);
    }

    #[test]
    fn test_qr_wide_rejected() {
        let a = DenseMatrix::<f64>::zeros(2, 3);
        assert!(matches!(Qr::compute(&a), Err(DecompositionError::Wide(_))));
    }

    #[test]
    fn test_qr_complex_solve() {
        let i = Complex64::new(0.0, 1.0);
        let one = Complex64::new(1.0, 0.0);
        let a = DenseMatrix::from_rows(&[[one, i], [i, one + one]]).unwrap();
        let x_true = [Complex64::new(1.0, -1.0), Complex64::new(0.5, 2.0)];
        let b = a.matmul(&DenseMatrix::column(&x_true)).unwrap();
        let x = Qr::compute(&a).unwrap().solve(&b).unwrap();
        for k in 0..2 {
            assert_relative_eq!((x[(k, 0)] - x_true[k]).norm(), 0.0, epsilon = 1e-12);
        }
    }
}
