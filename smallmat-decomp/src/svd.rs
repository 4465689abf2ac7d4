//! Thin singular value decomposition, backed by faer.
//!
//! The pseudo-inverse and the minimum-norm solve are assembled from the
//! stored factors, dropping singular values below the rank tolerance.

use std::cmp::Ordering;

use num_traits::{One, Zero};
use smallmat_traits::Scalar;
use smallmat_view::{Access2D, DenseMatrix, Shape, Structure2D};

use crate::{
    check_rhs, lu_determinant, to_faer, tolerance, Decomposition, DecompositionError,
    LinalgScalar, Result,
};

/// `A = U diag(s) V^H` (thin form: `k = min(rows, columns)` singular values).
#[derive(Debug, Clone)]
pub struct SingularValue<T: LinalgScalar> {
    /// `rows x k`.
    u: DenseMatrix<T>,
    /// Descending.
    s: Vec<<T as Scalar>::Real>,
    /// `columns x k`.
    v: DenseMatrix<T>,
}

impl<T: LinalgScalar> SingularValue<T> {
    /// Singular values in descending order.
    pub fn singular_values(&self) -> &[<T as Scalar>::Real] {
        &self.s
    }

    /// Left singular vectors (`rows x k`).
    pub fn u(&self) -> DenseMatrix<T> {
        self.u.clone()
    }

    /// Right singular vectors (`columns x k`).
    pub fn v(&self) -> DenseMatrix<T> {
        self.v.clone()
    }

    fn rows(&self) -> usize {
        self.u.count_rows()
    }

    fn columns(&self) -> usize {
        self.v.count_rows()
    }

    fn cutoff(&self) -> <T as Scalar>::Real {
        let largest = self.s.first().copied().unwrap_or_else(<T as Scalar>::Real::zero);
        tolerance(self.rows().max(self.columns()), largest)
    }

    /// Number of singular values above the rank tolerance.
    pub fn rank(&self) -> usize {
        let tol = self.cutoff();
        self.s
            .iter()
            .filter(|&&s| s > tol && s > <T as Scalar>::Real::zero())
            .count()
    }
}

impl<T: LinalgScalar> Decomposition<T> for SingularValue<T> {
    fn compute<A: Access2D<T> + ?Sized>(matrix: &A) -> Result<Self> {
        let (m, n) = (matrix.count_rows(), matrix.count_columns());
        let k = m.min(n);
        if k == 0 {
            return Ok(Self {
                u: DenseMatrix::zeros(m, 0),
                s: Vec::new(),
                v: DenseMatrix::zeros(n, 0),
            });
        }
        let a = to_faer(matrix);
        let svd = a
            .as_ref()
            .thin_svd()
            .map_err(|_| DecompositionError::NoConvergence)?;

        let sigma = svd.S().column_vector();
        let values: Vec<<T as Scalar>::Real> = (0..k).map(|j| sigma[j].real()).collect();
        let mut order: Vec<usize> = (0..k).collect();
        order.sort_by(|&p, &q| values[q].partial_cmp(&values[p]).unwrap_or(Ordering::Equal));

        let (left, right) = (svd.U(), svd.V());
        Ok(Self {
            u: DenseMatrix::from_fn(m, k, |r, c| left[(r, order[c])]),
            s: order.iter().map(|&j| values[j]).collect(),
            v: DenseMatrix::from_fn(n, k, |r, c| right[(r, order[c])]),
        })
    }

    /// Square input only: `det(U) * prod(s) * conj(det(V))`.
    fn determinant(&self) -> Result<T> {
        if self.rows() != self.columns() {
            return Err(DecompositionError::NotSquare(Shape::new(
                self.rows(),
                self.columns(),
            )));
        }
        if self.s.iter().any(|&s| s == <T as Scalar>::Real::zero()) {
            return Ok(T::zero());
        }
        let det_u = lu_determinant(&to_faer(&self.u).as_ref().partial_piv_lu());
        let det_v = lu_determinant(&to_faer(&self.v).as_ref().partial_piv_lu());
        let prod = self
            .s
            .iter()
            .fold(<T as Scalar>::Real::one(), |acc, &s| acc * s);
        Ok(det_u * T::from_real(prod) * det_v.conj())
    }

    /// Moore-Penrose pseudo-inverse (`columns x rows`).
    fn inverse(&self) -> Result<DenseMatrix<T>> {
        self.solve(&DenseMatrix::<T>::identity(self.rows()))
    }

    /// Minimum-norm least-squares solution `V S^+ U^H rhs`.
    fn solve<B: Access2D<T> + ?Sized>(&self, rhs: &B) -> Result<DenseMatrix<T>> {
        check_rhs(self.rows(), rhs)?;
        let (m, n) = (self.rows(), self.columns());
        let tol = self.cutoff();
        let mut x = DenseMatrix::zeros(n, rhs.count_columns());

        for col in 0..rhs.count_columns() {
            for (j, &sigma) in self.s.iter().enumerate() {
                if sigma <= tol || sigma == <T as Scalar>::Real::zero() {
                    continue;
                }
                // (u_j^H b) / s_j
                let mut coef = T::zero();
                for r in 0..m {
                    coef = coef + self.u[(r, j)].conj() * rhs.get(r, col);
                }
                coef = coef / T::from_real(sigma);
                for r in 0..n {
                    x[(r, col)] = x[(r, col)] + self.v[(r, j)] * coef;
                }
            }
        }
        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::Lu;
    use num_complex::Complex64;

    #[test]
    fn test_svd_diagonal() {
        let a = DenseMatrix::from_rows(&[[3.0, 0.0], [0.0, -5.0]]).unwrap();
        let svd = SingularValue::compute(&a).unwrap();
        assert_relative_eq!(svd.singular_values()[0], 5.0, epsilon = 1e-12);
        assert_relative_eq!(svd.singular_values()[1], 3.0, epsilon = 1e-12);
        assert_relative_eq!(svd.determinant().unwrap(), -15.0, epsilon = 1e-10);
    }

    #[test]
    fn test_svd_determinant_general() {
        let a = DenseMatrix::from_rows(&[[4.0, 3.0], [6.0, 3.0]]).unwrap();
        let svd = SingularValue::compute(&a).unwrap();
        assert_relative_eq!(svd.determinant().unwrap(), -6.0, epsilon = 1e-10);
    }

    #[test]
    fn test_svd_reconstructs() {
        let a = DenseMatrix::from_rows(&[[1.0, 2.0, 0.5], [3.0, -1.0, 2.0], [0.0, 4.0, 1.0], [2.0, 2.0, 2.0]])
            .unwrap();
        let svd = SingularValue::compute(&a).unwrap();
        let (u, v, s) = (svd.u(), svd.v(), svd.singular_values());
        for r in 0..4 {
            for c in 0..3 {
                let mut acc = 0.0;
                for j in 0..3 {
                    acc += u[(r, j)] * s[j] * v[(c, j)];
                }
                assert_relative_eq!(acc, a[(r, c)], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_svd_wide_minimum_norm() {
        // x + y = 2 has minimum-norm solution (1, 1)
        let a = DenseMatrix::from_rows(&[[1.0, 1.0]]).unwrap();
        let svd = SingularValue::compute(&a).unwrap();
        let x = svd.solve(&DenseMatrix::column(&[2.0])).unwrap();
        assert_relative_eq!(x[(0, 0)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[(1, 0)], 1.0, epsilon = 1e-12);
        assert!(svd.determinant().is_err());
    }

    #[test]
    fn test_svd_pseudo_inverse_identity() {
        let a = DenseMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 7.0]]).unwrap();
        let svd = SingularValue::compute(&a).unwrap();
        let pinv = svd.inverse().unwrap();
        assert_eq!(pinv.shape(), Shape::new(3, 2));
        // A A+ = I for full row rank
        let id = a.matmul(&pinv).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(id[(i, j)], if i == j { 1.0 } else { 0.0 }, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_svd_rank_deficient() {
        let a = DenseMatrix::from_rows(&[[3.0_f64, 0.0], [4.0, 0.0]]).unwrap();
        let svd = SingularValue::compute(&a).unwrap();
        assert_eq!(svd.rank(), 1);
        assert_relative_eq!(svd.singular_values()[0], 5.0, epsilon = 1e-12);
        assert!(svd.singular_values()[1].abs() < 1e-12);
        assert!(svd.determinant().unwrap().abs() < 1e-12);

        // Minimum-norm solution ignores the null direction
        let x = svd.solve(&DenseMatrix::column(&[3.0, 4.0])).unwrap();
        assert_relative_eq!(x[(0, 0)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[(1, 0)], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_svd_empty() {
        let svd = SingularValue::compute(&DenseMatrix::<f64>::zeros(0, 3)).unwrap();
        assert_eq!(svd.rank(), 0);
        let pinv = svd.inverse().unwrap();
        assert_eq!(pinv.shape(), Shape::new(3, 0));
    }

    #[test]
    fn test_svd_complex() {
        let a = DenseMatrix::from_rows(&[
            [Complex64::new(1.0, 1.0), Complex64::new(0.0, 2.0)],
            [Complex64::new(3.0, 0.0), Complex64::new(1.0, -1.0)],
        ])
        .unwrap();
        let svd = SingularValue::compute(&a).unwrap();
        let expected = Lu::compute(&a).unwrap().determinant().unwrap();
        let det = svd.determinant().unwrap();
        assert_relative_eq!((det - expected).norm(), 0.0, epsilon = 1e-10);
    }
}
