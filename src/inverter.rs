//! Inverse kernels for orders 1 to 5.
//!
//! Each kernel builds the full cofactor matrix, takes the determinant from
//! the first-column cofactors, and writes `C_ji / det` to entry `(i, j)` of
//! the destination in row-major iteration order. A zero determinant is not
//! detected: every entry becomes infinite or NaN.
//!
//! The destination must already be `n x n`; this is not checked.

use smallmat_traits::Field;
use smallmat_view::{Access2D, Mutate2D};

use crate::block::{load_block, load_lower_block};
use crate::minors::{
    cofactors2, cofactors3, cofactors4, cofactors5, symmetric_cofactors2, symmetric_cofactors3,
    symmetric_cofactors4, symmetric_cofactors5,
};

/// `destination = 1 / source`.
#[inline]
pub fn full1<T, S, D>(source: &S, destination: &mut D)
where
    T: Field,
    S: Access2D<T> + ?Sized,
    D: Mutate2D<T> + ?Sized,
{
    destination.set_at(0, T::one() / source.at(0));
}

#[inline(always)]
fn write_adjugate<T, D, const N: usize>(m: &[[T; N]; N], cof: &[[T; N]; N], destination: &mut D)
where
    T: Field,
    D: Mutate2D<T> + ?Sized,
{
    let mut det = T::zero();
    for i in 0..N {
        det = det + m[0][i] * cof[0][i];
    }
    for i in 0..N {
        for j in 0..N {
            destination.set_at(i + j * N, cof[i][j] / det);
        }
    }
}

macro_rules! inverter {
    ($(#[$meta:meta])* $name:ident, $n:literal, $load:ident, $cofactors:ident) => {
        $(#[$meta])*
        #[inline]
        pub fn $name<T, S, D>(source: &S, destination: &mut D)
        where
            T: Field,
            S: Access2D<T> + ?Sized,
            D: Mutate2D<T> + ?Sized,
        {
            let m: [[T; $n]; $n] = $load(source);
            write_adjugate(&m, &$cofactors(&m), destination);
        }
    };
}

inverter!(full2, 2, load_block, cofactors2);
inverter!(full3, 3, load_block, cofactors3);
inverter!(full4, 4, load_block, cofactors4);
inverter!(full5, 5, load_block, cofactors5);

inverter!(
    /// Reads only the lower triangle of `source`.
    symmetric2, 2, load_lower_block, symmetric_cofactors2
);
inverter!(symmetric3, 3, load_lower_block, symmetric_cofactors3);
inverter!(symmetric4, 4, load_lower_block, symmetric_cofactors4);
inverter!(symmetric5, 5, load_lower_block, symmetric_cofactors5);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use smallmat_view::DenseMatrix;

    #[test]
    fn test_full2_known_inverse() {
        let a = DenseMatrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
        let mut inv = DenseMatrix::zeros(2, 2);
        full2(&a, &mut inv);
        assert_relative_eq!(inv[(0, 0)], 0.6, epsilon = 1e-12);
        assert_relative_eq!(inv[(0, 1)], -0.7, epsilon = 1e-12);
        assert_relative_eq!(inv[(1, 0)], -0.2, epsilon = 1e-12);
        assert_relative_eq!(inv[(1, 1)], 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_full1_reciprocal() {
        let a = DenseMatrix::from_rows(&[[4.0]]).unwrap();
        let mut inv = DenseMatrix::zeros(1, 1);
        full1(&a, &mut inv);
        assert_eq!(inv[(0, 0)], 0.25);
    }

    #[test]
    fn test_singular_gives_non_finite() {
        let a = DenseMatrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        let mut inv = DenseMatrix::<f64>::zeros(2, 2);
        full2(&a, &mut inv);
        assert!(inv.iter().all(|x: &f64| !x.is_finite()));
    }

    #[test]
    fn test_symmetric4_matches_full4() {
        let a = DenseMatrix::from_rows(&[
            [5.0, 1.0, 0.5, 2.0],
            [1.0, 4.0, -1.0, 0.0],
            [0.5, -1.0, 6.0, 1.5],
            [2.0, 0.0, 1.5, 3.0],
        ])
        .unwrap();
        let mut full = DenseMatrix::zeros(4, 4);
        let mut sym = DenseMatrix::zeros(4, 4);
        full4(&a, &mut full);
        symmetric4(&a, &mut sym);
        for (x, y) in full.iter().zip(sym.iter()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-12);
        }
        let id = a.matmul(&sym).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert_relative_eq!(id[(i, j)], if i == j { 1.0 } else { 0.0 }, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_hermitian_inverse() {
        let c = Complex64::new;
        let a = DenseMatrix::from_rows(&[
            [c(3.0, 0.0), c(1.0, -2.0)],
            [c(1.0, 2.0), c(4.0, 0.0)],
        ])
        .unwrap();
        let mut inv = DenseMatrix::zeros(2, 2);
        symmetric2(&a, &mut inv);
        let id = a.matmul(&inv).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { c(1.0, 0.0) } else { c(0.0, 0.0) };
                assert!((id[(i, j)] - expected).norm() < 1e-12);
            }
        }
    }
}
