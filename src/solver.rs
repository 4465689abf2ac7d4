//! Solve kernels: scaled Cramer's rule for orders 1 to 5, plus a
//! least-squares kernel for tall bodies with at most five columns.
//!
//! Every right-hand-side column is solved independently. Before any
//! cofactor arithmetic the body and that column are divided by the
//! column's Euclidean norm; the factor cancels between the Cramer
//! numerators and the determinant, so no unscaling step follows. The norm
//! itself is accumulated relative to the largest magnitude and cannot
//! overflow. A zero right-hand side is left unscaled.
//!
//! Like the inverter, a singular body yields infinite or NaN entries, and
//! the destination must already be `body.columns x rhs.columns`.

use num_traits::{Float, Zero};
use smallmat_traits::Scalar;
use smallmat_view::{Access2D, Mutate2D};

use crate::block::{load_block, load_column, load_lower_block};
use crate::minors::{
    cofactors2, cofactors3, cofactors4, cofactors5, symmetric_cofactors2, symmetric_cofactors3,
    symmetric_cofactors4, symmetric_cofactors5,
};

/// Euclidean norm with max-magnitude pre-scaling.
pub fn euclidean_norm<T: Scalar>(values: &[T]) -> T::Real {
    let largest = values
        .iter()
        .map(|v| v.modulus())
        .fold(T::Real::zero(), |a, b| if b > a { b } else { a });
    if largest == T::Real::zero() || !largest.is_finite() {
        return largest;
    }
    let sum = values.iter().fold(T::Real::zero(), |acc, v| {
        let r = v.modulus() / largest;
        acc + r * r
    });
    sum.sqrt() * largest
}

/// Cramer's rule on one scaled column: `x_k = sum_i b_i C_ik / det`.
#[inline(always)]
fn cramer<T: Scalar, const N: usize>(
    body: &[[T; N]; N],
    rhs: &[T; N],
    cofactors: fn(&[[T; N]; N]) -> [[T; N]; N],
) -> [T; N] {
    let mut m = *body;
    let mut b = *rhs;
    let norm = euclidean_norm(&b);
    if norm > T::Real::zero() && norm.is_finite() {
        let scale = T::from_real(norm);
        for column in m.iter_mut() {
            for v in column.iter_mut() {
                *v = *v / scale;
            }
        }
        for v in b.iter_mut() {
            *v = *v / scale;
        }
    }

    let cof = cofactors(&m);
    let mut det = T::zero();
    for i in 0..N {
        det = det + m[0][i] * cof[0][i];
    }
    let mut x = [T::zero(); N];
    for (k, xk) in x.iter_mut().enumerate() {
        let mut acc = T::zero();
        for i in 0..N {
            acc = acc + b[i] * cof[k][i];
        }
        *xk = acc / det;
    }
    x
}

/// `destination[j] = rhs[j] / body` for every right-hand-side column.
#[inline]
pub fn full1<T, B, R, D>(body: &B, rhs: &R, destination: &mut D)
where
    T: Scalar,
    B: Access2D<T> + ?Sized,
    R: Access2D<T> + ?Sized,
    D: Mutate2D<T> + ?Sized,
{
    let a = body.at(0);
    for j in 0..rhs.count_columns() {
        destination.set_at(j, rhs.at(j) / a);
    }
}

macro_rules! solver {
    ($(#[$meta:meta])* $name:ident, $n:literal, $load:ident, $cofactors:ident) => {
        $(#[$meta])*
        #[inline]
        pub fn $name<T, B, R, D>(body: &B, rhs: &R, destination: &mut D)
        where
            T: Scalar,
            B: Access2D<T> + ?Sized,
            R: Access2D<T> + ?Sized,
            D: Mutate2D<T> + ?Sized,
        {
            let m: [[T; $n]; $n] = $load(body);
            for j in 0..rhs.count_columns() {
                let b: [T; $n] = load_column(rhs, j);
                let x = cramer(&m, &b, $cofactors::<T>);
                for (k, &xk) in x.iter().enumerate() {
                    destination.set_at(k + j * $n, xk);
                }
            }
        }
    };
}

solver!(full2, 2, load_block, cofactors2);
solver!(full3, 3, load_block, cofactors3);
solver!(full4, 4, load_block, cofactors4);
solver!(full5, 5, load_block, cofactors5);
solver!(symmetric2, 2, load_lower_block, symmetric_cofactors2);
solver!(symmetric3, 3, load_lower_block, symmetric_cofactors3);
solver!(symmetric4, 4, load_lower_block, symmetric_cofactors4);
solver!(symmetric5, 5, load_lower_block, symmetric_cofactors5);

// ============================================================================
// Least squares
// ============================================================================

/// Lower triangle of `A^H A` for a body with `N` columns.
#[inline(always)]
fn gram<T, B, const N: usize>(body: &B) -> [[T; N]; N]
where
    T: Scalar,
    B: Access2D<T> + ?Sized,
{
    let rows = body.count_rows();
    let mut g = [[T::zero(); N]; N];
    for c in 0..N {
        for r in c..N {
            let mut acc = T::zero();
            for k in 0..rows {
                acc = acc + body.at(k + r * rows).conj() * body.at(k + c * rows);
            }
            g[c][r] = acc;
        }
    }
    g
}

/// `A^H b` for right-hand-side column `j`.
#[inline(always)]
fn project<T, B, R, const N: usize>(body: &B, rhs: &R, j: usize) -> [T; N]
where
    T: Scalar,
    B: Access2D<T> + ?Sized,
    R: Access2D<T> + ?Sized,
{
    let rows = body.count_rows();
    let mut p = [T::zero(); N];
    for (r, pr) in p.iter_mut().enumerate() {
        let mut acc = T::zero();
        for k in 0..rows {
            acc = acc + body.at(k + r * rows).conj() * rhs.at(k + j * rows);
        }
        *pr = acc;
    }
    p
}

/// Least-squares fit of a single unknown: `x = (a^H b) / (a^H a)`.
#[inline]
pub fn least_squares1<T, B, R, D>(body: &B, rhs: &R, destination: &mut D)
where
    T: Scalar,
    B: Access2D<T> + ?Sized,
    R: Access2D<T> + ?Sized,
    D: Mutate2D<T> + ?Sized,
{
    let g: [[T; 1]; 1] = gram(body);
    for j in 0..rhs.count_columns() {
        let p: [T; 1] = project(body, rhs, j);
        destination.set_at(j, p[0] / g[0][0]);
    }
}

macro_rules! least_squares {
    ($name:ident, $n:literal, $cofactors:ident) => {
        /// Solves the normal equations `(A^H A) x = A^H b` with the
        /// symmetric kernel of the same order.
        #[inline]
        pub fn $name<T, B, R, D>(body: &B, rhs: &R, destination: &mut D)
        where
            T: Scalar,
            B: Access2D<T> + ?Sized,
            R: Access2D<T> + ?Sized,
            D: Mutate2D<T> + ?Sized,
        {
            let g: [[T; $n]; $n] = gram(body);
            for j in 0..rhs.count_columns() {
                let p: [T; $n] = project(body, rhs, j);
                let x = cramer(&g, &p, $cofactors::<T>);
                for (k, &xk) in x.iter().enumerate() {
                    destination.set_at(k + j * $n, xk);
                }
            }
        }
    };
}

least_squares!(least_squares2, 2, symmetric_cofactors2);
least_squares!(least_squares3, 3, symmetric_cofactors3);
least_squares!(least_squares4, 4, symmetric_cofactors4);
least_squares!(least_squares5, 5, symmetric_cofactors5);
