//! Owned column-major matrix storage.

use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};
use smallmat_traits::{Conjugate, Field};

use crate::view::{MatrixView, MatrixViewMut};
use crate::{Access2D, Mutate2D, Result, Structure2D, ViewError};

/// Owned matrix stored column-major in a single `Vec`.
///
/// The storage order equals the linear index convention of
/// [`Structure2D`], so `at(i)` is a plain slice read.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T: Clone + Zero> DenseMatrix<T> {
    /// Zero-filled matrix.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * columns],
            rows,
            columns,
        }
    }

    /// Zero-filled matrix with the dimensions of `shape`.
    pub fn zeros_like<S: Structure2D + ?Sized>(shape: &S) -> Self {
        Self::zeros(shape.count_rows(), shape.count_columns())
    }
}

impl<T: Clone + Zero + One> DenseMatrix<T> {
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i + i * n] = T::one();
        }
        m
    }
}

impl<T> DenseMatrix<T> {
    /// Build a matrix from a function of `(row, column)`.
    ///
    /// The function is called in column-major order.
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * columns);
        for c in 0..columns {
            for r in 0..rows {
                data.push(f(r, c));
            }
        }
        Self {
            data,
            rows,
            columns,
        }
    }

    /// Wrap column-major data, checking its length.
    pub fn from_col_major(rows: usize, columns: usize, data: Vec<T>) -> Result<Self> {
        let expected = rows * columns;
        if data.len() != expected {
            return Err(ViewError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            rows,
            columns,
        })
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over elements in column-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Borrow as an immutable strided view.
    pub fn view(&self) -> MatrixView<'_, T> {
        MatrixView::from_parts(&self.data, self.rows, self.columns, 1, self.rows as isize, 0)
    }

    /// Borrow as a mutable strided view.
    pub fn view_mut(&mut self) -> MatrixViewMut<'_, T> {
        let (rows, columns) = (self.rows, self.columns);
        MatrixViewMut::from_parts(&mut self.data, rows, columns, 1, rows as isize, 0)
    }
}

impl<T: Clone> DenseMatrix<T> {
    /// Build a matrix from nested rows, e.g. `&[[4.0, 7.0], [2.0, 6.0]]`.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        for (row, r) in rows.iter().enumerate() {
            let actual = r.as_ref().len();
            if actual != ncols {
                return Err(ViewError::RaggedRows {
                    row,
                    expected: ncols,
                    actual,
                });
            }
        }
        Ok(Self::from_fn(nrows, ncols, |r, c| rows[r].as_ref()[c].clone()))
    }

    /// A single-column matrix.
    pub fn column(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
            rows: values.len(),
            columns: 1,
        }
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.columns, self.rows, |r, c| {
            self.data[c + r * self.rows].clone()
        })
    }
}

impl<T: Conjugate> DenseMatrix<T> {
    /// Conjugate transpose (adjoint).
    pub fn conjugate_transpose(&self) -> Self {
        Self::from_fn(self.columns, self.rows, |r, c| {
            self.data[c + r * self.rows].conj()
        })
    }
}

impl<T: Field> DenseMatrix<T> {
    /// Matrix product `self * rhs`.
    pub fn matmul<B: Access2D<T> + ?Sized>(&self, rhs: &B) -> Result<Self> {
        if self.columns != rhs.count_rows() {
            return Err(ViewError::ShapeMismatch(self.shape(), rhs.shape()));
        }
        let inner = self.columns;
        Ok(Self::from_fn(self.rows, rhs.count_columns(), |r, c| {
            let mut acc = T::zero();
            for k in 0..inner {
                acc = acc + self.data[r + k * self.rows] * rhs.get(k, c);
            }
            acc
        }))
    }
}

impl<T> Structure2D for DenseMatrix<T> {
    #[inline]
    fn count_rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn count_columns(&self) -> usize {
        self.columns
    }
}

impl<T: Copy> Access2D<T> for DenseMatrix<T> {
    #[inline]
    fn get(&self, row: usize, column: usize) -> T {
        self[(row, column)]
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        self.data[index]
    }
}

impl<T> Mutate2D<T> for DenseMatrix<T> {
    #[inline]
    fn set(&mut self, row: usize, column: usize, value: T) {
        self[(row, column)] = value;
    }

    #[inline]
    fn set_at(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        assert!(
            row < self.rows && column < self.columns,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            column,
            self.rows,
            self.columns
        );
        &self.data[row + column * self.rows]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && column < self.columns,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            column,
            self.rows,
            self.columns
        );
        &mut self.data[row + column * self.rows]
    }
}
