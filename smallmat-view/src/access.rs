use crate::Structure2D;

/// Read access by (row, column) and by column-major linear index.
///
/// Implementors must keep both forms consistent. The unrolled kernels use
/// [`at`](Access2D::at) exclusively.
pub trait Access2D<T>: Structure2D {
    fn get(&self, row: usize, column: usize) -> T;

    #[inline]
    fn at(&self, index: usize) -> T {
        self.get(self.row_of(index), self.column_of(index))
    }
}

/// Write access with the same indexing contract as [`Access2D`].
pub trait Mutate2D<T>: Structure2D {
    fn set(&mut self, row: usize, column: usize, value: T);

    #[inline]
    fn set_at(&mut self, index: usize, value: T) {
        let (row, column) = (self.row_of(index), self.column_of(index));
        self.set(row, column, value);
    }
}

impl<T, A: Access2D<T> + ?Sized> Access2D<T> for &A {
    #[inline]
    fn get(&self, row: usize, column: usize) -> T {
        (**self).get(row, column)
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        (**self).at(index)
    }
}

impl<T, A: Access2D<T> + ?Sized> Access2D<T> for &mut A {
    #[inline]
    fn get(&self, row: usize, column: usize) -> T {
        (**self).get(row, column)
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        (**self).at(index)
    }
}

impl<T, M: Mutate2D<T> + ?Sized> Mutate2D<T> for &mut M {
    #[inline]
    fn set(&mut self, row: usize, column: usize, value: T) {
        (**self).set(row, column, value)
    }

    #[inline]
    fn set_at(&mut self, index: usize, value: T) {
        (**self).set_at(index, value)
    }
}
