//! Borrowed 2-D strided views.
//!
//! - [`MatrixView`]: immutable view with arbitrary row and column strides
//! - [`MatrixViewMut`]: mutable view over an exclusively borrowed slice
//!
//! Both validate their strides and offset against the backing slice once,
//! at construction, so element access needs no further offset checks.

use crate::{Access2D, Mutate2D, Result, Structure2D, ViewError};

// ============================================================================
// Validation helpers
// ============================================================================

/// Validate that every element position stays within `[0, len)`.
fn validate_bounds(
    len: usize,
    dims: [usize; 2],
    strides: [isize; 2],
    offset: isize,
) -> Result<()> {
    // Empty matrix - no access needed
    if dims.iter().any(|&d| d == 0) {
        return Ok(());
    }
    let mut min_offset = offset;
    let mut max_offset = offset;
    for (&dim, &stride) in dims.iter().zip(strides.iter()) {
        if dim > 1 {
            let end = stride
                .checked_mul(dim as isize - 1)
                .ok_or(ViewError::OffsetOverflow)?;
            if end >= 0 {
                max_offset = max_offset
                    .checked_add(end)
                    .ok_or(ViewError::OffsetOverflow)?;
            } else {
                min_offset = min_offset
                    .checked_add(end)
                    .ok_or(ViewError::OffsetOverflow)?;
            }
        }
    }
    if min_offset < 0 || max_offset < 0 {
        return Err(ViewError::OffsetOverflow);
    }
    if max_offset as usize >= len {
        return Err(ViewError::OffsetOverflow);
    }
    Ok(())
}

/// Position of `(row, column)` in the backing slice.
#[inline(always)]
fn position(row: usize, column: usize, strides: [isize; 2], offset: isize) -> usize {
    (offset + row as isize * strides[0] + column as isize * strides[1]) as usize
}

// ============================================================================
// MatrixView
// ============================================================================

/// Immutable strided view over a borrowed slice.
///
/// Element `(r, c)` lives at `offset + r * row_stride + c * column_stride`.
/// Zero strides are allowed and repeat a row or column.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    dims: [usize; 2],
    strides: [isize; 2],
    offset: isize,
}

impl<'a, T> MatrixView<'a, T> {
    /// Create a view with explicit strides and offset.
    pub fn new(
        data: &'a [T],
        rows: usize,
        columns: usize,
        row_stride: isize,
        column_stride: isize,
        offset: isize,
    ) -> Result<Self> {
        let dims = [rows, columns];
        let strides = [row_stride, column_stride];
        validate_bounds(data.len(), dims, strides, offset)?;
        Ok(Self {
            data,
            dims,
            strides,
            offset,
        })
    }

    /// View over contiguous column-major data.
    pub fn col_major(data: &'a [T], rows: usize, columns: usize) -> Result<Self> {
        Self::new(data, rows, columns, 1, rows as isize, 0)
    }

    /// View over contiguous row-major data.
    pub fn row_major(data: &'a [T], rows: usize, columns: usize) -> Result<Self> {
        Self::new(data, rows, columns, columns as isize, 1, 0)
    }

    /// Construct from a layout known to be in bounds.
    pub(crate) fn from_parts(
        data: &'a [T],
        rows: usize,
        columns: usize,
        row_stride: isize,
        column_stride: isize,
        offset: isize,
    ) -> Self {
        Self {
            data,
            dims: [rows, columns],
            strides: [row_stride, column_stride],
            offset,
        }
    }

    #[inline]
    pub fn strides(&self) -> [isize; 2] {
        self.strides
    }

    #[inline]
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Transpose (zero-copy): swaps dimensions and strides.
    pub fn t(&self) -> MatrixView<'a, T> {
        MatrixView {
            data: self.data,
            dims: [self.dims[1], self.dims[0]],
            strides: [self.strides[1], self.strides[0]],
            offset: self.offset,
        }
    }
}

impl<'a, T: Copy> MatrixView<'a, T> {
    /// Get element `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> T {
        assert!(
            row < self.dims[0] && column < self.dims[1],
            "index ({}, {}) out of bounds for {}x{} view",
            row,
            column,
            self.dims[0],
            self.dims[1]
        );
        self.data[position(row, column, self.strides, self.offset)]
    }
}

impl<T> Structure2D for MatrixView<'_, T> {
    #[inline]
    fn count_rows(&self) -> usize {
        self.dims[0]
    }

    #[inline]
    fn count_columns(&self) -> usize {
        self.dims[1]
    }
}

impl<T: Copy> Access2D<T> for MatrixView<'_, T> {
    #[inline]
    fn get(&self, row: usize, column: usize) -> T {
        MatrixView::get(self, row, column)
    }
}

// ============================================================================
// MatrixViewMut
// ============================================================================

/// Mutable strided view over an exclusively borrowed slice.
///
/// Zero strides are rejected along axes longer than one, so every
/// `(row, column)` names a distinct element.
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    data: &'a mut [T],
    dims: [usize; 2],
    strides: [isize; 2],
    offset: isize,
}

impl<'a, T> MatrixViewMut<'a, T> {
    /// Create a mutable view with explicit strides and offset.
    pub fn new(
        data: &'a mut [T],
        rows: usize,
        columns: usize,
        row_stride: isize,
        column_stride: isize,
        offset: isize,
    ) -> Result<Self> {
        let dims = [rows, columns];
        let strides = [row_stride, column_stride];
        for axis in 0..2 {
            if strides[axis] == 0 && dims[axis] > 1 {
                return Err(ViewError::ZeroStride { axis });
            }
        }
        validate_bounds(data.len(), dims, strides, offset)?;
        Ok(Self {
            data,
            dims,
            strides,
            offset,
        })
    }

    /// Mutable view over contiguous column-major data.
    pub fn col_major(data: &'a mut [T], rows: usize, columns: usize) -> Result<Self> {
        Self::new(data, rows, columns, 1, rows as isize, 0)
    }

    /// Mutable view over contiguous row-major data.
    pub fn row_major(data: &'a mut [T], rows: usize, columns: usize) -> Result<Self> {
        Self::new(data, rows, columns, columns as isize, 1, 0)
    }

    pub(crate) fn from_parts(
        data: &'a mut [T],
        rows: usize,
        columns: usize,
        row_stride: isize,
        column_stride: isize,
        offset: isize,
    ) -> Self {
        Self {
            data,
            dims: [rows, columns],
            strides: [row_stride, column_stride],
            offset,
        }
    }

    #[inline]
    pub fn strides(&self) -> [isize; 2] {
        self.strides
    }

    /// Transpose (zero-copy), consuming the borrow.
    pub fn t(self) -> MatrixViewMut<'a, T> {
        MatrixViewMut {
            data: self.data,
            dims: [self.dims[1], self.dims[0]],
            strides: [self.strides[1], self.strides[0]],
            offset: self.offset,
        }
    }

    /// Reborrow as an immutable view.
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView {
            data: &*self.data,
            dims: self.dims,
            strides: self.strides,
            offset: self.offset,
        }
    }

    #[inline]
    fn checked_position(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.dims[0] && column < self.dims[1],
            "index ({}, {}) out of bounds for {}x{} view",
            row,
            column,
            self.dims[0],
            self.dims[1]
        );
        position(row, column, self.strides, self.offset)
    }
}

impl<'a, T: Copy> MatrixViewMut<'a, T> {
    /// Get element `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> T {
        self.data[self.checked_position(row, column)]
    }

    /// Set element `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: T) {
        let p = self.checked_position(row, column);
        self.data[p] = value;
    }
}

impl<T> Structure2D for MatrixViewMut<'_, T> {
    #[inline]
    fn count_rows(&self) -> usize {
        self.dims[0]
    }

    #[inline]
    fn count_columns(&self) -> usize {
        self.dims[1]
    }
}

impl<T: Copy> Access2D<T> for MatrixViewMut<'_, T> {
    #[inline]
    fn get(&self, row: usize, column: usize) -> T {
        MatrixViewMut::get(self, row, column)
    }
}

impl<T: Copy> Mutate2D<T> for MatrixViewMut<'_, T> {
    #[inline]
    fn set(&mut self, row: usize, column: usize, value: T) {
        MatrixViewMut::set(self, row, column, value)
    }
}

// ============================================================================
// Tests
// ============================================================================
