use std::fmt;

/// Dimension queries shared by shape templates, owned matrices and views.
///
/// Linear indices are column-major: index `i` addresses row `i % rows`,
/// column `i / rows`. The unrolled kernels hard-code this mapping.
pub trait Structure2D {
    fn count_rows(&self) -> usize;

    fn count_columns(&self) -> usize;

    /// Total number of elements.
    #[inline]
    fn count(&self) -> usize {
        self.count_rows() * self.count_columns()
    }

    #[inline]
    fn is_square(&self) -> bool {
        self.count_rows() == self.count_columns()
    }

    /// More rows than columns.
    #[inline]
    fn is_tall(&self) -> bool {
        self.count_rows() > self.count_columns()
    }

    /// Fewer rows than columns.
    #[inline]
    fn is_wide(&self) -> bool {
        self.count_rows() < self.count_columns()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.count_rows() == 0 || self.count_columns() == 0
    }

    #[inline]
    fn linear_index(&self, row: usize, column: usize) -> usize {
        row + column * self.count_rows()
    }

    #[inline]
    fn row_of(&self, index: usize) -> usize {
        match self.count_rows() {
            0 => 0,
            rows => index % rows,
        }
    }

    #[inline]
    fn column_of(&self, index: usize) -> usize {
        match self.count_rows() {
            0 => 0,
            rows => index / rows,
        }
    }

    /// Dimension-only template of this structure.
    #[inline]
    fn shape(&self) -> Shape {
        Shape::new(self.count_rows(), self.count_columns())
    }
}

impl<S: Structure2D + ?Sized> Structure2D for &S {
    #[inline]
    fn count_rows(&self) -> usize {
        (**self).count_rows()
    }

    #[inline]
    fn count_columns(&self) -> usize {
        (**self).count_columns()
    }
}

impl<S: Structure2D + ?Sized> Structure2D for &mut S {
    #[inline]
    fn count_rows(&self) -> usize {
        (**self).count_rows()
    }

    #[inline]
    fn count_columns(&self) -> usize {
        (**self).count_columns()
    }
}

/// Immutable (rows, columns) pair carrying no element data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    rows: usize,
    columns: usize,
}

impl Shape {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub const fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// A single column of `n` rows.
    pub const fn column(n: usize) -> Self {
        Self::new(n, 1)
    }

    /// The shape with rows and columns swapped.
    pub const fn transposed(self) -> Self {
        Self::new(self.columns, self.rows)
    }
}

impl Structure2D for Shape {
    #[inline]
    fn count_rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn count_columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn shape(&self) -> Shape {
        *self
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, columns): (usize, usize)) -> Self {
        Self::new(rows, columns)
    }
}
