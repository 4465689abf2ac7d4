//! Matrix shapes, element access and storage for the smallmat workspace.
//!
//! The kernels in `smallmat` never own their inputs. They read through the
//! [`Access2D`] trait and write through [`Mutate2D`], both of which share the
//! column-major linear index convention of [`Structure2D`]:
//!
//! ```text
//! index = row + column * rows
//! ```
//!
//! # Core Types
//!
//! - [`Shape`]: dimension-only template used for dispatch decisions
//! - [`DenseMatrix`]: owned column-major matrix
//! - [`MatrixView`] / [`MatrixViewMut`]: zero-copy strided views over borrowed slices
//!
//! # Example
//!
//! ```rust
//! use smallmat_view::{Access2D, MatrixView, Structure2D};
//!
//! // Row-major caller data viewed as a 2x3 matrix
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let view = MatrixView::row_major(&data, 2, 3).unwrap();
//! assert_eq!(view.get(1, 2), 6.0);
//!
//! // Linear indices are column-major regardless of the underlying layout
//! assert_eq!(view.at(1), 4.0);
//!
//! // Transpose (zero-copy)
//! let t = view.t();
//! assert_eq!(t.count_rows(), 3);
//! assert_eq!(t.get(2, 1), 6.0);
//! ```

mod access;
mod dense;
mod structure;
pub mod view;

pub use access::{Access2D, Mutate2D};
pub use dense::DenseMatrix;
pub use structure::{Shape, Structure2D};
pub use view::{MatrixView, MatrixViewMut};

// ============================================================================
// Error types
// ============================================================================

/// Errors raised by the checked constructors and shape-checked operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// Two matrices have incompatible shapes for the operation.
    #[error("shape mismatch: {0} vs {1}")]
    ShapeMismatch(Shape, Shape),

    /// Backing storage length does not match the requested shape.
    #[error("data length {actual} does not match shape (expected {expected})")]
    DataLength { expected: usize, actual: usize },

    /// A row of nested input has a different length than the first row.
    #[error("ragged rows: row {row} has length {actual}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Zero stride along an axis of extent > 1 in a mutable view.
    #[error("invalid stride 0 for axis {axis}")]
    ZeroStride { axis: usize },

    /// Offset arithmetic overflowed or left the backing slice.
    #[error("offset overflow while computing element position")]
    OffsetOverflow,
}

/// Result type for view and storage operations.
pub type Result<T> = std::result::Result<T, ViewError>;
