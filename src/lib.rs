//! Closed-form kernels for determinants, inverses and linear solves of small
//! matrices, with decomposition fallbacks for everything else.
//!
//! For orders 1 through 5 every operation is expanded into straight-line
//! arithmetic over precomputed minors: no pivoting, no loops over the
//! dimension and no heap allocation. Larger, rectangular or badly shaped
//! problems are routed to the decompositions in [`smallmat_decomp`].
//!
//! # Core Types
//!
//! - [`DeterminantTask`], [`InverterTask`], [`SolverTask`]: `Copy` strategy
//!   values chosen once from a shape and reused for every call
//! - [`Order`]: the dimensions 1..=5 that have closed-form kernels
//! - [`DenseMatrix`], [`MatrixView`], [`MatrixViewMut`], [`Shape`]: operands
//!   and templates, re-exported from [`smallmat_view`]
//!
//! # Primary API
//!
//! - [`determinant_task_for`], [`inverter_task_for`], [`solver_task_for`]:
//!   pick a strategy from a shape and the `symmetric` / `positive_definite`
//!   hints
//! - [`determinant()`], [`invert`], [`solve`]: one-shot helpers that pick a
//!   strategy, allocate the destination and run it
//! - [`minors`], [`determinant`](mod@determinant), [`inverter`], [`solver`]:
//!   the raw kernels, callable directly when the order is known statically
//!
//! # Example
//!
//! ```rust
//! use smallmat::{solver_task_for, DenseMatrix, Order, SolverTask};
//!
//! let body = DenseMatrix::from_rows(&[[4.0_f64, 1.0], [1.0, 3.0]]).unwrap();
//! let rhs = DenseMatrix::from_rows(&[[1.0_f64], [2.0]]).unwrap();
//!
//! let task = solver_task_for(&body, &rhs, true, true);
//! assert_eq!(task, SolverTask::Symmetric(Order::Two));
//!
//! let mut x: DenseMatrix<f64> = task.preallocate(&body, &rhs);
//! task.solve(&body, &rhs, &mut x).unwrap();
//! assert!((x[(0, 0)] - 1.0 / 11.0).abs() < 1e-12);
//! assert!((x[(1, 0)] - 7.0 / 11.0).abs() < 1e-12);
//! ```
//!
//! # Tracing
//!
//! Set `SMALLMAT_TRACE=1` to print every strategy decision to stderr.

mod block;
pub mod determinant;
mod dispatch;
pub mod inverter;
pub mod minors;
pub mod solver;

use std::sync::OnceLock;

// ============================================================================
// Dispatch
// ============================================================================
pub use dispatch::{
    determinant, determinant_task_for, invert, inverter_task_for, solve, solver_task_for,
    DeterminantTask, InverterTask, Order, SolverTask,
};

// ============================================================================
// Workspace re-exports
// ============================================================================
pub use smallmat_decomp::{
    Cholesky, Decomposition, DecompositionError, LinalgScalar, Lu, Qr, SingularValue,
};
pub use smallmat_traits::{Conjugate, Field, Scalar};
pub use smallmat_view::{
    Access2D, DenseMatrix, MatrixView, MatrixViewMut, Mutate2D, Shape, Structure2D, ViewError,
};

// ============================================================================
// Constants
// ============================================================================

/// Largest order handled by the closed-form kernels.
pub const MAX_UNROLLED_ORDER: usize = 5;

// ============================================================================
// Error types
// ============================================================================

/// Errors reported by the dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SmallmatError {
    /// No closed-form kernel exists for this order.
    #[error("no closed-form kernel for order {0} (supported: 1..=5)")]
    UnsupportedOrder(usize),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error(transparent)]
    Decomposition(#[from] DecompositionError),
}

/// Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, SmallmatError>;

pub(crate) fn trace_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| matches!(std::env::var("SMALLMAT_TRACE"), Ok(ref v) if v == "1"))
}
