//! Shared traits for the smallmat workspace.
//!
//! This crate defines the numeric domains the kernels and decompositions are
//! generic over, so that `smallmat-view`, `smallmat-decomp` and the root
//! `smallmat` crate agree on a single set of bounds. External crates can
//! depend on `smallmat-traits` alone to implement [`Conjugate`] for their own
//! element types without orphan rule violations.

pub mod conjugate;
pub mod scalar;

pub use conjugate::Conjugate;
pub use scalar::{real_from_usize, Field, Scalar};
