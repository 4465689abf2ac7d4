//! Strategy selection for determinant, inverse and solve.
//!
//! The factories are pure functions of shape and caller hints. They return
//! small `Copy` task values that can be stored in `const`s, shared across
//! threads, and reused for any number of calls. The decision table, first
//! match wins:
//!
//! | Condition | Task |
//! |---|---|
//! | 1x1 | `Full(One)` |
//! | square, symmetric, order 2..=5 | `Symmetric(order)` |
//! | square, symmetric, order > 5 | `Cholesky` if positive definite, else `Lu` |
//! | square, order 2..=5 (solve: single rhs column only) | `Full(order)` |
//! | any other square | `Lu` |
//! | tall, solve, single rhs column, 1..=5 columns | `LeastSquares(columns)` |
//! | tall | `Qr` |
//! | wide | `SingularValue` |
//!
//! The `symmetric` and `positive_definite` hints are trusted. A false hint
//! silently selects a kernel that returns wrong numbers; nothing checks it.

use num_traits::Zero;
use smallmat_decomp::{Cholesky, Decomposition, LinalgScalar, Lu, Qr, SingularValue};
use smallmat_view::{Access2D, DenseMatrix, Mutate2D, Structure2D, ViewError};

use crate::{determinant as det, inverter as inv, solver as sol};
use crate::{trace_enabled, Result, SmallmatError, MAX_UNROLLED_ORDER};

// ============================================================================
// Order
// ============================================================================

/// Dimensions with closed-form kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Order {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Order {
    pub const ALL: [Order; MAX_UNROLLED_ORDER] =
        [Order::One, Order::Two, Order::Three, Order::Four, Order::Five];

    /// The order for an `n x n` matrix, if it has a closed-form kernel.
    pub fn from_dim(n: usize) -> Result<Self> {
        match n {
            1 => Ok(Order::One),
            2 => Ok(Order::Two),
            3 => Ok(Order::Three),
            4 => Ok(Order::Four),
            5 => Ok(Order::Five),
            _ => Err(SmallmatError::UnsupportedOrder(n)),
        }
    }

    #[inline]
    pub const fn dim(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Order {
    type Error = SmallmatError;

    fn try_from(n: usize) -> Result<Self> {
        Order::from_dim(n)
    }
}

// ============================================================================
// Tasks
// ============================================================================

/// Strategy for computing a determinant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeterminantTask {
    Full(Order),
    Symmetric(Order),
    Cholesky,
    Lu,
    Qr,
    SingularValue,
}

/// Strategy for computing an inverse (pseudo-inverse for non-square input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InverterTask {
    Full(Order),
    Symmetric(Order),
    Cholesky,
    Lu,
    Qr,
    SingularValue,
}

/// Strategy for solving `body * x = rhs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverTask {
    Full(Order),
    Symmetric(Order),
    /// Normal equations through the symmetric kernel of this order.
    LeastSquares(Order),
    Cholesky,
    Lu,
    Qr,
    SingularValue,
}

/// Copy a fallback result into a caller buffer of the same shape.
fn copy_result<T, D>(result: &DenseMatrix<T>, destination: &mut D) -> Result<()>
where
    T: Copy,
    D: Mutate2D<T> + ?Sized,
{
    if result.shape() != destination.shape() {
        return Err(ViewError::ShapeMismatch(destination.shape(), result.shape()).into());
    }
    for (index, &value) in result.iter().enumerate() {
        destination.set_at(index, value);
    }
    Ok(())
}

fn trace_choice<S: Structure2D + ?Sized, K: std::fmt::Debug>(
    factory: &str,
    template: &S,
    symmetric: bool,
    positive_definite: bool,
    task: &K,
) {
    if trace_enabled() {
        eprintln!(
            "{}: shape={} symmetric={} positive_definite={} -> {:?}",
            factory,
            template.shape(),
            symmetric,
            positive_definite,
            task
        );
    }
}

impl DeterminantTask {
    /// Whether this task runs a closed-form kernel.
    pub const fn is_unrolled(&self) -> bool {
        matches!(self, Self::Full(_) | Self::Symmetric(_))
    }

    /// Determinant of `matrix`.
    ///
    /// Unrolled tasks never fail. Fallback tasks report the decomposition's
    /// own errors, e.g. `NotSquare` for a tall or wide matrix.
    pub fn calculate_determinant<T, M>(&self, matrix: &M) -> Result<T>
    where
        T: LinalgScalar,
        M: Access2D<T> + ?Sized,
    {
        Ok(match *self {
            Self::Full(Order::One) | Self::Symmetric(Order::One) => det::full1(matrix),
            Self::Full(Order::Two) => det::full2(matrix),
            Self::Full(Order::Three) => det::full3(matrix),
            Self::Full(Order::Four) => det::full4(matrix),
            Self::Full(Order::Five) => det::full5(matrix),
            Self::Symmetric(Order::Two) => det::symmetric2(matrix),
            Self::Symmetric(Order::Three) => det::symmetric3(matrix),
            Self::Symmetric(Order::Four) => det::symmetric4(matrix),
            Self::Symmetric(Order::Five) => det::symmetric5(matrix),
            Self::Cholesky => Cholesky::<T>::compute(matrix)?.determinant()?,
            Self::Lu => Lu::<T>::compute(matrix)?.determinant()?,
            Self::Qr => Qr::<T>::compute(matrix)?.determinant()?,
            Self::SingularValue => SingularValue::<T>::compute(matrix)?.determinant()?,
        })
    }
}

impl InverterTask {
    /// Whether this task runs a closed-form kernel.
    pub const fn is_unrolled(&self) -> bool {
        matches!(self, Self::Full(_) | Self::Symmetric(_))
    }

    /// Zero-filled destination for inverting `template`: `columns x rows`.
    pub fn preallocate<T, S>(&self, template: &S) -> DenseMatrix<T>
    where
        T: Clone + Zero,
        S: Structure2D + ?Sized,
    {
        DenseMatrix::zeros(template.count_columns(), template.count_rows())
    }

    /// Write the inverse of `source` into `destination`.
    ///
    /// Unrolled tasks assume `destination` is already `n x n` and never
    /// fail. Fallback tasks check the destination shape and propagate
    /// decomposition errors unchanged.
    pub fn invert<T, S, D>(&self, source: &S, destination: &mut D) -> Result<()>
    where
        T: LinalgScalar,
        S: Access2D<T> + ?Sized,
        D: Mutate2D<T> + ?Sized,
    {
        match *self {
            Self::Full(Order::One) | Self::Symmetric(Order::One) => inv::full1(source, destination),
            Self::Full(Order::Two) => inv::full2(source, destination),
            Self::Full(Order::Three) => inv::full3(source, destination),
            Self::Full(Order::Four) => inv::full4(source, destination),
            Self::Full(Order::Five) => inv::full5(source, destination),
            Self::Symmetric(Order::Two) => inv::symmetric2(source, destination),
            Self::Symmetric(Order::Three) => inv::symmetric3(source, destination),
            Self::Symmetric(Order::Four) => inv::symmetric4(source, destination),
            Self::Symmetric(Order::Five) => inv::symmetric5(source, destination),
            Self::Cholesky => copy_result(&Cholesky::<T>::compute(source)?.inverse()?, destination)?,
            Self::Lu => copy_result(&Lu::<T>::compute(source)?.inverse()?, destination)?,
            Self::Qr => copy_result(&Qr::<T>::compute(source)?.inverse()?, destination)?,
            Self::SingularValue => {
                copy_result(&SingularValue::<T>::compute(source)?.inverse()?, destination)?
            }
        }
        Ok(())
    }
}

impl SolverTask {
    /// Whether this task runs a closed-form kernel.
    pub const fn is_unrolled(&self) -> bool {
        matches!(
            self,
            Self::Full(_) | Self::Symmetric(_) | Self::LeastSquares(_)
        )
    }

    /// Zero-filled destination: `body.columns x rhs.columns`.
    pub fn preallocate<T, B, R>(&self, body: &B, rhs: &R) -> DenseMatrix<T>
    where
        T: Clone + Zero,
        B: Structure2D + ?Sized,
        R: Structure2D + ?Sized,
    {
        DenseMatrix::zeros(body.count_columns(), rhs.count_columns())
    }

    /// Write the solution of `body * x = rhs` into `destination`.
    ///
    /// Unrolled tasks assume consistent shapes and never fail. Fallback
    /// tasks check the destination shape and propagate decomposition
    /// errors unchanged.
    pub fn solve<T, B, R, D>(&self, body: &B, rhs: &R, destination: &mut D) -> Result<()>
    where
        T: LinalgScalar,
        B: Access2D<T> + ?Sized,
        R: Access2D<T> + ?Sized,
        D: Mutate2D<T> + ?Sized,
    {
        match *self {
            Self::Full(Order::One) | Self::Symmetric(Order::One) => {
                sol::full1(body, rhs, destination)
            }
            Self::Full(Order::Two) => sol::full2(body, rhs, destination),
            Self::Full(Order::Three) => sol::full3(body, rhs, destination),
            Self::Full(Order::Four) => sol::full4(body, rhs, destination),
            Self::Full(Order::Five) => sol::full5(body, rhs, destination),
            Self::Symmetric(Order::Two) => sol::symmetric2(body, rhs, destination),
            Self::Symmetric(Order::Three) => sol::symmetric3(body, rhs, destination),
            Self::Symmetric(Order::Four) => sol::symmetric4(body, rhs, destination),
            Self::Symmetric(Order::Five) => sol::symmetric5(body, rhs, destination),
            Self::LeastSquares(Order::One) => sol::least_squares1(body, rhs, destination),
            Self::LeastSquares(Order::Two) => sol::least_squares2(body, rhs, destination),
            Self::LeastSquares(Order::Three) => sol::least_squares3(body, rhs, destination),
            Self::LeastSquares(Order::Four) => sol::least_squares4(body, rhs, destination),
            Self::LeastSquares(Order::Five) => sol::least_squares5(body, rhs, destination),
            Self::Cholesky => copy_result(&Cholesky::<T>::compute(body)?.solve(rhs)?, destination)?,
            Self::Lu => copy_result(&Lu::<T>::compute(body)?.solve(rhs)?, destination)?,
            Self::Qr => copy_result(&Qr::<T>::compute(body)?.solve(rhs)?, destination)?,
            Self::SingularValue => {
                copy_result(&SingularValue::<T>::compute(body)?.solve(rhs)?, destination)?
            }
        }
        Ok(())
    }
}

// ============================================================================
// Factories
// ============================================================================

/// Determinant strategy for matrices shaped like `template`.
pub fn determinant_task_for<S: Structure2D + ?Sized>(
    template: &S,
    symmetric: bool,
    positive_definite: bool,
) -> DeterminantTask {
    let n = template.count_rows();
    let task = if template.is_square() {
        match (Order::from_dim(n).ok(), symmetric) {
            (Some(Order::One), _) => DeterminantTask::Full(Order::One),
            (Some(order), true) => DeterminantTask::Symmetric(order),
            (Some(order), false) => DeterminantTask::Full(order),
            (None, true) if positive_definite && n > MAX_UNROLLED_ORDER => {
                DeterminantTask::Cholesky
            }
            (None, _) => DeterminantTask::Lu,
        }
    } else if template.is_tall() {
        DeterminantTask::Qr
    } else {
        DeterminantTask::SingularValue
    };
    trace_choice("determinant_task_for", template, symmetric, positive_definite, &task);
    task
}

/// Inverse strategy for matrices shaped like `template`.
pub fn inverter_task_for<S: Structure2D + ?Sized>(
    template: &S,
    symmetric: bool,
    positive_definite: bool,
) -> InverterTask {
    let n = template.count_rows();
    let task = if template.is_square() {
        match (Order::from_dim(n).ok(), symmetric) {
            (Some(Order::One), _) => InverterTask::Full(Order::One),
            (Some(order), true) => InverterTask::Symmetric(order),
            (Some(order), false) => InverterTask::Full(order),
            (None, true) if positive_definite && n > MAX_UNROLLED_ORDER => InverterTask::Cholesky,
            (None, _) => InverterTask::Lu,
        }
    } else if template.is_tall() {
        InverterTask::Qr
    } else {
        InverterTask::SingularValue
    };
    trace_choice("inverter_task_for", template, symmetric, positive_definite, &task);
    task
}

/// Solve strategy for `body * x = rhs`.
pub fn solver_task_for<B, R>(
    body: &B,
    rhs: &R,
    symmetric: bool,
    positive_definite: bool,
) -> SolverTask
where
    B: Structure2D + ?Sized,
    R: Structure2D + ?Sized,
{
    let single_column = rhs.count_columns() == 1;
    let task = if body.is_square() {
        let n = body.count_rows();
        match (Order::from_dim(n).ok(), symmetric) {
            (Some(Order::One), _) => SolverTask::Full(Order::One),
            (Some(order), true) => SolverTask::Symmetric(order),
            (Some(order), false) if single_column => SolverTask::Full(order),
            (None, true) if positive_definite && n > MAX_UNROLLED_ORDER => SolverTask::Cholesky,
            _ => SolverTask::Lu,
        }
    } else if body.is_tall() {
        match Order::from_dim(body.count_columns()) {
            Ok(order) if single_column => SolverTask::LeastSquares(order),
            _ => SolverTask::Qr,
        }
    } else {
        SolverTask::SingularValue
    };
    trace_choice("solver_task_for", body, symmetric, positive_definite, &task);
    task
}

// ============================================================================
// One-shot entry points
// ============================================================================

/// Determinant of `matrix`, dispatched from its shape and the hints.
pub fn determinant<T, M>(matrix: &M, symmetric: bool, positive_definite: bool) -> Result<T>
where
    T: LinalgScalar,
    M: Access2D<T> + ?Sized,
{
    determinant_task_for(matrix, symmetric, positive_definite).calculate_determinant(matrix)
}

/// Inverse (or pseudo-inverse) of `matrix` in a freshly allocated buffer.
pub fn invert<T, M>(matrix: &M, symmetric: bool, positive_definite: bool) -> Result<DenseMatrix<T>>
where
    T: LinalgScalar,
    M: Access2D<T> + ?Sized,
{
    let task = inverter_task_for(matrix, symmetric, positive_definite);
    let mut destination = task.preallocate(matrix);
    task.invert(matrix, &mut destination)?;
    Ok(destination)
}

/// Solution of `body * x = rhs` in a freshly allocated buffer.
///
/// Checks that `rhs` has as many rows as `body`.
pub fn solve<T, B, R>(
    body: &B,
    rhs: &R,
    symmetric: bool,
    positive_definite: bool,
) -> Result<DenseMatrix<T>>
where
    T: LinalgScalar,
    B: Access2D<T> + ?Sized,
    R: Access2D<T> + ?Sized,
{
    if body.count_rows() != rhs.count_rows() {
        return Err(ViewError::ShapeMismatch(body.shape(), rhs.shape()).into());
    }
    let task = solver_task_for(body, rhs, symmetric, positive_definite);
    let mut destination = task.preallocate(body, rhs);
    task.solve(body, rhs, &mut destination)?;
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallmat_view::Shape;

    #[test]
    fn test_order_from_dim() {
        assert_eq!(Order::from_dim(3).unwrap(), Order::Three);
        assert_eq!(Order::Four.dim(), 4);
        assert!(matches!(
            Order::from_dim(6),
            Err(SmallmatError::UnsupportedOrder(6))
        ));
        assert!(Order::try_from(0).is_err());
        for (i, order) in Order::ALL.iter().enumerate() {
            assert_eq!(order.dim(), i + 1);
        }
    }

    #[test]
    fn test_determinant_table() {
        let t = |r, c, s, p| determinant_task_for(&Shape::new(r, c), s, p);
        assert_eq!(t(1, 1, true, true), DeterminantTask::Full(Order::One));
        assert_eq!(t(3, 3, true, false), DeterminantTask::Symmetric(Order::Three));
        assert_eq!(t(5, 5, false, false), DeterminantTask::Full(Order::Five));
        assert_eq!(t(6, 6, true, true), DeterminantTask::Cholesky);
        assert_eq!(t(6, 6, true, false), DeterminantTask::Lu);
        assert_eq!(t(7, 7, false, true), DeterminantTask::Lu);
        assert_eq!(t(0, 0, true, true), DeterminantTask::Lu);
        assert_eq!(t(4, 3, false, false), DeterminantTask::Qr);
        assert_eq!(t(3, 4, false, false), DeterminantTask::SingularValue);
    }

    #[test]
    fn test_inverter_table() {
        let t = |r, c, s, p| inverter_task_for(&Shape::new(r, c), s, p);
        assert_eq!(t(1, 1, false, false), InverterTask::Full(Order::One));
        assert_eq!(t(2, 2, true, true), InverterTask::Symmetric(Order::Two));
        assert_eq!(t(4, 4, false, false), InverterTask::Full(Order::Four));
        assert_eq!(t(6, 6, true, true), InverterTask::Cholesky);
        assert_eq!(t(8, 8, false, false), InverterTask::Lu);
        assert_eq!(t(6, 2, false, false), InverterTask::Qr);
        assert_eq!(t(2, 6, false, false), InverterTask::SingularValue);
        assert!(t(5, 5, false, false).is_unrolled());
        assert!(!t(6, 6, false, false).is_unrolled());
    }

    #[test]
    fn test_solver_table() {
        let t = |r, c, k, s, p| solver_task_for(&Shape::new(r, c), &Shape::new(r, k), s, p);
        assert_eq!(t(1, 1, 3, false, false), SolverTask::Full(Order::One));
        assert_eq!(t(3, 3, 1, false, false), SolverTask::Full(Order::Three));
        assert_eq!(t(3, 3, 2, false, false), SolverTask::Lu);
        assert_eq!(t(3, 3, 2, true, false), SolverTask::Symmetric(Order::Three));
        assert_eq!(t(9, 9, 1, true, true), SolverTask::Cholesky);
        assert_eq!(t(9, 9, 4, true, true), SolverTask::Cholesky);
        assert_eq!(t(9, 9, 1, true, false), SolverTask::Lu);
        assert_eq!(t(4, 3, 1, false, false), SolverTask::LeastSquares(Order::Three));
        assert_eq!(t(10, 1, 1, false, false), SolverTask::LeastSquares(Order::One));
        assert_eq!(t(4, 3, 2, false, false), SolverTask::Qr);
        assert_eq!(t(9, 6, 1, false, false), SolverTask::Qr);
        assert_eq!(t(3, 4, 1, false, false), SolverTask::SingularValue);
        assert!(t(4, 3, 1, false, false).is_unrolled());
    }

    #[test]
    fn test_preallocate_shapes() {
        let inv: DenseMatrix<f64> = InverterTask::Qr.preallocate(&Shape::new(5, 2));
        assert_eq!(inv.shape(), Shape::new(2, 5));
        let sol: DenseMatrix<f64> = SolverTask::Qr.preallocate(&Shape::new(5, 2), &Shape::new(5, 3));
        assert_eq!(sol.shape(), Shape::new(2, 3));
        assert!(sol.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_fallback_checks_destination_shape() {
        let a = DenseMatrix::<f64>::identity(6);
        let mut wrong = DenseMatrix::zeros(5, 5);
        let err = InverterTask::Lu.invert(&a, &mut wrong).unwrap_err();
        assert!(matches!(err, SmallmatError::View(ViewError::ShapeMismatch(_, _))));
    }
}
