use approx::assert_relative_eq;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use smallmat::{
    determinant_task_for, inverter_task_for, solver_task_for, Decomposition, DenseMatrix,
    DeterminantTask, InverterTask, Lu, MatrixView, Order, SolverTask, Structure2D,
};

/// Random matrix with a shifted diagonal so that it is comfortably invertible.
fn random_invertible(rng: &mut StdRng, n: usize) -> DenseMatrix<f64> {
    let mut a = DenseMatrix::from_fn(n, n, |_, _| rng.sample(StandardNormal));
    for i in 0..n {
        a[(i, i)] += n as f64;
    }
    a
}

/// `B + B^T + 2n I`.
fn random_symmetric(rng: &mut StdRng, n: usize) -> DenseMatrix<f64> {
    let b = DenseMatrix::from_fn(n, n, |_, _| rng.sample::<f64, _>(StandardNormal));
    let mut a = DenseMatrix::from_fn(n, n, |r, c| b[(r, c)] + b[(c, r)]);
    for i in 0..n {
        a[(i, i)] += 2.0 * n as f64;
    }
    a
}

fn assert_identity(m: &DenseMatrix<f64>, eps: f64) {
    for r in 0..m.count_rows() {
        for c in 0..m.count_columns() {
            let expected = if r == c { 1.0 } else { 0.0 };
            assert_relative_eq!(m[(r, c)], expected, epsilon = eps);
        }
    }
}

#[test]
fn test_identity_determinant_all_orders() {
    for order in Order::ALL {
        let id = DenseMatrix::<f64>::identity(order.dim());
        assert_eq!(
            DeterminantTask::Full(order).calculate_determinant(&id).unwrap(),
            1.0
        );
        assert_eq!(
            DeterminantTask::Symmetric(order)
                .calculate_determinant(&id)
                .unwrap(),
            1.0
        );
    }
}

#[test]
fn test_unrolled_determinant_matches_lu() {
    let mut rng = StdRng::seed_from_u64(42);
    for order in Order::ALL {
        let n = order.dim();
        for _ in 0..100 {
            let a = random_invertible(&mut rng, n);
            let task = determinant_task_for(&a, false, false);
            assert_eq!(task, DeterminantTask::Full(order));
            let unrolled = task.calculate_determinant(&a).unwrap();
            let lu = Lu::compute(&a).unwrap().determinant().unwrap();
            assert_relative_eq!(unrolled, lu, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_symmetric_determinant_matches_lu() {
    let mut rng = StdRng::seed_from_u64(43);
    for order in Order::ALL {
        for _ in 0..100 {
            let a = random_symmetric(&mut rng, order.dim());
            let sym = DeterminantTask::Symmetric(order)
                .calculate_determinant(&a)
                .unwrap();
            let lu = Lu::compute(&a).unwrap().determinant().unwrap();
            assert_relative_eq!(sym, lu, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_inverse_times_matrix_is_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    for order in Order::ALL {
        let n = order.dim();
        for _ in 0..20 {
            let a = random_invertible(&mut rng, n);
            let task = inverter_task_for(&a, false, false);
            assert!(task.is_unrolled());
            let mut inv = task.preallocate(&a);
            task.invert(&a, &mut inv).unwrap();
            assert_identity(&inv.matmul(&a).unwrap(), 1e-9);
        }
    }
}

#[test]
fn test_symmetric_inverse_matches_full() {
    let mut rng = StdRng::seed_from_u64(8);
    for order in Order::ALL {
        let n = order.dim();
        for _ in 0..20 {
            let a = random_symmetric(&mut rng, n);
            let mut full = DenseMatrix::zeros(n, n);
            let mut sym = DenseMatrix::zeros(n, n);
            InverterTask::Full(order).invert(&a, &mut full).unwrap();
            InverterTask::Symmetric(order).invert(&a, &mut sym).unwrap();
            for (x, y) in full.iter().zip(sym.iter()) {
                assert_relative_eq!(*x, *y, epsilon = 1e-12, max_relative = 1e-9);
            }
        }
    }
}

#[test]
fn test_solve_recovers_x_across_magnitudes() {
    let mut rng = StdRng::seed_from_u64(9);
    for order in Order::ALL {
        let n = order.dim();
        for scale in [1.0, 1e8, 1e-8] {
            let a = random_invertible(&mut rng, n);
            let x = DenseMatrix::from_fn(n, 1, |_, _| scale * rng.sample::<f64, _>(StandardNormal));
            let b = a.matmul(&x).unwrap();

            let task = solver_task_for(&a, &b, false, false);
            assert_eq!(task, SolverTask::Full(order));
            let mut got = task.preallocate(&a, &b);
            task.solve(&a, &b, &mut got).unwrap();
            for (g, e) in got.iter().zip(x.iter()) {
                assert_relative_eq!(*g, *e, epsilon = 1e-9 * scale, max_relative = 1e-8);
            }
        }
    }
}

#[test]
fn test_symmetric_solve_multi_column() {
    let mut rng = StdRng::seed_from_u64(10);
    for order in Order::ALL {
        let n = order.dim();
        let a = random_symmetric(&mut rng, n);
        let x = DenseMatrix::from_fn(n, 3, |_, _| rng.sample::<f64, _>(StandardNormal));
        let b = a.matmul(&x).unwrap();

        let task = solver_task_for(&a, &b, true, true);
        assert!(task.is_unrolled());
        let mut got = task.preallocate(&a, &b);
        task.solve(&a, &b, &mut got).unwrap();
        for (g, e) in got.iter().zip(x.iter()) {
            assert_relative_eq!(*g, *e, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_least_squares_line_fit() {
    // y = a + b t through (0, 0), (1, 1), (2, 3)
    let body = DenseMatrix::from_rows(&[[1.0, 0.0], [1.0, 1.0], [1.0, 2.0]]).unwrap();
    let rhs = DenseMatrix::from_rows(&[[0.0], [1.0], [3.0]]).unwrap();

    let task = solver_task_for(&body, &rhs, false, false);
    assert_eq!(task, SolverTask::LeastSquares(Order::Two));
    let mut x = task.preallocate(&body, &rhs);
    task.solve(&body, &rhs, &mut x).unwrap();

    // Normal equations [[3, 3], [3, 5]] x = [4, 7]
    assert_relative_eq!(x[(0, 0)], -1.0 / 6.0, epsilon = 1e-12);
    assert_relative_eq!(x[(1, 0)], 1.5, epsilon = 1e-12);

    let qr = run_solver(SolverTask::Qr, &body, &rhs);
    assert_relative_eq!(qr[0], x[(0, 0)], epsilon = 1e-12);
    assert_relative_eq!(qr[1], x[(1, 0)], epsilon = 1e-12);
}

fn run_solver(task: SolverTask, body: &DenseMatrix<f64>, rhs: &DenseMatrix<f64>) -> Vec<f64> {
    let mut x = task.preallocate(body, rhs);
    task.solve(body, rhs, &mut x).unwrap();
    x.into_vec()
}

#[test]
fn test_least_squares_matches_qr_for_all_orders() {
    let mut rng = StdRng::seed_from_u64(11);
    for order in Order::ALL {
        let cols = order.dim();
        let rows = cols + 3;
        let body = DenseMatrix::from_fn(rows, cols, |_, _| rng.sample::<f64, _>(StandardNormal));
        let rhs = DenseMatrix::from_fn(rows, 1, |_, _| rng.sample::<f64, _>(StandardNormal));
        let unrolled = run_solver(SolverTask::LeastSquares(order), &body, &rhs);
        let qr = run_solver(SolverTask::Qr, &body, &rhs);
        for (u, q) in unrolled.iter().zip(qr.iter()) {
            assert_relative_eq!(*u, *q, epsilon = 1e-8, max_relative = 1e-7);
        }
    }
}

#[test]
fn test_scenario_determinant() {
    let body = DenseMatrix::from_rows(&[[4.0, 3.0], [6.0, 3.0]]).unwrap();
    assert_relative_eq!(smallmat::determinant(&body, false, false).unwrap(), -6.0);
}

#[test]
fn test_scenario_inverse() {
    let body = DenseMatrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
    assert_relative_eq!(
        smallmat::determinant(&body, false, false).unwrap(),
        10.0,
        epsilon = 1e-12
    );
    let inv = smallmat::invert(&body, false, false).unwrap();
    let expected = DenseMatrix::from_rows(&[[0.6, -0.7], [-0.2, 0.4]]).unwrap();
    for (x, y) in inv.iter().zip(expected.iter()) {
        assert_relative_eq!(*x, *y, epsilon = 1e-12);
    }
}

#[test]
fn test_scenario_identity_solve() {
    let body = DenseMatrix::<f64>::identity(3);
    let rhs = DenseMatrix::column(&[1.0, 2.0, 3.0]);
    let x = smallmat::solve(&body, &rhs, false, false).unwrap();
    for (got, expected) in x.iter().zip([1.0, 2.0, 3.0]) {
        assert_relative_eq!(*got, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_scenario_symmetric_solve() {
    let body = DenseMatrix::from_rows(&[[2.0, 1.0], [1.0, 2.0]]).unwrap();
    let rhs = DenseMatrix::column(&[3.0, 3.0]);
    let x = smallmat::solve(&body, &rhs, true, false).unwrap();
    assert_relative_eq!(x[(0, 0)], 1.0, epsilon = 1e-12);
    assert_relative_eq!(x[(1, 0)], 1.0, epsilon = 1e-12);
}

#[test]
fn test_row_major_and_transposed_views() {
    let data = [4.0, 7.0, 2.0, 6.0];
    let view = MatrixView::row_major(&data, 2, 2).unwrap();
    let inv = smallmat::invert(&view, false, false).unwrap();
    assert_relative_eq!(inv[(0, 1)], -0.7, epsilon = 1e-12);

    // det(A^T) == det(A)
    let t = view.t();
    assert_relative_eq!(
        smallmat::determinant(&t, false, false).unwrap(),
        10.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_complex_hermitian_paths() {
    let c = Complex64::new;
    let a = DenseMatrix::from_rows(&[
        [c(6.0, 0.0), c(1.0, -1.0), c(0.0, 0.5)],
        [c(1.0, 1.0), c(5.0, 0.0), c(2.0, 0.0)],
        [c(0.0, -0.5), c(2.0, 0.0), c(7.0, 0.0)],
    ])
    .unwrap();

    let sym = smallmat::determinant(&a, true, true).unwrap();
    let full = smallmat::determinant(&a, false, false).unwrap();
    assert!(sym.im.abs() < 1e-12);
    assert!((sym - full).norm() < 1e-10);

    let inv = smallmat::invert(&a, true, true).unwrap();
    let id = a.matmul(&inv).unwrap();
    for r in 0..3 {
        for col in 0..3 {
            let expected = if r == col { c(1.0, 0.0) } else { c(0.0, 0.0) };
            assert!((id[(r, col)] - expected).norm() < 1e-12);
        }
    }

    let rhs = DenseMatrix::from_fn(3, 2, |r, k| c(r as f64 + 1.0, k as f64));
    let x = smallmat::solve(&a, &rhs, true, true).unwrap();
    let back = a.matmul(&x).unwrap();
    for (p, q) in back.iter().zip(rhs.iter()) {
        assert!((p - q).norm() < 1e-10);
    }
}

#[test]
fn test_fallback_orders_agree_with_lu() {
    let mut rng = StdRng::seed_from_u64(12);
    for n in 6..=9 {
        let a = random_symmetric(&mut rng, n);
        let x = DenseMatrix::from_fn(n, 2, |_, _| rng.sample::<f64, _>(StandardNormal));
        let b = a.matmul(&x).unwrap();

        let got = smallmat::solve(&a, &b, true, true).unwrap();
        for (g, e) in got.iter().zip(x.iter()) {
            assert_relative_eq!(*g, *e, epsilon = 1e-9);
        }

        let inv = smallmat::invert(&a, true, true).unwrap();
        assert_identity(&inv.matmul(&a).unwrap(), 1e-9);
    }
}
