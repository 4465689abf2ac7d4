//! `get` and `at` must agree for every storage type, since the kernels
//! read exclusively by linear index.

use num_complex::Complex64;
use smallmat_view::{Access2D, DenseMatrix, MatrixView, MatrixViewMut, Mutate2D, Structure2D};

fn assert_consistent<T: Copy + PartialEq + std::fmt::Debug, A: Access2D<T>>(a: &A) {
    for index in 0..a.count() {
        let (r, c) = (a.row_of(index), a.column_of(index));
        assert_eq!(a.at(index), a.get(r, c), "index {index} -> ({r}, {c})");
    }
}

#[test]
fn dense_matrix_get_matches_at() {
    let m = DenseMatrix::from_fn(3, 4, |r, c| (r * 10 + c) as f64);
    assert_consistent::<f64, _>(&m);
}

#[test]
fn strided_views_get_matches_at() {
    let data: Vec<f64> = (0..12).map(|x| x as f64).collect();
    assert_consistent::<f64, _>(&MatrixView::row_major(&data, 3, 4).unwrap());
    assert_consistent::<f64, _>(&MatrixView::col_major(&data, 4, 3).unwrap());
    assert_consistent::<f64, _>(&MatrixView::new(&data, 2, 3, 2, 4, 1).unwrap());
    assert_consistent::<f64, _>(&MatrixView::row_major(&data, 3, 4).unwrap().t());
}

#[test]
fn references_forward_access() {
    let m = DenseMatrix::from_rows(&[[Complex64::new(1.0, 2.0), Complex64::new(0.0, -1.0)]]).unwrap();
    let r = &m;
    assert_eq!(r.at(1), Complex64::new(0.0, -1.0));
    assert_eq!(r.shape(), m.shape());
}

#[test]
fn writes_through_any_layout_land_in_the_same_element() {
    let mut row_major = vec![0.0; 6];
    let mut dense = DenseMatrix::<f64>::zeros(2, 3);
    {
        let mut view = MatrixViewMut::row_major(&mut row_major, 2, 3).unwrap();
        for index in 0..6 {
            view.set_at(index, index as f64);
            dense.set_at(index, index as f64);
        }
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(view.get(r, c), dense[(r, c)]);
            }
        }
    }
    assert_eq!(row_major, vec![0.0, 2.0, 4.0, 1.0, 3.0, 5.0]);
}
