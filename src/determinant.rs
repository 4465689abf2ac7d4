//! Determinant kernels for orders 1 to 5.
//!
//! Full kernels read all `n * n` entries by linear index. Symmetric kernels
//! read the `n (n + 1) / 2` entries of the lower triangle and pass the
//! mirrored upper entries as conjugates, so the arithmetic is the same as
//! the full kernel's. The symmetric hint is trusted, never checked.

use smallmat_traits::Field;
use smallmat_view::Access2D;

use crate::minors::{det2, det3, det4, det5};

/// The single entry of a 1x1 matrix.
#[inline]
pub fn full1<T: Field, M: Access2D<T> + ?Sized>(m: &M) -> T {
    m.at(0)
}

#[inline]
pub fn full2<T: Field, M: Access2D<T> + ?Sized>(m: &M) -> T {
    det2(m.at(0), m.at(1), m.at(2), m.at(3))
}

#[inline]
pub fn full3<T: Field, M: Access2D<T> + ?Sized>(m: &M) -> T {
    det3(m.at(0), m.at(1), m.at(2), m.at(3), m.at(4), m.at(5), m.at(6), m.at(7), m.at(8))
}

#[rustfmt::skip]
#[inline]
pub fn full4<T: Field, M: Access2D<T> + ?Sized>(m: &M) -> T {
    det4(
        m.at(0), m.at(1), m.at(2), m.at(3),
        m.at(4), m.at(5), m.at(6), m.at(7),
        m.at(8), m.at(9), m.at(10), m.at(11),
        m.at(12), m.at(13), m.at(14), m.at(15),
    )
}

#[rustfmt::skip]
#[inline]
pub fn full5<T: Field, M: Access2D<T> + ?Sized>(m: &M) -> T {
    det5(
        m.at(0), m.at(1), m.at(2), m.at(3), m.at(4),
        m.at(5), m.at(6), m.at(7), m.at(8), m.at(9),
        m.at(10), m.at(11), m.at(12), m.at(13), m.at(14),
        m.at(15), m.at(16), m.at(17), m.at(18), m.at(19),
        m.at(20), m.at(21), m.at(22), m.at(23), m.at(24),
    )
}

#[inline]
pub fn symmetric2<T: Field, M: Access2D<T> + ?Sized>(m: &M) -> T {
    let a00 = m.at(0);
    let a10 = m.at(1);
    let a11 = m.at(3);
    det2(a00, a10, a10.conj(), a11)
}

#[rustfmt::skip]
#[inline]
pub fn symmetric3<T: Field, M: Access2D<T> + ?Sized>(m: &M) -> T {
    let a00 = m.at(0);
    let a10 = m.at(1);
    let a20 = m.at(2);
    let a11 = m.at(4);
    let a21 = m.at(5);
    let a22 = m.at(8);
    det3(
        a00, a10, a20,
        a10.conj(), a11, a21,
        a20.conj(), a21.conj(), a22,
    )
}

#[rustfmt::skip]
#[inline]
pub fn symmetric4<T: Field, M: Access2D<T> + ?Sized>(m: &M) -> T {
    let a00 = m.at(0);
    let a10 = m.at(1);
    let a20 = m.at(2);
    let a30 = m.at(3);
    let a11 = m.at(5);
    let a21 = m.at(6);
    let a31 = m.at(7);
    let a22 = m.at(10);
    let a32 = m.at(11);
    let a33 = m.at(15);
    det4(
        a00, a10, a20, a30,
        a10.conj(), a11, a21, a31,
        a20.conj(), a21.conj(), a22, a32,
        a30.conj(), a31.conj(), a32.conj(), a33,
    )
}

#[rustfmt::skip]
#[inline]
pub fn symmetric5<T: Field, M: Access2D<T> + ?Sized>(m: &M) -> T {
    let a00 = m.at(0);
    let a10 = m.at(1);
    let a20 = m.at(2);
    let a30 = m.at(3);
    let a40 = m.at(4);
    let a11 = m.at(6);
    let a21 = m.at(7);
    let a31 = m.at(8);
    let a41 = m.at(9);
    let a22 = m.at(12);
    let a32 = m.at(13);
    let a42 = m.at(14);
    let a33 = m.at(18);
    let a43 = m.at(19);
    let a44 = m.at(24);
    det5(
        a00, a10, a20, a30, a40,
        a10.conj(), a11, a21, a31, a41,
        a20.conj(), a21.conj(), a22, a32, a42,
        a30.conj(), a31.conj(), a32.conj(), a33, a43,
        a40.conj(), a41.conj(), a42.conj(), a43.conj(), a44,
    )
}
