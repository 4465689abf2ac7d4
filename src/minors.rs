//! Closed-form determinants and cofactor matrices for orders 2 to 5.
//!
//! Entries are named `a{row}{column}` and arrive in column-major order.
//! Every determinant is a Laplace expansion along the first column. The
//! sub-determinants it needs are computed once, bottom-up, and reused:
//! a temporary named `m{k}_{rows}_{cols}` is the `k x k` minor over the
//! listed rows and columns, so `m2_23_23` is the determinant of rows 2, 3
//! and columns 2, 3. The 5x5 expansion builds ten 2x2 and ten 3x3 minors
//! and shares them across its five 4x4 minors instead of recursing.
//!
//! Cofactor matrices are returned column-major as `[[T; N]; N]`, i.e.
//! `c[column][row]` is the signed minor `(-1)^(row + column) M_row,column`.
//! The `symmetric_*` variants read only the lower triangle
//! (`row >= column`), mirror the rest as `a_ij = conj(a_ji)`, and compute
//! only the lower triangle of cofactors.

use smallmat_traits::Field;

/// Determinant of a 2x2 matrix given column-major.
#[inline]
pub fn det2<T: Field>(a00: T, a10: T, a01: T, a11: T) -> T {
    a00 * a11 - a10 * a01
}

/// Determinant of a 3x3 matrix given column-major.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
#[inline]
pub fn det3<T: Field>(
    a00: T, a10: T, a20: T,
    a01: T, a11: T, a21: T,
    a02: T, a12: T, a22: T,
) -> T {
    let m2_12_12 = a11 * a22 - a21 * a12;
    let m2_02_12 = a01 * a22 - a21 * a02;
    let m2_01_12 = a01 * a12 - a11 * a02;
    a00 * m2_12_12 - a10 * m2_02_12 + a20 * m2_01_12
}

/// Determinant of a 4x4 matrix given column-major.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
#[inline]
pub fn det4<T: Field>(
    a00: T, a10: T, a20: T, a30: T,
    a01: T, a11: T, a21: T, a31: T,
    a02: T, a12: T, a22: T, a32: T,
    a03: T, a13: T, a23: T, a33: T,
) -> T {
    let m2_23_23 = a22 * a33 - a32 * a23;
    let m2_13_23 = a12 * a33 - a32 * a13;
    let m2_12_23 = a12 * a23 - a22 * a13;
    let m3_123_123 = a11 * m2_23_23 - a21 * m2_13_23 + a31 * m2_12_23;
    let m2_03_23 = a02 * a33 - a32 * a03;
    let m2_02_23 = a02 * a23 - a22 * a03;
    let m3_023_123 = a01 * m2_23_23 - a21 * m2_03_23 + a31 * m2_02_23;
    let m2_01_23 = a02 * a13 - a12 * a03;
    let m3_013_123 = a01 * m2_13_23 - a11 * m2_03_23 + a31 * m2_01_23;
    let m3_012_123 = a01 * m2_12_23 - a11 * m2_02_23 + a21 * m2_01_23;
    a00 * m3_123_123 - a10 * m3_023_123 + a20 * m3_013_123 - a30 * m3_012_123
}

/// Determinant of a 5x5 matrix given column-major.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
#[inline]
pub fn det5<T: Field>(
    a00: T, a10: T, a20: T, a30: T, a40: T,
    a01: T, a11: T, a21: T, a31: T, a41: T,
    a02: T, a12: T, a22: T, a32: T, a42: T,
    a03: T, a13: T, a23: T, a33: T, a43: T,
    a04: T, a14: T, a24: T, a34: T, a44: T,
) -> T {
    let m2_34_34 = a33 * a44 - a43 * a34;
    let m2_24_34 = a23 * a44 - a43 * a24;
    let m2_23_34 = a23 * a34 - a33 * a24;
    let m3_234_234 = a22 * m2_34_34 - a32 * m2_24_34 + a42 * m2_23_34;
    let m2_14_34 = a13 * a44 - a43 * a14;
    let m2_13_34 = a13 * a34 - a33 * a14;
    let m3_134_234 = a12 * m2_34_34 - a32 * m2_14_34 + a42 * m2_13_34;
    let m2_12_34 = a13 * a24 - a23 * a14;
    let m3_124_234 = a12 * m2_24_34 - a22 * m2_14_34 + a42 * m2_12_34;
    let m3_123_234 = a12 * m2_23_34 - a22 * m2_13_34 + a32 * m2_12_34;
    let m4_1234_1234 = a11 * m3_234_234 - a21 * m3_134_234 + a31 * m3_124_234 - a41 * m3_123_234;
    let m2_04_34 = a03 * a44 - a43 * a04;
    let m2_03_34 = a03 * a34 - a33 * a04;
    let m3_034_234 = a02 * m2_34_34 - a32 * m2_04_34 + a42 * m2_03_34;
    let m2_02_34 = a03 * a24 - a23 * a04;
    let m3_024_234 = a02 * m2_24_34 - a22 * m2_04_34 + a42 * m2_02_34;
    let m3_023_234 = a02 * m2_23_34 - a22 * m2_03_34 + a32 * m2_02_34;
    let m4_0234_1234 = a01 * m3_234_234 - a21 * m3_034_234 + a31 * m3_024_234 - a41 * m3_023_234;
    let m2_01_34 = a03 * a14 - a13 * a04;
    let m3_014_234 = a02 * m2_14_34 - a12 * m2_04_34 + a42 * m2_01_34;
    let m3_013_234 = a02 * m2_13_34 - a12 * m2_03_34 + a32 * m2_01_34;
    let m4_0134_1234 = a01 * m3_134_234 - a11 * m3_034_234 + a31 * m3_014_234 - a41 * m3_013_234;
    let m3_012_234 = a02 * m2_12_34 - a12 * m2_02_34 + a22 * m2_01_34;
    let m4_0124_1234 = a01 * m3_124_234 - a11 * m3_024_234 + a21 * m3_014_234 - a41 * m3_012_234;
    let m4_0123_1234 = a01 * m3_123_234 - a11 * m3_023_234 + a21 * m3_013_234 - a31 * m3_012_234;
    a00 * m4_1234_1234
        - a10 * m4_0234_1234
        + a20 * m4_0134_1234
        - a30 * m4_0124_1234
        + a40 * m4_0123_1234
}

/// Cofactor matrix of a 2x2 matrix.
#[inline]
pub fn cofactors2<T: Field>(m: &[[T; 2]; 2]) -> [[T; 2]; 2] {
    let a00 = m[0][0];
    let a10 = m[0][1];
    let a01 = m[1][0];
    let a11 = m[1][1];
    let c00 = a11;
    let c10 = -a01;
    let c01 = -a10;
    let c11 = a00;
    [
        [c00, c10],
        [c01, c11],
    ]
}

/// Cofactor matrix of a self-adjoint 2x2 matrix from its lower triangle.
#[inline]
pub fn symmetric_cofactors2<T: Field>(m: &[[T; 2]; 2]) -> [[T; 2]; 2] {
    let a00 = m[0][0];
    let a10 = m[0][1];
    let a11 = m[1][1];
    let a01 = a10.conj();
    let c00 = a11;
    let c10 = -a01;
    let c11 = a00;
    let c01 = c10.conj();
    [
        [c00, c10],
        [c01, c11],
    ]
}

/// Cofactor matrix of a 3x3 matrix.
#[inline]
pub fn cofactors3<T: Field>(m: &[[T; 3]; 3]) -> [[T; 3]; 3] {
    let a00 = m[0][0];
    let a10 = m[0][1];
    let a20 = m[0][2];
    let a01 = m[1][0];
    let a11 = m[1][1];
    let a21 = m[1][2];
    let a02 = m[2][0];
    let a12 = m[2][1];
    let a22 = m[2][2];
    let m2_12_12 = a11 * a22 - a21 * a12;
    let m2_02_12 = a01 * a22 - a21 * a02;
    let m2_01_12 = a01 * a12 - a11 * a02;
    let m2_12_02 = a10 * a22 - a20 * a12;
    let m2_02_02 = a00 * a22 - a20 * a02;
    let m2_01_02 = a00 * a12 - a10 * a02;
    let m2_12_01 = a10 * a21 - a20 * a11;
    let m2_02_01 = a00 * a21 - a20 * a01;
    let m2_01_01 = a00 * a11 - a10 * a01;
    let c00 = m2_12_12;
    let c10 = -m2_02_12;
    let c20 = m2_01_12;
    let c01 = -m2_12_02;
    let c11 = m2_02_02;
    let c21 = -m2_01_02;
    let c02 = m2_12_01;
    let c12 = -m2_02_01;
    let c22 = m2_01_01;
    [
        [c00, c10, c20],
        [c01, c11, c21],
        [c02, c12, c22],
    ]
}

/// Cofactor matrix of a self-adjoint 3x3 matrix from its lower triangle.
#[inline]
pub fn symmetric_cofactors3<T: Field>(m: &[[T; 3]; 3]) -> [[T; 3]; 3] {
    let a00 = m[0][0];
    let a10 = m[0][1];
    let a20 = m[0][2];
    let a11 = m[1][1];
    let a21 = m[1][2];
    let a22 = m[2][2];
    let a01 = a10.conj();
    let a02 = a20.conj();
    let a12 = a21.conj();
    let m2_12_12 = a11 * a22 - a21 * a12;
    let m2_02_12 = a01 * a22 - a21 * a02;
    let m2_01_12 = a01 * a12 - a11 * a02;
    let m2_02_02 = a00 * a22 - a20 * a02;
    let m2_01_02 = a00 * a12 - a10 * a02;
    let m2_01_01 = a00 * a11 - a10 * a01;
    let c00 = m2_12_12;
    let c10 = -m2_02_12;
    let c20 = m2_01_12;
    let c11 = m2_02_02;
    let c21 = -m2_01_02;
    let c22 = m2_01_01;
    let c01 = c10.conj();
    let c02 = c20.conj();
    let c12 = c21.conj();
    [
        [c00, c10, c20],
        [c01, c11, c21],
        [c02, c12, c22],
    ]
}

/// Cofactor matrix of a 4x4 matrix.
#[inline]
pub fn cofactors4<T: Field>(m: &[[T; 4]; 4]) -> [[T; 4]; 4] {
    let a00 = m[0][0];
    let a10 = m[0][1];
    let a20 = m[0][2];
    let a30 = m[0][3];
    let a01 = m[1][0];
    let a11 = m[1][1];
    let a21 = m[1][2];
    let a31 = m[1][3];
    let a02 = m[2][0];
    let a12 = m[2][1];
    let a22 = m[2][2];
    let a32 = m[2][3];
    let a03 = m[3][0];
    let a13 = m[3][1];
    let a23 = m[3][2];
    let a33 = m[3][3];
    let m2_23_23 = a22 * a33 - a32 * a23;
    let m2_13_23 = a12 * a33 - a32 * a13;
    let m2_12_23 = a12 * a23 - a22 * a13;
    let m3_123_123 = a11 * m2_23_23 - a21 * m2_13_23 + a31 * m2_12_23;
    let m2_03_23 = a02 * a33 - a32 * a03;
    let m2_02_23 = a02 * a23 - a22 * a03;
    let m3_023_123 = a01 * m2_23_23 - a21 * m2_03_23 + a31 * m2_02_23;
    let m2_01_23 = a02 * a13 - a12 * a03;
    let m3_013_123 = a01 * m2_13_23 - a11 * m2_03_23 + a31 * m2_01_23;
    let m3_012_123 = a01 * m2_12_23 - a11 * m2_02_23 + a21 * m2_01_23;
    let m3_123_023 = a10 * m2_23_23 - a20 * m2_13_23 + a30 * m2_12_23;
    let m3_023_023 = a00 * m2_23_23 - a20 * m2_03_23 + a30 * m2_02_23;
    let m3_013_023 = a00 * m2_13_23 - a10 * m2_03_23 + a30 * m2_01_23;
    let m3_012_023 = a00 * m2_12_23 - a10 * m2_02_23 + a20 * m2_01_23;
    let m2_23_13 = a21 * a33 - a31 * a23;
    let m2_13_13 = a11 * a33 - a31 * a13;
    let m2_12_13 = a11 * a23 - a21 * a13;
    let m3_123_013 = a10 * m2_23_13 - a20 * m2_13_13 + a30 * m2_12_13;
    let m2_03_13 = a01 * a33 - a31 * a03;
    let m2_02_13 = a01 * a23 - a21 * a03;
    let m3_023_013 = a00 * m2_23_13 - a20 * m2_03_13 + a30 * m2_02_13;
    let m2_01_13 = a01 * a13 - a11 * a03;
    let m3_013_013 = a00 * m2_13_13 - a10 * m2_03_13 + a30 * m2_01_13;
    let m3_012_013 = a00 * m2_12_13 - a10 * m2_02_13 + a20 * m2_01_13;
    let m2_23_12 = a21 * a32 - a31 * a22;
    let m2_13_12 = a11 * a32 - a31 * a12;
    let m2_12_12 = a11 * a22 - a21 * a12;
    let m3_123_012 = a10 * m2_23_12 - a20 * m2_13_12 + a30 * m2_12_12;
    let m2_03_12 = a01 * a32 - a31 * a02;
    let m2_02_12 = a01 * a22 - a21 * a02;
    let m3_023_012 = a00 * m2_23_12 - a20 * m2_03_12 + a30 * m2_02_12;
    let m2_01_12 = a01 * a12 - a11 * a02;
    let m3_013_012 = a00 * m2_13_12 - a10 * m2_03_12 + a30 * m2_01_12;
    let m3_012_012 = a00 * m2_12_12 - a10 * m2_02_12 + a20 * m2_01_12;
    let c00 = m3_123_123;
    let c10 = -m3_023_123;
    let c20 = m3_013_123;
    let c30 = -m3_012_123;
    let c01 = -m3_123_023;
    let c11 = m3_023_023;
    let c21 = -m3_013_023;
    let c31 = m3_012_023;
    let c02 = m3_123_013;
    let c12 = -m3_023_013;
    let c22 = m3_013_013;
    let c32 = -m3_012_013;
    let c03 = -m3_123_012;
    let c13 = m3_023_012;
    let c23 = -m3_013_012;
    let c33 = m3_012_012;
    [
        [c00, c10, c20, c30],
        [c01, c11, c21, c31],
        [c02, c12, c22, c32],
        [c03, c13, c23, c33],
    ]
}

/// Cofactor matrix of a self-adjoint 4x4 matrix from its lower triangle.
#[inline]
pub fn symmetric_cofactors4<T: Field>(m: &[[T; 4]; 4]) -> [[T; 4]; 4] {
    let a00 = m[0][0];
    let a10 = m[0][1];
    let a20 = m[0][2];
    let a30 = m[0][3];
    let a11 = m[1][1];
    let a21 = m[1][2];
    let a31 = m[1][3];
    let a22 = m[2][2];
    let a32 = m[2][3];
    let a33 = m[3][3];
    let a01 = a10.conj();
    let a02 = a20.conj();
    let a12 = a21.conj();
    let a03 = a30.conj();
    let a13 = a31.conj();
    let a23 = a32.conj();
    let m2_23_23 = a22 * a33 - a32 * a23;
    let m2_13_23 = a12 * a33 - a32 * a13;
    let m2_12_23 = a12 * a23 - a22 * a13;
    let m3_123_123 = a11 * m2_23_23 - a21 * m2_13_23 + a31 * m2_12_23;
    let m2_03_23 = a02 * a33 - a32 * a03;
    let m2_02_23 = a02 * a23 - a22 * a03;
    let m3_023_123 = a01 * m2_23_23 - a21 * m2_03_23 + a31 * m2_02_23;
    let m2_01_23 = a02 * a13 - a12 * a03;
    let m3_013_123 = a01 * m2_13_23 - a11 * m2_03_23 + a31 * m2_01_23;
    let m3_012_123 = a01 * m2_12_23 - a11 * m2_02_23 + a21 * m2_01_23;
    let m3_023_023 = a00 * m2_23_23 - a20 * m2_03_23 + a30 * m2_02_23;
    let m3_013_023 = a00 * m2_13_23 - a10 * m2_03_23 + a30 * m2_01_23;
    let m3_012_023 = a00 * m2_12_23 - a10 * m2_02_23 + a20 * m2_01_23;
    let m2_13_13 = a11 * a33 - a31 * a13;
    let m2_03_13 = a01 * a33 - a31 * a03;
    let m2_01_13 = a01 * a13 - a11 * a03;
    let m3_013_013 = a00 * m2_13_13 - a10 * m2_03_13 + a30 * m2_01_13;
    let m2_12_13 = a11 * a23 - a21 * a13;
    let m2_02_13 = a01 * a23 - a21 * a03;
    let m3_012_013 = a00 * m2_12_13 - a10 * m2_02_13 + a20 * m2_01_13;
    let m2_12_12 = a11 * a22 - a21 * a12;
    let m2_02_12 = a01 * a22 - a21 * a02;
    let m2_01_12 = a01 * a12 - a11 * a02;
    let m3_012_012 = a00 * m2_12_12 - a10 * m2_02_12 + a20 * m2_01_12;
    let c00 = m3_123_123;
    let c10 = -m3_023_123;
    let c20 = m3_013_123;
    let c30 = -m3_012_123;
    let c11 = m3_023_023;
    let c21 = -m3_013_023;
    let c31 = m3_012_023;
    let c22 = m3_013_013;
    let c32 = -m3_012_013;
    let c33 = m3_012_012;
    let c01 = c10.conj();
    let c02 = c20.conj();
    let c12 = c21.conj();
    let c03 = c30.conj();
    let c13 = c31.conj();
    let c23 = c32.conj();
    [
        [c00, c10, c20, c30],
        [c01, c11, c21, c31],
        [c02, c12, c22, c32],
        [c03, c13, c23, c33],
    ]
}

/// Cofactor matrix of a 5x5 matrix.
#[inline]
pub fn cofactors5<T: Field>(m: &[[T; 5]; 5]) -> [[T; 5]; 5] {
    let a00 = m[0][0];
    let a10 = m[0][1];
    let a20 = m[0][2];
    let a30 = m[0][3];
    let a40 = m[0][4];
    let a01 = m[1][0];
    let a11 = m[1][1];
    let a21 = m[1][2];
    let a31 = m[1][3];
    let a41 = m[1][4];
    let a02 = m[2][0];
    let a12 = m[2][1];
    let a22 = m[2][2];
    let a32 = m[2][3];
    let a42 = m[2][4];
    let a03 = m[3][0];
    let a13 = m[3][1];
    let a23 = m[3][2];
    let a33 = m[3][3];
    let a43 = m[3][4];
    let a04 = m[4][0];
    let a14 = m[4][1];
    let a24 = m[4][2];
    let a34 = m[4][3];
    let a44 = m[4][4];
    let m2_34_34 = a33 * a44 - a43 * a34;
    let m2_24_34 = a23 * a44 - a43 * a24;
    let m2_23_34 = a23 * a34 - a33 * a24;
    let m3_234_234 = a22 * m2_34_34 - a32 * m2_24_34 + a42 * m2_23_34;
    let m2_14_34 = a13 * a44 - a43 * a14;
    let m2_13_34 = a13 * a34 - a33 * a14;
    let m3_134_234 = a12 * m2_34_34 - a32 * m2_14_34 + a42 * m2_13_34;
    let m2_12_34 = a13 * a24 - a23 * a14;
    let m3_124_234 = a12 * m2_24_34 - a22 * m2_14_34 + a42 * m2_12_34;
    let m3_123_234 = a12 * m2_23_34 - a22 * m2_13_34 + a32 * m2_12_34;
    let m4_1234_1234 = a11 * m3_234_234 - a21 * m3_134_234 + a31 * m3_124_234 - a41 * m3_123_234;
    let m2_04_34 = a03 * a44 - a43 * a04;
    let m2_03_34 = a03 * a34 - a33 * a04;
    let m3_034_234 = a02 * m2_34_34 - a32 * m2_04_34 + a42 * m2_03_34;
    let m2_02_34 = a03 * a24 - a23 * a04;
    let m3_024_234 = a02 * m2_24_34 - a22 * m2_04_34 + a42 * m2_02_34;
    let m3_023_234 = a02 * m2_23_34 - a22 * m2_03_34 + a32 * m2_02_34;
    let m4_0234_1234 = a01 * m3_234_234 - a21 * m3_034_234 + a31 * m3_024_234 - a41 * m3_023_234;
    let m2_01_34 = a03 * a14 - a13 * a04;
    let m3_014_234 = a02 * m2_14_34 - a12 * m2_04_34 + a42 * m2_01_34;
    let m3_013_234 = a02 * m2_13_34 - a12 * m2_03_34 + a32 * m2_01_34;
    let m4_0134_1234 = a01 * m3_134_234 - a11 * m3_034_234 + a31 * m3_014_234 - a41 * m3_013_234;
    let m3_012_234 = a02 * m2_12_34 - a12 * m2_02_34 + a22 * m2_01_34;
    let m4_0124_1234 = a01 * m3_124_234 - a11 * m3_024_234 + a21 * m3_014_234 - a41 * m3_012_234;
    let m4_0123_1234 = a01 * m3_123_234 - a11 * m3_023_234 + a21 * m3_013_234 - a31 * m3_012_234;
    let m4_1234_0234 = a10 * m3_234_234 - a20 * m3_134_234 + a30 * m3_124_234 - a40 * m3_123_234;
    let m4_0234_0234 = a00 * m3_234_234 - a20 * m3_034_234 + a30 * m3_024_234 - a40 * m3_023_234;
    let m4_0134_0234 = a00 * m3_134_234 - a10 * m3_034_234 + a30 * m3_014_234 - a40 * m3_013_234;
    let m4_0124_0234 = a00 * m3_124_234 - a10 * m3_024_234 + a20 * m3_014_234 - a40 * m3_012_234;
    let m4_0123_0234 = a00 * m3_123_234 - a10 * m3_023_234 + a20 * m3_013_234 - a30 * m3_012_234;
    let m3_234_134 = a21 * m2_34_34 - a31 * m2_24_34 + a41 * m2_23_34;
    let m3_134_134 = a11 * m2_34_34 - a31 * m2_14_34 + a41 * m2_13_34;
    let m3_124_134 = a11 * m2_24_34 - a21 * m2_14_34 + a41 * m2_12_34;
    let m3_123_134 = a11 * m2_23_34 - a21 * m2_13_34 + a31 * m2_12_34;
    let m4_1234_0134 = a10 * m3_234_134 - a20 * m3_134_134 + a30 * m3_124_134 - a40 * m3_123_134;
    let m3_034_134 = a01 * m2_34_34 - a31 * m2_04_34 + a41 * m2_03_34;
    let m3_024_134 = a01 * m2_24_34 - a21 * m2_04_34 + a41 * m2_02_34;
    let m3_023_134 = a01 * m2_23_34 - a21 * m2_03_34 + a31 * m2_02_34;
    let m4_0234_0134 = a00 * m3_234_134 - a20 * m3_034_134 + a30 * m3_024_134 - a40 * m3_023_134;
    let m3_014_134 = a01 * m2_14_34 - a11 * m2_04_34 + a41 * m2_01_34;
    let m3_013_134 = a01 * m2_13_34 - a11 * m2_03_34 + a31 * m2_01_34;
    let m4_0134_0134 = a00 * m3_134_134 - a10 * m3_034_134 + a30 * m3_014_134 - a40 * m3_013_134;
    let m3_012_134 = a01 * m2_12_34 - a11 * m2_02_34 + a21 * m2_01_34;
    let m4_0124_0134 = a00 * m3_124_134 - a10 * m3_024_134 + a20 * m3_014_134 - a40 * m3_012_134;
    let m4_0123_0134 = a00 * m3_123_134 - a10 * m3_023_134 + a20 * m3_013_134 - a30 * m3_012_134;
    let m2_34_24 = a32 * a44 - a42 * a34;
    let m2_24_24 = a22 * a44 - a42 * a24;
    let m2_23_24 = a22 * a34 - a32 * a24;
    let m3_234_124 = a21 * m2_34_24 - a31 * m2_24_24 + a41 * m2_23_24;
    let m2_14_24 = a12 * a44 - a42 * a14;
    let m2_13_24 = a12 * a34 - a32 * a14;
    let m3_134_124 = a11 * m2_34_24 - a31 * m2_14_24 + a41 * m2_13_24;
    let m2_12_24 = a12 * a24 - a22 * a14;
    let m3_124_124 = a11 * m2_24_24 - a21 * m2_14_24 + a41 * m2_12_24;
    let m3_123_124 = a11 * m2_23_24 - a21 * m2_13_24 + a31 * m2_12_24;
    let m4_1234_0124 = a10 * m3_234_124 - a20 * m3_134_124 + a30 * m3_124_124 - a40 * m3_123_124;
    let m2_04_24 = a02 * a44 - a42 * a04;
    let m2_03_24 = a02 * a34 - a32 * a04;
    let m3_034_124 = a01 * m2_34_24 - a31 * m2_04_24 + a41 * m2_03_24;
    let m2_02_24 = a02 * a24 - a22 * a04;
    let m3_024_124 = a01 * m2_24_24 - a21 * m2_04_24 + a41 * m2_02_24;
    let m3_023_124 = a01 * m2_23_24 - a21 * m2_03_24 + a31 * m2_02_24;
    let m4_0234_0124 = a00 * m3_234_124 - a20 * m3_034_124 + a30 * m3_024_124 - a40 * m3_023_124;
    let m2_01_24 = a02 * a14 - a12 * a04;
    let m3_014_124 = a01 * m2_14_24 - a11 * m2_04_24 + a41 * m2_01_24;
    let m3_013_124 = a01 * m2_13_24 - a11 * m2_03_24 + a31 * m2_01_24;
    let m4_0134_0124 = a00 * m3_134_124 - a10 * m3_034_124 + a30 * m3_014_124 - a40 * m3_013_124;
    let m3_012_124 = a01 * m2_12_24 - a11 * m2_02_24 + a21 * m2_01_24;
    let m4_0124_0124 = a00 * m3_124_124 - a10 * m3_024_124 + a20 * m3_014_124 - a40 * m3_012_124;
    let m4_0123_0124 = a00 * m3_123_124 - a10 * m3_023_124 + a20 * m3_013_124 - a30 * m3_012_124;
    let m2_34_23 = a32 * a43 - a42 * a33;
    let m2_24_23 = a22 * a43 - a42 * a23;
    let m2_23_23 = a22 * a33 - a32 * a23;
    let m3_234_123 = a21 * m2_34_23 - a31 * m2_24_23 + a41 * m2_23_23;
    let m2_14_23 = a12 * a43 - a42 * a13;
    let m2_13_23 = a12 * a33 - a32 * a13;
    let m3_134_123 = a11 * m2_34_23 - a31 * m2_14_23 + a41 * m2_13_23;
    let m2_12_23 = a12 * a23 - a22 * a13;
    let m3_124_123 = a11 * m2_24_23 - a21 * m2_14_23 + a41 * m2_12_23;
    let m3_123_123 = a11 * m2_23_23 - a21 * m2_13_23 + a31 * m2_12_23;
    let m4_1234_0123 = a10 * m3_234_123 - a20 * m3_134_123 + a30 * m3_124_123 - a40 * m3_123_123;
    let m2_04_23 = a02 * a43 - a42 * a03;
    let m2_03_23 = a02 * a33 - a32 * a03;
    let m3_034_123 = a01 * m2_34_23 - a31 * m2_04_23 + a41 * m2_03_23;
    let m2_02_23 = a02 * a23 - a22 * a03;
    let m3_024_123 = a01 * m2_24_23 - a21 * m2_04_23 + a41 * m2_02_23;
    let m3_023_123 = a01 * m2_23_23 - a21 * m2_03_23 + a31 * m2_02_23;
    let m4_0234_0123 = a00 * m3_234_123 - a20 * m3_034_123 + a30 * m3_024_123 - a40 * m3_023_123;
    let m2_01_23 = a02 * a13 - a12 * a03;
    let m3_014_123 = a01 * m2_14_23 - a11 * m2_04_23 + a41 * m2_01_23;
    let m3_013_123 = a01 * m2_13_23 - a11 * m2_03_23 + a31 * m2_01_23;
    let m4_0134_0123 = a00 * m3_134_123 - a10 * m3_034_123 + a30 * m3_014_123 - a40 * m3_013_123;
    let m3_012_123 = a01 * m2_12_23 - a11 * m2_02_23 + a21 * m2_01_23;
    let m4_0124_0123 = a00 * m3_124_123 - a10 * m3_024_123 + a20 * m3_014_123 - a40 * m3_012_123;
    let m4_0123_0123 = a00 * m3_123_123 - a10 * m3_023_123 + a20 * m3_013_123 - a30 * m3_012_123;
    let c00 = m4_1234_1234;
    let c10 = -m4_0234_1234;
    let c20 = m4_0134_1234;
    let c30 = -m4_0124_1234;
    let c40 = m4_0123_1234;
    let c01 = -m4_1234_0234;
    let c11 = m4_0234_0234;
    let c21 = -m4_0134_0234;
    let c31 = m4_0124_0234;
    let c41 = -m4_0123_0234;
    let c02 = m4_1234_0134;
    let c12 = -m4_0234_0134;
    let c22 = m4_0134_0134;
    let c32 = -m4_0124_0134;
    let c42 = m4_0123_0134;
    let c03 = -m4_1234_0124;
    let c13 = m4_0234_0124;
    let c23 = -m4_0134_0124;
    let c33 = m4_0124_0124;
    let c43 = -m4_0123_0124;
    let c04 = m4_1234_0123;
    let c14 = -m4_0234_0123;
    let c24 = m4_0134_0123;
    let c34 = -m4_0124_0123;
    let c44 = m4_0123_0123;
    [
        [c00, c10, c20, c30, c40],
        [c01, c11, c21, c31, c41],
        [c02, c12, c22, c32, c42],
        [c03, c13, c23, c33, c43],
        [c04, c14, c24, c34, c44],
    ]
}

/// Cofactor matrix of a self-adjoint 5x5 matrix from its lower triangle.
#[inline]
pub fn symmetric_cofactors5<T: Field>(m: &[[T; 5]; 5]) -> [[T; 5]; 5] {
    let a00 = m[0][0];
    let a10 = m[0][1];
    let a20 = m[0][2];
    let a30 = m[0][3];
    let a40 = m[0][4];
    let a11 = m[1][1];
    let a21 = m[1][2];
    let a31 = m[1][3];
    let a41 = m[1][4];
    let a22 = m[2][2];
    let a32 = m[2][3];
    let a42 = m[2][4];
    let a33 = m[3][3];
    let a43 = m[3][4];
    let a44 = m[4][4];
    let a01 = a10.conj();
    let a02 = a20.conj();
    let a12 = a21.conj();
    let a03 = a30.conj();
    let a13 = a31.conj();
    let a23 = a32.conj();
    let a04 = a40.conj();
    let a14 = a41.conj();
    let a24 = a42.conj();
    let a34 = a43.conj();
    let m2_34_34 = a33 * a44 - a43 * a34;
    let m2_24_34 = a23 * a44 - a43 * a24;
    let m2_23_34 = a23 * a34 - a33 * a24;
    let m3_234_234 = a22 * m2_34_34 - a32 * m2_24_34 + a42 * m2_23_34;
    let m2_14_34 = a13 * a44 - a43 * a14;
    let m2_13_34 = a13 * a34 - a33 * a14;
    let m3_134_234 = a12 * m2_34_34 - a32 * m2_14_34 + a42 * m2_13_34;
    let m2_12_34 = a13 * a24 - a23 * a14;
    let m3_124_234 = a12 * m2_24_34 - a22 * m2_14_34 + a42 * m2_12_34;
    let m3_123_234 = a12 * m2_23_34 - a22 * m2_13_34 + a32 * m2_12_34;
    let m4_1234_1234 = a11 * m3_234_234 - a21 * m3_134_234 + a31 * m3_124_234 - a41 * m3_123_234;
    let m2_04_34 = a03 * a44 - a43 * a04;
    let m2_03_34 = a03 * a34 - a33 * a04;
    let m3_034_234 = a02 * m2_34_34 - a32 * m2_04_34 + a42 * m2_03_34;
    let m2_02_34 = a03 * a24 - a23 * a04;
    let m3_024_234 = a02 * m2_24_34 - a22 * m2_04_34 + a42 * m2_02_34;
    let m3_023_234 = a02 * m2_23_34 - a22 * m2_03_34 + a32 * m2_02_34;
    let m4_0234_1234 = a01 * m3_234_234 - a21 * m3_034_234 + a31 * m3_024_234 - a41 * m3_023_234;
    let m2_01_34 = a03 * a14 - a13 * a04;
    let m3_014_234 = a02 * m2_14_34 - a12 * m2_04_34 + a42 * m2_01_34;
    let m3_013_234 = a02 * m2_13_34 - a12 * m2_03_34 + a32 * m2_01_34;
    let m4_0134_1234 = a01 * m3_134_234 - a11 * m3_034_234 + a31 * m3_014_234 - a41 * m3_013_234;
    let m3_012_234 = a02 * m2_12_34 - a12 * m2_02_34 + a22 * m2_01_34;
    let m4_0124_1234 = a01 * m3_124_234 - a11 * m3_024_234 + a21 * m3_014_234 - a41 * m3_012_234;
    let m4_0123_1234 = a01 * m3_123_234 - a11 * m3_023_234 + a21 * m3_013_234 - a31 * m3_012_234;
    let m4_0234_0234 = a00 * m3_234_234 - a20 * m3_034_234 + a30 * m3_024_234 - a40 * m3_023_234;
    let m4_0134_0234 = a00 * m3_134_234 - a10 * m3_034_234 + a30 * m3_014_234 - a40 * m3_013_234;
    let m4_0124_0234 = a00 * m3_124_234 - a10 * m3_024_234 + a20 * m3_014_234 - a40 * m3_012_234;
    let m4_0123_0234 = a00 * m3_123_234 - a10 * m3_023_234 + a20 * m3_013_234 - a30 * m3_012_234;
    let m3_134_134 = a11 * m2_34_34 - a31 * m2_14_34 + a41 * m2_13_34;
    let m3_034_134 = a01 * m2_34_34 - a31 * m2_04_34 + a41 * m2_03_34;
    let m3_014_134 = a01 * m2_14_34 - a11 * m2_04_34 + a41 * m2_01_34;
    let m3_013_134 = a01 * m2_13_34 - a11 * m2_03_34 + a31 * m2_01_34;
    let m4_0134_0134 = a00 * m3_134_134 - a10 * m3_034_134 + a30 * m3_014_134 - a40 * m3_013_134;
    let m3_124_134 = a11 * m2_24_34 - a21 * m2_14_34 + a41 * m2_12_34;
    let m3_024_134 = a01 * m2_24_34 - a21 * m2_04_34 + a41 * m2_02_34;
    let m3_012_134 = a01 * m2_12_34 - a11 * m2_02_34 + a21 * m2_01_34;
    let m4_0124_0134 = a00 * m3_124_134 - a10 * m3_024_134 + a20 * m3_014_134 - a40 * m3_012_134;
    let m3_123_134 = a11 * m2_23_34 - a21 * m2_13_34 + a31 * m2_12_34;
    let m3_023_134 = a01 * m2_23_34 - a21 * m2_03_34 + a31 * m2_02_34;
    let m4_0123_0134 = a00 * m3_123_134 - a10 * m3_023_134 + a20 * m3_013_134 - a30 * m3_012_134;
    let m2_24_24 = a22 * a44 - a42 * a24;
    let m2_14_24 = a12 * a44 - a42 * a14;
    let m2_12_24 = a12 * a24 - a22 * a14;
    let m3_124_124 = a11 * m2_24_24 - a21 * m2_14_24 + a41 * m2_12_24;
    let m2_04_24 = a02 * a44 - a42 * a04;
    let m2_02_24 = a02 * a24 - a22 * a04;
    let m3_024_124 = a01 * m2_24_24 - a21 * m2_04_24 + a41 * m2_02_24;
    let m2_01_24 = a02 * a14 - a12 * a04;
    let m3_014_124 = a01 * m2_14_24 - a11 * m2_04_24 + a41 * m2_01_24;
    let m3_012_124 = a01 * m2_12_24 - a11 * m2_02_24 + a21 * m2_01_24;
    let m4_0124_0124 = a00 * m3_124_124 - a10 * m3_024_124 + a20 * m3_014_124 - a40 * m3_012_124;
    let m2_23_24 = a22 * a34 - a32 * a24;
    let m2_13_24 = a12 * a34 - a32 * a14;
    let m3_123_124 = a11 * m2_23_24 - a21 * m2_13_24 + a31 * m2_12_24;
    let m2_03_24 = a02 * a34 - a32 * a04;
    let m3_023_124 = a01 * m2_23_24 - a21 * m2_03_24 + a31 * m2_02_24;
    let m3_013_124 = a01 * m2_13_24 - a11 * m2_03_24 + a31 * m2_01_24;
    let m4_0123_0124 = a00 * m3_123_124 - a10 * m3_023_124 + a20 * m3_013_124 - a30 * m3_012_124;
    let m2_23_23 = a22 * a33 - a32 * a23;
    let m2_13_23 = a12 * a33 - a32 * a13;
    let m2_12_23 = a12 * a23 - a22 * a13;
    let m3_123_123 = a11 * m2_23_23 - a21 * m2_13_23 + a31 * m2_12_23;
    let m2_03_23 = a02 * a33 - a32 * a03;
    let m2_02_23 = a02 * a23 - a22 * a03;
    let m3_023_123 = a01 * m2_23_23 - a21 * m2_03_23 + a31 * m2_02_23;
    let m2_01_23 = a02 * a13 - a12 * a03;
    let m3_013_123 = a01 * m2_13_23 - a11 * m2_03_23 + a31 * m2_01_23;
    let m3_012_123 = a01 * m2_12_23 - a11 * m2_02_23 + a21 * m2_01_23;
    let m4_0123_0123 = a00 * m3_123_123 - a10 * m3_023_123 + a20 * m3_013_123 - a30 * m3_012_123;
    let c00 = m4_1234_1234;
    let c10 = -m4_0234_1234;
    let c20 = m4_0134_1234;
    let c30 = -m4_0124_1234;
    let c40 = m4_0123_1234;
    let c11 = m4_0234_0234;
    let c21 = -m4_0134_0234;
    let c31 = m4_0124_0234;
    let c41 = -m4_0123_0234;
    let c22 = m4_0134_0134;
    let c32 = -m4_0124_0134;
    let c42 = m4_0123_0134;
    let c33 = m4_0124_0124;
    let c43 = -m4_0123_0124;
    let c44 = m4_0123_0123;
    let c01 = c10.conj();
    let c02 = c20.conj();
    let c12 = c21.conj();
    let c03 = c30.conj();
    let c13 = c31.conj();
    let c23 = c32.conj();
    let c04 = c40.conj();
    let c14 = c41.conj();
    let c24 = c42.conj();
    let c34 = c43.conj();
    [
        [c00, c10, c20, c30, c40],
        [c01, c11, c21, c31, c41],
        [c02, c12, c22, c32, c42],
        [c03, c13, c23, c33, c43],
        [c04, c14, c24, c34, c44],
    ]
}
