//! Stack copies of small square operands.
//!
//! Blocks are `[[T; N]; N]` indexed `block[column][row]`, the same layout
//! the cofactor functions in [`crate::minors`] consume.

use num_traits::Zero;
use smallmat_view::Access2D;

/// Read all `N * N` entries by column-major linear index.
#[inline(always)]
pub(crate) fn load_block<T, M, const N: usize>(m: &M) -> [[T; N]; N]
where
    T: Copy + Zero,
    M: Access2D<T> + ?Sized,
{
    let mut block = [[T::zero(); N]; N];
    for (c, column) in block.iter_mut().enumerate() {
        for (r, v) in column.iter_mut().enumerate() {
            *v = m.at(r + c * N);
        }
    }
    block
}

/// Read only the lower triangle (`row >= column`); the rest stays zero.
#[inline(always)]
pub(crate) fn load_lower_block<T, M, const N: usize>(m: &M) -> [[T; N]; N]
where
    T: Copy + Zero,
    M: Access2D<T> + ?Sized,
{
    let mut block = [[T::zero(); N]; N];
    for (c, column) in block.iter_mut().enumerate() {
        for (r, v) in column.iter_mut().enumerate().skip(c) {
            *v = m.at(r + c * N);
        }
    }
    block
}

/// Column `j` of an `N`-row right-hand side.
#[inline(always)]
pub(crate) fn load_column<T, M, const N: usize>(m: &M, j: usize) -> [T; N]
where
    T: Copy + Zero,
    M: Access2D<T> + ?Sized,
{
    let mut column = [T::zero(); N];
    for (r, v) in column.iter_mut().enumerate() {
        *v = m.at(r + j * N);
    }
    column
}
