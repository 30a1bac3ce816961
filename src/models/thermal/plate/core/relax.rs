//! Jacobi relaxation pass.
//!
//! Each interior cell of `next` becomes the mean of its four axis-aligned
//! neighbors in `current`. Reads come only from `current` and writes go only
//! to `next`, so every cell sees the same pre-pass state regardless of
//! evaluation order. With the `rayon` feature the cells are split across
//! threads; the arithmetic per cell is unchanged, so results are identical.

use ndarray::{Zip, s};

use super::Field;

/// Writes one relaxation pass of `current` into the interior of `next`.
///
/// Edge cells of `next` are left untouched.
///
/// # Panics
///
/// Panics if the fields differ in shape or are smaller than 3x3.
pub(super) fn relax(current: &Field, next: &mut Field) {
    let old = current.as_array();
    let (rows, cols) = old.dim();
    debug_assert!(rows >= 3 && cols >= 3, "relaxation requires an interior");

    let above = old.slice(s![..rows - 2, 1..cols - 1]);
    let below = old.slice(s![2.., 1..cols - 1]);
    let left = old.slice(s![1..rows - 1, ..cols - 2]);
    let right = old.slice(s![1..rows - 1, 2..]);

    let mut interior = next.values_mut().slice_mut(s![1..rows - 1, 1..cols - 1]);

    let zip = Zip::from(&mut interior)
        .and(&above)
        .and(&below)
        .and(&left)
        .and(&right);

    #[cfg(feature = "rayon")]
    zip.par_for_each(|t, &up, &down, &l, &r| *t = 0.25 * (up + down + l + r));

    #[cfg(not(feature = "rayon"))]
    zip.for_each(|t, &up, &down, &l, &r| *t = 0.25 * (up + down + l + r));
}
