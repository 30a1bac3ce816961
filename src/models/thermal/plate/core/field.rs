//! Rectangular temperature field.

use ndarray::{Array2, ArrayView2, Zip};

use super::{Boundaries, PlateError};

/// A `rows × cols` grid of temperature values.
///
/// Row 0 is the top edge and column 0 is the left edge.
/// Values are unitless; the [`SteadyStatePlate`](crate::models::thermal::plate::SteadyStatePlate)
/// adapter interprets them as kelvin.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    values: Array2<f64>,
}

impl Field {
    /// Creates a field with every cell set to `value`.
    pub(super) fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            values: Array2::from_elem((rows, cols), value),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    /// Returns the value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`PlateError::IndexOutOfRange`] if the index is outside the field.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, PlateError> {
        self.values
            .get((row, col))
            .copied()
            .ok_or(PlateError::IndexOutOfRange {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Read-only view of the underlying array, indexed `[[row, col]]`.
    #[must_use]
    pub fn as_array(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    /// Largest absolute cell-wise difference between two fields.
    ///
    /// Returns `None` if the fields have different shapes or are empty.
    #[must_use]
    pub fn max_abs_difference(&self, other: &Field) -> Option<f64> {
        if self.values.dim() != other.values.dim() || self.values.is_empty() {
            return None;
        }

        Some(
            Zip::from(&self.values)
                .and(&other.values)
                .fold(0.0_f64, |acc, &a, &b| acc.max((a - b).abs())),
        )
    }

    /// Stamps the four edges with their boundary values.
    ///
    /// Rows are stamped before columns, so until [`correct_corners`](Self::correct_corners)
    /// runs each corner holds the left or right value.
    pub(super) fn stamp_boundaries(&mut self, boundaries: &Boundaries) {
        let last_row = self.rows() - 1;
        let last_col = self.cols() - 1;

        self.values.row_mut(0).fill(boundaries.top);
        self.values.row_mut(last_row).fill(boundaries.bottom);
        self.values.column_mut(0).fill(boundaries.left);
        self.values.column_mut(last_col).fill(boundaries.right);
    }

    /// Replaces each corner with the mean of its two adjacent edge cells.
    pub(super) fn correct_corners(&mut self) {
        let r = self.rows() - 1;
        let c = self.cols() - 1;
        let v = &mut self.values;

        v[[0, 0]] = 0.5 * (v[[1, 0]] + v[[0, 1]]);
        v[[r, 0]] = 0.5 * (v[[r - 1, 0]] + v[[r, 1]]);
        v[[0, c]] = 0.5 * (v[[0, c - 1]] + v[[1, c]]);
        v[[r, c]] = 0.5 * (v[[r, c - 1]] + v[[r - 1, c]]);
    }

    /// Iterates over the non-corner edge cells as `(row, col, value)`.
    #[cfg(test)]
    pub(super) fn edge_cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let (rows, cols) = self.values.dim();
        self.values
            .indexed_iter()
            .filter(move |&((i, j), _)| {
                let on_row_edge = i == 0 || i == rows - 1;
                let on_col_edge = j == 0 || j == cols - 1;
                on_row_edge != on_col_edge
            })
            .map(|((i, j), &value)| (i, j, value))
    }

    /// Mutable access to the backing array for the relaxation kernel.
    pub(super) fn values_mut(&mut self) -> &mut Array2<f64> {
        &mut self.values
    }

    /// Interior block, excluding all edge rows and columns.
    #[cfg(test)]
    pub(super) fn interior(&self) -> ArrayView2<'_, f64> {
        let (rows, cols) = self.values.dim();
        self.values.slice(ndarray::s![1..rows - 1, 1..cols - 1])
    }
}
