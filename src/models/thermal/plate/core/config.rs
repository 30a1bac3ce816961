use crate::support::constraint::{Constrained, Constraint, ConstraintError, NonNegative};

use super::PlateError;

/// Smallest grid extent that still has an interior cell.
pub const MIN_EXTENT: usize = 3;

/// Fixed values imposed on the four edges of the plate.
///
/// The values are independent of one another.
/// Inconsistent edges (e.g., a hot top meeting a cold left) are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundaries {
    /// Value stamped on row 0.
    pub top: f64,

    /// Value stamped on the last row.
    pub bottom: f64,

    /// Value stamped on column 0.
    pub left: f64,

    /// Value stamped on the last column.
    pub right: f64,
}

impl Boundaries {
    /// Returns boundaries with the same value on every edge.
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }
}

/// Parameters for a steady-state plate solve.
///
/// Every field is required. Validation happens in [`Solver::new`](super::Solver::new).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlateConfig {
    /// Number of grid rows, at least [`MIN_EXTENT`].
    pub rows: usize,

    /// Number of grid columns, at least [`MIN_EXTENT`].
    pub cols: usize,

    /// Edge values.
    pub boundaries: Boundaries,

    /// Value every cell holds before the edges are stamped.
    pub initial_value: f64,

    /// Number of relaxation passes; zero applies boundaries and corners only.
    pub iterations: i64,
}

impl PlateConfig {
    /// Checks grid extents and the iteration count.
    ///
    /// # Errors
    ///
    /// Returns [`PlateError::InvalidDimensions`] if either extent is below
    /// [`MIN_EXTENT`], or [`PlateError::InvalidIterationCount`] if
    /// `iterations` is negative.
    pub(super) fn validate(&self) -> Result<ValidConfig, PlateError> {
        let dims_error = PlateError::InvalidDimensions {
            rows: self.rows,
            cols: self.cols,
        };
        let rows = Constrained::<_, GridExtent>::new(self.rows).map_err(|_| dims_error)?;
        let cols = Constrained::<_, GridExtent>::new(self.cols).map_err(|_| dims_error)?;

        let invalid_iterations = |source| PlateError::InvalidIterationCount {
            iterations: self.iterations,
            source,
        };
        let iterations = NonNegative::new(self.iterations).map_err(invalid_iterations)?;
        let iterations = usize::try_from(iterations.into_inner())
            .map_err(|_| invalid_iterations(ConstraintError::AboveMaximum))?;

        Ok(ValidConfig {
            rows: rows.into_inner(),
            cols: cols.into_inner(),
            boundaries: self.boundaries,
            initial_value: self.initial_value,
            iterations,
        })
    }
}

/// A [`PlateConfig`] whose extents and iteration count have been checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ValidConfig {
    pub(super) rows: usize,
    pub(super) cols: usize,
    pub(super) boundaries: Boundaries,
    pub(super) initial_value: f64,
    pub(super) iterations: usize,
}

/// Marker constraint for a grid extent of at least [`MIN_EXTENT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridExtent;

impl Constraint<usize> for GridExtent {
    fn check(value: &usize) -> Result<(), ConstraintError> {
        if *value < MIN_EXTENT {
            return Err(ConstraintError::BelowMinimum);
        }
        Ok(())
    }
}
