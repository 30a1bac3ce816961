use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while configuring, solving, or reading a plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlateError {
    /// The grid is too small to have any interior cells.
    ///
    /// Both dimensions must be at least 3.
    #[error("grid must be at least 3x3, got {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,

        /// Requested column count.
        cols: usize,
    },

    /// The iteration count is negative.
    #[error("iteration count must not be negative, got {iterations}")]
    InvalidIterationCount {
        /// Requested iteration count.
        iterations: i64,

        /// Underlying constraint violation.
        #[source]
        source: ConstraintError,
    },

    /// A field was indexed outside of its bounds.
    #[error("index ({row}, {col}) is out of range for a {rows}x{cols} field")]
    IndexOutOfRange {
        /// Requested row index.
        row: usize,

        /// Requested column index.
        col: usize,

        /// Row count of the field.
        rows: usize,

        /// Column count of the field.
        cols: usize,
    },

    /// The solver was asked to solve a second time.
    ///
    /// A [`Solver`](super::Solver) hands its field to the first
    /// [`Solution`](super::Solution) and cannot be rerun.
    #[error("solver has already produced a solution")]
    AlreadySolved,
}
