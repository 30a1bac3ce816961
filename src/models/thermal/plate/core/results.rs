//! Results of a plate solve.

use std::time::Duration;

use super::Field;

/// Final field, optional history, and timing for a finished solve.
///
/// The final field has corrected corners.
/// History frames do not: each frame is a copy of the working field taken
/// right after a relaxation pass, so its corners still hold the values left
/// there by boundary stamping.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    field: Field,
    history: Vec<Field>,
    elapsed: Duration,
}

impl Solution {
    pub(super) fn new(field: Field, history: Vec<Field>, elapsed: Duration) -> Self {
        Self {
            field,
            history,
            elapsed,
        }
    }

    /// The finalized temperature field.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// One frame per relaxation pass, in order.
    ///
    /// Empty when history capture was disabled or no passes ran.
    #[must_use]
    pub fn history(&self) -> &[Field] {
        &self.history
    }

    /// Wall-clock time spent in the relaxation loop.
    ///
    /// Boundary stamping and corner correction are not included.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Largest per-cell change between the last two history frames.
    ///
    /// Returns `None` if fewer than two frames were recorded.
    #[must_use]
    pub fn last_change(&self) -> Option<f64> {
        match self.history.as_slice() {
            [.., previous, last] => last.max_abs_difference(previous),
            _ => None,
        }
    }

    /// Consumes the solution, returning the final field and history.
    #[must_use]
    pub fn into_parts(self) -> (Field, Vec<Field>) {
        (self.field, self.history)
    }
}
