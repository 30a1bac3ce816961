//! Iteration driver for the plate solve.

use std::time::{Duration, Instant};

use super::{Field, PlateConfig, PlateError, Solution, config::ValidConfig, relax::relax};

/// Lifecycle stage of a [`Solver`].
///
/// A solver moves through the stages in order and never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The field holds the initial value everywhere.
    Uninitialized,

    /// Edges have been stamped with their boundary values.
    BoundariesApplied,

    /// Relaxation passes are running.
    Relaxing,

    /// Corners are corrected and the field has been handed to a [`Solution`].
    Finalized,
}

/// Jacobi relaxation solver for a rectangular plate.
///
/// A solver is single-use. The first call to [`solve`](Self::solve) moves the
/// field into the returned [`Solution`]; later calls fail with
/// [`PlateError::AlreadySolved`].
///
/// # Example
///
/// ```
/// use twine_plate::models::thermal::plate::{Boundaries, PlateConfig, PlateError, Solver};
///
/// let config = PlateConfig {
///     rows: 3,
///     cols: 3,
///     boundaries: Boundaries { top: 20.0, bottom: 100.0, left: 10.0, right: 150.0 },
///     initial_value: 0.0,
///     iterations: 1,
/// };
///
/// let mut solver = Solver::new(config)?.with_history(false);
/// let solution = solver.solve()?;
///
/// assert_eq!(solution.field().get(1, 1)?, 70.0);
/// assert!(solution.history().is_empty());
/// assert_eq!(solver.solve().unwrap_err(), PlateError::AlreadySolved);
/// # Ok::<(), PlateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    config: ValidConfig,
    field: Field,
    capture_history: bool,
    phase: Phase,
}

impl Solver {
    /// Validates `config` and allocates the field.
    ///
    /// History capture is enabled by default.
    ///
    /// # Errors
    ///
    /// Returns [`PlateError::InvalidDimensions`] if either extent is below 3,
    /// or [`PlateError::InvalidIterationCount`] if the iteration count is negative.
    pub fn new(config: PlateConfig) -> Result<Self, PlateError> {
        let config = config.validate()?;
        let field = Field::filled(config.rows, config.cols, config.initial_value);

        Ok(Self {
            config,
            field,
            capture_history: true,
            phase: Phase::Uninitialized,
        })
    }

    /// Enables or disables recording a frame after each pass.
    #[must_use]
    pub fn with_history(self, capture_history: bool) -> Self {
        Self {
            capture_history,
            ..self
        }
    }

    /// Current lifecycle stage.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of relaxation passes [`solve`](Self::solve) will run.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.config.iterations
    }

    /// Stamps the boundaries, runs every relaxation pass, and corrects the corners.
    ///
    /// # Errors
    ///
    /// Returns [`PlateError::AlreadySolved`] if called more than once.
    pub fn solve(&mut self) -> Result<Solution, PlateError> {
        if self.phase == Phase::Finalized {
            return Err(PlateError::AlreadySolved);
        }

        self.apply_boundaries();
        let (history, elapsed) = self.relax_all();
        self.finalize();

        tracing::info!(
            rows = self.config.rows,
            cols = self.config.cols,
            iterations = self.config.iterations,
            elapsed_secs = elapsed.as_secs_f64(),
            "plate solve finished"
        );

        let field = std::mem::take(&mut self.field);
        Ok(Solution::new(field, history, elapsed))
    }

    fn apply_boundaries(&mut self) {
        self.field.stamp_boundaries(&self.config.boundaries);
        self.enter(Phase::BoundariesApplied);
    }

    /// Runs the fixed number of passes, returning the history and loop time.
    fn relax_all(&mut self) -> (Vec<Field>, Duration) {
        self.enter(Phase::Relaxing);

        let iterations = self.config.iterations;
        let mut history = Vec::with_capacity(if self.capture_history { iterations } else { 0 });
        let mut next = self.field.clone();

        let start = Instant::now();
        for pass in 0..iterations {
            relax(&self.field, &mut next);
            std::mem::swap(&mut self.field, &mut next);

            if self.capture_history {
                history.push(self.field.clone());
            }
            tracing::trace!(pass, "relaxation pass committed");
        }
        let elapsed = start.elapsed();

        (history, elapsed)
    }

    fn finalize(&mut self) {
        self.field.correct_corners();
        self.enter(Phase::Finalized);
    }

    fn enter(&mut self, phase: Phase) {
        tracing::debug!(from = ?self.phase, to = ?phase, "plate solver transition");
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::thermal::plate::core::{
        Boundaries,
        test_support::{reference_boundaries, reference_config},
    };

    fn solve(config: PlateConfig) -> Solution {
        Solver::new(config)
            .expect("config should be valid")
            .solve()
            .expect("first solve should succeed")
    }

    fn assert_edges_hold_boundaries(field: &Field, boundaries: &Boundaries) {
        for (i, j, value) in field.edge_cells() {
            let expected = if i == 0 {
                boundaries.top
            } else if i == field.rows() - 1 {
                boundaries.bottom
            } else if j == 0 {
                boundaries.left
            } else {
                boundaries.right
            };
            assert_eq!(value, expected, "edge cell ({i}, {j})");
        }
    }

    #[test]
    fn zero_iterations_stamps_and_corrects_only() {
        let solution = solve(PlateConfig {
            iterations: 0,
            ..reference_config()
        });
        let field = solution.field();

        assert!(solution.history().is_empty());
        assert_edges_hold_boundaries(field, &reference_boundaries());
        assert_relative_eq!(field.get(0, 0).unwrap(), 15.0);
        assert_relative_eq!(field.get(4, 0).unwrap(), 55.0);
        assert_relative_eq!(field.get(0, 4).unwrap(), 85.0);
        assert_relative_eq!(field.get(4, 4).unwrap(), 125.0);
        assert_eq!(field.get(2, 2).unwrap(), 20.0);
    }

    #[test]
    fn one_pass_on_reference_plate() {
        let solution = solve(reference_config());

        assert_eq!(solution.history().len(), 1);
        assert_relative_eq!(solution.history()[0].get(1, 1).unwrap(), 17.5);
        assert_relative_eq!(solution.field().get(1, 1).unwrap(), 17.5);
    }

    #[test]
    fn edges_never_change() {
        for iterations in [0, 1, 7, 200] {
            let solution = solve(PlateConfig {
                rows: 6,
                cols: 9,
                iterations,
                ..reference_config()
            });

            assert_edges_hold_boundaries(solution.field(), &reference_boundaries());
            for frame in solution.history() {
                assert_edges_hold_boundaries(frame, &reference_boundaries());
            }
        }
    }

    #[test]
    fn history_length_matches_iterations() {
        for iterations in [0, 1, 5, 32] {
            let solution = solve(PlateConfig {
                iterations,
                ..reference_config()
            });
            assert_eq!(solution.history().len(), usize::try_from(iterations).unwrap());
        }
    }

    #[test]
    fn history_frames_are_independent_snapshots() {
        let solution = solve(PlateConfig {
            iterations: 3,
            ..reference_config()
        });
        let history = solution.history();

        assert_relative_eq!(history[0].get(1, 1).unwrap(), 17.5);
        assert_ne!(history[0], history[1]);
        assert_ne!(history[1], history[2]);
        assert_eq!(history[2].get(1, 1), solution.field().get(1, 1));
    }

    #[test]
    fn history_keeps_stamped_corners() {
        let solution = solve(PlateConfig {
            iterations: 2,
            ..reference_config()
        });

        for frame in solution.history() {
            assert_eq!(frame.get(0, 0).unwrap(), 10.0);
            assert_eq!(frame.get(4, 4).unwrap(), 150.0);
        }
        assert_relative_eq!(solution.field().get(0, 0).unwrap(), 15.0);
        assert_relative_eq!(solution.field().get(4, 4).unwrap(), 125.0);
    }

    #[test]
    fn history_can_be_disabled() {
        let solution = Solver::new(PlateConfig {
            iterations: 10,
            ..reference_config()
        })
        .unwrap()
        .with_history(false)
        .solve()
        .unwrap();

        assert!(solution.history().is_empty());
        assert_eq!(solution.last_change(), None);
    }

    #[test]
    fn solve_is_deterministic() {
        let config = PlateConfig {
            rows: 12,
            cols: 8,
            iterations: 40,
            ..reference_config()
        };

        let first = solve(config);
        let second = solve(config);

        assert_eq!(first.field(), second.field());
        assert_eq!(first.history(), second.history());
    }

    #[test]
    fn uniform_plate_is_a_fixed_point() {
        let solution = solve(PlateConfig {
            rows: 7,
            cols: 4,
            boundaries: Boundaries::uniform(42.0),
            initial_value: 42.0,
            iterations: 25,
        });

        assert!(solution.field().as_array().iter().all(|&v| v == 42.0));
        for frame in solution.history() {
            assert!(frame.as_array().iter().all(|&v| v == 42.0));
        }
    }

    #[test]
    fn minimal_grid_settles_after_one_pass() {
        for iterations in [1, 2, 50] {
            let solution = solve(PlateConfig {
                rows: 3,
                cols: 3,
                initial_value: -300.0,
                iterations,
                ..reference_config()
            });

            // 0.25 * (20 + 100 + 10 + 150)
            assert_relative_eq!(solution.field().get(1, 1).unwrap(), 70.0);
        }
    }

    #[test]
    fn interior_stays_within_boundary_range() {
        let solution = solve(PlateConfig {
            rows: 20,
            cols: 20,
            iterations: 2_000,
            ..reference_config()
        });

        let field = solution.field().as_array();
        let interior = field.slice(ndarray::s![1..19, 1..19]);
        assert!(interior.iter().all(|&v| (10.0..=150.0).contains(&v)));

        // Relaxation slows as the field approaches steady state.
        assert!(solution.last_change().unwrap() < 1e-3);
    }

    #[test]
    fn phases_advance_to_finalized() {
        let mut solver = Solver::new(reference_config()).unwrap();
        assert_eq!(solver.phase(), Phase::Uninitialized);
        assert_eq!(solver.iterations(), 1);

        solver.solve().unwrap();
        assert_eq!(solver.phase(), Phase::Finalized);
    }

    #[test]
    fn second_solve_is_rejected() {
        let mut solver = Solver::new(reference_config()).unwrap();
        let first = solver.solve().unwrap();

        assert_eq!(solver.solve(), Err(PlateError::AlreadySolved));
        assert_relative_eq!(first.field().get(1, 1).unwrap(), 17.5);
    }

    #[test]
    fn construction_rejects_invalid_config() {
        let small = PlateConfig {
            rows: 2,
            ..reference_config()
        };
        assert!(matches!(
            Solver::new(small),
            Err(PlateError::InvalidDimensions { rows: 2, cols: 5 })
        ));

        let negative = PlateConfig {
            iterations: -1,
            ..reference_config()
        };
        assert!(matches!(
            Solver::new(negative),
            Err(PlateError::InvalidIterationCount { iterations: -1, .. })
        ));
    }
}
