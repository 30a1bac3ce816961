//! Steady-state conduction in a flat rectangular plate.
//!
//! The solver API in this module works on plain `f64` values.
//! [`SteadyStatePlate`] adapts it to [`twine_core::Model`] with [`uom`]
//! temperatures, storing field values in kelvin.

mod core;

pub use self::core::{
    Boundaries, Field, MIN_EXTENT, Phase, PlateConfig, PlateError, Solution, Solver,
};

use twine_core::Model;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

/// Twine model for a plate with a fixed grid and pass count.
///
/// The grid shape and iteration count are part of the model; the edge and
/// initial temperatures are its input.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_plate::models::thermal::plate::{PlateTemperatures, SteadyStatePlate};
/// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
///
/// let celsius = ThermodynamicTemperature::new::<degree_celsius>;
///
/// let plate = SteadyStatePlate::new(3, 3, 10);
/// let output = plate.call(&PlateTemperatures {
///     top: celsius(20.0),
///     bottom: celsius(100.0),
///     left: celsius(10.0),
///     right: celsius(150.0),
///     initial: celsius(20.0),
/// })?;
///
/// let center = output.temperature(1, 1)?.get::<degree_celsius>();
/// assert!((center - 70.0).abs() < 1e-9);
/// # Ok::<(), twine_plate::models::thermal::plate::PlateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SteadyStatePlate {
    /// Number of grid rows.
    pub rows: usize,

    /// Number of grid columns.
    pub cols: usize,

    /// Number of relaxation passes.
    pub iterations: i64,

    /// Whether to record a frame after each pass.
    pub capture_history: bool,
}

impl SteadyStatePlate {
    /// Creates a plate model that records history.
    #[must_use]
    pub fn new(rows: usize, cols: usize, iterations: i64) -> Self {
        Self {
            rows,
            cols,
            iterations,
            capture_history: true,
        }
    }
}

/// Edge and initial temperatures for a [`SteadyStatePlate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateTemperatures {
    pub top: ThermodynamicTemperature,
    pub bottom: ThermodynamicTemperature,
    pub left: ThermodynamicTemperature,
    pub right: ThermodynamicTemperature,
    pub initial: ThermodynamicTemperature,
}

/// Output of a [`SteadyStatePlate`], with field values in kelvin.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateOutput {
    pub solution: Solution,
}

impl PlateOutput {
    /// Final temperature at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`PlateError::IndexOutOfRange`] if the index is outside the plate.
    pub fn temperature(
        &self,
        row: usize,
        col: usize,
    ) -> Result<ThermodynamicTemperature, PlateError> {
        let value = self.solution.field().get(row, col)?;
        Ok(ThermodynamicTemperature::new::<kelvin>(value))
    }
}

impl Model for SteadyStatePlate {
    type Input = PlateTemperatures;
    type Output = PlateOutput;
    type Error = PlateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let config = PlateConfig {
            rows: self.rows,
            cols: self.cols,
            boundaries: Boundaries {
                top: input.top.get::<kelvin>(),
                bottom: input.bottom.get::<kelvin>(),
                left: input.left.get::<kelvin>(),
                right: input.right.get::<kelvin>(),
            },
            initial_value: input.initial.get::<kelvin>(),
            iterations: self.iterations,
        };

        let solution = Solver::new(config)?
            .with_history(self.capture_history)
            .solve()?;

        Ok(PlateOutput { solution })
    }
}
