//! # Twine Plate
//!
//! Steady-state heat conduction in a rectangular plate, solved by Jacobi
//! relaxation of Laplace's equation, with a [Twine](https://github.com/isentropic-dev/twine)
//! model adapter.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use twine_plate::models::thermal::plate::{Boundaries, PlateConfig, Solver};
//!
//! let config = PlateConfig {
//!     rows: 5,
//!     cols: 5,
//!     boundaries: Boundaries { top: 20.0, bottom: 100.0, left: 10.0, right: 150.0 },
//!     initial_value: 20.0,
//!     iterations: 50,
//! };
//!
//! let mut solver = Solver::new(config)?;
//! let solution = solver.solve()?;
//!
//! assert_eq!(solution.history().len(), 50);
//! assert_eq!(solution.field().get(0, 2)?, 20.0);
//! # Ok::<(), twine_plate::models::thermal::plate::PlateError>(())
//! ```
//!
//! ## Features
//!
//! - `rayon`: parallelize each relaxation pass across interior cells.
//! - `serde`: derive `Serialize`/`Deserialize` for configuration and fields.

pub mod models;
pub mod support;
