//! Finite-difference steady-state conduction in a rectangular plate.
//!
//! The plate is a uniform grid with fixed values on its four edges.
//! Each relaxation pass replaces every interior cell with the mean of its
//! four neighbors from the previous pass (Jacobi iteration), which converges
//! toward the solution of Laplace's equation for the given edges.
//!
//! A fixed number of passes is always run. After the last pass, each corner
//! is set to the mean of its two adjacent edge cells.

mod config;
mod error;
mod field;
mod relax;
mod results;
mod solver;

#[cfg(test)]
mod test_support;

pub use config::{Boundaries, MIN_EXTENT, PlateConfig};
pub use error::PlateError;
pub use field::Field;
pub use results::Solution;
pub use solver::{Phase, Solver};
