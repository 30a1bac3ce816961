//! Thermal systems models.
//!
//! This module contains models for conduction in solid bodies.

pub mod plate;
