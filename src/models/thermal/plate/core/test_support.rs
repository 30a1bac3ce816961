use super::{Boundaries, PlateConfig};

/// Edge values used throughout the plate tests.
pub(super) fn reference_boundaries() -> Boundaries {
    Boundaries {
        top: 20.0,
        bottom: 100.0,
        left: 10.0,
        right: 150.0,
    }
}

/// A 5x5 plate at 20 degrees with one relaxation pass.
pub(super) fn reference_config() -> PlateConfig {
    PlateConfig {
        rows: 5,
        cols: 5,
        boundaries: reference_boundaries(),
        initial_value: 20.0,
        iterations: 1,
    }
}
