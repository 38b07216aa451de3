#![deny(missing_docs)]
//! Grid types for 3D color lookup tables

/// lookup table grid representation.
pub mod grid;

/// Error types for the grid module.
pub mod error;

pub use crate::error::LutError;
pub use crate::grid::{axis_coord, check_channels, Grid, GridSize, MAX_AXIS_SIZE, MIN_AXIS_SIZE};
