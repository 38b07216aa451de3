#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
/// strengthen or weaken the effect of a lookup table.
pub mod amplify;

/// color space helpers.
pub mod color;

/// lookup table generators from basic color settings.
pub mod enhance;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallelization utilities.
pub mod parallel;

/// utility functions for resizing lookup tables.
pub mod resize;

/// composition of lookup tables.
pub mod transform;

mod batch;
