//! Sample interpolation methods for lookup table evaluation.
//!
//! This module evaluates a [`Grid`](chromalut_grid::Grid) at arbitrary fractional
//! coordinates. Every resampling algorithm of the crate is built on these kernels.
//!
//! # Interpolation Modes
//!
//! - **Linear**: trilinear blend of the 8 surrounding samples, affine extrapolation
//! - **Cubic**: separable cubic convolution (`a = -0.5`) over 64 samples, with
//!   mirrored neighbors in the boundary cells and linear extrapolation beyond
//!
//! # Common Use Cases
//!
//! - Table resizing with `crate::resize`
//! - Table composition with `crate::transform`

mod interpolate;
pub(crate) mod locate;
mod tricubic;
mod trilinear;

pub use interpolate::{sample, sample_cubic, sample_linear, InterpolationMode};

pub(crate) use interpolate::{interpolate_point, positions, resolve_mode};
