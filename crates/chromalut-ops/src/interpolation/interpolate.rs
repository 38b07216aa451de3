use std::str::FromStr;

use chromalut_grid::{Grid, GridSize, LutError};

use super::locate::{locate, AxisPos, CUBIC_MARGINS, LINEAR_MARGINS};
use super::tricubic::tricubic_interpolation;
use super::trilinear::trilinear_interpolation;

/// Interpolation mode for the sampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Trilinear interpolation over the 8 surrounding samples.
    #[default]
    Linear,
    /// Tricubic convolution over the 64 surrounding samples.
    ///
    /// Requires at least 4 samples on every axis.
    Cubic,
}

impl InterpolationMode {
    /// Stencil samples needed before and after the anchor on each axis.
    pub(crate) fn margins(self) -> (usize, usize) {
        match self {
            InterpolationMode::Linear => LINEAR_MARGINS,
            InterpolationMode::Cubic => CUBIC_MARGINS,
        }
    }
}

impl std::fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            InterpolationMode::Linear => write!(f, "linear"),
            InterpolationMode::Cubic => write!(f, "cubic"),
        }
    }
}

impl FromStr for InterpolationMode {
    type Err = LutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" | "trilinear" => Ok(InterpolationMode::Linear),
            "cubic" | "tricubic" => Ok(InterpolationMode::Cubic),
            _ => Err(LutError::Config(format!(
                "Only linear and cubic interpolations are supported, got {s}"
            ))),
        }
    }
}

/// Locate a coordinate on every axis of a grid of `size` samples.
#[inline]
pub(crate) fn positions(size: GridSize, coord: [f32; 3], mode: InterpolationMode) -> [AxisPos; 3] {
    let (left, right) = mode.margins();
    [
        locate(size.x, coord[0], left, right),
        locate(size.y, coord[1], left, right),
        locate(size.z, coord[2], left, right),
    ]
}

/// Kernel for interpolating a sample at already located positions.
///
/// The caller must have checked the grid size for cubic interpolation.
#[inline]
pub(crate) fn interpolate_point(
    grid: &Grid,
    pos: &[AxisPos; 3],
    mode: InterpolationMode,
    out: &mut [f32],
) {
    match mode {
        InterpolationMode::Linear => trilinear_interpolation(grid, pos, out),
        InterpolationMode::Cubic => tricubic_interpolation(grid, pos, out),
    }
}

/// Check that a grid is large enough for the cubic stencil.
pub(crate) fn check_cubic(size: GridSize) -> Result<(), LutError> {
    if size.min_axis() < 4 {
        return Err(LutError::UnsupportedSize(size));
    }
    Ok(())
}

/// Pick the mode an operation actually runs with.
///
/// Cubic interpolation falls back to linear, with a warning, when any of the
/// grids it would read from has fewer than 4 samples on an axis.
pub(crate) fn resolve_mode(requested: InterpolationMode, sizes: &[GridSize]) -> InterpolationMode {
    if requested == InterpolationMode::Cubic && sizes.iter().any(|s| check_cubic(*s).is_err()) {
        log::warn!(
            "Cubic interpolation requires a table of size 4 in all dimensions, switching to linear"
        );
        return InterpolationMode::Linear;
    }
    requested
}

/// Sample a lookup table at a coordinate with trilinear interpolation.
///
/// Coordinates outside of `[0, 1]` are extrapolated linearly from the boundary cells.
///
/// # Arguments
///
/// * `grid` - The lookup table to sample.
/// * `coord` - The normalized coordinate, one value per grid axis.
///
/// # Returns
///
/// The interpolated sample, one value per grid channel.
///
/// # Example
///
/// ```
/// use chromalut_grid::Grid;
/// use chromalut_ops::interpolation::sample_linear;
///
/// let identity = Grid::identity(5).unwrap();
/// let sample = sample_linear(&identity, [0.25, 0.5, 1.5]);
///
/// assert_eq!(sample, vec![0.25, 0.5, 1.5]);
/// ```
pub fn sample_linear(grid: &Grid, coord: [f32; 3]) -> Vec<f32> {
    let mode = InterpolationMode::Linear;
    let mut out = vec![0.0; grid.channels()];
    interpolate_point(grid, &positions(grid.size(), coord, mode), mode, &mut out);
    out
}

/// Sample a lookup table at a coordinate with tricubic interpolation.
///
/// Boundary cells mirror the missing neighbor and coordinates beyond the table are
/// extrapolated linearly.
///
/// # Errors
///
/// Returns [`LutError::UnsupportedSize`] if any axis of the grid has fewer than 4 samples.
pub fn sample_cubic(grid: &Grid, coord: [f32; 3]) -> Result<Vec<f32>, LutError> {
    check_cubic(grid.size())?;
    let mode = InterpolationMode::Cubic;
    let mut out = vec![0.0; grid.channels()];
    interpolate_point(grid, &positions(grid.size(), coord, mode), mode, &mut out);
    Ok(out)
}

/// Sample a lookup table at a coordinate with the given interpolation mode.
///
/// # Errors
///
/// Returns [`LutError::UnsupportedSize`] for cubic interpolation on a grid with an
/// axis smaller than 4 samples.
pub fn sample(grid: &Grid, coord: [f32; 3], mode: InterpolationMode) -> Result<Vec<f32>, LutError> {
    match mode {
        InterpolationMode::Linear => Ok(sample_linear(grid, coord)),
        InterpolationMode::Cubic => sample_cubic(grid, coord),
    }
}
