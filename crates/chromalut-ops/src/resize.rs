use chromalut_grid::{Grid, GridSize, LutError};

use crate::batch::IdentityStencil;
use crate::interpolation::{interpolate_point, resolve_mode, InterpolationMode};
use crate::parallel::{self, ExecutionStrategy};

/// Resize a lookup table to a new size.
///
/// Every point of the new table is the source sampled at the identity coordinate
/// of that point. The channel count and mode of the source are kept.
///
/// # Arguments
///
/// * `source` - The lookup table to resample.
/// * `target_size` - The new size, from 2 to 65 samples per axis.
/// * `interpolation` - The interpolation mode to use. Cubic interpolation falls back
///   to linear, with a warning, when the source has an axis smaller than 4 samples.
///
/// # Returns
///
/// The resized lookup table.
///
/// # Example
///
/// ```
/// use chromalut_grid::{Grid, GridSize};
/// use chromalut_ops::interpolation::InterpolationMode;
/// use chromalut_ops::resize::resize;
///
/// let source = Grid::generate(5, |r, g, b| [r * r, g, b]).unwrap();
///
/// let resized = resize(&source, [9, 9, 3], InterpolationMode::Cubic).unwrap();
///
/// assert_eq!(resized.size(), GridSize { x: 9, y: 9, z: 3 });
/// assert_eq!(resized.channels(), 3);
/// ```
///
/// # Errors
///
/// Returns [`LutError::Config`] if the target size is out of range.
pub fn resize(
    source: &Grid,
    target_size: impl Into<GridSize>,
    interpolation: InterpolationMode,
) -> Result<Grid, LutError> {
    resize_with_strategy(
        source,
        target_size,
        interpolation,
        ExecutionStrategy::default(),
    )
}

/// Resize a lookup table to a new size with an explicit execution strategy.
///
/// See [`resize`]. The result does not depend on the strategy.
pub fn resize_with_strategy(
    source: &Grid,
    target_size: impl Into<GridSize>,
    interpolation: InterpolationMode,
    strategy: ExecutionStrategy,
) -> Result<Grid, LutError> {
    let target = target_size.into();
    target.check()?;

    let mode = resolve_mode(interpolation, &[source.size()]);
    parallel::warn_if_serial(
        target.num_points(),
        mode == InterpolationMode::Cubic,
        strategy,
    );

    let now = std::time::Instant::now();

    let stencil = IdentityStencil::new(source.size(), target, mode);
    let channels = source.channels();
    let mut table = vec![0.0; target.num_points() * channels];

    parallel::par_iter_points(&mut table, target, channels, strategy, |index, out| {
        interpolate_point(source, &stencil.at(index), mode, out);
    })?;

    log::debug!(
        "resized {} -> {} ({} interpolation) in {:?}",
        source.size(),
        target,
        mode,
        now.elapsed()
    );

    Ok(Grid::new(target, channels, table)?.with_mode_opt(source.mode().map(String::from)))
}
