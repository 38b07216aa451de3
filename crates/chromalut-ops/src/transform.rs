use chromalut_grid::{Grid, GridSize, LutError};

use crate::batch::IdentityStencil;
use crate::interpolation::{interpolate_point, positions, resolve_mode, InterpolationMode};
use crate::parallel::{self, ExecutionStrategy};

/// Compose two lookup tables.
///
/// Every point of `source` is used as a coordinate into `lut`, so the result applies
/// `source` first and `lut` second. When `target_size` is given, the result is built
/// at that resolution instead: each identity coordinate is sampled through `source`
/// and then through `lut`.
///
/// # Arguments
///
/// * `source` - The first lookup table, with exactly 3 channels.
/// * `lut` - The lookup table applied on top of `source`.
/// * `target_size` - Optional size of the result. Defaults to the size of `source`,
///   in which case the stored source points are used directly.
/// * `interpolation` - The interpolation mode to use. Cubic interpolation falls back
///   to linear, with a warning, when a sampled table has an axis smaller than 4.
///
/// # Returns
///
/// A lookup table with the channels of `lut`, and the mode of `lut` or else of `source`.
///
/// # Example
///
/// ```
/// use chromalut_grid::Grid;
/// use chromalut_ops::interpolation::InterpolationMode;
/// use chromalut_ops::transform::transform;
///
/// let source = Grid::generate(5, |r, g, b| [r * r, g * g, b * b]).unwrap();
/// let lut = Grid::generate(9, |r, g, b| [b, g, r, 1.0]).unwrap().with_mode("RGBA");
///
/// let composed = transform(&source, &lut, None, InterpolationMode::Linear).unwrap();
///
/// assert_eq!(composed.size(), source.size());
/// assert_eq!(composed.channels(), 4);
/// assert_eq!(composed.mode(), Some("RGBA"));
/// ```
///
/// # Errors
///
/// * [`LutError::ChannelMismatch`] if `source` does not have 3 channels.
/// * [`LutError::Config`] if the target size is out of range.
pub fn transform(
    source: &Grid,
    lut: &Grid,
    target_size: Option<GridSize>,
    interpolation: InterpolationMode,
) -> Result<Grid, LutError> {
    transform_with_strategy(
        source,
        lut,
        target_size,
        interpolation,
        ExecutionStrategy::default(),
    )
}

/// Compose two lookup tables with an explicit execution strategy.
///
/// See [`transform`]. The result does not depend on the strategy.
pub fn transform_with_strategy(
    source: &Grid,
    lut: &Grid,
    target_size: Option<GridSize>,
    interpolation: InterpolationMode,
    strategy: ExecutionStrategy,
) -> Result<Grid, LutError> {
    if source.channels() != 3 {
        return Err(LutError::ChannelMismatch(source.channels()));
    }
    if let Some(target) = target_size {
        target.check()?;
    }

    let mode = match target_size {
        Some(_) => resolve_mode(interpolation, &[lut.size(), source.size()]),
        None => resolve_mode(interpolation, &[lut.size()]),
    };

    let size = target_size.unwrap_or(source.size());
    parallel::warn_if_serial(
        size.num_points(),
        mode == InterpolationMode::Cubic,
        strategy,
    );

    let now = std::time::Instant::now();

    let channels = lut.channels();
    let mut table = vec![0.0; size.num_points() * channels];

    match target_size {
        None => {
            parallel::par_iter_points(&mut table, size, channels, strategy, |[x, y, z], out| {
                let point = source.point(x, y, z);
                let coord = [point[0], point[1], point[2]];
                interpolate_point(lut, &positions(lut.size(), coord, mode), mode, out);
            })?;
        }
        Some(target) => {
            let stencil = IdentityStencil::new(source.size(), target, mode);
            parallel::par_iter_points(&mut table, size, channels, strategy, |index, out| {
                let mut coord = [0.0; 3];
                interpolate_point(source, &stencil.at(index), mode, &mut coord);
                interpolate_point(lut, &positions(lut.size(), coord, mode), mode, out);
            })?;
        }
    }

    log::debug!(
        "transformed {} through {} into {} ({} interpolation) in {:?}",
        source.size(),
        lut.size(),
        size,
        mode,
        now.elapsed()
    );

    let out_mode = lut.mode().or(source.mode()).map(String::from);
    Ok(Grid::new(size, channels, table)?.with_mode_opt(out_mode))
}

#[cfg(test)]
mod tests {
    use super::transform;
    use crate::interpolation::{sample_cubic, sample_linear, InterpolationMode};
    use chromalut_grid::{axis_coord, Grid, GridSize, LutError};

    #[test]
    fn transform_wrong_channels() -> Result<(), LutError> {
        let source = Grid::generate(3, |r, g, b| [r, g, b, 1.0])?;
        let lut = Grid::identity(3)?;
        let res = transform(&source, &lut, None, InterpolationMode::Linear);
        assert_eq!(res, Err(LutError::ChannelMismatch(4)));
        assert!(res
            .unwrap_err()
            .to_string()
            .contains("only 3-channel cubes"));
        Ok(())
    }

    #[test]
    fn transform_wrong_target_size() -> Result<(), LutError> {
        let source = Grid::identity(3)?;
        let res = transform(
            &source,
            &source,
            Some(GridSize::cube(70)),
            InterpolationMode::Linear,
        );
        assert!(matches!(res, Err(LutError::Config(_))));
        Ok(())
    }

    #[test]
    fn transform_uses_source_points() -> Result<(), LutError> {
        let source = Grid::generate([3, 4, 5], |r, g, b| [r * 0.5, g * g, 1.0 - b])?;
        let lut = Grid::generate(7, |r, g, b| [r + g, g * b, b * b])?;

        for mode in [InterpolationMode::Linear, InterpolationMode::Cubic] {
            let composed = transform(&source, &lut, None, mode)?;
            assert_eq!(composed.size(), source.size());
            for (point, out) in source.points().zip(composed.points()) {
                let coord = [point[0], point[1], point[2]];
                let expected = match mode {
                    InterpolationMode::Linear => sample_linear(&lut, coord),
                    InterpolationMode::Cubic => sample_cubic(&lut, coord)?,
                };
                assert_eq!(out, expected.as_slice());
            }
        }
        Ok(())
    }

    #[test]
    fn transform_target_size_chains_both_tables() -> Result<(), LutError> {
        let source = Grid::generate(5, |r, g, b| [r * r, g, b.sqrt()])?;
        let lut = Grid::generate(6, |r, g, b| [g, b, r])?;

        let composed = transform(
            &source,
            &lut,
            Some(GridSize::from([3, 7, 4])),
            InterpolationMode::Linear,
        )?;
        assert_eq!(composed.size(), GridSize::from([3, 7, 4]));

        let coord = sample_linear(&source, [0.5, 0.5, 1.0 / 3.0]);
        let expected = sample_linear(&lut, [coord[0], coord[1], coord[2]]);
        assert_eq!(composed.point(1, 3, 1), expected.as_slice());
        Ok(())
    }

    #[test]
    fn transform_target_size_chains_both_tables_cubic() -> Result<(), LutError> {
        let source = Grid::generate(5, |r, g, b| [r * r, g, b.sqrt()])?;
        let lut = Grid::generate(6, |r, g, b| [g * g, b, r * b, 1.0 - r])?.with_mode("RGBA");
        let target = GridSize::from([4, 7, 5]);

        let composed = transform(&source, &lut, Some(target), InterpolationMode::Cubic)?;
        assert_eq!(composed.size(), target);
        assert_eq!(composed.channels(), 4);

        let linear = transform(&source, &lut, Some(target), InterpolationMode::Linear)?;
        assert_ne!(composed, linear);

        for z in 0..target.z {
            for y in 0..target.y {
                for x in 0..target.x {
                    let identity = [
                        axis_coord(x, target.x),
                        axis_coord(y, target.y),
                        axis_coord(z, target.z),
                    ];
                    let coord = sample_cubic(&source, identity)?;
                    let expected = sample_cubic(&lut, [coord[0], coord[1], coord[2]])?;
                    assert_eq!(composed.point(x, y, z), expected.as_slice());
                }
            }
        }
        Ok(())
    }

    #[test]
    fn transform_keeps_modes() -> Result<(), LutError> {
        let source = Grid::identity(3)?.with_mode("HSV");
        let plain = Grid::identity(3)?;
        let tagged = Grid::identity(3)?.with_mode("LAB");

        let res = transform(&source, &plain, None, InterpolationMode::Linear)?;
        assert_eq!(res.mode(), Some("HSV"));
        let res = transform(&source, &tagged, None, InterpolationMode::Linear)?;
        assert_eq!(res.mode(), Some("LAB"));
        Ok(())
    }
}
