use chromalut_grid::{axis_coord, Grid, LutError};

use crate::parallel::{self, ExecutionStrategy};

/// Per channel strength of [`amplify`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(pub [f32; 3]);

impl From<f32> for Scale {
    fn from(scale: f32) -> Self {
        Scale([scale; 3])
    }
}

impl From<[f32; 3]> for Scale {
    fn from(scale: [f32; 3]) -> Self {
        Scale(scale)
    }
}

/// Strengthen or weaken the effect of a lookup table.
///
/// The first 3 channels of every point are moved away from (scale above 1) or
/// towards (scale below 1) the identity value of that point:
///
/// out = identity + (source - identity) * scale
///
/// A fourth channel is copied unchanged. A scale of 1 on every channel returns the
/// source itself and a scale of 0 returns the identity table.
///
/// # Arguments
///
/// * `source` - The lookup table to amplify.
/// * `scale` - One factor for all channels, or one factor per channel.
///
/// # Example
///
/// ```
/// use chromalut_grid::Grid;
/// use chromalut_ops::amplify::amplify;
///
/// let source = Grid::generate(3, |r, g, b| [r * r, g, b]).unwrap();
///
/// let neutral = amplify(&source, 0.0).unwrap();
/// assert_eq!(neutral.as_slice(), Grid::identity(3).unwrap().as_slice());
///
/// let same = amplify(&source, 1.0).unwrap();
/// assert_eq!(same, source);
/// ```
pub fn amplify(source: &Grid, scale: impl Into<Scale>) -> Result<Grid, LutError> {
    let Scale(scale) = scale.into();
    if scale == [1.0; 3] {
        return Ok(source.clone());
    }

    let size = source.size();
    let channels = source.channels();
    let mut table = vec![0.0; source.num_points() * channels];

    parallel::par_iter_points(
        &mut table,
        size,
        channels,
        ExecutionStrategy::default(),
        |[x, y, z], out| {
            let point = source.point(x, y, z);
            let identity = [
                axis_coord(x, size.x),
                axis_coord(y, size.y),
                axis_coord(z, size.z),
            ];
            for c in 0..3 {
                out[c] = identity[c] + (point[c] - identity[c]) * scale[c];
            }
            out[3..].copy_from_slice(&point[3..]);
        },
    )?;

    log::debug!("amplified {} table by {:?}", size, scale);

    Ok(Grid::new(size, channels, table)?.with_mode_opt(source.mode().map(String::from)))
}
