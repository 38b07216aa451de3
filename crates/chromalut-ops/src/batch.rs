use chromalut_grid::{axis_coord, GridSize};

use crate::interpolation::locate::{locate, AxisPos};
use crate::interpolation::InterpolationMode;

/// Precomputed stencil positions of the identity coordinates of a target grid.
///
/// Identity coordinates are separable, so the anchor and shift of every target
/// index are computed once per axis instead of once per point. The values are
/// the same ones `positions` derives for the coordinate `i / (n - 1)`, which
/// keeps the batch path bit-identical to per-point sampling.
#[derive(Debug, Clone)]
pub(crate) struct IdentityStencil {
    axes: [Vec<AxisPos>; 3],
}

impl IdentityStencil {
    /// Locate every identity coordinate of `target` on a `source` sized grid.
    pub fn new(source: GridSize, target: GridSize, mode: InterpolationMode) -> Self {
        let (left, right) = mode.margins();
        let axis = |src: usize, dst: usize| {
            (0..dst)
                .map(|i| locate(src, axis_coord(i, dst), left, right))
                .collect::<Vec<_>>()
        };

        Self {
            axes: [
                axis(source.x, target.x),
                axis(source.y, target.y),
                axis(source.z, target.z),
            ],
        }
    }

    /// Positions of the target point `[x, y, z]`.
    #[inline]
    pub fn at(&self, [x, y, z]: [usize; 3]) -> [AxisPos; 3] {
        [self.axes[0][x], self.axes[1][y], self.axes[2][z]]
    }
}

#[cfg(test)]
mod tests {
    use super::IdentityStencil;
    use crate::interpolation::{positions, InterpolationMode};
    use chromalut_grid::{axis_coord, GridSize};

    #[test]
    fn stencil_matches_per_point_positions() {
        let source = GridSize::from([5, 7, 4]);
        let target = GridSize::from([9, 3, 6]);

        for mode in [InterpolationMode::Linear, InterpolationMode::Cubic] {
            let stencil = IdentityStencil::new(source, target, mode);
            for z in 0..target.z {
                for y in 0..target.y {
                    for x in 0..target.x {
                        let coord = [
                            axis_coord(x, target.x),
                            axis_coord(y, target.y),
                            axis_coord(z, target.z),
                        ];
                        assert_eq!(stencil.at([x, y, z]), positions(source, coord, mode));
                    }
                }
            }
        }
    }
}
