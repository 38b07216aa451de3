use chromalut_grid::Grid;

use super::locate::AxisPos;
use super::trilinear::lerp;

/// Parameter of the cubic convolution kernel (Catmull-Rom).
const A: f32 = -0.5;

/// Kernel weight for `|x|` in `[0, 1]`.
#[inline(always)]
fn near(x: f32) -> f32 {
    ((A + 2.0) * x - (A + 3.0)) * x * x + 1.0
}

/// Kernel weight for `|x|` in `[1, 2]`.
#[inline(always)]
fn far(x: f32) -> f32 {
    (((x - 5.0) * x + 8.0) * x - 4.0) * A
}

#[inline(always)]
fn cubic(d: f32, v0: f32, v1: f32, v2: f32, v3: f32) -> f32 {
    v0 * far(1.0 + d) + v1 * near(d) + v2 * near(1.0 - d) + v3 * far(2.0 - d)
}

/// Cubic convolution along one axis of a 4-sample stencil `v0..v3`, where `d` is
/// the shift from `v1`.
///
/// Inside the stencil the plain 4-point formula is used. In a boundary cell one
/// neighbor is missing and is mirrored as `2 * edge - adjacent`. Beyond the table
/// the value is extended linearly from the two outermost samples.
#[inline]
pub(crate) fn cubic_axis(d: f32, v0: f32, v1: f32, v2: f32, v3: f32) -> f32 {
    if d < -1.0 {
        lerp(d + 1.0, v0, v1)
    } else if d >= 2.0 {
        lerp(d - 1.0, v2, v3)
    } else if d < 0.0 {
        cubic(d + 1.0, 2.0 * v0 - v1, v0, v1, v2)
    } else if d >= 1.0 {
        cubic(d - 1.0, v1, v2, v3, 2.0 * v3 - v2)
    } else {
        cubic(d, v0, v1, v2, v3)
    }
}

/// Kernel for tricubic interpolation
///
/// Reads the 4x4x4 stencil starting one sample before the anchor on every axis and
/// reduces it along the first axis (16 rows), the second (4 planes) and the third.
///
/// # Arguments
///
/// * `grid` - The lookup table to sample, at least 4 samples on every axis.
/// * `pos` - The anchor and shift on every axis, located with the cubic margins.
/// * `out` - The output sample, one value per grid channel.
pub(crate) fn tricubic_interpolation(grid: &Grid, pos: &[AxisPos; 3], out: &mut [f32]) {
    let table = grid.as_slice();
    let ch = grid.channels();
    let size = grid.size();
    let s1 = size.x * ch;
    let s12 = size.x * size.y * ch;

    debug_assert_eq!(out.len(), ch);

    let idx = grid.offset(pos[0].base - 1, pos[1].base - 1, pos[2].base - 1);
    let (d1, d2, d3) = (pos[0].shift, pos[1].shift, pos[2].shift);

    for (c, value) in out.iter_mut().enumerate() {
        let mut planes = [0.0; 4];
        for (k3, plane) in planes.iter_mut().enumerate() {
            let mut rows = [0.0; 4];
            for (k2, row) in rows.iter_mut().enumerate() {
                let o = idx + k3 * s12 + k2 * s1 + c;
                *row = cubic_axis(
                    d1,
                    table[o],
                    table[o + ch],
                    table[o + 2 * ch],
                    table[o + 3 * ch],
                );
            }
            *plane = cubic_axis(d2, rows[0], rows[1], rows[2], rows[3]);
        }
        *value = cubic_axis(d3, planes[0], planes[1], planes[2], planes[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::cubic_axis;
    use approx::assert_relative_eq;

    #[test]
    fn cubic_axis_hits_samples() {
        let v = [0.3, -1.0, 2.0, 0.5];
        assert_relative_eq!(cubic_axis(0.0, v[0], v[1], v[2], v[3]), v[1]);
        assert_relative_eq!(cubic_axis(1.0, v[0], v[1], v[2], v[3]), v[2]);
        assert_relative_eq!(cubic_axis(-1.0, v[0], v[1], v[2], v[3]), v[0]);
        assert_relative_eq!(cubic_axis(2.0, v[0], v[1], v[2], v[3]), v[3]);
    }

    #[test]
    fn cubic_axis_reproduces_lines() {
        // 1, 3, 5, 7 sampled at -1, 0, 1, 2
        for d in [-3.5, -1.2, -1.0, -0.6, 0.0, 0.25, 0.5, 0.99, 1.0, 1.7, 2.0, 4.0] {
            assert_relative_eq!(
                cubic_axis(d, 1.0, 3.0, 5.0, 7.0),
                3.0 + 2.0 * d,
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn cubic_axis_boundary_tiers() {
        let (v0, v1, v2, v3) = (0.0, 1.0, 4.0, 9.0);

        // beyond the table: straight line through the outermost samples
        assert_relative_eq!(cubic_axis(-2.0, v0, v1, v2, v3), -1.0);
        assert_relative_eq!(cubic_axis(3.0, v0, v1, v2, v3), 14.0);

        // boundary cell: the missing neighbor is mirrored
        let mirrored = super::cubic(0.5, 2.0 * v0 - v1, v0, v1, v2);
        assert_relative_eq!(cubic_axis(-0.5, v0, v1, v2, v3), mirrored);
        assert_relative_eq!(mirrored, 0.375);

        let mirrored = super::cubic(0.5, v1, v2, v3, 2.0 * v3 - v2);
        assert_relative_eq!(cubic_axis(1.5, v0, v1, v2, v3), mirrored);
        assert_relative_eq!(mirrored, 6.375);
    }
}
