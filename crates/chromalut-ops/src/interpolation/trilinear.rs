use chromalut_grid::Grid;

use super::locate::AxisPos;

#[inline(always)]
pub(crate) fn lerp(d: f32, v0: f32, v1: f32) -> f32 {
    v0 + (v1 - v0) * d
}

/// Kernel for trilinear interpolation
///
/// Blends the 8 samples around the anchor along the first axis, then the
/// second, then the third. The shifts are not clamped, so positions outside the
/// table extrapolate affinely.
///
/// # Arguments
///
/// * `grid` - The lookup table to sample.
/// * `pos` - The anchor and shift on every axis, located with the linear margins.
/// * `out` - The output sample, one value per grid channel.
pub(crate) fn trilinear_interpolation(grid: &Grid, pos: &[AxisPos; 3], out: &mut [f32]) {
    let table = grid.as_slice();
    let ch = grid.channels();
    let size = grid.size();
    let s1 = size.x * ch;
    let s12 = size.x * size.y * ch;

    debug_assert_eq!(out.len(), ch);

    let idx = grid.offset(pos[0].base, pos[1].base, pos[2].base);
    let (d1, d2, d3) = (pos[0].shift, pos[1].shift, pos[2].shift);

    for (c, value) in out.iter_mut().enumerate() {
        let at = |offset: usize| table[idx + offset + c];

        let v00 = lerp(d1, at(0), at(ch));
        let v10 = lerp(d1, at(s1), at(s1 + ch));
        let v01 = lerp(d1, at(s12), at(s12 + ch));
        let v11 = lerp(d1, at(s12 + s1), at(s12 + s1 + ch));

        *value = lerp(d3, lerp(d2, v00, v10), lerp(d2, v01, v11));
    }
}
