/// Position of a coordinate along one grid axis.
///
/// `base` is the index of the stencil anchor sample and `shift` the fractional
/// offset from it. The shift is not clamped: it leaves `[0, 1)` when the
/// coordinate lies outside the unit range or in a boundary cell of the cubic
/// stencil, which is how extrapolation is expressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AxisPos {
    pub base: usize,
    pub shift: f32,
}

/// Samples needed before and after the anchor by the 2-point linear stencil.
pub(crate) const LINEAR_MARGINS: (usize, usize) = (0, 1);

/// Samples needed before and after the anchor by the 4-point cubic stencil.
pub(crate) const CUBIC_MARGINS: (usize, usize) = (1, 2);

/// Locate `coord` on an axis of `size` samples.
///
/// The anchor is clamped to `[left, size - 1 - right]` so the whole stencil stays
/// inside the table. The caller guarantees `size > left + right`.
#[inline]
pub(crate) fn locate(size: usize, coord: f32, left: usize, right: usize) -> AxisPos {
    let index = coord * (size - 1) as f32;
    // truncation toward zero, saturating for non finite values
    let base = (index as isize).clamp(left as isize, (size - 1 - right) as isize) as usize;
    AxisPos {
        base,
        shift: index - base as f32,
    }
}
