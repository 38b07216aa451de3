use std::sync::Arc;

use crate::error::LutError;

/// The smallest number of samples allowed along a grid axis.
pub const MIN_AXIS_SIZE: usize = 2;

/// The largest number of samples allowed along a grid axis.
pub const MAX_AXIS_SIZE: usize = 65;

/// Grid size in samples
///
/// A struct to represent the number of samples along each axis of a lookup table.
/// The `x` axis varies fastest in storage and the `z` axis slowest.
///
/// # Examples
///
/// ```
/// use chromalut_grid::GridSize;
///
/// let size = GridSize::from([2, 3, 4]);
///
/// assert_eq!(size.x, 2);
/// assert_eq!(size.z, 4);
/// assert_eq!(size.num_points(), 24);
/// assert_eq!(GridSize::from(5), GridSize { x: 5, y: 5, z: 5 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    /// Number of samples along the first axis (red).
    pub x: usize,
    /// Number of samples along the second axis (green).
    pub y: usize,
    /// Number of samples along the third axis (blue).
    pub z: usize,
}

impl GridSize {
    /// Create a grid size with the same number of samples on every axis.
    pub fn cube(n: usize) -> Self {
        Self { x: n, y: n, z: n }
    }

    /// Total number of sample points.
    pub fn num_points(&self) -> usize {
        self.x * self.y * self.z
    }

    /// The smallest axis size.
    pub fn min_axis(&self) -> usize {
        self.x.min(self.y).min(self.z)
    }

    /// The axis sizes in storage order.
    pub fn as_array(&self) -> [usize; 3] {
        [self.x, self.y, self.z]
    }

    /// Check that every axis is in the `[2, 65]` range.
    ///
    /// # Errors
    ///
    /// Returns [`LutError::Config`] naming the first offending axis size.
    pub fn check(&self) -> Result<(), LutError> {
        for n in self.as_array() {
            if !(MIN_AXIS_SIZE..=MAX_AXIS_SIZE).contains(&n) {
                return Err(LutError::Config(format!(
                    "Size should be in [{MIN_AXIS_SIZE}, {MAX_AXIS_SIZE}] range, got {n}"
                )));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

impl From<usize> for GridSize {
    fn from(n: usize) -> Self {
        GridSize::cube(n)
    }
}

impl From<[usize; 3]> for GridSize {
    fn from(size: [usize; 3]) -> Self {
        GridSize {
            x: size[0],
            y: size[1],
            z: size[2],
        }
    }
}

impl From<(usize, usize, usize)> for GridSize {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        GridSize { x, y, z }
    }
}

/// Normalized identity coordinate of sample `i` on an axis with `n` samples.
///
/// Every operation that needs the identity value of a grid point goes through
/// this function, so identity tables built in different places agree bit for bit.
#[inline]
pub fn axis_coord(i: usize, n: usize) -> f32 {
    i as f32 / (n - 1) as f32
}

/// A 3D color lookup table.
///
/// The table stores `channels` values per sample point in a flat buffer, with the
/// `x` axis varying fastest and the channel innermost. The buffer is shared, so
/// cloning a grid never copies samples. Grids are immutable: every operation that
/// changes the samples or the shape produces a new grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    size: GridSize,
    channels: usize,
    table: Arc<[f32]>,
    mode: Option<String>,
    name: Option<String>,
}

impl Grid {
    /// Create a new grid from a flat table.
    ///
    /// # Arguments
    ///
    /// * `size` - The number of samples along each axis, from 2 to 65.
    /// * `channels` - The number of values per sample, 3 or 4.
    /// * `table` - The flat sample buffer of length `x * y * z * channels`.
    ///
    /// # Errors
    ///
    /// * [`LutError::Config`] if the size or channel count is out of range.
    /// * [`LutError::ShapeMismatch`] if the table length does not match the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use chromalut_grid::{Grid, GridSize};
    ///
    /// let grid = Grid::new(2, 3, vec![0.0; 2 * 2 * 2 * 3]).unwrap();
    ///
    /// assert_eq!(grid.size(), GridSize::cube(2));
    /// assert_eq!(grid.channels(), 3);
    /// assert_eq!(grid.as_slice().len(), 24);
    /// ```
    pub fn new(
        size: impl Into<GridSize>,
        channels: usize,
        table: Vec<f32>,
    ) -> Result<Self, LutError> {
        let size = size.into();
        size.check()?;
        check_channels(channels)?;

        let expected = size.num_points() * channels;
        if table.len() != expected {
            return Err(LutError::ShapeMismatch(table.len(), expected));
        }

        Ok(Self {
            size,
            channels,
            table: table.into(),
            mode: None,
            name: None,
        })
    }

    /// Create the 3-channel identity grid, where every sample equals its coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use chromalut_grid::Grid;
    ///
    /// let identity = Grid::identity([2, 3, 2]).unwrap();
    ///
    /// assert_eq!(identity.point(1, 1, 0), &[1.0, 0.5, 0.0]);
    /// ```
    pub fn identity(size: impl Into<GridSize>) -> Result<Self, LutError> {
        Self::generate(size, |r, g, b| [r, g, b])
    }

    /// Create a grid by evaluating `callback` at the identity coordinate of every point.
    ///
    /// The callback receives the normalized `(r, g, b)` coordinate and returns the
    /// `C` channel values of the sample, where `C` is 3 or 4.
    pub fn generate<const C: usize>(
        size: impl Into<GridSize>,
        callback: impl Fn(f32, f32, f32) -> [f32; C],
    ) -> Result<Self, LutError> {
        let size = size.into();
        size.check()?;
        check_channels(C)?;

        let mut table = Vec::with_capacity(size.num_points() * C);
        for b in 0..size.z {
            let bv = axis_coord(b, size.z);
            for g in 0..size.y {
                let gv = axis_coord(g, size.y);
                for r in 0..size.x {
                    table.extend_from_slice(&callback(axis_coord(r, size.x), gv, bv));
                }
            }
        }

        Self::new(size, C, table)
    }

    /// Set the output mode tag of the grid.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Set or clear the output mode tag of the grid.
    pub fn with_mode_opt(mut self, mode: Option<String>) -> Self {
        self.mode = mode;
        self
    }

    /// Set the provenance label of the grid.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get the size of the grid in samples.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Get the number of values stored per sample.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Get the output mode tag, if any.
    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    /// Get the provenance label, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the number of sample points.
    pub fn num_points(&self) -> usize {
        self.size.num_points()
    }

    /// Get the flat sample buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.table
    }

    /// Copy the flat sample buffer into a new vector.
    pub fn to_vec(&self) -> Vec<f32> {
        self.table.to_vec()
    }

    /// Whether both grids share the same sample buffer.
    pub fn shares_table(&self, other: &Grid) -> bool {
        Arc::ptr_eq(&self.table, &other.table)
    }

    /// Offset of the first channel of the sample at `(x, y, z)` in the flat buffer.
    #[inline]
    pub fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        (x + y * self.size.x + z * self.size.x * self.size.y) * self.channels
    }

    /// Get the values of the sample at `(x, y, z)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is outside of the grid.
    pub fn point(&self, x: usize, y: usize, z: usize) -> &[f32] {
        let offset = self.offset(x, y, z);
        &self.table[offset..offset + self.channels]
    }

    /// Iterate over the samples in storage order.
    pub fn points(&self) -> std::slice::ChunksExact<'_, f32> {
        self.table.chunks_exact(self.channels)
    }
}

/// Check that a table stores 3 or 4 values per sample.
///
/// # Errors
///
/// Returns [`LutError::Config`] for any other channel count.
pub fn check_channels(channels: usize) -> Result<(), LutError> {
    if channels != 3 && channels != 4 {
        return Err(LutError::Config(format!(
            "Only 3 or 4 output channels are supported, got {channels}"
        )));
    }
    Ok(())
}
