use std::path::Path;

use chromalut_grid::{Grid, GridSize};
use image::DynamicImage;

use crate::error::IoError;

/// Supported Hald levels. A level `l` image is `l³` pixels wide.
const HALD_LEVELS: std::ops::RangeInclusive<u32> = 2..=8;

/// Decode a Hald image into a lookup table.
///
/// A Hald image of level `l` is a square of `l³ x l³` pixels holding the `l²` sized
/// table point by point in row-major order, with the `x` axis varying fastest. The
/// values are normalized to `[0, 1]`. Images with an alpha channel produce a
/// 4-channel table.
///
/// # Arguments
///
/// * `image` - The decoded Hald image.
///
/// # Example
///
/// ```
/// use chromalut_grid::GridSize;
/// use chromalut_io::hald::hald_from_image;
///
/// let image = image::DynamicImage::new_rgb8(8, 8);
/// let lut = hald_from_image(&image).unwrap();
///
/// assert_eq!(lut.size(), GridSize::cube(4));
/// assert_eq!(lut.channels(), 3);
/// ```
///
/// # Errors
///
/// * [`IoError::HaldNotSquare`] if the image is not square.
/// * [`IoError::HaldSize`] if the side is not the cube of a level from 2 to 8.
pub fn hald_from_image(image: &DynamicImage) -> Result<Grid, IoError> {
    let (width, height) = (image.width(), image.height());
    if width != height {
        return Err(IoError::HaldNotSquare);
    }

    let level = HALD_LEVELS
        .into_iter()
        .find(|l| l * l * l == width)
        .ok_or(IoError::HaldSize)? as usize;

    let (channels, table) = if image.color().has_alpha() {
        (4, image.to_rgba32f().into_raw())
    } else {
        (3, image.to_rgb32f().into_raw())
    };

    log::debug!(
        "decoded hald image of level {} ({}x{}, {} channels)",
        level,
        width,
        height,
        channels
    );

    Ok(Grid::new(GridSize::cube(level * level), channels, table)?)
}

/// Read a lookup table from a Hald image file.
///
/// See [`hald_from_image`] for the layout.
///
/// # Arguments
///
/// * `file_path` - The path to the image file.
pub fn load_hald_image(file_path: impl AsRef<Path>) -> Result<Grid, IoError> {
    let image = image::open(file_path)?;
    hald_from_image(&image)
}
