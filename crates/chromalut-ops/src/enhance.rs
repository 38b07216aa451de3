use chromalut_grid::{Grid, GridSize, LutError};

use crate::color::{hsv_to_rgb, linear_to_srgb, rgb_to_hsv, srgb_to_linear};

/// Basic color settings for [`rgb_color_enhance`].
///
/// The default value changes nothing, so the generated table is the identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorEnhance {
    /// Value added to each channel, from -1.0 to 1.0.
    pub brightness: [f32; 3],
    /// Contrast around the middle gray, from -1.0 to 1.0.
    pub contrast: [f32; 3],
    /// Saturation per channel, from -1.0 to 1.0.
    pub saturation: [f32; 3],
    /// Saturation weighted towards less saturated colors, from -1.0 to 1.0.
    pub vibrance: [f32; 3],
    /// Hue rotation, from 0.0 to 1.0.
    pub hue: f32,
    /// Gamma exponent per channel, from 0.0 to 10.0.
    pub gamma: [f32; 3],
    /// Apply the settings in linear light instead of sRGB.
    pub linear: bool,
}

impl Default for ColorEnhance {
    fn default() -> Self {
        Self {
            brightness: [0.0; 3],
            contrast: [0.0; 3],
            saturation: [0.0; 3],
            vibrance: [0.0; 3],
            hue: 0.0,
            gamma: [1.0; 3],
            linear: false,
        }
    }
}

fn check_range(name: &str, values: &[f32], min: f32, max: f32) -> Result<(), LutError> {
    if values.iter().any(|v| !(min..=max).contains(v)) {
        return Err(LutError::Config(format!(
            "{name} should be from {min:.1} to {max:.1}"
        )));
    }
    Ok(())
}

impl ColorEnhance {
    /// Check that every setting is in its range.
    ///
    /// # Errors
    ///
    /// Returns [`LutError::Config`] naming the first setting out of range.
    pub fn check(&self) -> Result<(), LutError> {
        check_range("Brightness", &self.brightness, -1.0, 1.0)?;
        check_range("Contrast", &self.contrast, -1.0, 1.0)?;
        check_range("Saturation", &self.saturation, -1.0, 1.0)?;
        check_range("Vibrance", &self.vibrance, -1.0, 1.0)?;
        check_range("Hue", &[self.hue], 0.0, 1.0)?;
        check_range("Gamma", &self.gamma, 0.0, 10.0)?;
        Ok(())
    }

    fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let mut v = rgb;

        if self.linear {
            v = v.map(srgb_to_linear);
        }

        if self.brightness != [0.0; 3] {
            for (v, b) in v.iter_mut().zip(self.brightness) {
                *v += b;
            }
        }

        if self.contrast != [0.0; 3] {
            for (v, c) in v.iter_mut().zip(self.contrast) {
                *v = (*v - 0.5) * (c + 1.0).powi(2) + 0.5;
            }
        }

        if self.saturation != [0.0; 3] {
            let max = v[0].max(v[1]).max(v[2]);
            for (v, s) in v.iter_mut().zip(self.saturation) {
                *v += (*v - max) * s;
            }
        }

        if self.vibrance != [0.0; 3] {
            let max = v[0].max(v[1]).max(v[2]);
            let avg = (v[0] + v[1] + v[2]) / 3.0;
            for (v, s) in v.iter_mut().zip(self.vibrance) {
                *v += (*v - max) * (max - avg) * s;
            }
        }

        if self.hue != 0.0 {
            let (h, s, value) = rgb_to_hsv(v[0], v[1], v[2]);
            let (r, g, b) = hsv_to_rgb((h + self.hue) % 1.0, s, value);
            v = [r, g, b];
        }

        if self.gamma != [1.0; 3] {
            for (v, g) in v.iter_mut().zip(self.gamma) {
                *v = v.max(0.0).powf(g);
            }
        }

        if self.linear {
            v = v.map(linear_to_srgb);
        }

        v
    }
}

/// Generate a lookup table from basic color settings.
///
/// Each point goes through, in order: brightness, contrast, saturation, vibrance,
/// hue rotation and gamma. Settings left at their default value are skipped. With
/// `linear` set, the point is converted to linear light first and back to sRGB at
/// the end.
///
/// # Arguments
///
/// * `size` - The size of the table, from 2 to 65 samples per axis.
/// * `settings` - The color settings to apply.
///
/// # Example
///
/// ```
/// use chromalut_grid::Grid;
/// use chromalut_ops::enhance::{rgb_color_enhance, ColorEnhance};
///
/// let neutral = rgb_color_enhance(5, &ColorEnhance::default()).unwrap();
/// assert_eq!(neutral, Grid::identity(5).unwrap());
///
/// let settings = ColorEnhance {
///     brightness: [0.1; 3],
///     ..Default::default()
/// };
/// let brighter = rgb_color_enhance(5, &settings).unwrap();
/// assert_eq!(brighter.point(0, 0, 0), &[0.1, 0.1, 0.1]);
/// ```
///
/// # Errors
///
/// Returns [`LutError::Config`] if the size or a setting is out of range.
pub fn rgb_color_enhance(
    size: impl Into<GridSize>,
    settings: &ColorEnhance,
) -> Result<Grid, LutError> {
    settings.check()?;
    let size = size.into();
    log::debug!("generating {} table from {:?}", size, settings);
    Grid::generate(size, |r, g, b| settings.apply([r, g, b]))
}
