//! The pixel frame a cartesian chart is laid out in.

use crate::{GeometryError, GeometryResult};

/// Pixel dimensions and paddings of a chart.
///
/// The plot occupies `padding_right..width` horizontally (the name follows the
/// y-label gutter convention: labels sit left of `padding_right`). Vertically
/// values map from the baseline at `height * 3/4 + padding_top` up to
/// `padding_top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelFrame {
    pub width: f32,
    pub height: f32,
    pub padding_top: f32,
    pub padding_right: f32,
}

impl PixelFrame {
    /// Default top padding.
    pub const DEFAULT_PADDING_TOP: f32 = 16.0;
    /// Default y-label gutter.
    pub const DEFAULT_PADDING_RIGHT: f32 = 64.0;

    /// Validate and create a frame.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimension`] for a non-positive or
    /// non-finite size or a negative padding, and
    /// [`GeometryError::PaddingExceedsDimension`] when a padding is larger than
    /// the dimension it is carved from.
    pub fn new(width: f32, height: f32, padding_top: f32, padding_right: f32) -> GeometryResult<Self> {
        positive("width", width)?;
        positive("height", height)?;
        non_negative("padding_top", padding_top)?;
        non_negative("padding_right", padding_right)?;

        if padding_top > height {
            return Err(GeometryError::PaddingExceedsDimension {
                padding: "padding_top",
                value: padding_top,
                dimension: height,
            });
        }
        if padding_right > width {
            return Err(GeometryError::PaddingExceedsDimension {
                padding: "padding_right",
                value: padding_right,
                dimension: width,
            });
        }

        Ok(Self {
            width,
            height,
            padding_top,
            padding_right,
        })
    }

    /// Frame with the default paddings (16 top, 64 right).
    pub fn with_default_padding(width: f32, height: f32) -> GeometryResult<Self> {
        Self::new(
            width,
            height,
            Self::DEFAULT_PADDING_TOP,
            Self::DEFAULT_PADDING_RIGHT,
        )
    }

    /// Height of the value band: three quarters of the frame height.
    pub fn base_height(&self) -> f64 {
        f64::from(self.height) * 3.0 / 4.0
    }

    /// Pixel y of the value-axis baseline.
    pub fn baseline(&self) -> f64 {
        self.base_height() + f64::from(self.padding_top)
    }

    /// Pixel y of the top of the value band.
    pub fn top(&self) -> f64 {
        f64::from(self.padding_top)
    }

    /// Horizontal extent available to samples.
    pub fn plot_width(&self) -> f64 {
        f64::from(self.width - self.padding_right)
    }

    /// Pixel x of sample `index` when `slots` samples share the plot width.
    pub fn x_at(&self, index: usize, slots: usize) -> f64 {
        if slots == 0 {
            return f64::from(self.padding_right);
        }
        index as f64 * self.plot_width() / slots as f64 + f64::from(self.padding_right)
    }
}

fn positive(name: &'static str, value: f32) -> GeometryResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidDimension { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> GeometryResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidDimension { name, value })
    }
}
