//! BitmapConverter builder -- the primary ergonomic entry point for the crate.
//!
//! [`BitmapConverter`] wraps the greyscale, dither and packing stages with
//! fluent configuration.

use tracing::debug;

use super::BitmapError;
use crate::color::LumaWeighting;
use crate::dither::{dither, DitherMode};
use crate::grid::{BinaryGrid, ImageSource, LumaGrid, PixelGrid};
use crate::output::{PackedBitmap, RowPadding};

/// High-level converter from RGB pixels to a packed 1-bit bitmap.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`convert()`](Self::convert) takes `&self` so the converter is
///   **reusable** across multiple images
/// - Defaults: Floyd-Steinberg, zero-padded rows, compatible greyscale
///
/// # Example
///
/// ```
/// use mono_bitmap::{BitmapConverter, DitherMode, PixelGrid, Rgb8, RowPadding};
///
/// let converter = BitmapConverter::new()
///     .dither_mode(DitherMode::Threshold)
///     .row_padding(RowPadding::Truncate);
///
/// let pixels = PixelGrid::new(9, 1, vec![Rgb8::grey(255); 9]).unwrap();
/// let bitmap = converter.convert(&pixels);
///
/// // Compatible greyscale maps white to 85, which is below the threshold.
/// assert_eq!(bitmap.bytes(), &[0x00]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitmapConverter {
    dither_mode: DitherMode,
    row_padding: RowPadding,
    luma_weighting: LumaWeighting,
}

impl BitmapConverter {
    /// Create a converter with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the binarization mode.
    #[inline]
    pub fn dither_mode(mut self, mode: DitherMode) -> Self {
        self.dither_mode = mode;
        self
    }

    /// Shorthand: `true` selects Floyd-Steinberg, `false` plain threshold.
    #[inline]
    pub fn dither(self, enabled: bool) -> Self {
        self.dither_mode(if enabled {
            DitherMode::FloydSteinberg
        } else {
            DitherMode::Threshold
        })
    }

    /// Set the row padding policy.
    #[inline]
    pub fn row_padding(mut self, padding: RowPadding) -> Self {
        self.row_padding = padding;
        self
    }

    /// Set the greyscale weighting.
    #[inline]
    pub fn luma_weighting(mut self, weighting: LumaWeighting) -> Self {
        self.luma_weighting = weighting;
        self
    }

    pub fn mode(&self) -> DitherMode {
        self.dither_mode
    }

    pub fn padding(&self) -> RowPadding {
        self.row_padding
    }

    pub fn weighting(&self) -> LumaWeighting {
        self.luma_weighting
    }

    /// Reduce and binarize without packing.
    pub fn binarize(&self, pixels: &PixelGrid) -> BinaryGrid {
        let luma = LumaGrid::from_pixels(pixels, self.luma_weighting);
        dither(luma, self.dither_mode)
    }

    /// Run the full pipeline:
    /// 1. Greyscale reduction
    /// 2. Threshold or Floyd-Steinberg
    /// 3. MSB-first packing
    pub fn convert(&self, pixels: &PixelGrid) -> PackedBitmap {
        let bitmap = PackedBitmap::pack(&self.binarize(pixels), self.row_padding);
        debug!(
            width = bitmap.width(),
            height = bitmap.height(),
            bytes = bitmap.bytes().len(),
            "Converted image"
        );
        bitmap
    }

    /// Sample an [`ImageSource`] and convert it.
    pub fn convert_source<S: ImageSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<PackedBitmap, BitmapError> {
        let pixels = PixelGrid::from_source(source)?;
        Ok(self.convert(&pixels))
    }
}
