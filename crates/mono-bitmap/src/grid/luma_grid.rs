//! Single-channel greyscale grid.

use tracing::debug;

use super::{check_len, PixelGrid};
use crate::api::BitmapError;
use crate::color::LumaWeighting;

/// Greyscale grid whose cells may hold any value in `0..=255`.
///
/// This is the unsettled phase of the pipeline: dithering consumes it and
/// rewrites the same buffer into a [`BinaryGrid`](super::BinaryGrid).
///
/// # Example
///
/// ```
/// use mono_bitmap::{LumaGrid, LumaWeighting, PixelGrid, Rgb8};
///
/// let pixels = PixelGrid::new(2, 1, vec![Rgb8::grey(100), Rgb8::grey(255)]).unwrap();
/// let luma = LumaGrid::from_pixels(&pixels, LumaWeighting::Compatible);
/// assert_eq!(luma.values(), &[33, 85]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaGrid {
    width: usize,
    height: usize,
    values: Vec<u8>,
}

impl LumaGrid {
    /// Wrap a flat row-major luma buffer.
    pub fn new(width: usize, height: usize, values: Vec<u8>) -> Result<Self, BitmapError> {
        check_len(width, height, values.len())?;
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Greyscale reducer: one luma value per pixel, same dimensions.
    pub fn from_pixels(pixels: &PixelGrid, weighting: LumaWeighting) -> Self {
        debug!(
            width = pixels.width(),
            height = pixels.height(),
            ?weighting,
            "Reducing to greyscale"
        );
        let values = pixels
            .pixels()
            .iter()
            .map(|&px| weighting.luma(px))
            .collect();
        Self {
            width: pixels.width(),
            height: pixels.height(),
            values,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        (x < self.width && y < self.height).then(|| self.values[y * self.width + x])
    }

    /// Hand the buffer to the dither engine.
    pub(crate) fn into_parts(self) -> (usize, usize, Vec<u8>) {
        (self.width, self.height, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb8;

    #[test]
    fn test_from_pixels_keeps_dimensions() {
        let pixels = PixelGrid::new(5, 3, vec![Rgb8::new(10, 20, 30); 15]).unwrap();
        let luma = LumaGrid::from_pixels(&pixels, LumaWeighting::Bt601);
        assert_eq!(luma.width(), 5);
        assert_eq!(luma.height(), 3);
        assert_eq!(luma.values().len(), 15);
    }

    #[test]
    fn test_from_pixels_maps_each_cell() {
        let pixels = PixelGrid::new(
            3,
            1,
            vec![Rgb8::grey(0), Rgb8::grey(100), Rgb8::new(255, 0, 0)],
        )
        .unwrap();
        let luma = LumaGrid::from_pixels(&pixels, LumaWeighting::Compatible);
        assert_eq!(luma.values(), &[0, 33, 25]);
        assert_eq!(luma.get(1, 0), Some(33));
        assert_eq!(luma.get(0, 1), None);
    }

    #[test]
    fn test_new_validates_length() {
        assert!(LumaGrid::new(2, 2, vec![0; 4]).is_ok());
        assert!(matches!(
            LumaGrid::new(2, 2, vec![0; 3]),
            Err(BitmapError::LengthMismatch { .. })
        ));
    }
}
