//! RGB input grid and the image source seam.

use tracing::debug;

use super::{check_len, checked_area};
use crate::api::BitmapError;
use crate::color::Rgb8;

/// A decoded image the core can sample.
///
/// Implemented by image decoding adapters. The core calls
/// [`pixel_at`](ImageSource::pixel_at) only with `x < width()` and
/// `y < height()`.
pub trait ImageSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel_at(&self, x: u32, y: u32) -> Rgb8;
}

/// Rectangular grid of RGB pixels in row-major order.
///
/// # Example
///
/// ```
/// use mono_bitmap::{PixelGrid, Rgb8};
///
/// let rows = vec![
///     vec![Rgb8::grey(0), Rgb8::grey(255)],
///     vec![Rgb8::grey(255), Rgb8::grey(0)],
/// ];
/// let grid = PixelGrid::from_rows(rows).unwrap();
/// assert_eq!(grid.get(1, 0), Some(Rgb8::grey(255)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgb8>,
}

impl PixelGrid {
    /// Wrap a flat row-major pixel buffer.
    ///
    /// Fails unless `pixels.len() == width * height` with both dimensions
    /// non-zero.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb8>) -> Result<Self, BitmapError> {
        check_len(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from one `Vec` per row, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<Rgb8>>) -> Result<Self, BitmapError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let area = checked_area(width, height)?;

        let mut pixels = Vec::with_capacity(area);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(BitmapError::RaggedRow {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            pixels.extend(cells);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Sample every pixel of an [`ImageSource`].
    pub fn from_source<S: ImageSource + ?Sized>(source: &S) -> Result<Self, BitmapError> {
        let width = source.width() as usize;
        let height = source.height() as usize;
        let area = checked_area(width, height)?;
        debug!(width, height, "Sampling image source");

        let mut pixels = Vec::with_capacity(area);
        for y in 0..source.height() {
            for x in 0..source.width() {
                pixels.push(source.pixel_at(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb8> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }
}
