//! Row-major image grids for each pipeline stage.
//!
//! | Grid | Cell | Produced by |
//! |------|------|-------------|
//! | [`PixelGrid`] | [`Rgb8`](crate::Rgb8) | image source adapter |
//! | [`LumaGrid`] | `u8`, any value | greyscale reducer, or built directly |
//! | [`BinaryGrid`] | `u8`, `0x00` or `0xFF` | [`dither()`](crate::dither()) only |
//!
//! All grids store cells in one flat buffer indexed by `y * width + x`, and
//! all of them are validated at construction so that nothing downstream
//! needs to bounds-check beyond its own neighbourhood.

mod binary_grid;
mod luma_grid;
mod pixel_grid;

pub use binary_grid::{BinaryGrid, BLACK, WHITE};
pub use luma_grid::LumaGrid;
pub use pixel_grid::{ImageSource, PixelGrid};

use crate::api::BitmapError;

/// Validate dimensions and return the cell count.
pub(crate) fn checked_area(width: usize, height: usize) -> Result<usize, BitmapError> {
    if width == 0 || height == 0 {
        return Err(BitmapError::EmptyImage { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(BitmapError::DimensionsOverflow { width, height })
}

/// Validate that `len` cells fill a `width` x `height` grid exactly.
pub(crate) fn check_len(width: usize, height: usize, len: usize) -> Result<(), BitmapError> {
    let expected = checked_area(width, height)?;
    if len != expected {
        return Err(BitmapError::LengthMismatch {
            width,
            height,
            expected,
            actual: len,
        });
    }
    Ok(())
}
