//! Binarization: plain threshold or Floyd-Steinberg error diffusion.
//!
//! Both modes consume a [`LumaGrid`] and rewrite its buffer in place into a
//! [`BinaryGrid`]. They share one rule for deciding a single cell, see
//! [`binarize`].
//!
//! # Example
//!
//! ```
//! use mono_bitmap::{dither, DitherMode, LumaGrid};
//!
//! let luma = LumaGrid::new(8, 1, vec![10, 200, 10, 200, 10, 200, 10, 200]).unwrap();
//! let binary = dither(luma, DitherMode::Threshold);
//! assert_eq!(binary.cells(), &[0, 255, 0, 255, 0, 255, 0, 255]);
//! ```

mod floyd_steinberg;
mod kernel;
mod threshold;

pub use kernel::{Kernel, FLOYD_STEINBERG};

use tracing::debug;

use crate::grid::{BinaryGrid, LumaGrid, BLACK, WHITE};

/// Cells at or above this value become white.
pub const THRESHOLD: u8 = 0x7F;

/// Binarization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherMode {
    /// Floyd-Steinberg error diffusion, row-major, left to right.
    ///
    /// Every cell is thresholded, and the difference between its value and
    /// the chosen level is pushed onto its unvisited neighbours.
    #[default]
    FloydSteinberg,

    /// Threshold every cell independently. No error propagation.
    Threshold,
}

/// Settle one cell: `0xFF` if `value >= 0x7F`, else `0x00`.
#[inline]
pub fn binarize(value: u8) -> u8 {
    if value >= THRESHOLD {
        WHITE
    } else {
        BLACK
    }
}

/// Run the dither engine over a luma grid.
///
/// Dimensions are preserved and the buffer is reused.
pub fn dither(grid: LumaGrid, mode: DitherMode) -> BinaryGrid {
    let (width, height, mut cells) = grid.into_parts();
    debug!(width, height, ?mode, "Binarizing");

    match mode {
        DitherMode::FloydSteinberg => {
            floyd_steinberg::diffuse(&mut cells, width, height, &FLOYD_STEINBERG)
        }
        DitherMode::Threshold => threshold::apply(&mut cells),
    }

    BinaryGrid::settled(width, height, cells)
}
