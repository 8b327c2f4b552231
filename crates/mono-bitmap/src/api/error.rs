//! Unified error type for the mono-bitmap public API.

use thiserror::Error;

/// Errors raised when a grid cannot be built from the data it was given.
///
/// All of these are shape problems detected at construction time. Once a
/// grid exists, every stage of the pipeline is infallible.
///
/// # Example
///
/// ```
/// use mono_bitmap::{BitmapError, LumaGrid};
///
/// let err = LumaGrid::new(4, 2, vec![0; 7]).unwrap_err();
/// assert!(matches!(err, BitmapError::LengthMismatch { expected: 8, actual: 7, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitmapError {
    /// Buffer length is not `width * height`
    #[error("buffer holds {actual} values, expected {expected} for {width}x{height}")]
    LengthMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// A row of row-wise input differs in length from the first row
    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Width or height is zero
    #[error("image is empty ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    /// `width * height` does not fit in memory addressing
    #[error("image dimensions {width}x{height} overflow")]
    DimensionsOverflow { width: usize, height: usize },
}
