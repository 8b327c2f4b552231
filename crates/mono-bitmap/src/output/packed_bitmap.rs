//! MSB-first bit packing.

use tracing::debug;

use crate::grid::BinaryGrid;

/// What to do with the last `width % 8` columns of every row.
///
/// # Example
///
/// ```
/// use mono_bitmap::RowPadding;
///
/// assert_eq!(RowPadding::Pad.row_bytes(9), 2);
/// assert_eq!(RowPadding::Truncate.row_bytes(9), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPadding {
    /// `ceil(width / 8)` bytes per row; unused low bits of the last byte are 0.
    #[default]
    Pad,

    /// `floor(width / 8)` bytes per row; trailing columns are dropped.
    ///
    /// Matches bitmaps generated by older tooling. Lossy whenever the width
    /// is not a multiple of 8, and produces empty rows below 8 pixels.
    Truncate,
}

impl RowPadding {
    /// Bytes per packed row for an image `width` pixels wide.
    #[inline]
    pub fn row_bytes(self, width: usize) -> usize {
        match self {
            RowPadding::Pad => width.div_ceil(8),
            RowPadding::Truncate => width / 8,
        }
    }

    /// Columns lost per row under this policy.
    #[inline]
    pub fn dropped_columns(self, width: usize) -> usize {
        width.saturating_sub(self.row_bytes(width) * 8)
    }
}

/// A 1-bit-per-pixel bitmap, packed MSB-first row by row.
///
/// # Example
///
/// ```
/// use mono_bitmap::{dither, DitherMode, LumaGrid, PackedBitmap, RowPadding};
///
/// let luma = LumaGrid::new(8, 1, vec![10, 200, 10, 200, 10, 200, 10, 200]).unwrap();
/// let bitmap = PackedBitmap::pack(&dither(luma, DitherMode::Threshold), RowPadding::Pad);
///
/// assert_eq!(bitmap.bytes(), &[0x55]);
/// assert!(bitmap.is_set(1, 0));
/// assert!(!bitmap.is_set(0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width: usize,
    height: usize,
    padding: RowPadding,
    row_bytes: usize,
    bytes: Vec<u8>,
}

impl PackedBitmap {
    /// Bit packer: serialize a settled grid.
    pub fn pack(grid: &BinaryGrid, padding: RowPadding) -> Self {
        let width = grid.width();
        let height = grid.height();
        let row_bytes = padding.row_bytes(width);
        debug!(width, height, ?padding, row_bytes, "Packing bitmap");

        let mut bytes = vec![0u8; row_bytes * height];
        let columns = width.min(row_bytes * 8);
        for (row, out) in grid.rows().zip(bytes.chunks_exact_mut(row_bytes.max(1))) {
            for (x, &cell) in row[..columns].iter().enumerate() {
                if cell != 0 {
                    out[x / 8] |= 0x80 >> (x % 8);
                }
            }
        }

        Self {
            width,
            height,
            padding,
            row_bytes,
            bytes,
        }
    }

    /// Image width in pixels, including any columns dropped by truncation.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn padding(&self) -> RowPadding {
        self.padding
    }

    /// Bytes per packed row.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    /// All packed bytes, `height * row_bytes` long.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Packed bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.height, "row {y} out of range (height {})", self.height);
        &self.bytes[y * self.row_bytes..(y + 1) * self.row_bytes]
    }

    /// Iterate packed rows top to bottom. Yields `height` slices even when
    /// `row_bytes` is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Whether the bit for `(x, y)` is set. Dropped, padding and
    /// out-of-range coordinates read as unset.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height || x / 8 >= self.row_bytes {
            return false;
        }
        self.bytes[y * self.row_bytes + x / 8] & (0x80 >> (x % 8)) != 0
    }

    /// Consume the bitmap and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
