//! Settled black/white grid.

/// Foreground cell value.
pub const WHITE: u8 = 0xFF;
/// Background cell value.
pub const BLACK: u8 = 0x00;

/// Grid in which every cell is either `0x00` or `0xFF`.
///
/// There is no public constructor: the only way to obtain one is
/// [`dither()`](crate::dither()), which settles every cell before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl BinaryGrid {
    /// Caller guarantees every cell is settled and `cells.len() == width * height`.
    pub(crate) fn settled(width: usize, height: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        debug_assert!(cells.iter().all(|&c| c == BLACK || c == WHITE));
        Self {
            width,
            height,
            cells,
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

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.width)
    }

    /// Whether `(x, y)` is foreground; `false` outside the grid.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x] == WHITE
    }

    /// Number of foreground cells.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c == WHITE).count()
    }
}
