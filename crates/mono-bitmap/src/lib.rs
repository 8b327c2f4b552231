//! mono-bitmap: 1-bit bitmaps for firmware and low-memory displays
//!
//! This library turns an RGB pixel grid into a packed, MSB-first,
//! one-bit-per-pixel byte array. It is the pure core of the `esther` tool;
//! image decoding and text emission live in the application crate.
//!
//! # Quick Start
//!
//! The [`BitmapConverter`] builder is the primary entry point:
//!
//! ```
//! use mono_bitmap::{BitmapConverter, PixelGrid, Rgb8};
//!
//! let pixels = PixelGrid::new(8, 1, vec![Rgb8::new(255, 255, 255); 8]).unwrap();
//! let bitmap = BitmapConverter::new().convert(&pixels);
//!
//! assert_eq!(bitmap.width(), 8);
//! assert_eq!(bitmap.bytes().len(), 1);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelGrid (Rgb8)
//!     |
//!     v
//! LumaGrid              (greyscale reducer, unsettled 0..=255)
//!     |
//!     v
//! BinaryGrid            (threshold or Floyd-Steinberg, settled 0x00 / 0xFF)
//!     |
//!     v
//! PackedBitmap          (MSB-first rows, pad or truncate)
//! ```
//!
//! Each stage takes ownership of the previous grid's buffer. The dither
//! engine rewrites the luma buffer in place, so a [`BinaryGrid`] never
//! allocates. A [`BinaryGrid`] can only be produced by [`dither()`], which
//! is what guarantees every cell is either `0x00` or `0xFF`.
//!
//! # Greyscale Weighting
//!
//! [`LumaWeighting::Compatible`] (the default) divides the BT.601 weighted
//! sum by three. The result is a luma grid that tops out at 85 and therefore
//! dithers noticeably darker than the source. Existing bitmaps were produced
//! with this scaling, so it stays the default. [`LumaWeighting::Bt601`] is
//! available for full-range output.
//!
//! # Row Padding
//!
//! Widths that are not a multiple of eight need a policy for the last byte
//! of each row. [`RowPadding::Pad`] zero-fills the unused low bits;
//! [`RowPadding::Truncate`] drops the trailing columns entirely, matching
//! bitmaps produced by older tooling.

pub mod api;
pub mod color;
pub mod dither;
pub mod grid;
pub mod output;


pub use api::{BitmapConverter, BitmapError};
pub use color::{LumaWeighting, Rgb8};
pub use dither::{dither, DitherMode};
pub use grid::{BinaryGrid, ImageSource, LumaGrid, PixelGrid};
pub use output::{PackedBitmap, RowPadding};
