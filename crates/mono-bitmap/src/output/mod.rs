//! Output types for the conversion pipeline.
//!
//! This module provides [`PackedBitmap`], the canonical output of the core,
//! and [`RowPadding`], the policy for widths that are not a multiple of 8.
//!
//! # Byte Layout
//!
//! Rows are stored top to bottom, each `row_bytes` long. Within a row, byte
//! `b` holds columns `8b..8b+8` with the leftmost column in the most
//! significant bit. A bit is set when its cell is `0xFF`.

mod packed_bitmap;

pub use packed_bitmap::{PackedBitmap, RowPadding};
