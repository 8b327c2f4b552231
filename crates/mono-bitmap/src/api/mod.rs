//! Public API for the mono-bitmap crate.
//!
//! This module provides the high-level API: [`BitmapConverter`] builder and
//! [`BitmapError`] unified error type.

mod builder;
mod error;

pub use builder::BitmapConverter;
pub use error::BitmapError;
