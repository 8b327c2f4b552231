//! Pixel and greyscale types.
//!
//! - [`Rgb8`]: one decoded pixel, 8 bits per channel
//! - [`LumaWeighting`]: the greyscale reduction applied to each pixel

mod luma;
mod rgb;

pub use luma::{LumaWeighting, LUMA_WEIGHT_B, LUMA_WEIGHT_G, LUMA_WEIGHT_R};
pub use rgb::Rgb8;
