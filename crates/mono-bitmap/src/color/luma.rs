//! Greyscale reduction.
//!
//! Each pixel is reduced to one luma value using the BT.601 weights. The
//! default [`LumaWeighting::Compatible`] mode additionally divides the sum by
//! three, which is a known quirk of the bitmaps this tool has always
//! produced: the weights already sum to 1.0, so the division darkens the
//! whole image to the range `0..=85`. Keep it unless the consumer of the
//! bitmap has been regenerated against [`LumaWeighting::Bt601`].

use super::Rgb8;

/// Red weight (BT.601).
pub const LUMA_WEIGHT_R: f64 = 0.299;
/// Green weight (BT.601).
pub const LUMA_WEIGHT_G: f64 = 0.587;
/// Blue weight (BT.601).
pub const LUMA_WEIGHT_B: f64 = 0.114;

/// Extra divisor applied by [`LumaWeighting::Compatible`].
const COMPATIBLE_DIVISOR: f64 = 3.0;

/// How an RGB pixel is reduced to a single luma value.
///
/// Both modes truncate toward zero; neither rounds.
///
/// # Example
///
/// ```
/// use mono_bitmap::{LumaWeighting, Rgb8};
///
/// let grey = Rgb8::grey(100);
/// assert_eq!(LumaWeighting::Compatible.luma(grey), 33);
/// assert_eq!(LumaWeighting::Bt601.luma(grey), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LumaWeighting {
    /// `(0.299 R + 0.587 G + 0.114 B) / 3`, truncated.
    #[default]
    Compatible,

    /// `0.299 R + 0.587 G + 0.114 B`, truncated.
    Bt601,
}

impl LumaWeighting {
    /// Reduce one pixel to luma.
    #[inline]
    pub fn luma(self, pixel: Rgb8) -> u8 {
        let weighted = f64::from(pixel.r) * LUMA_WEIGHT_R
            + f64::from(pixel.g) * LUMA_WEIGHT_G
            + f64::from(pixel.b) * LUMA_WEIGHT_B;
        let scaled = match self {
            LumaWeighting::Compatible => weighted / COMPATIBLE_DIVISOR,
            LumaWeighting::Bt601 => weighted,
        };
        // `as` truncates toward zero and saturates, so float noise above
        // 255.0 cannot wrap.
        scaled as u8
    }
}
