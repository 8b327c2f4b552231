use std::path::PathBuf;

use mono_bitmap::BitmapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Unsupported PNG format: {color_type:?} at {bit_depth:?}")]
    UnsupportedColor {
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },

    #[error("Invalid image: {0}")]
    Bitmap(#[from] BitmapError),

    #[error("Invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid symbol name: {0:?}")]
    InvalidSymbol(String),

    #[error("Preview would be empty: no packed columns")]
    EmptyPreview,
}
