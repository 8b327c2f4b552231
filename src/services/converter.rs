use std::io::Read;
use std::path::Path;

use mono_bitmap::{BitmapConverter, ImageSource, PackedBitmap};

use crate::error::ConvertError;
use crate::models::AppConfig;
use crate::rendering::{is_valid_symbol, render_array_literal, render_c_declaration, PngImage};

/// Result of converting one image
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// The packed bitmap
    pub bitmap: PackedBitmap,
    /// Rendered literal (or C declaration when a symbol is configured)
    pub text: String,
}

/// Decode → greyscale → dither → pack → render, configured once.
#[derive(Debug, Clone)]
pub struct Converter {
    bitmap: BitmapConverter,
    symbol: Option<String>,
}

impl Converter {
    pub fn new(bitmap: BitmapConverter, symbol: Option<String>) -> Result<Self, ConvertError> {
        if let Some(symbol) = &symbol {
            if !is_valid_symbol(symbol) {
                return Err(ConvertError::InvalidSymbol(symbol.clone()));
            }
        }
        Ok(Self { bitmap, symbol })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConvertError> {
        let bitmap = BitmapConverter::new()
            .dither_mode(config.dither_mode())
            .row_padding(config.row_padding.into())
            .luma_weighting(config.luma.into());
        Self::new(bitmap, config.symbol.clone())
    }

    pub fn settings(&self) -> &BitmapConverter {
        &self.bitmap
    }

    /// Convert a PNG file.
    pub fn convert_file(&self, path: &Path) -> Result<ConversionOutput, ConvertError> {
        let image = PngImage::open(path)?;
        self.convert_source(&image)
    }

    /// Convert a PNG stream.
    pub fn convert_reader<R: Read>(&self, reader: R) -> Result<ConversionOutput, ConvertError> {
        let image = PngImage::decode(reader)?;
        self.convert_source(&image)
    }

    /// Convert any decoded image.
    pub fn convert_source<S: ImageSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<ConversionOutput, ConvertError> {
        let bitmap = self.bitmap.convert_source(source)?;

        let dropped = bitmap.padding().dropped_columns(bitmap.width());
        if bitmap.row_bytes() == 0 {
            tracing::warn!(
                width = bitmap.width(),
                "Image narrower than 8 pixels packs to empty rows"
            );
        } else if dropped > 0 {
            tracing::warn!(
                width = bitmap.width(),
                dropped,
                "Row truncation drops trailing columns; use row_padding: pad to keep them"
            );
        }

        let text = match &self.symbol {
            Some(symbol) => render_c_declaration(&bitmap, symbol)?,
            None => render_array_literal(&bitmap),
        };

        tracing::info!(
            width = bitmap.width(),
            height = bitmap.height(),
            row_bytes = bitmap.row_bytes(),
            bytes = bitmap.bytes().len(),
            mode = ?self.bitmap.mode(),
            "Packed bitmap"
        );

        Ok(ConversionOutput { bitmap, text })
    }
}
