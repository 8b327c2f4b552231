use std::io::Cursor;

use mono_bitmap::PackedBitmap;

use crate::error::ConvertError;

/// Encode a packed bitmap as a 1-bit greyscale PNG (set bit = white).
///
/// Packed rows already use PNG's 1-bit layout, so they are written as-is.
/// Under truncation the preview is `row_bytes * 8` pixels wide, showing
/// exactly what the firmware will receive.
pub fn encode_preview_png(bitmap: &PackedBitmap) -> Result<Vec<u8>, ConvertError> {
    let width = bitmap.width().min(bitmap.row_bytes() * 8);
    if width == 0 {
        return Err(ConvertError::EmptyPreview);
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width as u32, bitmap.height() as u32);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::One);
        encoder.set_compression(png::Compression::Best);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(bitmap.bytes())?;
    }
    Ok(buf.into_inner())
}
