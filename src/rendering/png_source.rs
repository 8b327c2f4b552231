use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use mono_bitmap::{ImageSource, Rgb8};

use crate::error::ConvertError;

/// A decoded PNG, normalized to 8-bit RGB.
///
/// Palette images are expanded and 16-bit channels stripped during decode.
/// Greyscale is replicated into all three channels. Alpha is dropped, not
/// composited.
#[derive(Debug, Clone)]
pub struct PngImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb8>,
}

impl PngImage {
    /// Decode a PNG file from disk.
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        let file = File::open(path)?;
        let image = Self::decode(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            width = image.width,
            height = image.height,
            "Decoded image"
        );
        Ok(image)
    }

    /// Decode a PNG stream.
    pub fn decode<R: Read>(reader: R) -> Result<Self, ConvertError> {
        let mut decoder = png::Decoder::new(reader);
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder.read_info()?;

        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;
        let data = &buf[..info.buffer_size()];

        let channels = match (info.color_type, info.bit_depth) {
            (png::ColorType::Grayscale, png::BitDepth::Eight) => 1,
            (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => 2,
            (png::ColorType::Rgb, png::BitDepth::Eight) => 3,
            (png::ColorType::Rgba, png::BitDepth::Eight) => 4,
            (color_type, bit_depth) => {
                return Err(ConvertError::UnsupportedColor {
                    color_type,
                    bit_depth,
                })
            }
        };
        tracing::debug!(
            width = info.width,
            height = info.height,
            color_type = ?info.color_type,
            "PNG frame decoded"
        );

        let pixels = data
            .chunks_exact(channels)
            .map(|px| {
                if channels < 3 {
                    Rgb8::grey(px[0])
                } else {
                    Rgb8::new(px[0], px[1], px[2])
                }
            })
            .collect();

        Ok(Self {
            width: info.width,
            height: info.height,
            pixels,
        })
    }

    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }
}

impl ImageSource for PngImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel_at(&self, x: u32, y: u32) -> Rgb8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}
