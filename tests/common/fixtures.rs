//! Test fixtures: PNG files and config files in a scratch directory.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory that is removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a file inside the directory, without creating it.
    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an 8-bit greyscale PNG from row-major samples.
    pub fn gray_png(&self, name: &str, width: u32, height: u32, samples: &[u8]) -> PathBuf {
        self.png(name, width, height, png::ColorType::Grayscale, samples)
    }

    /// Write an 8-bit RGB PNG from row-major `[r, g, b]` triples.
    pub fn rgb_png(&self, name: &str, width: u32, height: u32, pixels: &[[u8; 3]]) -> PathBuf {
        let data: Vec<u8> = pixels.iter().flatten().copied().collect();
        self.png(name, width, height, png::ColorType::Rgb, &data)
    }

    pub fn png(
        &self,
        name: &str,
        width: u32,
        height: u32,
        color: png::ColorType,
        data: &[u8],
    ) -> PathBuf {
        let path = self.join(name);
        let file = File::create(&path).expect("Failed to create PNG fixture");
        let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("Failed to write PNG header");
        writer
            .write_image_data(data)
            .expect("Failed to write PNG data");
        path
    }

    /// Write an arbitrary text file (config files, garbage input).
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.join(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }
}

/// Grey level that reduces to 127 under BT.601 weighting
pub const BT601_MID_GREY: u8 = 128;

/// `n` repetitions of `[a, b]`
pub fn alternating(a: u8, b: u8, n: usize) -> Vec<u8> {
    [a, b].repeat(n)
}
