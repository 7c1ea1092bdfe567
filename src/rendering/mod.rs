//! Icon rendering: layout → paint commands → RGBA bitmap

pub mod layout;
pub mod paint;
pub mod raster;

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use layout::IconLayout;

/// Largest size `render` accepts
pub const MAX_SIZE: u32 = 4096;

/// A rendered square icon
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub size: u32,
    pub pixels: RgbaImage,
}

impl Bitmap {
    /// Lowercase hex SHA-256 over the raw row-major RGBA bytes
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.pixels.as_raw());
        hex::encode(hasher.finalize())
    }

    /// Encode as PNG and write to `path`, replacing any existing file
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixels
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| Error::Encode {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Draw the eye/slash icon at `size`×`size`.
///
/// Fails only for sizes outside `1..=MAX_SIZE`.
pub fn render(size: u32) -> Result<Bitmap> {
    if size == 0 || size > MAX_SIZE {
        return Err(Error::InvalidSize(size));
    }
    let commands = IconLayout::for_size(size).paint_commands(size);
    let pixels = raster::rasterize(size, size, &commands);
    Ok(Bitmap { size, pixels })
}
