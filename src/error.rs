//! Error types for icon generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing icons
#[derive(Error, Debug)]
pub enum Error {
    /// Requested size is zero or exceeds `MAX_SIZE`
    #[error("Invalid icon size: {0}px (expected 1..={max})", max = crate::rendering::MAX_SIZE)]
    InvalidSize(u32),

    /// The output directory could not be resolved or created
    #[error("Failed to prepare output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding or writing a PNG file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
