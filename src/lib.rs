//! Eye-with-slash extension icon generator
//!
//! Draws the Feed Customizer toolbar icon procedurally: a two-tone blue
//! background with a white eye, dark pupil and diagonal slash for the larger
//! sizes, and a plain white dot for the smallest one. Each size is written as
//! an RGBA PNG named `icon-<size>.png`.
//!
//! # Example
//!
//! ```
//! let icon = eyeslash_icons::render(48)?;
//! assert_eq!(icon.pixels.dimensions(), (48, 48));
//! # Ok::<(), eyeslash_icons::Error>(())
//! ```
//!
//! ```no_run
//! use eyeslash_icons::GeneratorConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = eyeslash_icons::generate(&GeneratorConfig::default())?;
//! for outcome in report.failed() {
//!     eprintln!("{}px failed", outcome.size);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod rendering;
pub use rendering::{render, Bitmap};

pub mod generate;
pub use generate::{generate, GenerationReport, SizeOutcome};

/// Icon sizes shipped with the extension, in generation order
pub const STANDARD_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Settings for a generation run
///
/// The defaults reproduce the standard run: all four `STANDARD_SIZES`
/// written to `icons/` next to the executable.
///
/// # Examples
///
/// ```
/// let cfg = eyeslash_icons::GeneratorConfig::default();
/// assert_eq!(cfg.sizes, vec![16, 32, 48, 128]);
/// assert!(cfg.out_dir.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Output directory; `None` means `icons/` beside the executable
    pub out_dir: Option<PathBuf>,
    /// Sizes to render, in order
    pub sizes: Vec<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: None,
            sizes: STANDARD_SIZES.to_vec(),
        }
    }
}
