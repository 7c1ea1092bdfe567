//! Generation driver: render each configured size and write it to disk

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::rendering;
use crate::GeneratorConfig;

/// Name of the default output directory, created next to the executable
pub const DEFAULT_DIR_NAME: &str = "icons";

/// File name used for an icon of `size`
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}.png", size)
}

/// What happened for one requested size
#[derive(Debug)]
pub struct SizeOutcome {
    pub size: u32,
    pub path: PathBuf,
    pub result: Result<()>,
}

impl SizeOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Result of a full generation run, one outcome per size in request order
#[derive(Debug)]
pub struct GenerationReport {
    pub out_dir: PathBuf,
    pub outcomes: Vec<SizeOutcome>,
}

impl GenerationReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &SizeOutcome> {
        self.outcomes.iter().filter(|o| o.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &SizeOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    /// True when every size was written
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(SizeOutcome::is_ok)
    }
}

/// Resolve where icons go: the configured directory, or `icons/` beside the
/// running executable.
pub fn resolve_out_dir(config: &GeneratorConfig) -> Result<PathBuf> {
    if let Some(dir) = &config.out_dir {
        return Ok(dir.clone());
    }
    let exe = std::env::current_exe().map_err(|source| Error::OutputDir {
        path: PathBuf::from(DEFAULT_DIR_NAME),
        source,
    })?;
    let base = exe.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(base.join(DEFAULT_DIR_NAME))
}

/// Render one icon and write it to `path`
pub fn write_icon(path: &Path, size: u32) -> Result<()> {
    let bitmap = rendering::render(size)?;
    debug!("icon {}px fingerprint {}", size, bitmap.fingerprint());
    bitmap.save_png(path)
}

/// Run the whole generation.
///
/// Only output-directory problems abort the run; a failure for one size is
/// recorded in the report and the remaining sizes are still attempted.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    let out_dir = resolve_out_dir(config)?;
    fs::create_dir_all(&out_dir).map_err(|source| Error::OutputDir {
        path: out_dir.clone(),
        source,
    })?;
    info!("writing icons to {}", out_dir.display());

    let mut outcomes = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let path = out_dir.join(icon_file_name(size));
        let result = write_icon(&path, size);
        match &result {
            Ok(()) => info!("created {} ({}x{}px)", path.display(), size, size),
            Err(e) => warn!("failed to create {}: {}", path.display(), e),
        }
        outcomes.push(SizeOutcome { size, path, result });
    }

    Ok(GenerationReport { out_dir, outcomes })
}
