use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use wrapgen_core::emit::GeneratedUnit;

pub mod commands;

/// Ensure the output directory exists, creating it (and parents) if needed.
pub fn ensure_out_dir(dir: &str) -> Result<PathBuf> {
    let path = PathBuf::from(dir);
    fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create output directory: {}", path.display()))?;
    Ok(path)
}

/// Write one generated unit into `dir`, returning the path written.
///
/// Output is not transactional: a run that dies mid-way leaves the units
/// written so far on disk.
pub fn write_unit(dir: &Path, unit: &GeneratedUnit) -> Result<PathBuf> {
    let path = dir.join(&unit.file_name);
    fs::write(&path, &unit.source)
        .with_context(|| format!("Failed to write generated unit: {}", path.display()))?;
    Ok(path)
}
