use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::DEFAULT_OUTPUT_DIR;

/// Resolve the patch output directory without touching the filesystem.
///
/// A blank or missing override falls back to `patch`; relative overrides
/// hang off the workspace root and absolute ones are used as-is.
pub fn resolve_output_dir(workspace_root: &Path, configured: Option<&str>) -> PathBuf {
    let dir = configured
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_OUTPUT_DIR);
    let dir = Path::new(dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        workspace_root.join(dir)
    }
}

/// Resolve the output directory and create it (and its parents) if absent.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_output_dir(workspace_root: &Path, configured: Option<&str>) -> Result<PathBuf> {
    let dir = resolve_output_dir(workspace_root, configured);
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    debug!(event = "output_dir_ready", dir = %dir.display());
    Ok(dir)
}

/// Write `contents` to `path` in one step: a temp file in the same directory
/// is filled first and then renamed over the target.
///
/// # Errors
/// Returns an error if the temp file cannot be created, written or persisted.
pub fn write_patch(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .with_context(|| format!("{} has no parent directory", path.display()))?;
    let mut tmp = tempfile::Builder::new()
        .prefix(".patchgen-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(contents)
        .context("failed to write patch contents")?;
    tmp.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
