use std::{
    ffi::OsString,
    path::{Component, Path, PathBuf},
};

use anyhow::Result;
use git2::Repository;
use tracing::debug;

use crate::error::PatchError;

/// Environment variable naming the git executable to run.
pub const GIT_BIN_ENV: &str = "GIT_PATCHGEN_GIT";

/// The git executable: `$GIT_PATCHGEN_GIT` or plain `git` from `PATH`.
pub fn git_bin() -> OsString {
    std::env::var_os(GIT_BIN_ENV)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| OsString::from("git"))
}

/// Discover the current repository root directory.
pub fn repo_root() -> Result<PathBuf> {
    let repo = Repository::discover(".")?;
    let workdir = repo.workdir().ok_or(PatchError::NoWorkspace)?;
    Ok(workdir.to_path_buf())
}

/// Pick the workspace root: an explicit directory, else the enclosing
/// repository's working directory, else the current directory.
///
/// # Errors
/// `NoWorkspace` if the explicit directory does not exist or the current
/// directory cannot be read.
pub fn workspace_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        if !dir.is_dir() {
            return Err(PatchError::NoWorkspace.into());
        }
        return Ok(std::path::absolute(dir).map_err(|_| PatchError::NoWorkspace)?);
    }
    match repo_root() {
        Ok(root) => Ok(root),
        Err(err) => {
            debug!(event = "repo_discovery_failed", error = %err, "using current directory");
            Ok(std::env::current_dir().map_err(|_| PatchError::NoWorkspace)?)
        }
    }
}

/// Express `file` relative to `root`, the way git expects a pathspec.
///
/// Relative inputs are taken relative to the current directory. When the
/// plain prefix check fails both sides are canonicalized, so symlinked
/// temp dirs and `..` segments still resolve. A missing file is resolved
/// through its parent directory.
///
/// # Errors
/// `Workspace` if the file is not inside the workspace root.
pub fn relative_to_workspace(root: &Path, file: &Path) -> Result<PathBuf, PatchError> {
    let abs = std::path::absolute(file).map_err(|_| PatchError::FilePath)?;
    if let Ok(rel) = abs.strip_prefix(root)
        && !rel.as_os_str().is_empty()
        && rel.components().all(|c| matches!(c, Component::Normal(_)))
    {
        return Ok(rel.to_path_buf());
    }

    let canon_root = root.canonicalize().map_err(|_| PatchError::Workspace)?;
    let canon_file = canonical_file(&abs).ok_or(PatchError::Workspace)?;
    match canon_file.strip_prefix(&canon_root) {
        Ok(rel) if !rel.as_os_str().is_empty() => Ok(rel.to_path_buf()),
        _ => Err(PatchError::Workspace),
    }
}

// A file deleted from the working tree still resolves through its directory.
fn canonical_file(abs: &Path) -> Option<PathBuf> {
    if let Ok(path) = abs.canonicalize() {
        return Some(path);
    }
    let name = abs.file_name()?;
    Some(abs.parent()?.canonicalize().ok()?.join(name))
}
