use std::{
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::Result;
use tracing::{debug, info, warn};

use super::repo::git_bin;
use crate::{core::output::write_patch, core::refs::CommitRef, error::PatchError};

/// Largest patch we are willing to hold in memory.
pub const MAX_OUTPUT_BYTES: usize = 64 * 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatchKind {
    /// `git diff <a> <b> -- <file>`
    ScopedDiff,
    /// `git format-patch -1 <commit> --stdout`
    FullCommit,
}

/// Everything needed to produce one patch file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchRequest {
    pub kind: PatchKind,
    pub workspace_root: PathBuf,
    pub output_dir: PathBuf,
    pub filename: String,
    pub git_args: Vec<String>,
}

impl PatchRequest {
    /// Diff of one file between two commits, named `<basename>.<from>_<to>.patch`.
    ///
    /// # Errors
    /// `FilePath` if `rel_path` has no file name.
    pub fn scoped_diff(
        workspace_root: &Path,
        output_dir: &Path,
        rel_path: &Path,
        from: &CommitRef,
        to: &CommitRef,
    ) -> Result<Self, PatchError> {
        let basename = rel_path
            .file_name()
            .ok_or(PatchError::FilePath)?
            .to_string_lossy();
        Ok(Self {
            kind: PatchKind::ScopedDiff,
            workspace_root: workspace_root.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            filename: format!("{basename}.{from}_{to}.patch"),
            git_args: vec![
                "diff".into(),
                from.to_string(),
                to.to_string(),
                "--".into(),
                pathspec(rel_path),
            ],
        })
    }

    /// Full patch of a single commit, named `full_<commit>.patch`.
    pub fn full_commit(workspace_root: &Path, output_dir: &Path, commit: &CommitRef) -> Self {
        Self {
            kind: PatchKind::FullCommit,
            workspace_root: workspace_root.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            filename: format!("full_{commit}.patch"),
            git_args: vec![
                "format-patch".into(),
                "-1".into(),
                commit.to_string(),
                "--stdout".into(),
            ],
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.filename)
    }

    /// Shell-style rendering of the git invocation, with pathspecs quoted.
    pub fn command_line(&self) -> String {
        let mut parts = vec!["git".to_string()];
        let mut after_separator = false;
        for arg in &self.git_args {
            if after_separator {
                parts.push(format!("\"{arg}\""));
            } else {
                parts.push(arg.clone());
            }
            after_separator |= arg == "--";
        }
        parts.join(" ")
    }
}

// git pathspecs always use forward slashes.
fn pathspec(rel_path: &Path) -> String {
    let s = rel_path.to_string_lossy();
    if cfg!(windows) {
        s.replace('\\', "/")
    } else {
        s.into_owned()
    }
}

/// Run git with `args` in `cwd` and return its stdout.
///
/// # Errors
/// A classified `PatchError` when git cannot be started, exits non-zero or
/// prints more than `MAX_OUTPUT_BYTES`.
pub fn run_git(cwd: &Path, args: &[String]) -> Result<Vec<u8>, PatchError> {
    let git = git_bin();
    debug!(event = "git_spawn", cwd = %cwd.display(), ?args);
    let output = Command::new(&git)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| {
            PatchError::Failed(format!("failed to run {}: {e}", git.to_string_lossy()))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(event = "git_failed", status = %output.status, stderr = %stderr.trim());
        if stderr.trim().is_empty() {
            return Err(PatchError::Failed(format!(
                "git exited with {}",
                output.status
            )));
        }
        return Err(PatchError::from_git_stderr(&stderr));
    }

    if output.stdout.len() > MAX_OUTPUT_BYTES {
        return Err(PatchError::Failed(format!(
            "git output exceeds {} MiB",
            MAX_OUTPUT_BYTES / (1024 * 1024)
        )));
    }

    Ok(output.stdout)
}

/// Run the request's git command and write its output to the patch file.
///
/// Nothing is written unless git succeeds. A full-commit patch with no
/// output is reported as `PatchEmpty`; an empty scoped diff is still written
/// since it records that the file did not change.
///
/// # Errors
/// Classified git failures, `PatchEmpty`, or I/O errors writing the file.
pub fn generate(req: &PatchRequest) -> Result<PathBuf> {
    info!(event = "patch_start", kind = ?req.kind, command = %req.command_line());
    let stdout = run_git(&req.workspace_root, &req.git_args)?;

    if stdout.iter().all(u8::is_ascii_whitespace) {
        match req.kind {
            PatchKind::FullCommit => return Err(PatchError::PatchEmpty.into()),
            PatchKind::ScopedDiff => {
                warn!(event = "patch_empty", file = %req.filename, "no differences for file");
            }
        }
    }

    let path = req.output_path();
    write_patch(&path, &stdout)?;
    info!(event = "patch_written", path = %path.display(), bytes = stdout.len());
    Ok(path)
}
