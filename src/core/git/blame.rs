use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use super::repo::git_bin;
use crate::core::refs::CommitRef;

/// Upper bound on a single blame lookup.
pub const BLAME_TIMEOUT: Duration = Duration::from_secs(5);

/// Revision git blame reports for lines that are not committed yet.
pub const UNCOMMITTED_SHA: &str = "0000000000000000000000000000000000000000";

/// Length a blamed commit id is shortened to.
pub const BLAME_ABBREV: usize = 8;

/// A `FILE:LINE` cursor position; lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorPosition {
    pub file: PathBuf,
    pub line: u32,
}

impl FromStr for CursorPosition {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((file, line)) = s.rsplit_once(':') else {
            bail!("expected FILE:LINE, got {s:?}");
        };
        let line: u32 = line
            .trim()
            .parse()
            .with_context(|| format!("invalid line number in {s:?}"))?;
        if file.is_empty() || line == 0 {
            bail!("expected FILE:LINE with a 1-based line, got {s:?}");
        }
        Ok(Self {
            file: PathBuf::from(file),
            line,
        })
    }
}

/// Pick the commit out of `git blame --porcelain` output.
///
/// The first line starts with the 40-character commit id. Uncommitted lines
/// (all zeros) yield nothing.
pub fn parse_blame_output(stdout: &str) -> Option<CommitRef> {
    let first = stdout.lines().next()?;
    let sha = first.split_whitespace().next()?;
    if sha.len() != 40 || sha == UNCOMMITTED_SHA {
        return None;
    }
    CommitRef::parse(sha).map(|c| c.truncated(BLAME_ABBREV))
}

/// Blame the line under the cursor and return its commit, if it has one.
///
/// A failed, timed out or uncommitted lookup is not an error; the caller
/// moves on to the next source.
///
/// # Errors
/// Returns an error only if the async runtime cannot be built.
pub fn commit_at_cursor(workspace_root: &Path, pos: &CursorPosition) -> Result<Option<CommitRef>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start runtime for blame lookup")?;

    // The position is relative to where we were started, git runs in the root.
    let file = std::path::absolute(&pos.file).unwrap_or_else(|_| pos.file.clone());
    let range = format!("{0},{0}", pos.line);
    let mut cmd = tokio::process::Command::new(git_bin());
    cmd.args(["blame", "-L", &range, "--porcelain", "--"])
        .arg(&file)
        .current_dir(workspace_root)
        .kill_on_drop(true);

    let found = rt.block_on(async move {
        match tokio::time::timeout(BLAME_TIMEOUT, cmd.output()).await {
            Err(_) => {
                warn!(event = "blame_timeout", file = %pos.file.display(), line = pos.line);
                None
            }
            Ok(Err(err)) => {
                warn!(event = "blame_spawn_failed", error = %err);
                None
            }
            Ok(Ok(out)) if !out.status.success() => {
                debug!(
                    event = "blame_failed",
                    status = %out.status,
                    stderr = %String::from_utf8_lossy(&out.stderr).trim()
                );
                None
            }
            Ok(Ok(out)) => {
                let found = parse_blame_output(&String::from_utf8_lossy(&out.stdout));
                debug!(event = "blame_result", commit = ?found.as_ref().map(CommitRef::as_str));
                found
            }
        }
    });
    Ok(found)
}
