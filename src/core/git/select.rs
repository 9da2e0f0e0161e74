use std::path::Path;

use anyhow::{Context, Result, bail};
use git2::Repository;
use skim::{
    Skim,
    prelude::{SkimItemReader, SkimOptionsBuilder},
};

use crate::core::refs::CommitRef;

/// How many commits the picker offers.
pub const PICK_LIMIT: usize = 100;

/// Interactive commit selection using skim fuzzy finder.
///
/// Returns `None` when the user aborts.
pub fn select_commit_interactive(workspace_root: &Path, prompt: &str) -> Result<Option<CommitRef>> {
    let repo = Repository::discover(workspace_root).with_context(|| {
        format!(
            "failed to open repository at {}",
            workspace_root.display()
        )
    })?;

    let commits = list_commits(&repo, PICK_LIMIT)?;

    if commits.is_empty() {
        bail!("No commits found in {}", workspace_root.display());
    }

    let items_str = commits
        .iter()
        .map(|(sha, subject)| format!("{sha}\t{subject}"))
        .collect::<Vec<_>>()
        .join("\n");

    let options = SkimOptionsBuilder::default()
        .height("50%".to_string())
        .multi(false)
        .prompt(format!("{prompt}> "))
        .build()
        .context("failed to build skim options")?;

    let item_reader = SkimItemReader::default();
    let items = item_reader.of_bufread(std::io::Cursor::new(items_str));

    let skim_output = Skim::run_with(&options, Some(items)).context("skim UI failed")?;

    if skim_output.is_abort {
        return Ok(None);
    }

    Ok(skim_output
        .selected_items
        .first()
        .and_then(|item| parse_pick_line(&item.output())))
}

/// Commit id of a `<sha>\t<subject>` picker line.
fn parse_pick_line(line: &str) -> Option<CommitRef> {
    let (sha, _) = line.split_once('\t')?;
    CommitRef::parse(sha)
}

/// Short id and subject of the most recent commits reachable from HEAD.
fn list_commits(repo: &Repository, limit: usize) -> Result<Vec<(String, String)>> {
    let mut revwalk = repo.revwalk()?;
    revwalk.push_head().context("repository has no HEAD commit")?;

    let mut commits = Vec::new();
    for oid in revwalk.take(limit) {
        let oid = oid?;
        let commit = repo.find_commit(oid)?;

        let short_id = commit.as_object().short_id()?;
        let short_id = short_id.as_str().unwrap_or_default().to_string();

        let subject = commit.summary().unwrap_or("no message").to_string();

        commits.push((short_id, subject));
    }

    Ok(commits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_line_yields_commit() {
        assert_eq!(
            parse_pick_line("24a2f30\tFix sidebar layout").map(|c| c.to_string()),
            Some("24a2f30".into())
        );
        assert_eq!(parse_pick_line("no tab here"), None);
    }
}
