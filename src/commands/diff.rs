use std::path::Path;

use anyhow::Result;
use tracing::info;

use super::Command;
use crate::{
    app::{context::AppContext, report},
    core::{
        git::{self, PatchRequest},
        refs::{CommitRef, parse_comparison_label},
    },
    error::PatchError,
    i18n::Message,
};

/// Where the two commits of a scoped diff come from.
#[derive(Clone, Copy, Debug)]
pub enum PairSource<'a> {
    /// A comparison view label such as `a.rs (24a2f307) ↔ a.rs (22d1bfc7)`.
    Label(&'a str),
    Explicit { from: &'a str, to: &'a str },
    Interactive,
    Missing,
}

pub struct DiffCommand<'a> {
    pub file: Option<&'a Path>,
    pub source: PairSource<'a>,
}

impl DiffCommand<'_> {
    fn commit_pair(&self, ctx: &AppContext) -> Result<(CommitRef, CommitRef)> {
        match self.source {
            PairSource::Label(label) => {
                Ok(parse_comparison_label(label).ok_or(PatchError::ParseCommit)?)
            }
            PairSource::Explicit { from, to } => {
                let from = CommitRef::parse(from).ok_or(PatchError::ParseCommit)?;
                let to = CommitRef::parse(to).ok_or(PatchError::ParseCommit)?;
                Ok((from, to))
            }
            PairSource::Interactive => {
                let from = git::select_commit_interactive(&ctx.workspace_root, "Older commit")?
                    .ok_or(PatchError::NoCommit)?;
                let to = git::select_commit_interactive(&ctx.workspace_root, "Newer commit")?
                    .ok_or(PatchError::NoCommit)?;
                Ok((from, to))
            }
            PairSource::Missing => Err(PatchError::NoTab.into()),
        }
    }
}

impl Command for DiffCommand<'_> {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let (from, to) = self.commit_pair(ctx)?;

        let file = self.file.ok_or(PatchError::FilePath)?;
        let rel = git::relative_to_workspace(&ctx.workspace_root, file)?;

        let output_dir = ctx.output_dir()?;
        let req = PatchRequest::scoped_diff(&ctx.workspace_root, &output_dir, &rel, &from, &to)?;
        info!(event = "scoped_diff", file = %rel.display(), %from, %to);

        if ctx.dry_run {
            report::dry_run(&req);
            return Ok(());
        }

        let path = git::generate(&req)?;
        report::patch_written(
            ctx,
            &path,
            &Message::PatchGenerated {
                file: req.filename.clone(),
            },
        );
        Ok(())
    }
}
