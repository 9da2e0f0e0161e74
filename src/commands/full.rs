use std::{fs::File, io::BufReader};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use super::Command;
use crate::{
    app::{context::AppContext, report},
    core::{
        git::{self, CursorPosition, PatchRequest},
        host,
        refs::{self, CommitRef},
    },
    error::PatchError,
    i18n::Message,
};

pub struct FullCommand<'a> {
    pub commit: Option<&'a str>,
    /// Path to a history item JSON document, or `-` for stdin.
    pub context: Option<&'a str>,
    pub text: Option<&'a str>,
    pub at: Option<&'a str>,
    pub interactive: bool,
    pub prompt: bool,
}

impl FullCommand<'_> {
    /// Walk the commit sources in order: explicit id, history item, free
    /// text, blame at the cursor, interactive pick, terminal prompt.
    fn resolve_commit(&self, ctx: &AppContext) -> Result<CommitRef> {
        if let Some(raw) = self.commit {
            return Ok(raw.parse::<CommitRef>().map_err(PatchError::InvalidCommit)?);
        }

        if let Some(source) = self.context {
            let item = read_history_item(source)?;
            if let Some(c) = refs::find_commit(&item) {
                return Ok(c);
            }
            debug!(event = "context_no_commit", source);
        }

        if let Some(c) = self.text.and_then(CommitRef::find_in) {
            return Ok(c);
        }

        if let Some(at) = self.at {
            let pos: CursorPosition = at.parse()?;
            if let Some(c) = git::commit_at_cursor(&ctx.workspace_root, &pos)? {
                return Ok(c);
            }
        }

        if self.interactive {
            return git::select_commit_interactive(&ctx.workspace_root, "Select commit")?
                .ok_or_else(|| PatchError::NoCommit.into());
        }

        if self.prompt && host::has_terminal() {
            let clipboard = host::clipboard_text();
            let prefill = host::commit_from_clipboard(clipboard.as_deref());
            if let Some(c) = host::prompt_commit(ctx.locale, prefill.as_ref())? {
                return Ok(c);
            }
        }

        Err(PatchError::NoCommit.into())
    }
}

fn read_history_item(source: &str) -> Result<Value> {
    if source == "-" {
        return serde_json::from_reader(std::io::stdin().lock())
            .context("failed to parse history item from stdin");
    }
    let file = File::open(source).with_context(|| format!("failed to open {source}"))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse history item in {source}"))
}

impl Command for FullCommand<'_> {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let commit = self.resolve_commit(ctx)?;
        info!(event = "full_commit", %commit);

        let output_dir = ctx.output_dir()?;
        let req = PatchRequest::full_commit(&ctx.workspace_root, &output_dir, &commit);

        if ctx.dry_run {
            report::dry_run(&req);
            return Ok(());
        }

        let path = git::generate(&req)?;
        report::patch_written(
            ctx,
            &path,
            &Message::PatchFullGenerated {
                file: req.filename.clone(),
            },
        );
        Ok(())
    }
}
