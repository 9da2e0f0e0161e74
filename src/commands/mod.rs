use anyhow::Result;

use crate::{
    app::context::AppContext,
    cli::{Cli, Commands},
};

pub mod diff;
pub mod full;

/// Unified interface implemented by each subcommand handler.
pub trait Command {
    /// Execute the subcommand.
    ///
    /// # Errors
    /// Returns an error if the command fails.
    fn run(&self, ctx: &AppContext) -> Result<()>;
}

/// Central dispatcher: routes parsed CLI to subcommand handlers.
///
/// # Errors
/// Returns an error if the invoked subcommand fails.
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> Result<()> {
    match &cli.command {
        Commands::Diff {
            file,
            label,
            from,
            to,
            interactive,
        } => {
            let source = match (label, from, to) {
                (Some(label), _, _) => diff::PairSource::Label(label),
                (None, Some(from), Some(to)) => diff::PairSource::Explicit { from, to },
                _ if *interactive => diff::PairSource::Interactive,
                _ => diff::PairSource::Missing,
            };
            let cmd = diff::DiffCommand {
                file: file.as_deref(),
                source,
            };
            cmd.run(ctx)
        }
        Commands::Full {
            commit,
            context,
            text,
            at,
            interactive,
            no_prompt,
        } => {
            let cmd = full::FullCommand {
                commit: commit.as_deref(),
                context: context.as_deref(),
                text: text.as_deref(),
                at: at.as_deref(),
                interactive: *interactive,
                prompt: !*no_prompt,
            };
            cmd.run(ctx)
        }
    }
}
