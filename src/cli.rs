use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// git-patchgen command-line interface
#[derive(Parser, Debug, Clone)]
#[command(name = "git-patchgen", version, about = "Generate patch files from git commit comparisons", long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Workspace root (defaults to the enclosing repository's working directory)
    #[arg(short = 'C', long, value_name = "DIR", global = true)]
    pub workspace: Option<PathBuf>,

    /// Output directory, relative to the workspace root unless absolute (overrides patchgen.output-dir)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub output_dir: Option<String>,

    /// Message language, e.g. `en` or `zh-cn` (overrides patchgen.language and LANG)
    #[arg(long, value_name = "LOCALE", global = true)]
    pub lang: Option<String>,

    /// Open the folder containing the generated patch
    #[arg(long, global = true)]
    pub reveal: bool,

    /// Print the git command and output path without running anything
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a single-file patch between two commits of a comparison view
    Diff {
        /// File shown in the comparison view
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Comparison view label, e.g. "foo.css (24a2f307) ↔ foo.css (22d1bfc7)"
        #[arg(short, long, value_name = "LABEL", conflicts_with_all = ["from", "to"])]
        label: Option<String>,

        /// Older commit of the comparison
        #[arg(long, value_name = "COMMIT", requires = "to")]
        from: Option<String>,

        /// Newer commit of the comparison
        #[arg(long, value_name = "COMMIT", requires = "from")]
        to: Option<String>,

        /// Interactive mode: select both commits from a list using skim
        #[arg(short, long)]
        interactive: bool,
    },

    /// Write the full patch introduced by one commit (git format-patch)
    Full {
        /// Commit id (7 to 40 hex characters)
        #[arg(value_name = "COMMIT")]
        commit: Option<String>,

        /// Source-control history item as JSON (a file path, or `-` for stdin)
        #[arg(long, value_name = "JSON")]
        context: Option<String>,

        /// Free text that mentions a commit id
        #[arg(long, value_name = "TEXT")]
        text: Option<String>,

        /// Cursor position; blames that line to find the commit
        #[arg(long, value_name = "FILE:LINE")]
        at: Option<String>,

        /// Interactive mode: select the commit from a list using skim
        #[arg(short, long)]
        interactive: bool,

        /// Never prompt for a commit id on the terminal
        #[arg(long)]
        no_prompt: bool,
    },
}
