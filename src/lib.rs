pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod i18n;
pub mod logging;

use anyhow::Result;

use crate::{app::context::AppContext, app::report, i18n::Locale};

/// Entry point for CLI subcommands. Failures are reported to the user here;
/// the returned error only signals a non-zero exit.
pub fn run(cli: &cli::Cli) -> Result<()> {
    let ctx = match AppContext::from_cli(cli) {
        Ok(ctx) => ctx,
        Err(err) => {
            report::failure(&err, Locale::detect(cli.global.lang.as_deref(), None));
            return Err(err);
        }
    };

    commands::dispatch(cli, &ctx).inspect_err(|err| report::failure(err, ctx.locale))
}
