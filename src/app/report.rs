use std::path::Path;

use console::Style;
use tracing::{debug, warn};

use crate::{
    app::context::AppContext,
    core::{git::PatchRequest, host},
    error::PatchError,
    i18n::{Locale, Message},
};

/// Announce a written patch and optionally open its folder.
pub fn patch_written(ctx: &AppContext, path: &Path, message: &Message) {
    println!("{}", Style::new().green().apply_to(message.render(ctx.locale)));
    println!("  {}", Style::new().dim().apply_to(path.display()));

    if ctx.reveal
        && let Err(err) = host::reveal(path)
    {
        warn!(event = "reveal_failed", error = %err);
    }
}

/// Print what a dry run would have done.
pub fn dry_run(req: &PatchRequest) {
    println!("{}", req.command_line());
    println!("{}", req.output_path().display());
}

/// Print a failed command as one localized line on stderr.
pub fn failure(err: &anyhow::Error, locale: Locale) {
    let message = err.downcast_ref::<PatchError>().map_or_else(
        || Message::PatchFailed {
            detail: Some(format!("{err:#}")),
        },
        PatchError::message,
    );
    debug!(event = "command_failed", error = %format!("{err:#}"));
    eprintln!("{}", Style::new().red().apply_to(message.render(locale)));
}
