use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::{
    cli::Cli,
    config::PatchgenConfig,
    core::{git::workspace_root, output},
    i18n::Locale,
};

/// Host state read once at the start of a command.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub workspace_root: PathBuf,
    pub cfg: PatchgenConfig,
    pub locale: Locale,
    pub reveal: bool,
    pub dry_run: bool,
}

impl AppContext {
    pub fn new(workspace_root: PathBuf, cfg: PatchgenConfig, locale: Locale) -> Self {
        let reveal = cfg.reveal;
        Self {
            workspace_root,
            cfg,
            locale,
            reveal,
            dry_run: false,
        }
    }

    /// Resolve the workspace, load its config and let CLI flags override it.
    ///
    /// # Errors
    /// Returns an error if no workspace root can be determined.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let opts = &cli.global;
        let root = workspace_root(opts.workspace.as_deref())?;

        // Plain directories are allowed; git will report the missing repository.
        let mut cfg = PatchgenConfig::load(&root).unwrap_or_else(|err| {
            debug!(event = "config_defaults", error = %err);
            PatchgenConfig::default()
        });
        if let Some(dir) = &opts.output_dir {
            cfg.output_dir = Some(dir.clone());
        }

        let locale = Locale::detect(opts.lang.as_deref(), cfg.language.as_deref());
        let mut ctx = Self::new(root, cfg, locale);
        ctx.reveal |= opts.reveal;
        ctx.dry_run = opts.dry_run;
        debug!(
            event = "context",
            root = %ctx.workspace_root.display(),
            locale = ?ctx.locale,
            output_dir = ?ctx.cfg.output_dir
        );
        Ok(ctx)
    }

    /// Output directory for this run; created unless this is a dry run.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn output_dir(&self) -> Result<PathBuf> {
        let configured = self.cfg.output_dir.as_deref();
        if self.dry_run {
            Ok(output::resolve_output_dir(&self.workspace_root, configured))
        } else {
            output::ensure_output_dir(&self.workspace_root, configured)
        }
    }
}
