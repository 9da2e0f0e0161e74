use std::path::Path;

use anyhow::{Context, Result};
use git2::Repository;

/// Output subfolder used when `patchgen.output-dir` is unset.
pub const DEFAULT_OUTPUT_DIR: &str = "patch";

/// Patchgen configuration values sourced from git config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchgenConfig {
    /// Output directory, relative to the workspace root unless absolute.
    pub output_dir: Option<String>,
    /// Display language tag (`en`, `zh-cn`, ...).
    pub language: Option<String>,
    /// Open the generated patch's folder after writing it.
    pub reveal: bool,
}

impl PatchgenConfig {
    /// Load configuration from git config with precedence: local → global → system.
    ///
    /// # Errors
    /// Returns an error if repository discovery or reading config fails.
    pub fn load(repo_root: &Path) -> Result<Self> {
        let repo = Repository::discover(repo_root).with_context(|| {
            format!(
                "failed to discover Git repository from {}",
                repo_root.display()
            )
        })?;

        let cfg = repo.config().context("failed to open git config")?;

        let mut out = Self::default();

        if let Ok(v) = cfg.get_string("patchgen.output-dir")
            && !v.trim().is_empty()
        {
            out.output_dir = Some(v);
        }
        if let Ok(v) = cfg.get_string("patchgen.language")
            && !v.trim().is_empty()
        {
            out.language = Some(v);
        }
        if let Ok(v) = cfg.get_bool("patchgen.reveal") {
            out.reveal = v;
        }

        Ok(out)
    }
}
