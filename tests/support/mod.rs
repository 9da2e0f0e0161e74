#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// Run git in `dir` and return trimmed stdout.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let out = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap_or(dir))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8_lossy(&out).trim().to_string()
}

/// A fresh repository with a test identity and signing disabled.
pub fn init_repo() -> TempDir {
    let td = TempDir::new().unwrap();
    git(td.path(), &["init", "-q", "-b", "main"]);
    git(td.path(), &["config", "user.name", "Test User"]);
    git(td.path(), &["config", "user.email", "test@example.com"]);
    git(td.path(), &["config", "commit.gpgsign", "false"]);
    td
}

/// Write `contents` to `file`, commit it, and return the full commit id.
pub fn commit_file(dir: &Path, file: &str, contents: &str, message: &str) -> String {
    let path = dir.join(file);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    git(dir, &["add", file]);
    git(dir, &["commit", "-q", "-m", message]);
    git(dir, &["rev-parse", "HEAD"])
}

pub fn short(sha: &str) -> &str {
    &sha[..8]
}

/// The patchgen binary run inside `dir` with English messages.
pub fn patchgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-patchgen").unwrap();
    cmd.current_dir(dir)
        .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap_or(dir))
        .env("LANG", "C")
        .env_remove("LC_ALL")
        .env_remove("LC_MESSAGES")
        .env_remove("RUST_LOG");
    cmd
}
