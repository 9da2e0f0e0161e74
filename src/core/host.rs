//! Desktop collaborators: clipboard, file browser and the terminal prompt.

use std::{
    io,
    path::Path,
    process::{Command, Stdio},
};

use anyhow::{Context, Result};
use console::{Style, Term};
use tracing::debug;

use crate::{
    core::refs::{CommitRef, InputRejection, validate_input},
    i18n::{Locale, Message},
};

/// Ctrl-D as the terminal delivers it to a raw-mode line read.
const END_OF_TRANSMISSION: char = '\u{4}';

const CLIPBOARD_READERS: &[(&str, &[&str])] = &[
    ("pbpaste", &[]),
    ("wl-paste", &["--no-newline"]),
    ("xclip", &["-selection", "clipboard", "-o"]),
    ("xsel", &["--clipboard", "--output"]),
    ("powershell", &["-NoProfile", "-Command", "Get-Clipboard"]),
];

/// Current clipboard text, from the first clipboard tool that answers.
pub fn clipboard_text() -> Option<String> {
    CLIPBOARD_READERS.iter().find_map(|(bin, args)| {
        let out = Command::new(bin)
            .args(*args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .ok()?;
        if !out.status.success() {
            return None;
        }
        debug!(event = "clipboard_read", tool = *bin);
        Some(String::from_utf8_lossy(&out.stdout).into_owned())
    })
}

/// The clipboard is only a pre-fill when all of it is one commit id.
pub fn commit_from_clipboard(text: Option<&str>) -> Option<CommitRef> {
    CommitRef::parse(text?)
}

/// Open the folder holding `path` in the platform file browser.
///
/// # Errors
/// Returns an error if the browser process cannot be started.
pub fn reveal(path: &Path) -> Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg("-R").arg(path);
        c
    } else if cfg!(windows) {
        let mut c = Command::new("explorer");
        c.arg(format!("/select,{}", path.display()));
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path.parent().unwrap_or(path));
        c
    };
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to reveal {}", path.display()))?;
    Ok(())
}

/// Whether a person can answer a prompt.
pub fn has_terminal() -> bool {
    Term::stderr().is_term()
}

/// Decide what a line typed at the prompt means. Empty input takes the
/// pre-fill when there is one.
pub fn prompt_reply(input: &str, prefill: Option<&CommitRef>) -> Result<CommitRef, InputRejection> {
    match prefill {
        Some(p) if input.trim().is_empty() => Ok(p.clone()),
        _ => validate_input(input),
    }
}

/// Read replies until one is a usable commit id. An error from
/// `read_line` cancels the entry.
///
/// # Errors
/// Returns an error if `rejected` fails.
pub fn read_commit_reply<R, W>(
    mut read_line: R,
    mut rejected: W,
    prefill: Option<&CommitRef>,
) -> io::Result<Option<CommitRef>>
where
    R: FnMut() -> io::Result<String>,
    W: FnMut(InputRejection) -> io::Result<()>,
{
    loop {
        let Ok(line) = read_line() else {
            return Ok(None);
        };
        match prompt_reply(&line, prefill) {
            Ok(commit) => return Ok(Some(commit)),
            Err(rejection) => rejected(rejection)?,
        }
    }
}

/// Ask for a commit id on the terminal until a valid one is entered.
///
/// Returns `None` if stderr is not a terminal, the read is interrupted, or
/// input ends.
///
/// # Errors
/// Returns an error if writing a rejection warning fails.
pub fn prompt_commit(locale: Locale, prefill: Option<&CommitRef>) -> Result<Option<CommitRef>> {
    if !has_terminal() {
        return Ok(None);
    }
    let term = Term::stderr();

    let hint = Style::new().dim();
    let warn = Style::new().yellow();
    let default = prefill.map_or_else(
        || Message::InputCommitIdPlaceholder.render(locale),
        ToString::to_string,
    );

    let read_line = || -> io::Result<String> {
        term.write_str(&format!(
            "{} {}: ",
            Message::InputCommitId.render(locale),
            hint.apply_to(format!("[{default}]"))
        ))?;
        let line = term.read_line()?;
        if line.contains(END_OF_TRANSMISSION) {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
        }
        Ok(line)
    };
    let rejected = |rejection: InputRejection| {
        let msg = match rejection {
            InputRejection::Invalid => Message::InputCommitIdInvalid,
            InputRejection::TooShort => Message::InputCommitIdShort,
        };
        term.write_line(&warn.apply_to(msg.render(locale)).to_string())
    };

    Ok(read_commit_reply(read_line, rejected, prefill)?)
}
