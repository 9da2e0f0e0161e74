use std::fmt;

use thiserror::Error;

use crate::{core::refs::InputRejection, i18n::Message};

/// Failures reported to the user as a single localized line.
///
/// `Display` renders the English catalog entry from [`Message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// No comparison label was supplied.
    NoTab,

    /// The comparison label does not contain two commit ids.
    ParseCommit,

    /// No usable file path for the scoped diff.
    FilePath,

    /// The file does not live under the workspace root.
    Workspace,

    /// Not run from inside a workspace.
    NoWorkspace,

    /// Every commit id source came up empty or was cancelled.
    NoCommit,

    /// A commit id given on the command line failed validation.
    InvalidCommit(InputRejection),

    /// git reported an unknown or bad revision.
    CommitNotExist,

    /// git was run outside a repository.
    NotGitRepo,

    /// git succeeded but produced nothing.
    PatchEmpty,

    /// Anything else, with the underlying message.
    Failed(String),
}

impl PatchError {
    /// Classify a failed git run by the text it wrote to stderr.
    pub fn from_git_stderr(stderr: &str) -> Self {
        let lower = stderr.to_ascii_lowercase();
        if lower.contains("unknown revision") || lower.contains("bad revision") {
            Self::CommitNotExist
        } else if lower.contains("not a git repository") {
            Self::NotGitRepo
        } else {
            Self::Failed(stderr.trim().to_string())
        }
    }

    pub fn message(&self) -> Message {
        match self {
            Self::NoTab => Message::NoTab,
            Self::ParseCommit => Message::ParseCommitFail,
            Self::FilePath => Message::GetFilePathFail,
            Self::Workspace => Message::GetWorkspaceFail,
            Self::NoWorkspace => Message::NoWorkspace,
            Self::NoCommit => Message::NoCommit,
            Self::InvalidCommit(InputRejection::Invalid) => Message::InputCommitIdInvalid,
            Self::InvalidCommit(InputRejection::TooShort) => Message::InputCommitIdShort,
            Self::CommitNotExist => Message::CommitNotExist,
            Self::NotGitRepo => Message::NotGitRepo,
            Self::PatchEmpty => Message::PatchEmpty,
            Self::Failed(detail) => Message::PatchFailed {
                detail: (!detail.is_empty()).then(|| detail.clone()),
            },
        }
    }
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.message(), f)
    }
}
