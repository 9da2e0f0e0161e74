pub mod blame;
pub mod patch;
pub mod repo;
pub mod select;

pub use blame::{CursorPosition, commit_at_cursor};
pub use patch::{PatchKind, PatchRequest, generate};
pub use repo::{relative_to_workspace, repo_root, workspace_root};
pub use select::select_commit_interactive;
