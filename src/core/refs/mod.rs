pub mod commit_ref;
pub mod label;
pub mod probe;

pub use commit_ref::{CommitRef, InputRejection, validate_input};
pub use label::parse_comparison_label;
pub use probe::find_commit;
