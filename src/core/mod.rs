pub mod git;
pub mod host;
pub mod output;
pub mod refs;
