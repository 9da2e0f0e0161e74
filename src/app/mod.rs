pub mod context;
pub mod report;
