pub mod engine;
pub mod report;

pub use engine::analyze;
pub use report::{Issue, IssueKind, Report, Severity};
