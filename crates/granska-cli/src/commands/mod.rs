pub mod analyze;
pub mod extract;
pub mod heuristics;
pub mod remediate;
