pub mod analyze;
pub mod error;
pub mod extraction;
pub mod heuristics;
pub mod model;
pub mod remediation;

use analyze::Report;
use error::GranskaError;
use extraction::ContentProvider;
use heuristics::schema::HeuristicsDef;
use model::ExtractionSnapshot;

/// Main API entry point: extract a PDF's content and analyze it for
/// accessibility issues.
pub fn analyze_pdf(
    pdf_bytes: &[u8],
    provider: &dyn ContentProvider,
    heuristics: &HeuristicsDef,
) -> Result<Report, GranskaError> {
    let snapshot = provider.extract(pdf_bytes)?;
    Ok(analyze::analyze(&snapshot, heuristics))
}

/// Analyze an already-extracted snapshot. Pure: same snapshot and
/// heuristics always yield the same issues.
pub fn analyze_snapshot(snapshot: &ExtractionSnapshot, heuristics: &HeuristicsDef) -> Report {
    analyze::analyze(snapshot, heuristics)
}

/// Load a snapshot previously written as JSON (e.g. by `granska extract`).
pub fn load_snapshot(path: &std::path::Path) -> Result<ExtractionSnapshot, GranskaError> {
    let bytes = std::fs::read(path).map_err(|e| GranskaError::SnapshotLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_slice(&bytes).map_err(|e| GranskaError::SnapshotLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
