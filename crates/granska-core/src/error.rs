use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GranskaError {
    #[error("content extraction failed: {0}")]
    Extraction(String),

    #[error("{tool} not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PopplerNotFound { tool: &'static str },

    #[error("tesseract not found but OCR was requested. Install tesseract: brew install tesseract (macOS) or apt install tesseract-ocr (Linux)")]
    TesseractNotFound,

    #[error("{tool} failed with exit code {code}: {stderr}")]
    ToolFailed {
        tool: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("failed to load snapshot from {path}: {reason}")]
    SnapshotLoad { path: PathBuf, reason: String },

    #[error("failed to load heuristics from {path}: {reason}")]
    HeuristicsLoad { path: PathBuf, reason: String },

    #[error("invalid heuristics: {0}")]
    HeuristicsInvalid(String),

    #[error("remediation command '{command}' not found. Install it or point --remediator at one")]
    RemediatorNotFound { command: String },

    #[error("remediation failed with exit code {code}: {stderr}")]
    RemediationFailed { code: i32, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
