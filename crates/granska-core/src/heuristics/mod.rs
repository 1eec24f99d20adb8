pub mod builtin;
pub mod schema;

use crate::error::GranskaError;
use schema::HeuristicsDef;
use std::path::Path;

/// Load heuristics from a JSON file.
pub fn load_heuristics(path: &Path) -> Result<HeuristicsDef, GranskaError> {
    let content = std::fs::read_to_string(path).map_err(|e| GranskaError::HeuristicsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let def: HeuristicsDef =
        serde_json::from_str(&content).map_err(|e| GranskaError::HeuristicsLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_heuristics(&def)?;
    Ok(def)
}

/// Parse heuristics from a JSON string (no file path context).
pub fn parse_heuristics_str(json: &str) -> Result<HeuristicsDef, GranskaError> {
    let def: HeuristicsDef = serde_json::from_str(json).map_err(GranskaError::Json)?;
    validate_heuristics(&def)?;
    Ok(def)
}

/// Validate that a heuristics definition is usable.
pub fn validate_heuristics(def: &HeuristicsDef) -> Result<(), GranskaError> {
    if def.name.is_empty() {
        return Err(GranskaError::HeuristicsInvalid(
            "name must not be empty".into(),
        ));
    }

    if def.decorative_min_dimension == 0 {
        return Err(GranskaError::HeuristicsInvalid(
            "decorative_min_dimension must be positive".into(),
        ));
    }

    if u64::from(def.decorative_min_dimension) > u64::from(def.decorative_max_dimension) {
        return Err(GranskaError::HeuristicsInvalid(format!(
            "decorative_min_dimension ({}) must not exceed decorative_max_dimension ({})",
            def.decorative_min_dimension, def.decorative_max_dimension
        )));
    }

    if def.decorative_min_area == 0 {
        return Err(GranskaError::HeuristicsInvalid(
            "decorative_min_area must be positive".into(),
        ));
    }

    if !(def.heading_font_size > 0.0) {
        return Err(GranskaError::HeuristicsInvalid(
            "heading_font_size must be positive".into(),
        ));
    }

    if !(def.reading_order_width_ratio > 0.0 && def.reading_order_width_ratio <= 1.0) {
        return Err(GranskaError::HeuristicsInvalid(format!(
            "reading_order_width_ratio must be in (0, 1], got {}",
            def.reading_order_width_ratio
        )));
    }

    Ok(())
}
