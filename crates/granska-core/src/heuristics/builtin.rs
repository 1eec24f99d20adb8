use crate::error::GranskaError;
use crate::heuristics::schema::HeuristicsDef;

const DEFAULT_JSON: &str = include_str!("../../../../heuristics/default.json");

/// Available builtin heuristics presets.
pub const PRESETS: &[&str] = &["default"];

/// Load a builtin preset by name.
pub fn load_preset(name: &str) -> Result<HeuristicsDef, GranskaError> {
    match name {
        "default" => {
            let def: HeuristicsDef = serde_json::from_str(DEFAULT_JSON)?;
            Ok(def)
        }
        _ => Err(GranskaError::HeuristicsInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_preset() {
        let def = load_preset("default").unwrap();
        assert_eq!(def.name, "default");
        assert_eq!(def.decorative_min_dimension, 20);
        assert_eq!(def.heading_font_size, 16.0);
        assert_eq!(def.reading_order_min_words, 50);
    }

    #[test]
    fn test_builtin_matches_code_defaults() {
        let embedded = load_preset("default").unwrap();
        let coded = HeuristicsDef::default();
        assert_eq!(
            embedded.decorative_min_area,
            coded.decorative_min_area
        );
        assert_eq!(
            embedded.reading_order_width_ratio,
            coded.reading_order_width_ratio
        );
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("strict").is_err());
    }
}
