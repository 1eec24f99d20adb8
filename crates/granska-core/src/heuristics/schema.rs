use serde::{Deserialize, Serialize};

/// Named thresholds driving the accessibility checkers.
///
/// The defaults are carried over verbatim from the original audit tooling;
/// they are acknowledged proxies, not derived values. Override any of them
/// from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicsDef {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Images narrower or shorter than this (pixels) are decorative.
    #[serde(default = "default_decorative_min_dimension")]
    pub decorative_min_dimension: u32,
    /// Images with a pixel area below this are decorative.
    #[serde(default = "default_decorative_min_area")]
    pub decorative_min_area: u64,
    /// Images wider or taller than this (pixels) are decorative
    /// (full-page backgrounds, scan borders).
    #[serde(default = "default_decorative_max_dimension")]
    pub decorative_max_dimension: u32,
    /// Words with a font size above this are heading candidates.
    #[serde(default = "default_heading_font_size")]
    pub heading_font_size: f32,
    /// Pages with more words than this are checked for reading-order risk.
    #[serde(default = "default_reading_order_min_words")]
    pub reading_order_min_words: usize,
    /// Fraction of the page width the word x-spread must exceed to flag a
    /// reading-order risk.
    #[serde(default = "default_reading_order_width_ratio")]
    pub reading_order_width_ratio: f32,
}

fn default_decorative_min_dimension() -> u32 {
    20
}

fn default_decorative_min_area() -> u64 {
    400
}

fn default_decorative_max_dimension() -> u32 {
    1500
}

fn default_heading_font_size() -> f32 {
    16.0
}

fn default_reading_order_min_words() -> usize {
    50
}

fn default_reading_order_width_ratio() -> f32 {
    0.7
}

impl Default for HeuristicsDef {
    fn default() -> Self {
        HeuristicsDef {
            name: "default".into(),
            version: "1.0".into(),
            description: None,
            decorative_min_dimension: default_decorative_min_dimension(),
            decorative_min_area: default_decorative_min_area(),
            decorative_max_dimension: default_decorative_max_dimension(),
            heading_font_size: default_heading_font_size(),
            reading_order_min_words: default_reading_order_min_words(),
            reading_order_width_ratio: default_reading_order_width_ratio(),
        }
    }
}
