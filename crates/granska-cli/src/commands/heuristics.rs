use granska_core::heuristics::builtin;
use granska_core::heuristics::schema::HeuristicsDef;
use std::path::Path;

pub fn list() -> Result<(), granska_core::error::GranskaError> {
    println!("Available heuristics presets:\n");
    for name in builtin::PRESETS {
        let def = builtin::load_preset(name)?;
        println!("  {:<10} v{}", name, def.version);
        if let Some(ref desc) = def.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), granska_core::error::GranskaError> {
    let def = builtin::load_preset(preset)?;
    print_thresholds(&def);
    Ok(())
}

fn print_thresholds(def: &HeuristicsDef) {
    println!("{} (version {})\n", def.name, def.version);

    if let Some(ref desc) = def.description {
        println!("{}\n", desc);
    }

    println!("Image alt-text checking skips likely-decorative images:");
    println!(
        "  decorative_min_dimension    {:>8}  px (smaller images are decorative)",
        def.decorative_min_dimension
    );
    println!(
        "  decorative_min_area         {:>8}  px^2",
        def.decorative_min_area
    );
    println!(
        "  decorative_max_dimension    {:>8}  px (larger images are decorative)",
        def.decorative_max_dimension
    );
    println!();
    println!("Structure and reading order:");
    println!(
        "  heading_font_size           {:>8}  (larger text is a heading candidate)",
        def.heading_font_size
    );
    println!(
        "  reading_order_min_words     {:>8}  words per page before the check applies",
        def.reading_order_min_words
    );
    println!(
        "  reading_order_width_ratio   {:>8}  of the page width the word spread must exceed",
        def.reading_order_width_ratio
    );
    println!();
}

pub fn schema() -> Result<(), granska_core::error::GranskaError> {
    print!(
        r#"JSON Heuristics Schema
======================

A heuristics file overrides the thresholds the accessibility checkers
run with. When you run `granska analyze --heuristics FILE`, every
checker reads its limits from this file instead of the builtin default.
All threshold fields are optional; omitted fields keep their defaults.

Top-level fields:
  name          (string, required)  Human-readable name of the profile
  description   (string, optional)  What this profile is for
  version       (string, required)  Version identifier (e.g., "2025.1")

Image alt-text checking (decorative-image classification):
  decorative_min_dimension
                (integer, default 20)    Images narrower or shorter than
                                         this many pixels are decorative
                                         (bullets, rules) and skipped.
  decorative_min_area
                (integer, default 400)   Images with a smaller pixel area
                                         are decorative and skipped.
  decorative_max_dimension
                (integer, default 1500)  Images wider or taller than this
                                         are treated as page backgrounds
                                         and skipped.

Heading detection:
  heading_font_size
                (number, default 16.0)   Words with a larger font size
                                         are heading candidates.

Reading order:
  reading_order_min_words
                (integer, default 50)    Pages with more words than this
                                         are checked for multi-column
                                         reading-order risk.
  reading_order_width_ratio
                (number, default 0.7)    Fraction of the page width the
                                         spread of word x-positions must
                                         exceed to flag the page.
                                         Must be in (0, 1].

Example:
{{
  "name": "strict-scans",
  "description": "Tighter limits for scanned committee reports",
  "version": "1.0",
  "decorative_min_dimension": 32,
  "heading_font_size": 14.0,
  "reading_order_min_words": 30,
  "reading_order_width_ratio": 0.6
}}

The thresholds are deliberately blunt instruments: they flag pages and
images for review, they do not prove a document inaccessible.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), granska_core::error::GranskaError> {
    let def = granska_core::heuristics::load_heuristics(file)?;

    println!("Heuristics '{}' (v{}) are valid.", def.name, def.version);
    print_thresholds(&def);

    // Check for suspicious but legal values (warnings, not errors)
    let mut warnings = Vec::new();
    if def.heading_font_size < 10.0 {
        warnings.push(format!(
            "heading_font_size {} will flag ordinary body text as headings",
            def.heading_font_size
        ));
    }
    if def.reading_order_min_words < 10 {
        warnings.push(format!(
            "reading_order_min_words {} will flag nearly every page with text",
            def.reading_order_min_words
        ));
    }

    if !warnings.is_empty() {
        println!("Warnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
