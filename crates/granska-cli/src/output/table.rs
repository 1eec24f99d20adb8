use granska_core::analyze::Report;
use granska_core::model::ExtractionSnapshot;

/// Print the report summary, optionally followed by the numbered issue
/// list.
pub fn print_report(report: &Report, verbose: bool) {
    println!("{}", report.summary());
    if verbose && !report.issues().is_empty() {
        println!();
        println!("{}", format_detailed(report));
    }
}

/// Numbered issue-by-issue rendering, used for report files and verbose
/// output.
pub fn format_detailed(report: &Report) -> String {
    let mut out = Vec::new();
    out.push("Detailed Issues:".to_string());
    out.push("=".repeat(80));
    out.push(String::new());

    for (i, issue) in report.issues().iter().enumerate() {
        out.push(format!("{}. {}", i + 1, issue.kind));
        out.push(format!("   Page: {}", issue.page));
        out.push(format!("   Severity: {}", issue.severity));
        out.push(format!("   WCAG: {}", issue.wcag_criterion));
        out.push(format!("   Description: {}", issue.description));
        out.push(format!("   Recommendation: {}", issue.recommendation));
        if let Some(ref location) = issue.location {
            out.push(format!("   Location: {}", location));
        }
        out.push(format!("   Auto-fixable: {}", issue.auto_fixable));
        out.push(String::new());
    }

    out.join("\n")
}

/// Page-by-page text rendering of an extraction snapshot.
pub fn format_snapshot(snapshot: &ExtractionSnapshot) -> String {
    let rule = "=".repeat(80);
    let mut out = Vec::new();

    out.push("PDF Extraction Report".to_string());
    out.push(rule.clone());
    out.push(String::new());
    out.push(format!("File: {}", snapshot.source));
    out.push(format!("Pages: {}", snapshot.num_pages));
    out.push(format!("Total Words: {}", snapshot.total_words()));
    out.push(format!("Total Images: {}", snapshot.total_images()));
    out.push(String::new());

    if !snapshot.title.is_empty() {
        out.push(format!("Title: {}", snapshot.title));
    }
    if !snapshot.author.is_empty() {
        out.push(format!("Author: {}", snapshot.author));
    }
    if !snapshot.title.is_empty() || !snapshot.author.is_empty() {
        out.push(String::new());
    }

    out.push(rule.clone());

    for page in &snapshot.pages {
        out.push(String::new());
        out.push(format!("PAGE {}", page.page_number));
        out.push("-".repeat(80));
        out.push(format!("Dimensions: {} x {}", page.width, page.height));
        out.push(format!("Words: {}", page.word_count()));
        out.push(format!("Images: {}", page.image_count()));

        if !page.words.is_empty() {
            out.push(String::new());
            out.push("TEXT CONTENT:".to_string());
            let text: Vec<&str> = page.words.iter().map(|w| w.text.as_str()).collect();
            out.push(text.join(" "));
        }

        if !page.images.is_empty() {
            out.push(String::new());
            out.push(format!("IMAGES ({}):", page.images.len()));
            for image in &page.images {
                out.push(format!(
                    "  - {}: {}x{}",
                    image.name, image.width, image.height
                ));
                if let Some(ref ocr) = image.ocr_text {
                    let preview: String = ocr.chars().take(100).collect();
                    out.push(format!("    OCR: {}", preview));
                }
            }
        }

        out.push(String::new());
        out.push(rule.clone());
    }

    out.join("\n")
}
