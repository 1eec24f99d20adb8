use granska_core::extraction::poppler::PopplerProvider;
use granska_core::extraction::ContentProvider;
use granska_core::heuristics::{self, builtin};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    heuristics_file: Option<PathBuf>,
    output_format: &str,
    report_file: Option<PathBuf>,
    verbose: bool,
    ocr: bool,
) -> Result<(), granska_core::error::GranskaError> {
    let heuristics = match heuristics_file {
        Some(ref path) => heuristics::load_heuristics(path)?,
        None => builtin::load_preset("default")?,
    };

    // Determine input type by extension: a .json file is a pre-extracted
    // snapshot, anything else goes through the provider.
    let is_json = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let snapshot = if is_json {
        granska_core::load_snapshot(&input_file)?
    } else {
        let pdf_bytes = std::fs::read(&input_file)?;
        let provider = PopplerProvider::with_ocr(ocr);
        let mut snapshot = provider.extract(&pdf_bytes)?;
        snapshot.source = input_file.display().to_string();
        snapshot
    };

    let report = granska_core::analyze_snapshot(&snapshot, &heuristics);

    match output_format {
        "json" => output::json::print_report(&report)?,
        _ => output::table::print_report(&report, verbose),
    }

    if let Some(path) = report_file {
        let text = format!(
            "{}\n\n{}",
            report.summary(),
            output::table::format_detailed(&report)
        );
        std::fs::write(&path, text)?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}
