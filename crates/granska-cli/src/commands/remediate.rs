use granska_core::extraction::poppler::PopplerProvider;
use granska_core::extraction::ContentProvider;
use granska_core::heuristics::{self, builtin, schema::HeuristicsDef};
use granska_core::remediation::Remediator;
use std::path::{Path, PathBuf};

pub fn run(
    pdf_file: PathBuf,
    out_file: PathBuf,
    heuristics_file: Option<PathBuf>,
    remediator_command: Option<String>,
    skip_verify: bool,
    ocr: bool,
) -> Result<(), granska_core::error::GranskaError> {
    let heuristics = match heuristics_file {
        Some(ref path) => heuristics::load_heuristics(path)?,
        None => builtin::load_preset("default")?,
    };
    let provider = PopplerProvider::with_ocr(ocr);

    let report = analyze_file(&pdf_file, &provider, &heuristics)?;
    println!("Found {} accessibility issue(s)", report.issues().len());
    println!("  Critical: {}", report.critical_count());
    println!("  High: {}", report.high_count());
    println!("  Medium: {}", report.medium_count());
    println!("  Low: {}", report.low_count());
    println!("  Auto-fixable: {}", report.auto_fixable_count());

    let remediator = match remediator_command {
        Some(command) => Remediator::with_command(command),
        None => Remediator::new(),
    };
    println!("\nRemediating with '{}'...", remediator.command());
    remediator.remediate(&pdf_file, &out_file)?;
    println!("Remediated PDF written to {}", out_file.display());

    if skip_verify {
        return Ok(());
    }

    let after = analyze_file(&out_file, &provider, &heuristics)?;
    println!(
        "\nVerification: {} issue(s) before, {} after",
        report.issues().len(),
        after.issues().len()
    );
    if after.issues().len() < report.issues().len() {
        println!(
            "  {} issue(s) resolved",
            report.issues().len() - after.issues().len()
        );
    }

    Ok(())
}

fn analyze_file(
    path: &Path,
    provider: &PopplerProvider,
    heuristics: &HeuristicsDef,
) -> Result<granska_core::analyze::Report, granska_core::error::GranskaError> {
    let pdf_bytes = std::fs::read(path)?;
    let mut snapshot = provider.extract(&pdf_bytes)?;
    snapshot.source = path.display().to_string();
    Ok(granska_core::analyze_snapshot(&snapshot, heuristics))
}
