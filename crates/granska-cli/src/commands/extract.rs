use granska_core::extraction::poppler::PopplerProvider;
use granska_core::extraction::ContentProvider;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    ocr: bool,
) -> Result<(), granska_core::error::GranskaError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let provider = PopplerProvider::with_ocr(ocr);
    let mut snapshot = provider.extract(&pdf_bytes)?;
    snapshot.source = pdf_file.display().to_string();

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&snapshot)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} page(s), {} word(s), {} image(s), written to {}",
                snapshot.num_pages,
                snapshot.total_words(),
                snapshot.total_images(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print_snapshot(&snapshot)?,
            _ => println!("{}", output::table::format_snapshot(&snapshot)),
        },
    }

    Ok(())
}
