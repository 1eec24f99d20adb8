use granska_core::analyze::Report;
use granska_core::error::GranskaError;
use granska_core::model::ExtractionSnapshot;

pub fn print_report(report: &Report) -> Result<(), GranskaError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

pub fn print_snapshot(snapshot: &ExtractionSnapshot) -> Result<(), GranskaError> {
    let json = serde_json::to_string_pretty(snapshot)?;
    println!("{json}");
    Ok(())
}
