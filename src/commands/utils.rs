use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a JSON analysis report
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid analysis report");
    println!("  Version: {}", report.version);
    println!("  Sources: {}", report.sources.len());
    println!("  Parsed Paths: {}", report.parsed_paths);
    println!("  Skipped Lines: {}", report.diagnostics);
    println!("  Critical Paths: {}", report.critical_paths.len());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Timing Path Analyzer v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Ranks critical paths in static timing reports and suggests fixes.");
}
