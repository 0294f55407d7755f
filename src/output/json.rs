//! JSON analysis report writer.
//!
//! Writes AnalysisReport structs to JSON files with proper formatting.

use super::schema::{AnalysisReport, CriticalPathEntry, WorstStageEntry};
use super::{ensure_parent_dir, validate_path};
use crate::analyzer::PathAnalysis;
use crate::parser::NodeRegistry;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Convert ranked analyses into the output report format
///
/// **Public** - used by commands to create final output
pub fn build_report(
    analyses: &[PathAnalysis],
    nodes: &NodeRegistry,
    sources: Vec<String>,
    parsed_paths: usize,
    diagnostics: usize,
) -> AnalysisReport {
    let critical_paths = analyses
        .iter()
        .enumerate()
        .map(|(i, analysis)| to_entry(i + 1, analysis, nodes))
        .collect();

    AnalysisReport {
        version: SCHEMA_VERSION.to_string(),
        sources,
        parsed_paths,
        diagnostics,
        critical_paths,
        generated_at: Utc::now().to_rfc3339(),
    }
}

fn to_entry(rank: usize, analysis: &PathAnalysis, nodes: &NodeRegistry) -> CriticalPathEntry {
    let worst_stage = analysis
        .worst_stage
        .zip(analysis.worst_stage_index)
        .and_then(|(edge, index)| {
            let from = nodes.get(edge.from)?;
            let to = nodes.get(edge.to)?;
            Some(WorstStageEntry {
                stage: index + 1,
                from: from.name.clone(),
                from_category: from.category,
                to: to.name.clone(),
                to_category: to.category,
                delay: edge.delay,
                net_delay: edge.net_delay,
                cell_delay: edge.cell_delay,
            })
        });

    CriticalPathEntry {
        rank,
        id: analysis.path.id.clone(),
        startpoint: analysis.path.startpoint.clone(),
        endpoint: analysis.path.endpoint.clone(),
        total_delay: analysis.path.total_delay,
        stage_count: analysis.path.edges.len(),
        worst_stage,
        kind: analysis.kind,
        suggestion: analysis.optimization_suggestion.clone(),
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(
    report: &AnalysisReport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON report to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report)?;

    Ok(())
}

/// Read a report from a JSON file
///
/// **Public** - backs the `validate` command
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<AnalysisReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: AnalysisReport = serde_json::from_reader(file)?;

    debug!(
        "Report loaded: version {}, {} critical paths",
        report.version,
        report.critical_paths.len()
    );

    Ok(report)
}
