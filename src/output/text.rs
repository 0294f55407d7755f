//! Plain-text rendering of ranked analyses.
//!
//! The line layout is consumed by downstream summary tools and must not
//! change:
//!
//! ```text
//! 1. P3: Delay = 6.000 ns (Stage max: 2.000 ns at CELL3) — Suggest: balance fan-out after CELL3
//! ```

use super::{ensure_parent_dir, validate_path};
use crate::analyzer::PathAnalysis;
use crate::parser::NodeRegistry;
use crate::utils::error::OutputError;
use log::info;
use std::path::Path;
use std::time::Duration;

/// Format one ranked analysis as a display line
///
/// The stage clause is left out when the path has no worst stage or its
/// source node is unknown to `nodes`.
pub fn format_path_result(rank: usize, analysis: &PathAnalysis, nodes: &NodeRegistry) -> String {
    let mut line = format!(
        "{}. {}: Delay = {:.3} ns",
        rank, analysis.path.id, analysis.path.total_delay
    );

    if let Some(source) = analysis.worst_stage.and_then(|edge| nodes.name(edge.from)) {
        line.push_str(&format!(
            " (Stage max: {:.3} ns at {})",
            analysis.worst_stage_delay, source
        ));
    }

    line.push_str(" — Suggest: ");
    line.push_str(&analysis.optimization_suggestion);
    line
}

/// Render the full listing, one line per analysis plus a heading
pub fn render_results(analyses: &[PathAnalysis], nodes: &NodeRegistry) -> String {
    let mut output = format!("Top {} Critical Paths:\n", analyses.len());

    for (i, analysis) in analyses.iter().enumerate() {
        output.push_str(&format_path_result(i + 1, analysis, nodes));
        output.push('\n');
    }

    output
}

/// Write rendered results to a text file
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, directory, or parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_results(rendered: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing results to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    std::fs::write(output_path, rendered)?;

    Ok(())
}

/// Human-readable duration (µs below 1 ms, ms below 1 s)
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs_f64();

    if seconds < 0.001 {
        format!("{:.0} µs", seconds * 1_000_000.0)
    } else if seconds < 1.0 {
        format!("{:.2} ms", seconds * 1000.0)
    } else {
        format!("{:.2} s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_micros(250)), "250 µs");
        assert_eq!(format_elapsed(Duration::from_millis(12)), "12.00 ms");
        assert_eq!(format_elapsed(Duration::from_millis(2500)), "2.50 s");
    }
}
