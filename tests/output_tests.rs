use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::NamedTempFile;
use timing_path_analyzer::analyzer::{PathAnalysis, PathAnalyzer};
use timing_path_analyzer::output::{
    build_report, format_path_result, read_report, render_results, validate_path, write_report,
    write_results,
};
use timing_path_analyzer::parser::{NodeRegistry, ReportParser};

const REPORT: &str = "\
Path P1 FF_Q PI 2.345
P1.1 NET1 PI 0.123
P1.2 INV1 NET1 0.456

Path P2 FF_D PI 1.000
";

fn analyze() -> (NodeRegistry, Vec<PathAnalysis>) {
    let mut parser = ReportParser::new();
    let report = parser.parse_str(REPORT);
    let nodes = parser.into_nodes();
    let analyses = PathAnalyzer::new(&nodes).find_critical_paths(&report.paths, 10);
    (nodes, analyses)
}

#[test]
fn test_format_path_result() {
    let (nodes, analyses) = analyze();

    assert_eq!(
        format_path_result(1, &analyses[0], &nodes),
        "1. P1: Delay = 2.345 ns (Stage max: 0.456 ns at NET1) — Suggest: insert a pipeline register between NET1 and INV1"
    );
}

#[test]
fn test_format_path_without_stage() {
    let (nodes, analyses) = analyze();

    assert_eq!(
        format_path_result(2, &analyses[1], &nodes),
        "2. P2: Delay = 1.000 ns — Suggest: Insufficient path data for optimization suggestions"
    );
}

#[test]
fn test_render_results() {
    let (nodes, analyses) = analyze();
    let rendered = render_results(&analyses, &nodes);

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Top 2 Critical Paths:");
    assert!(lines[1].starts_with("1. P1:"));
    assert!(lines[2].starts_with("2. P2:"));
}

#[test]
fn test_render_empty() {
    let nodes = NodeRegistry::new();
    assert_eq!(render_results(&[], &nodes), "Top 0 Critical Paths:\n");
}

#[test]
fn test_write_results() {
    let (nodes, analyses) = analyze();
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("nested/results.txt");

    let rendered = render_results(&analyses, &nodes);
    write_results(&rendered, &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), rendered);
}

#[test]
fn test_write_and_read_report() {
    let (nodes, analyses) = analyze();
    let report = build_report(&analyses, &nodes, vec!["sample.rpt".to_string()], 2, 0);

    let temp_file = NamedTempFile::new().unwrap();
    write_report(&report, temp_file.path()).unwrap();

    let loaded = read_report(temp_file.path()).unwrap();
    assert_eq!(loaded, report);
}

#[test]
fn test_read_report_rejects_garbage() {
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not json").unwrap();

    assert!(read_report(temp_file.path()).is_err());
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    // Try to write to a directory path
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}
