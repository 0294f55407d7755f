//! Static timing report parser.
//!
//! Turns loosely structured report text into [`TimingPath`] records.
//! A report is a sequence of sections:
//!
//! ```text
//! Path <id> <endpoint> <startpoint> <totalDelay>
//! <id>.<n> <toNode> <fromNode> <stageDelay>
//! ```
//!
//! Column order is endpoint before startpoint in headers and to-node before
//! from-node in stage lines. Both are read as written; edges are stored in
//! signal-flow direction.
//!
//! Malformed lines never abort a parse. They are logged, recorded as
//! [`Diagnostic`]s and skipped.

use super::model::{Edge, TimingPath};
use super::node::{NodeRegistry, StageSide};
use crate::utils::config::{PATH_HEADER_PREFIX, SECTION_END_MARKER};
use crate::utils::error::ParseError;
use log::{debug, info, warn};
use regex::Regex;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

/// Non-negative decimal literal, exponent allowed
const DELAY_PATTERN: &str = r"(\d+(?:\.\d*)?(?:[eE][-+]?\d+)?|\.\d+(?:[eE][-+]?\d+)?)";

/// Optional unit glued to a delay (`2.345ns`); the value is kept as written
const UNIT_SUFFIX: &str = r"[A-Za-z]*";

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^Path\s+(\S+)\s+(\S+)\s+(\S+)\s+{DELAY_PATTERN}{UNIT_SUFFIX}(?:\s|$)"
    ))
    .expect("path header pattern compiles")
});

// Columns before the stage id (index, separators) are skipped
static STAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:^|\s)(\S+)\.(\d+)\s+(\S+)\s+(\S+)\s+{DELAY_PATTERN}{UNIT_SUFFIX}(?:\s|$)"
    ))
    .expect("stage line pattern compiles")
});

/// Why a report line was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// `Path ` line without id, endpoint, startpoint and delay
    MalformedHeader,
    /// Stage line of the current path that does not fit `<id>.<n> <to> <from> <delay>`
    MalformedStage,
    /// Stage line whose id prefix names another path
    ForeignStage,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::MalformedHeader => write!(f, "malformed path header"),
            DiagnosticKind::MalformedStage => write!(f, "malformed stage line"),
            DiagnosticKind::ForeignStage => write!(f, "stage does not belong to current path"),
        }
    }
}

/// A skipped line, with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
    pub text: String,
}

impl Diagnostic {
    fn new(line: usize, kind: DiagnosticKind, text: &str) -> Self {
        Self {
            line,
            kind,
            text: text.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: '{}'", self.line, self.kind, self.text.trim())
    }
}

/// Result of parsing one report
#[derive(Debug, Clone, Default)]
pub struct ParsedReport {
    /// Successfully parsed paths, in report order
    pub paths: Vec<TimingPath>,

    /// Lines skipped along the way
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedReport {
    /// Total number of stages across all paths
    pub fn stage_count(&self) -> usize {
        self.paths.iter().map(|path| path.edges.len()).sum()
    }

    /// True if no line had to be skipped
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parser for timing reports
///
/// **Public** - one instance is one parse run. Node names are deduplicated
/// across everything this instance parses and nothing else.
#[derive(Debug, Default)]
pub struct ReportParser {
    nodes: NodeRegistry,
}

impl ReportParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes resolved so far in this run
    pub fn nodes(&self) -> &NodeRegistry {
        &self.nodes
    }

    /// Finish the run and keep its nodes
    pub fn into_nodes(self) -> NodeRegistry {
        self.nodes
    }

    /// Parse a report file
    ///
    /// # Errors
    /// * `ParseError::Open` - file cannot be opened
    /// * `ParseError::Read` - file cannot be read as UTF-8 text
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<ParsedReport, ParseError> {
        let path = path.as_ref();

        info!("Parsing timing report: {}", path.display());

        let file = File::open(path).map_err(|source| ParseError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.parse(file)
    }

    /// Parse a report from any readable source.
    ///
    /// The source is read to the end before parsing starts. Only failing to
    /// read it is an error; a report without paths is a valid empty result.
    pub fn parse<R: Read>(&mut self, mut source: R) -> Result<ParsedReport, ParseError> {
        let mut text = String::new();
        source.read_to_string(&mut text)?;

        Ok(self.parse_str(&text))
    }

    /// Parse report text that is already in memory
    pub fn parse_str(&mut self, text: &str) -> ParsedReport {
        let lines: Vec<&str> = text.lines().collect();
        let mut report = ParsedReport::default();
        let mut index = 0;

        while index < lines.len() {
            let line = lines[index];

            if !line.starts_with(PATH_HEADER_PREFIX) {
                index += 1;
                continue;
            }

            match parse_header(index + 1, line) {
                Ok(mut path) => {
                    index = self.parse_section_body(&lines, index + 1, &mut path, &mut report);
                    debug!(
                        "Parsed path {} ({} stages, {} ns)",
                        path.id,
                        path.edges.len(),
                        path.total_delay
                    );
                    report.paths.push(path);
                }
                Err(diagnostic) => {
                    record(&mut report, diagnostic);
                    index += 1;
                }
            }
        }

        debug!(
            "Parsed {} paths, {} stages, {} skipped lines ({} nodes known)",
            report.paths.len(),
            report.stage_count(),
            report.diagnostics.len(),
            self.nodes.len()
        );

        report
    }

    /// Consume stage lines of `path` starting at `start`.
    ///
    /// Returns the index of the line that ended the section, which is left
    /// for the caller to examine.
    fn parse_section_body(
        &mut self,
        lines: &[&str],
        start: usize,
        path: &mut TimingPath,
        report: &mut ParsedReport,
    ) -> usize {
        let stage_marker = format!("{}.", path.id);
        let mut index = start;

        while index < lines.len() {
            let line = lines[index];

            if ends_section(line) {
                break;
            }

            if line.contains(&stage_marker) {
                match self.parse_stage(index + 1, line, &path.id) {
                    Ok(edge) => path.edges.push(edge),
                    Err(diagnostic) => record(report, diagnostic),
                }
            }

            index += 1;
        }

        index
    }

    /// Parse `<id>.<n> <to> <from> <delay>` into an edge
    fn parse_stage(&mut self, line_no: usize, line: &str, path_id: &str) -> Result<Edge, Diagnostic> {
        let malformed = || Diagnostic::new(line_no, DiagnosticKind::MalformedStage, line);

        let caps = STAGE_RE.captures(line).ok_or_else(malformed)?;

        if &caps[1] != path_id {
            return Err(Diagnostic::new(line_no, DiagnosticKind::ForeignStage, line));
        }

        let to_name = &caps[3];
        let from_name = &caps[4];
        let delay = parse_delay(&caps[5]).ok_or_else(malformed)?;

        let (from, from_category) = self.nodes.resolve_entry(from_name, StageSide::Source);
        let to = self.nodes.resolve(to_name, StageSide::Destination);

        Ok(Edge::new(from, from_category, to, delay))
    }
}

/// Parse `Path <id> <endpoint> <startpoint> <delay>` into an empty path
fn parse_header(line_no: usize, line: &str) -> Result<TimingPath, Diagnostic> {
    let malformed = || Diagnostic::new(line_no, DiagnosticKind::MalformedHeader, line);

    let caps = HEADER_RE.captures(line).ok_or_else(malformed)?;
    let total_delay = parse_delay(&caps[4]).ok_or_else(malformed)?;

    Ok(TimingPath::new(&caps[1], &caps[3], &caps[2], total_delay))
}

/// Delays that overflow to infinity are rejected
fn parse_delay(literal: &str) -> Option<f64> {
    literal.parse::<f64>().ok().filter(|delay| delay.is_finite())
}

fn ends_section(line: &str) -> bool {
    line.trim().is_empty()
        || line.starts_with(PATH_HEADER_PREFIX)
        || line.contains(SECTION_END_MARKER)
}

fn record(report: &mut ParsedReport, diagnostic: Diagnostic) {
    warn!("Skipping {}", diagnostic);
    report.diagnostics.push(diagnostic);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::node::NodeCategory;

    #[test]
    fn test_parse_header_column_order() {
        let path = parse_header(1, "Path P7  FF_D  PI_A  1.5").unwrap();

        assert_eq!(path.id, "P7");
        assert_eq!(path.endpoint, "FF_D");
        assert_eq!(path.startpoint, "PI_A");
        assert_eq!(path.total_delay, 1.5);
        assert!(path.edges.is_empty());
    }

    #[test]
    fn test_parse_header_rejects_table_heading() {
        let err = parse_header(3, "Path   Endpoint   Startpoint   Delay").unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.kind, DiagnosticKind::MalformedHeader);
    }

    #[test]
    fn test_parse_header_scientific_delay() {
        let path = parse_header(1, "Path P1 A B 2.5e-1").unwrap();
        assert_eq!(path.total_delay, 0.25);
    }

    #[test]
    fn test_parse_header_unit_suffix() {
        let path = parse_header(1, "Path P1 FF_Q PI 2.345ns").unwrap();
        assert_eq!(path.total_delay, 2.345);
    }

    #[test]
    fn test_parse_header_rejects_overflowing_delay() {
        let err = parse_header(5, "Path P1 FF_Q PI 1e400").unwrap_err();
        assert_eq!(err.line, 5);
        assert_eq!(err.kind, DiagnosticKind::MalformedHeader);
    }

    #[test]
    fn test_parse_header_missing_field() {
        assert!(parse_header(1, "Path P1 A 2.0").is_err());
    }

    #[test]
    fn test_parse_stage_inverts_columns() {
        let mut parser = ReportParser::new();
        let edge = parser.parse_stage(2, "P1.1   NET1   PI   0.123", "P1").unwrap();

        assert_eq!(parser.nodes().name(edge.from), Some("PI"));
        assert_eq!(parser.nodes().name(edge.to), Some("NET1"));
        assert_eq!(edge.delay, 0.123);
        assert_eq!(edge.cell_delay, 0.123);
        assert_eq!(edge.net_delay, 0.0);
    }

    #[test]
    fn test_parse_stage_net_source() {
        let mut parser = ReportParser::new();
        let edge = parser.parse_stage(2, "P1.2 INV1 NET1 0.456", "P1").unwrap();

        assert_eq!(parser.nodes().category(edge.from), Some(NodeCategory::Net));
        assert_eq!(edge.net_delay, 0.456);
        assert_eq!(edge.cell_delay, 0.0);
    }

    #[test]
    fn test_parse_stage_foreign_id() {
        let mut parser = ReportParser::new();
        let err = parser.parse_stage(4, "XP1.1 A B 0.1", "P1").unwrap_err();

        assert_eq!(err.kind, DiagnosticKind::ForeignStage);
        assert!(parser.nodes().is_empty());
    }

    #[test]
    fn test_parse_stage_bad_delay() {
        let mut parser = ReportParser::new();
        let err = parser.parse_stage(4, "P1.1 A B fast", "P1").unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::MalformedStage);
    }

    #[test]
    fn test_parse_stage_rejects_overflowing_delay() {
        let mut parser = ReportParser::new();
        let err = parser.parse_stage(4, "P1.1 NET1 PI 1e400", "P1").unwrap_err();

        assert_eq!(err.kind, DiagnosticKind::MalformedStage);
        assert!(parser.nodes().is_empty());
    }

    #[test]
    fn test_parse_stage_unit_suffix() {
        let mut parser = ReportParser::new();
        let edge = parser.parse_stage(2, "P1.1 NET1 PI 0.5ns", "P1").unwrap();
        assert_eq!(edge.delay, 0.5);
    }

    #[test]
    fn test_parse_stage_after_index_column() {
        let mut parser = ReportParser::new();
        let edge = parser.parse_stage(2, " 1 | P1.1 NET1 PI 0.5", "P1").unwrap();

        assert_eq!(parser.nodes().name(edge.from), Some("PI"));
        assert_eq!(parser.nodes().name(edge.to), Some("NET1"));
        assert_eq!(edge.delay, 0.5);
    }

    #[test]
    fn test_section_ends_at_end_marker() {
        let text = "Path P1 FF_Q PI 1.0\nP1.1 NET1 PI 0.5\nEnd of report\nP1.2 INV1 NET1 0.5\n";
        let report = ReportParser::new().parse_str(text);

        assert_eq!(report.paths.len(), 1);
        assert_eq!(report.paths[0].edges.len(), 1);
        assert!(report.is_clean());
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::new(12, DiagnosticKind::MalformedStage, "P1.x ?? ");
        assert_eq!(diagnostic.to_string(), "line 12: malformed stage line: 'P1.x ??'");
    }
}
