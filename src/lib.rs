//! Timing Path Analyzer
//!
//! Critical path ranking and optimization hints for static timing
//! analysis reports.
//!
//! The library parses report text into typed paths ([`parser`]), ranks them
//! by total delay and classifies each path's worst stage ([`analyzer`]), and
//! renders the results as text or JSON ([`output`]).
//!
//! ```
//! use timing_path_analyzer::analyzer::PathAnalyzer;
//! use timing_path_analyzer::parser::ReportParser;
//!
//! let text = "Path P1 FF_Q PI 2.345\nP1.1 NET1 PI 0.123\nP1.2 INV1 NET1 0.456\n";
//!
//! let mut parser = ReportParser::new();
//! let report = parser.parse_str(text);
//! let analyses = PathAnalyzer::new(parser.nodes()).find_critical_paths(&report.paths, 10);
//!
//! assert_eq!(analyses[0].path.id, "P1");
//! ```

pub mod analyzer;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
