//! Configuration and constants for the analyzer and CLI.

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default number of critical paths to report
pub const DEFAULT_TOP_K: usize = 10;

/// Upper bound accepted on the command line
pub const MAX_TOP_K: usize = 100_000;

/// Extension of timing report files picked up in directory mode
pub const REPORT_EXTENSION: &str = "rpt";

// Report text markers (case-sensitive)
pub const PATH_HEADER_PREFIX: &str = "Path ";
pub const SECTION_END_MARKER: &str = "End of";

/// A delay component dominates a stage when it exceeds this share of the
/// stage delay. Must stay at 0.5 for output compatibility.
pub const DOMINANCE_RATIO: f64 = 0.5;

// Faster-variant suffixes proposed for cell replacement
pub const INVERTER_FAST_SUFFIX: &str = "_HF";
pub const BUFFER_FAST_SUFFIX: &str = "_X4";
pub const GATE_FAST_SUFFIX: &str = "_HS";
