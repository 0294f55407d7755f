//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod utils;

// Re-export main command functions
pub use analyze::{
    collect_report_files, execute_analyze, run_analysis, validate_args, AnalysisRun, AnalyzeArgs,
};
pub use utils::{display_version, validate_report_file};
