//! Output writers for analysis results.
//!
//! This module handles writing data to disk in various formats:
//! - Ranked text listings (console and file)
//! - JSON analysis reports

pub mod json;
pub mod schema;
pub mod text;

// Re-export main functions
pub use json::{build_report, read_report, write_report};
pub use schema::{AnalysisReport, CriticalPathEntry, WorstStageEntry};
pub use text::{format_elapsed, format_path_result, render_results, write_results};

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create the parent directories of an output file if needed
fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
