//! JSON analysis report schema.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::analyzer::OptimizationKind;
use crate::parser::NodeCategory;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Reports that were parsed
    pub sources: Vec<String>,

    /// Number of paths parsed across all sources
    pub parsed_paths: usize,

    /// Number of report lines skipped as malformed
    pub diagnostics: usize,

    /// Ranked critical paths
    pub critical_paths: Vec<CriticalPathEntry>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// One ranked path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalPathEntry {
    /// 1-based rank
    pub rank: usize,

    pub id: String,
    pub startpoint: String,
    pub endpoint: String,

    /// Total path delay in ns
    pub total_delay: f64,

    /// Number of stages parsed for the path
    pub stage_count: usize,

    /// Worst stage (absent if no stage had positive delay)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_stage: Option<WorstStageEntry>,

    /// Remediation category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<OptimizationKind>,

    pub suggestion: String,
}

/// Worst stage details with resolved node names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorstStageEntry {
    /// 1-based stage number within the path
    pub stage: usize,

    pub from: String,
    pub from_category: NodeCategory,
    pub to: String,
    pub to_category: NodeCategory,

    pub delay: f64,
    pub net_delay: f64,
    pub cell_delay: f64,
}
