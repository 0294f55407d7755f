//! Timing report parsing and the path data model.
//!
//! This module handles:
//! - Deduplicating timing nodes per parse run
//! - Splitting report text into path sections
//! - Building typed paths and stages

pub mod model;
pub mod node;
pub mod report;

// Re-export main types
pub use model::{Edge, TimingPath};
pub use node::{Node, NodeCategory, NodeId, NodeRegistry, StageSide};
pub use report::{Diagnostic, DiagnosticKind, ParsedReport, ReportParser};
