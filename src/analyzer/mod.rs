//! Analysis of parsed timing paths.
//!
//! This module transforms parsed paths into:
//! - A ranking of critical paths (largest total delay first)
//! - The worst stage of each path and a remediation hint
//! - Delay distribution statistics

pub mod critical;
pub mod distribution;
pub mod suggestion;

// Re-export main types and functions
pub use critical::{PathAnalysis, PathAnalyzer};
pub use distribution::{calculate_delay_distribution, DelayDistribution};
pub use suggestion::{faster_variant, OptimizationKind, INSUFFICIENT_DATA_SUGGESTION};
