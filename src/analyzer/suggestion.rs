//! Bottleneck classification and optimization hints.
//!
//! The worst stage of a path falls into one of three remediation
//! categories, decided by which delay component dominates it:
//!
//! | Condition | Hint |
//! |---|---|
//! | net > cell and net > 0.5 × stage | insert a pipeline register |
//! | cell > net and cell > 0.5 × stage | replace the driving cell |
//! | otherwise | balance fan-out |

use crate::parser::{Edge, Node, NodeCategory, NodeRegistry};
use crate::utils::config::{
    BUFFER_FAST_SUFFIX, DOMINANCE_RATIO, GATE_FAST_SUFFIX, INVERTER_FAST_SUFFIX,
};
use serde::{Deserialize, Serialize};

/// Hint used when a path has no stage with positive delay
pub const INSUFFICIENT_DATA_SUGGESTION: &str = "Insufficient path data for optimization suggestions";

/// Remediation category for a worst stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationKind {
    /// Net delay dominates: split the wire with a register
    PipelineInsertion,
    /// Cell delay dominates: use a faster cell
    CellReplacement,
    /// Neither dominates
    FanoutBalancing,
}

impl OptimizationKind {
    /// Classify a stage given the path's worst stage delay
    pub fn classify(edge: &Edge, worst_stage_delay: f64) -> Self {
        let threshold = DOMINANCE_RATIO * worst_stage_delay;

        if edge.net_delay > edge.cell_delay && edge.net_delay > threshold {
            OptimizationKind::PipelineInsertion
        } else if edge.cell_delay > edge.net_delay && edge.cell_delay > threshold {
            OptimizationKind::CellReplacement
        } else {
            OptimizationKind::FanoutBalancing
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptimizationKind::PipelineInsertion => "pipeline_insertion",
            OptimizationKind::CellReplacement => "cell_replacement",
            OptimizationKind::FanoutBalancing => "fanout_balancing",
        }
    }

    /// Render the hint for `edge`, looking node names up in `nodes`
    pub fn suggest(self, edge: &Edge, nodes: &NodeRegistry) -> String {
        match self {
            OptimizationKind::PipelineInsertion => suggest_pipeline_insertion(edge, nodes),
            OptimizationKind::CellReplacement => suggest_cell_replacement(edge, nodes),
            OptimizationKind::FanoutBalancing => suggest_fanout_balancing(edge, nodes),
        }
    }
}

fn suggest_pipeline_insertion(edge: &Edge, nodes: &NodeRegistry) -> String {
    match (nodes.get(edge.from), nodes.get(edge.to)) {
        (Some(from), Some(to)) => format!(
            "insert a pipeline register between {} and {}",
            from.name, to.name
        ),
        _ => "insert a pipeline register in the critical path".to_string(),
    }
}

fn suggest_cell_replacement(edge: &Edge, nodes: &NodeRegistry) -> String {
    match nodes.get(edge.from) {
        Some(cell) if cell.category != NodeCategory::Net => {
            format!("replace {} with {}", cell.name, faster_variant(cell))
        }
        _ => "use a faster cell library for critical-path cells".to_string(),
    }
}

fn suggest_fanout_balancing(edge: &Edge, nodes: &NodeRegistry) -> String {
    match nodes.get(edge.from) {
        Some(driver) => format!("balance fan-out after {}", driver.name),
        None => "balance fan-out in the critical path".to_string(),
    }
}

/// Name of a faster replacement for a cell, by its category
pub fn faster_variant(cell: &Node) -> String {
    let suffix = match cell.category {
        NodeCategory::Inverter => INVERTER_FAST_SUFFIX,
        NodeCategory::Buffer => BUFFER_FAST_SUFFIX,
        NodeCategory::Nand | NodeCategory::Nor => GATE_FAST_SUFFIX,
        _ => return format!("a faster variant of {}", cell.name),
    };

    format!("{}{}", cell.name, suffix)
}
