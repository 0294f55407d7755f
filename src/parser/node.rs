//! Timing nodes and the per-run node registry.
//!
//! Nodes live in an arena owned by [`NodeRegistry`]; edges refer to them by
//! [`NodeId`]. Two edges share a node exactly when their ids are equal.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Index of a node inside the [`NodeRegistry`] that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Kind of timing node, guessed from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    PrimaryInput,
    PrimaryOutput,
    Flop,
    Inverter,
    Buffer,
    Nand,
    Nor,
    Net,
    Unknown,
}

/// Which end of a stage a node name was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageSide {
    /// Driving node (`from`)
    Source,
    /// Driven node (`to`)
    Destination,
}

impl NodeCategory {
    /// Infer a category from substrings of the node name.
    ///
    /// Checks run in priority order and the first hit wins, since a name may
    /// contain several markers. `PO` is only recognised on the destination
    /// side of a stage.
    pub fn infer(name: &str, side: StageSide) -> Self {
        if name.contains("NET") {
            NodeCategory::Net
        } else if name.contains("FF") || name.contains("FLOP") {
            NodeCategory::Flop
        } else if name.contains("PI") {
            NodeCategory::PrimaryInput
        } else if side == StageSide::Destination && name.contains("PO") {
            NodeCategory::PrimaryOutput
        } else if name.contains("INV") {
            NodeCategory::Inverter
        } else if name.contains("BUF") {
            NodeCategory::Buffer
        } else if name.contains("NAND") {
            NodeCategory::Nand
        } else if name.contains("NOR") {
            NodeCategory::Nor
        } else {
            NodeCategory::Unknown
        }
    }

    /// Short lowercase label used in logs and reports
    pub fn as_str(self) -> &'static str {
        match self {
            NodeCategory::PrimaryInput => "primary_input",
            NodeCategory::PrimaryOutput => "primary_output",
            NodeCategory::Flop => "flop",
            NodeCategory::Inverter => "inverter",
            NodeCategory::Buffer => "buffer",
            NodeCategory::Nand => "nand",
            NodeCategory::Nor => "nor",
            NodeCategory::Net => "net",
            NodeCategory::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named pin, cell or net. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub category: NodeCategory,
}

/// Deduplicates nodes by exact name for one parse run
///
/// **Public** - owned by `ReportParser`, read by the analyzer and formatters
#[derive(Debug, Default, Clone)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    by_name: HashMap<String, NodeId>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node registered under `name`, creating it on first sight.
    ///
    /// The category is inferred only when the node is created; later lookups
    /// return the existing node unchanged, whichever side they come from.
    pub fn resolve(&mut self, name: &str, side: StageSide) -> NodeId {
        self.resolve_entry(name, side).0
    }

    /// Like [`resolve`](Self::resolve), also returning the node's category
    pub(crate) fn resolve_entry(&mut self, name: &str, side: StageSide) -> (NodeId, NodeCategory) {
        if let Some(&id) = self.by_name.get(name) {
            return (id, self.nodes[id.0].category);
        }

        let category = NodeCategory::infer(name, side);
        let id = NodeId(self.nodes.len());
        debug!("New node '{}' ({}) as #{}", name, category, id.0);

        self.nodes.push(Node {
            name: name.to_string(),
            category,
        });
        self.by_name.insert(name.to_string(), id);
        (id, category)
    }

    /// Look up a node; `None` if the id came from another registry
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|node| node.name.as_str())
    }

    pub fn category(&self, id: NodeId) -> Option<NodeCategory> {
        self.get(id).map(|node| node.category)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_priority_order() {
        assert_eq!(NodeCategory::infer("NET1", StageSide::Source), NodeCategory::Net);
        // NET beats INV
        assert_eq!(NodeCategory::infer("INV_NET", StageSide::Source), NodeCategory::Net);
        assert_eq!(NodeCategory::infer("FF_Q", StageSide::Source), NodeCategory::Flop);
        assert_eq!(NodeCategory::infer("U1_FLOP", StageSide::Source), NodeCategory::Flop);
        assert_eq!(NodeCategory::infer("PI2", StageSide::Source), NodeCategory::PrimaryInput);
        assert_eq!(NodeCategory::infer("INV1", StageSide::Destination), NodeCategory::Inverter);
        assert_eq!(NodeCategory::infer("BUF1", StageSide::Destination), NodeCategory::Buffer);
        assert_eq!(NodeCategory::infer("NAND1_Y", StageSide::Destination), NodeCategory::Nand);
        assert_eq!(NodeCategory::infer("NOR2", StageSide::Destination), NodeCategory::Nor);
        assert_eq!(NodeCategory::infer("XOR3", StageSide::Destination), NodeCategory::Unknown);
    }

    #[test]
    fn test_primary_output_destination_only() {
        assert_eq!(
            NodeCategory::infer("PO_DATA", StageSide::Destination),
            NodeCategory::PrimaryOutput
        );
        assert_eq!(NodeCategory::infer("PO_DATA", StageSide::Source), NodeCategory::Unknown);
    }

    #[test]
    fn test_resolve_deduplicates_by_name() {
        let mut registry = NodeRegistry::new();

        let first = registry.resolve("NET1", StageSide::Destination);
        let second = registry.resolve("NET1", StageSide::Source);
        let other = registry.resolve("INV1", StageSide::Destination);

        assert_eq!(first, second);
        assert_ne!(first, other);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.name(first), Some("NET1"));
    }

    #[test]
    fn test_category_fixed_at_first_sight() {
        let mut registry = NodeRegistry::new();

        let id = registry.resolve("PO_X", StageSide::Source);
        registry.resolve("PO_X", StageSide::Destination);

        assert_eq!(registry.category(id), Some(NodeCategory::Unknown));
    }

    #[test]
    fn test_resolve_entry_returns_stored_category() {
        let mut registry = NodeRegistry::new();

        let (id, category) = registry.resolve_entry("PO_X", StageSide::Source);
        assert_eq!(category, NodeCategory::Unknown);

        let (again, category) = registry.resolve_entry("PO_X", StageSide::Destination);
        assert_eq!(again, id);
        assert_eq!(category, NodeCategory::Unknown);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let mut registry = NodeRegistry::new();

        let upper = registry.resolve("NET1", StageSide::Source);
        let lower = registry.resolve("net1", StageSide::Source);

        assert_ne!(upper, lower);
        assert_eq!(registry.category(lower), Some(NodeCategory::Unknown));
    }

    #[test]
    fn test_get_foreign_id() {
        let mut big = NodeRegistry::new();
        big.resolve("A", StageSide::Source);
        let foreign = big.resolve("B", StageSide::Source);

        let small = NodeRegistry::new();
        assert!(small.get(foreign).is_none());
    }
}
