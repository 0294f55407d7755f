//! Typed path model produced by the report parser.

use super::node::{NodeCategory, NodeId};

/// One stage of a timing path, in signal-flow direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub delay: f64,
    pub net_delay: f64,
    pub cell_delay: f64,
}

impl Edge {
    /// Build a stage, attributing the whole delay to one component.
    ///
    /// The delay counts as net delay when the source node is a net and as
    /// cell delay otherwise. This is an approximation kept for output
    /// compatibility, not a physical split.
    pub fn new(from: NodeId, from_category: NodeCategory, to: NodeId, delay: f64) -> Self {
        let (net_delay, cell_delay) = if from_category == NodeCategory::Net {
            (delay, 0.0)
        } else {
            (0.0, delay)
        };

        Self {
            from,
            to,
            delay,
            net_delay,
            cell_delay,
        }
    }

    /// Build a stage with explicit delay components
    pub fn with_components(
        from: NodeId,
        to: NodeId,
        delay: f64,
        net_delay: f64,
        cell_delay: f64,
    ) -> Self {
        Self {
            from,
            to,
            delay,
            net_delay,
            cell_delay,
        }
    }
}

/// A timing path from startpoint to endpoint
///
/// `edges` keeps report order, startpoint-adjacent stage first. It may be
/// empty when a section had a header but no usable stage lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimingPath {
    pub id: String,
    pub startpoint: String,
    pub endpoint: String,
    pub total_delay: f64,
    pub edges: Vec<Edge>,
}

impl TimingPath {
    pub fn new(
        id: impl Into<String>,
        startpoint: impl Into<String>,
        endpoint: impl Into<String>,
        total_delay: f64,
    ) -> Self {
        Self {
            id: id.into(),
            startpoint: startpoint.into(),
            endpoint: endpoint.into(),
            total_delay,
            edges: Vec::new(),
        }
    }

    /// Find the most expensive stage and its position.
    ///
    /// Only stages with a strictly positive delay qualify, and the earliest
    /// stage wins a tie. Returns `None` for an empty path or one whose
    /// delays are all non-positive.
    pub fn worst_stage(&self) -> Option<(usize, &Edge)> {
        let mut max_delay = 0.0;
        let mut worst = None;

        for (index, edge) in self.edges.iter().enumerate() {
            if edge.delay > max_delay {
                max_delay = edge.delay;
                worst = Some((index, edge));
            }
        }

        worst
    }
}
