//! Critical path ranking and per-path bottleneck analysis.
//!
//! Critical paths are the paths with the largest total delay.
//! Their worst stage is the primary target for optimization.

use super::suggestion::{OptimizationKind, INSUFFICIENT_DATA_SUGGESTION};
use crate::parser::{Edge, NodeRegistry, TimingPath};
use log::debug;

/// Analysis of one timing path
///
/// **Public** - returned from `PathAnalyzer`
#[derive(Debug, Clone, PartialEq)]
pub struct PathAnalysis {
    /// The analyzed path
    pub path: TimingPath,

    /// Delay of the worst stage (0.0 if there is none)
    pub worst_stage_delay: f64,

    /// Position of the worst stage in `path.edges`
    pub worst_stage_index: Option<usize>,

    /// The worst stage itself
    pub worst_stage: Option<Edge>,

    /// Remediation category, `None` when there was nothing to classify
    pub kind: Option<OptimizationKind>,

    /// Human-readable hint
    pub optimization_suggestion: String,
}

/// Ranks paths and explains their bottlenecks
///
/// **Public** - borrows the node registry of the run that produced the paths
#[derive(Debug, Clone, Copy)]
pub struct PathAnalyzer<'a> {
    nodes: &'a NodeRegistry,
}

impl<'a> PathAnalyzer<'a> {
    pub fn new(nodes: &'a NodeRegistry) -> Self {
        Self { nodes }
    }

    /// Analyze the `top_k` paths with the largest total delay
    ///
    /// # Arguments
    /// * `paths` - Parsed paths, in report order
    /// * `top_k` - Number of paths to return; 0 yields nothing
    ///
    /// # Returns
    /// Analyses sorted by total delay (descending). Paths with equal delay
    /// keep their input order.
    pub fn find_critical_paths(&self, paths: &[TimingPath], top_k: usize) -> Vec<PathAnalysis> {
        debug!("Ranking {} paths, keeping top {}", paths.len(), top_k);

        let mut ranked: Vec<&TimingPath> = paths.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.total_delay.total_cmp(&a.total_delay));

        ranked
            .into_iter()
            .take(top_k)
            .map(|path| self.analyze_path(path))
            .collect()
    }

    /// Locate and classify the worst stage of one path
    pub fn analyze_path(&self, path: &TimingPath) -> PathAnalysis {
        let Some((index, edge)) = path.worst_stage() else {
            debug!("Path {} has no stage with positive delay", path.id);
            return PathAnalysis {
                path: path.clone(),
                worst_stage_delay: 0.0,
                worst_stage_index: None,
                worst_stage: None,
                kind: None,
                optimization_suggestion: INSUFFICIENT_DATA_SUGGESTION.to_string(),
            };
        };

        let worst_stage_delay = edge.delay;
        let kind = OptimizationKind::classify(edge, worst_stage_delay);
        let optimization_suggestion = kind.suggest(edge, self.nodes);

        debug!(
            "Path {}: worst stage #{} ({} ns) -> {}",
            path.id,
            index + 1,
            worst_stage_delay,
            kind.as_str()
        );

        PathAnalysis {
            path: path.clone(),
            worst_stage_delay,
            worst_stage_index: Some(index),
            worst_stage: Some(*edge),
            kind: Some(kind),
            optimization_suggestion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::StageSide;

    #[test]
    fn test_empty_input() {
        let nodes = NodeRegistry::new();
        let analyzer = PathAnalyzer::new(&nodes);
        assert!(analyzer.find_critical_paths(&[], 5).is_empty());
    }

    #[test]
    fn test_top_k_zero() {
        let nodes = NodeRegistry::new();
        let analyzer = PathAnalyzer::new(&nodes);
        let paths = vec![TimingPath::new("P1", "A", "B", 1.0)];

        assert!(analyzer.find_critical_paths(&paths, 0).is_empty());
    }

    #[test]
    fn test_empty_path_is_insufficient() {
        let nodes = NodeRegistry::new();
        let analysis = PathAnalyzer::new(&nodes).analyze_path(&TimingPath::new("P1", "A", "B", 1.0));

        assert!(analysis.worst_stage.is_none());
        assert_eq!(analysis.worst_stage_delay, 0.0);
        assert_eq!(analysis.kind, None);
        assert_eq!(analysis.optimization_suggestion, INSUFFICIENT_DATA_SUGGESTION);
    }

    #[test]
    fn test_zero_delay_stages_are_insufficient() {
        let mut nodes = NodeRegistry::new();
        let a = nodes.resolve("A", StageSide::Source);
        let b = nodes.resolve("B", StageSide::Destination);

        let mut path = TimingPath::new("P1", "A", "B", 0.0);
        path.edges.push(Edge::with_components(a, b, 0.0, 0.0, 0.0));

        let analysis = PathAnalyzer::new(&nodes).analyze_path(&path);
        assert_eq!(analysis.worst_stage_index, None);
        assert_eq!(analysis.optimization_suggestion, INSUFFICIENT_DATA_SUGGESTION);
    }
}
