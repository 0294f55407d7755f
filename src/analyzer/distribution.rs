//! Summary statistics over the total delays of a parse run.

use crate::parser::TimingPath;

/// Delay distribution statistics
///
/// **Public** - returned from `calculate_delay_distribution`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelayDistribution {
    /// Number of paths
    pub path_count: usize,

    /// Sum of total delays
    pub total_delay: f64,

    /// Mean total delay per path
    pub mean_delay: f64,

    /// Median total delay (upper median for even counts)
    pub median_delay: f64,

    /// Largest total delay
    pub max_delay: f64,

    /// Paths without any stage of positive delay
    pub paths_without_stages: usize,
}

/// Calculate delay distribution statistics
///
/// **Public** - provides summary statistics
pub fn calculate_delay_distribution(paths: &[TimingPath]) -> DelayDistribution {
    if paths.is_empty() {
        return DelayDistribution::default();
    }

    let mut delays: Vec<f64> = paths.iter().map(|path| path.total_delay).collect();
    delays.sort_by(f64::total_cmp);

    let total_delay: f64 = delays.iter().sum();
    let path_count = delays.len();

    DelayDistribution {
        path_count,
        total_delay,
        mean_delay: total_delay / path_count as f64,
        median_delay: delays[path_count / 2],
        max_delay: delays[path_count - 1],
        paths_without_stages: paths
            .iter()
            .filter(|path| path.worst_stage().is_none())
            .count(),
    }
}

impl DelayDistribution {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Paths: {} | Mean: {:.3} ns | Median: {:.3} ns | Max: {:.3} ns | Without stages: {}",
            self.path_count,
            self.mean_delay,
            self.median_delay,
            self.max_delay,
            self.paths_without_stages
        )
    }
}
