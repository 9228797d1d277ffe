//! Benchmark parameter types.

use std::fmt;

/// Size of one traversal benchmark input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraversalBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Number of edge draws made while generating it.
    pub edge_draws: usize,
}

impl fmt::Display for TraversalBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.edge_draws)
    }
}
