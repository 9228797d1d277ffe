//! Seeded graph scenarios shared by the traversal benchmarks.

use graphwalk_core::{CanvasBounds, GenerationLimits, Graph, Result, generate_with_limits};
use rand::{SeedableRng, rngs::SmallRng};

use crate::params::TraversalBenchParams;

/// Seed used for every generated benchmark graph.
pub const SEED: u64 = 42;

/// Generates the graph described by `params` from [`SEED`].
///
/// Limits are lifted so benchmark sizes are not capped by the interactive
/// defaults.
///
/// # Errors
/// Returns [`graphwalk_core::GraphWalkError`] when edges are requested
/// without nodes.
///
/// # Examples
/// ```
/// use graphwalk_benches::{params::TraversalBenchParams, scenario::seeded_graph};
///
/// let params = TraversalBenchParams { node_count: 50, edge_draws: 100 };
/// let graph = seeded_graph(params)?;
/// assert_eq!(graph, seeded_graph(params)?);
/// # Ok::<(), graphwalk_core::GraphWalkError>(())
/// ```
pub fn seeded_graph(params: TraversalBenchParams) -> Result<Graph> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    generate_with_limits(
        params.node_count,
        params.edge_draws,
        &CanvasBounds::default(),
        &GenerationLimits::unbounded(),
        &mut rng,
    )
}
