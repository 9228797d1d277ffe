//! Hand-built graphs with known traversal orders.
//!
//! Fixture nodes sit at the origin of the default canvas; traversal never
//! looks at positions.

use graphwalk_core::{CanvasBounds, Edge, Graph, Position};

/// Builds a graph with `node_count` nodes and one edge per pair, in order.
///
/// # Panics
/// Panics when a pair references a missing node or is a self-loop; fixtures
/// are expected to be well formed.
///
/// # Examples
/// ```
/// use graphwalk_test_support::graphs::graph_from_pairs;
///
/// let graph = graph_from_pairs(3, &[(0, 1), (1, 2)]);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[must_use]
pub fn graph_from_pairs(node_count: usize, pairs: &[(usize, usize)]) -> Graph {
    let bounds = CanvasBounds::default();
    let origin = Position::new(bounds.min_x(), bounds.min_y());
    let edges = pairs.iter().copied().map(Edge::from).collect();
    match Graph::try_new(vec![origin; node_count], edges) {
        Ok(graph) => graph,
        Err(err) => panic!("fixture graph is malformed: {err}"),
    }
}

/// Four nodes, edges `(0,1), (1,2), (0,3)`.
///
/// From node 0, depth-first visits `[0, 1, 2, 3]` and breadth-first visits
/// `[0, 1, 3, 2]`.
#[must_use]
pub fn branching_graph() -> Graph {
    graph_from_pairs(4, &[(0, 1), (1, 2), (0, 3)])
}

/// Two components: `{0, 1, 2}` joined as a triangle and `{3, 4}` joined by a
/// single edge drawn from 4 to 3.
#[must_use]
pub fn two_component_graph() -> Graph {
    graph_from_pairs(5, &[(0, 1), (1, 2), (2, 0), (4, 3)])
}

/// A simple path `0 - 1 - ... - (length - 1)`.
#[must_use]
pub fn path_graph(length: usize) -> Graph {
    let pairs: Vec<(usize, usize)> = (1..length).map(|node| (node - 1, node)).collect();
    graph_from_pairs(length, &pairs)
}
