//! Graph data model: node positions and the ordered edge list.

use crate::error::{CountField, GraphWalkError, InvalidInputReason, Result};

/// Canvas coordinates of a node. Only renderers care about positions.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: u32,
    /// Vertical coordinate.
    pub y: u32,
}

impl Position {
    /// Creates a position from its coordinates.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// An edge between two distinct nodes.
///
/// The endpoints keep the order in which they were drawn, but traversal
/// treats every edge as undirected.
///
/// # Examples
/// ```
/// use graphwalk_core::Edge;
///
/// let edge = Edge::new(2, 5);
/// assert_eq!(edge.other(2), Some(5));
/// assert_eq!(edge.other(5), Some(2));
/// assert_eq!(edge.other(3), None);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates an edge from `source` to `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Returns the endpoint the edge was drawn from.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Returns the endpoint the edge was drawn to.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Returns the endpoint opposite `node`, or `None` when the edge does not
    /// touch `node`.
    #[must_use]
    pub const fn other(&self, node: usize) -> Option<usize> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(source, target)
    }
}

/// A generated graph: node positions plus the edge list in draw order.
///
/// Every edge endpoint is a valid node index and no edge is a self-loop.
/// Graphs are replaced wholesale; there is no API to mutate one after
/// construction.
///
/// # Examples
/// ```
/// use graphwalk_core::{Edge, Graph, Position};
///
/// let graph = Graph::try_new(
///     vec![Position::new(60, 60), Position::new(90, 120), Position::new(200, 80)],
///     vec![Edge::new(0, 1), Edge::new(1, 2)],
/// )?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.discarded_draws(), 0);
/// # Ok::<(), graphwalk_core::GraphWalkError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    nodes: Vec<Position>,
    edges: Vec<Edge>,
    requested_edges: usize,
}

impl Graph {
    /// Returns a graph with no nodes and no edges.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            requested_edges: 0,
        }
    }

    /// Assembles a graph from explicit node positions and edges.
    ///
    /// # Errors
    /// Returns [`GraphWalkError::InvalidInput`] when an edge references a node
    /// outside `0..nodes.len()` or connects a node to itself.
    pub fn try_new(nodes: Vec<Position>, edges: Vec<Edge>) -> Result<Self> {
        let node_count = nodes.len();
        for (index, edge) in edges.iter().enumerate() {
            if let Some(endpoint) = [edge.source, edge.target]
                .into_iter()
                .find(|&endpoint| endpoint >= node_count)
            {
                return Err(GraphWalkError::invalid_input(
                    CountField::Edges,
                    InvalidInputReason::EndpointOutOfRange {
                        edge: index,
                        endpoint,
                        node_count,
                    },
                ));
            }
            if edge.source == edge.target {
                return Err(GraphWalkError::invalid_input(
                    CountField::Edges,
                    InvalidInputReason::SelfLoop {
                        edge: index,
                        node: edge.source,
                    },
                ));
            }
        }
        let requested_edges = edges.len();
        Ok(Self {
            nodes,
            edges,
            requested_edges,
        })
    }

    /// Builds a generated graph whose invariants the generator already upholds.
    pub(crate) const fn from_generated(
        nodes: Vec<Position>,
        edges: Vec<Edge>,
        requested_edges: usize,
    ) -> Self {
        Self {
            nodes,
            edges,
            requested_edges,
        }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of realized edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node positions indexed by node id.
    #[must_use]
    pub fn nodes(&self) -> &[Position] {
        &self.nodes
    }

    /// Returns the edges in the order they were drawn.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the position of `node`, if it exists.
    #[must_use]
    pub fn position(&self, node: usize) -> Option<Position> {
        self.nodes.get(node).copied()
    }

    /// Returns how many edge draws were requested when the graph was built.
    #[must_use]
    pub const fn requested_edges(&self) -> usize {
        self.requested_edges
    }

    /// Returns how many edge draws were dropped because both endpoints
    /// coincided.
    #[must_use]
    pub fn discarded_draws(&self) -> usize {
        self.requested_edges.saturating_sub(self.edges.len())
    }
}
