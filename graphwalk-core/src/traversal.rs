//! Depth-first and breadth-first traversal over a [`Graph`].
//!
//! Neighbour order is always the order in which edges touching a node appear
//! in the graph's edge list. [`ScanStrategy::EdgeList`] rescans the flat
//! list at every step; [`ScanStrategy::Adjacency`] precomputes per-node
//! neighbour lists in the same order and yields identical visit sequences.

use std::{
    collections::VecDeque,
    fmt,
    time::{Duration, Instant},
};

use tracing::{Span, field, info, instrument, warn};

use crate::{
    error::{GraphWalkError, InvalidStartReason, Result},
    graph::{Edge, Graph},
    visited::VisitedSet,
};

/// Order in which a traversal explores the graph.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TraversalKind {
    /// Pre-order depth-first descent.
    DepthFirst,
    /// FIFO breadth-first expansion.
    BreadthFirst,
}

impl TraversalKind {
    /// Returns the short label shown next to traversal timings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DepthFirst => "DFS",
            Self::BreadthFirst => "BFS",
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a traversal discovers the neighbours of a node.
///
/// Both strategies produce the same visit sequence for every graph and start
/// node; they differ only in cost.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ScanStrategy {
    /// Rescan the whole edge list for every node, `O(V * E)`.
    #[default]
    EdgeList,
    /// Build per-node neighbour lists first, `O(V + E)`.
    Adjacency,
}

/// Per-node neighbour lists in first-occurrence edge order.
///
/// Parallel edges contribute repeated entries, mirroring the edge list.
///
/// # Examples
/// ```
/// use graphwalk_core::{Adjacency, Edge, Graph, Position};
///
/// let graph = Graph::try_new(
///     vec![Position::default(); 4],
///     vec![Edge::new(0, 1), Edge::new(2, 0), Edge::new(0, 3)],
/// )?;
/// let adjacency = Adjacency::from_graph(&graph);
/// assert_eq!(adjacency.neighbours(0), &[1, 2, 3]);
/// assert_eq!(adjacency.neighbours(2), &[0]);
/// # Ok::<(), graphwalk_core::GraphWalkError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Adjacency {
    neighbours: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Builds neighbour lists for every node of `graph`.
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let mut neighbours = vec![Vec::new(); graph.node_count()];
        for edge in graph.edges() {
            if let Some(list) = neighbours.get_mut(edge.source()) {
                list.push(edge.target());
            }
            if let Some(list) = neighbours.get_mut(edge.target()) {
                list.push(edge.source());
            }
        }
        Self { neighbours }
    }

    /// Returns the neighbours of `node`; unknown nodes have none.
    #[must_use]
    pub fn neighbours(&self, node: usize) -> &[usize] {
        self.neighbours
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Ordered output of one traversal run.
///
/// # Examples
/// ```
/// use graphwalk_core::{Edge, Graph, Position, TraversalKind, traverse};
///
/// let graph = Graph::try_new(
///     vec![Position::default(); 4],
///     vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(0, 3)],
/// )?;
/// let visit = traverse(&graph, 0, TraversalKind::BreadthFirst)?;
/// assert_eq!(visit.order(), &[0, 1, 3, 2]);
/// assert_eq!(visit.segments().collect::<Vec<_>>(), [(0, 1), (1, 3), (3, 2)]);
/// assert!(visit.contains(2));
/// # Ok::<(), graphwalk_core::GraphWalkError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitSequence {
    kind: TraversalKind,
    order: Vec<usize>,
    visited: VisitedSet,
    elapsed: Duration,
}

impl VisitSequence {
    /// Returns the traversal kind that produced the sequence.
    #[must_use]
    pub const fn kind(&self) -> TraversalKind {
        self.kind
    }

    /// Returns the visited nodes in visit order.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns the node the traversal started from.
    #[must_use]
    pub fn start(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Returns the number of visited nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether no node was visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns whether `node` was visited, in constant time.
    #[must_use]
    pub fn contains(&self, node: usize) -> bool {
        self.visited.contains(node)
    }

    /// Returns the wall-clock time the traversal took.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns [`Self::elapsed`] in fractional milliseconds.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "timings are reported as fractional milliseconds"
    )]
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Iterates over consecutive `(from, to)` pairs of the visit order, the
    /// segments a renderer highlights.
    pub fn segments(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.order.windows(2).filter_map(|pair| match pair {
            [from, to] => Some((*from, *to)),
            _ => None,
        })
    }
}

/// Walks `graph` from `start` using [`ScanStrategy::EdgeList`].
///
/// # Errors
/// Returns [`GraphWalkError::InvalidStart`] when the graph has no nodes or
/// `start` is not below the node count.
pub fn traverse(graph: &Graph, start: usize, kind: TraversalKind) -> Result<VisitSequence> {
    traverse_with(graph, start, kind, ScanStrategy::EdgeList)
}

/// Walks `graph` from `start` in the order given by `kind`.
///
/// Nodes unreachable from `start` are absent from the result. The reported
/// duration covers neighbour discovery and the walk itself, measured with a
/// monotonic clock.
///
/// # Errors
/// Returns [`GraphWalkError::InvalidStart`] when the graph has no nodes or
/// `start` is not below the node count.
///
/// # Examples
/// ```
/// use graphwalk_core::{Edge, Graph, Position, ScanStrategy, TraversalKind, traverse_with};
///
/// let graph = Graph::try_new(
///     vec![Position::default(); 4],
///     vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(0, 3)],
/// )?;
/// let visit = traverse_with(&graph, 0, TraversalKind::DepthFirst, ScanStrategy::Adjacency)?;
/// assert_eq!(visit.order(), &[0, 1, 2, 3]);
/// # Ok::<(), graphwalk_core::GraphWalkError>(())
/// ```
#[instrument(
    name = "core.traverse",
    err,
    skip(graph, kind),
    fields(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        kind = %kind,
        visited = field::Empty,
        elapsed_us = field::Empty,
    ),
)]
pub fn traverse_with(
    graph: &Graph,
    start: usize,
    kind: TraversalKind,
    strategy: ScanStrategy,
) -> Result<VisitSequence> {
    validate_start(graph, start)?;

    let started = Instant::now();
    let mut visited = VisitedSet::new(graph.node_count());
    let order = match strategy {
        ScanStrategy::EdgeList => walk(&EdgeListScan(graph.edges()), start, kind, &mut visited),
        ScanStrategy::Adjacency => {
            let adjacency = Adjacency::from_graph(graph);
            walk(&adjacency, start, kind, &mut visited)
        }
    };
    let elapsed = started.elapsed();

    let span = Span::current();
    span.record("visited", order.len());
    span.record(
        "elapsed_us",
        u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
    );
    info!(kind = %kind, visited = order.len(), "traversal completed");

    Ok(VisitSequence {
        kind,
        order,
        visited,
        elapsed,
    })
}

fn validate_start(graph: &Graph, start: usize) -> Result<()> {
    if graph.is_empty() {
        warn!(start, "traversal requested on an empty graph");
        return Err(GraphWalkError::invalid_start(InvalidStartReason::EmptyGraph));
    }
    let node_count = graph.node_count();
    if start >= node_count {
        warn!(start, node_count, "start node out of range");
        return Err(GraphWalkError::invalid_start(
            InvalidStartReason::OutOfRange { start, node_count },
        ));
    }
    Ok(())
}

/// Source of neighbours in edge-list order.
trait NeighbourScan {
    /// Returns the first neighbour of `node` found at or after `cursor`,
    /// together with the cursor that resumes the scan after it.
    fn next_from(&self, node: usize, cursor: usize) -> Option<(usize, usize)>;
}

struct EdgeListScan<'a>(&'a [Edge]);

impl NeighbourScan for EdgeListScan<'_> {
    fn next_from(&self, node: usize, cursor: usize) -> Option<(usize, usize)> {
        self.0
            .iter()
            .enumerate()
            .skip(cursor)
            .find_map(|(index, edge)| {
                edge.other(node)
                    .map(|neighbour| (neighbour, index.saturating_add(1)))
            })
    }
}

impl NeighbourScan for Adjacency {
    fn next_from(&self, node: usize, cursor: usize) -> Option<(usize, usize)> {
        self.neighbours(node)
            .get(cursor)
            .map(|&neighbour| (neighbour, cursor.saturating_add(1)))
    }
}

fn walk<S: NeighbourScan>(
    scan: &S,
    start: usize,
    kind: TraversalKind,
    visited: &mut VisitedSet,
) -> Vec<usize> {
    match kind {
        TraversalKind::DepthFirst => depth_first(scan, start, visited),
        TraversalKind::BreadthFirst => breadth_first(scan, start, visited),
    }
}

/// Pre-order descent. Each stack frame holds a node and the scan cursor to
/// resume from once the subtree below the last discovered neighbour is done,
/// which reproduces the recursive visit order without recursion.
fn depth_first<S: NeighbourScan>(scan: &S, start: usize, visited: &mut VisitedSet) -> Vec<usize> {
    let mut order = Vec::with_capacity(visited.capacity());
    visited.insert(start);
    order.push(start);

    let mut stack = vec![(start, 0_usize)];
    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;
        match next_unvisited(scan, node, cursor, visited) {
            Some((neighbour, resume)) => {
                frame.1 = resume;
                visited.insert(neighbour);
                order.push(neighbour);
                stack.push((neighbour, 0));
            }
            None => {
                stack.pop();
            }
        }
    }
    order
}

fn next_unvisited<S: NeighbourScan>(
    scan: &S,
    node: usize,
    mut cursor: usize,
    visited: &VisitedSet,
) -> Option<(usize, usize)> {
    loop {
        let (neighbour, resume) = scan.next_from(node, cursor)?;
        if !visited.contains(neighbour) {
            return Some((neighbour, resume));
        }
        cursor = resume;
    }
}

fn breadth_first<S: NeighbourScan>(scan: &S, start: usize, visited: &mut VisitedSet) -> Vec<usize> {
    let mut order = Vec::with_capacity(visited.capacity());
    let mut queue = VecDeque::from([start]);
    visited.insert(start);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        let mut cursor = 0;
        while let Some((neighbour, resume)) = scan.next_from(node, cursor) {
            if visited.insert(neighbour) {
                queue.push_back(neighbour);
            }
            cursor = resume;
        }
    }
    order
}
