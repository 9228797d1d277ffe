//! Session controller owning the random source, the current graph and the
//! latest visit sequence.
//!
//! Front-ends hand raw field text or parsed integers to a [`GraphSession`]
//! and render whatever it holds afterwards. Failed requests leave the held
//! state exactly as it was.

use std::num::IntErrorKind;

use rand::rngs::SmallRng;
use tracing::{Span, field, instrument, warn};

use crate::{
    Result,
    error::{CountField, GraphWalkError, InvalidStartReason},
    generator::{CanvasBounds, GenerationLimits, generate_with_limits, parse_count},
    graph::Graph,
    traversal::{ScanStrategy, TraversalKind, VisitSequence, traverse_with},
};

/// Owns the state one graph visualizer works on.
///
/// # Examples
/// ```
/// use graphwalk_core::{SessionBuilder, TraversalKind};
///
/// let mut session = SessionBuilder::new().with_seed(5).build();
/// session.generate_from_text("6", "10")?;
/// assert_eq!(session.graph().node_count(), 6);
///
/// let visit = session.traverse_from_text("0", TraversalKind::BreadthFirst)?;
/// assert_eq!(visit.start(), Some(0));
/// assert!(session.visit().is_some());
/// # Ok::<(), graphwalk_core::GraphWalkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphSession {
    rng: SmallRng,
    seed: Option<u64>,
    bounds: CanvasBounds,
    limits: GenerationLimits,
    strategy: ScanStrategy,
    graph: Graph,
    visit: Option<VisitSequence>,
}

impl GraphSession {
    pub(crate) const fn new(
        rng: SmallRng,
        seed: Option<u64>,
        bounds: CanvasBounds,
        limits: GenerationLimits,
        strategy: ScanStrategy,
    ) -> Self {
        Self {
            rng,
            seed,
            bounds,
            limits,
            strategy,
            graph: Graph::empty(),
            visit: None,
        }
    }

    /// Returns the current graph; empty until a generation succeeds.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the latest visit sequence, if a traversal has succeeded on the
    /// current graph.
    #[must_use]
    pub const fn visit(&self) -> Option<&VisitSequence> {
        self.visit.as_ref()
    }

    /// Returns the seed the random source started from, if one was supplied.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the rectangle node positions are drawn from.
    #[must_use]
    pub const fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    /// Returns the generation limits.
    #[must_use]
    pub const fn limits(&self) -> GenerationLimits {
        self.limits
    }

    /// Returns the scan strategy used by traversals.
    #[must_use]
    pub const fn scan_strategy(&self) -> ScanStrategy {
        self.strategy
    }

    /// Replaces the current graph with a freshly generated one and clears the
    /// visit sequence.
    ///
    /// # Errors
    /// Returns [`GraphWalkError::InvalidInput`] when a count exceeds the
    /// session limits or edges are requested without nodes. The current
    /// graph and visit sequence are left untouched.
    #[instrument(name = "session.generate", skip(self))]
    pub fn generate(&mut self, node_count: usize, edge_count: usize) -> Result<&Graph> {
        let graph = generate_with_limits(
            node_count,
            edge_count,
            &self.bounds,
            &self.limits,
            &mut self.rng,
        )?;
        self.graph = graph;
        self.visit = None;
        Ok(&self.graph)
    }

    /// Parses the node and edge count fields and generates a graph from them.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns [`GraphWalkError::InvalidInput`] when either field is not a
    /// non-negative integer, or for the conditions listed on
    /// [`Self::generate`]. The node field is checked first. State is left
    /// untouched on failure.
    ///
    /// # Examples
    /// ```
    /// use graphwalk_core::{CountField, GraphWalkError, SessionBuilder};
    ///
    /// let mut session = SessionBuilder::new().with_seed(1).build();
    /// session.generate_from_text("4", "2")?;
    /// let before = session.graph().clone();
    ///
    /// let err = session.generate_from_text("abc", "2").expect_err("letters are rejected");
    /// assert!(matches!(err, GraphWalkError::InvalidInput { field: CountField::Nodes, .. }));
    /// assert_eq!(session.graph(), &before);
    /// # Ok::<(), GraphWalkError>(())
    /// ```
    pub fn generate_from_text(&mut self, nodes: &str, edges: &str) -> Result<&Graph> {
        let node_count = parse_count(CountField::Nodes, nodes)?;
        let edge_count = parse_count(CountField::Edges, edges)?;
        self.generate(node_count, edge_count)
    }

    /// Traverses the current graph from `start` and stores the result as the
    /// latest visit sequence.
    ///
    /// # Errors
    /// Returns [`GraphWalkError::InvalidStart`] when the graph is empty or
    /// `start` is out of range. The previous visit sequence is kept.
    #[instrument(
        name = "session.traverse",
        skip(self),
        fields(strategy = ?self.strategy),
    )]
    pub fn traverse(&mut self, start: usize, kind: TraversalKind) -> Result<&VisitSequence> {
        let visit = traverse_with(&self.graph, start, kind, self.strategy)?;
        let stored: &VisitSequence = self.visit.insert(visit);
        Ok(stored)
    }

    /// Parses the start field and traverses the current graph from it.
    ///
    /// An empty graph is reported as [`InvalidStartReason::EmptyGraph`]
    /// whatever the field holds.
    ///
    /// # Errors
    /// Returns [`GraphWalkError::InvalidStart`] when the graph is empty or
    /// the field is not an index of the current graph. The previous visit
    /// sequence is kept.
    #[instrument(
        name = "session.traverse_text",
        skip(self, raw),
        fields(raw = raw.trim(), start = field::Empty),
    )]
    pub fn traverse_from_text(&mut self, raw: &str, kind: TraversalKind) -> Result<&VisitSequence> {
        if self.graph.is_empty() {
            warn!("traversal requested before any nodes exist");
            return Err(GraphWalkError::invalid_start(InvalidStartReason::EmptyGraph));
        }
        let start = parse_start(raw, self.graph.node_count())?;
        Span::current().record("start", start);
        self.traverse(start, kind)
    }
}

/// Reads a start node typed by a user.
///
/// Integers too large in magnitude for `usize` or `i64` are reported as
/// [`InvalidStartReason::Overflow`] rather than as unparsable text.
fn parse_start(raw: &str, node_count: usize) -> Result<usize> {
    let trimmed = raw.trim();
    let overflow = || InvalidStartReason::Overflow {
        raw: trimmed.into(),
        node_count,
    };
    let reason = match trimmed.parse::<usize>() {
        Ok(start) => return Ok(start),
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow) => overflow(),
        Err(_) => match trimmed.parse::<i64>() {
            Ok(start) if start < 0 => InvalidStartReason::Negative { start },
            Err(err) if matches!(err.kind(), IntErrorKind::NegOverflow) => overflow(),
            _ => InvalidStartReason::Unparsable { raw: raw.into() },
        },
    };
    warn!(raw, %reason, "start node rejected");
    Err(GraphWalkError::invalid_start(reason))
}
