//! Random graph generation.
//!
//! Nodes receive independent uniform positions inside a [`CanvasBounds`]
//! rectangle; edges are drawn as independent uniform endpoint pairs with
//! self-loop draws dropped rather than redrawn.

use std::num::NonZeroU32;

use rand::Rng;
use tracing::{Span, debug, field, info, instrument, warn};

use crate::{
    error::{CountField, GraphWalkError, InvalidInputReason, Result},
    graph::{Edge, Graph, Position},
};

const DEFAULT_CANVAS_WIDTH: u32 = 800;
const DEFAULT_CANVAS_HEIGHT: u32 = 600;
const DEFAULT_MARGIN: u32 = 50;

/// Rectangle that generated node positions fall into.
///
/// `x` is drawn from `min_x..min_x + width` and `y` from
/// `min_y..min_y + height`. The default is an 800x600 canvas with a
/// 50-pixel margin on every side.
///
/// # Examples
/// ```
/// use graphwalk_core::{CanvasBounds, Position};
///
/// let bounds = CanvasBounds::default();
/// assert!(bounds.contains(Position::new(50, 50)));
/// assert!(bounds.contains(Position::new(749, 549)));
/// assert!(!bounds.contains(Position::new(750, 300)));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CanvasBounds {
    min_x: u32,
    min_y: u32,
    width: NonZeroU32,
    height: NonZeroU32,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::from_canvas(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT, DEFAULT_MARGIN)
            .unwrap_or(Self {
                min_x: 0,
                min_y: 0,
                width: NonZeroU32::MIN,
                height: NonZeroU32::MIN,
            })
    }
}

impl CanvasBounds {
    /// Creates bounds from an origin and non-zero extents.
    ///
    /// Returns `None` when the rectangle would reach past `u32::MAX` on
    /// either axis.
    ///
    /// # Examples
    /// ```
    /// use std::num::NonZeroU32;
    ///
    /// use graphwalk_core::CanvasBounds;
    ///
    /// let ten = NonZeroU32::new(10).expect("non-zero");
    /// assert!(CanvasBounds::new(u32::MAX - 9, 0, ten, ten).is_some());
    /// assert!(CanvasBounds::new(u32::MAX - 8, 0, ten, ten).is_none());
    /// ```
    #[must_use]
    pub const fn new(
        min_x: u32,
        min_y: u32,
        width: NonZeroU32,
        height: NonZeroU32,
    ) -> Option<Self> {
        if min_x.checked_add(width.get() - 1).is_none()
            || min_y.checked_add(height.get() - 1).is_none()
        {
            return None;
        }
        Some(Self {
            min_x,
            min_y,
            width,
            height,
        })
    }

    /// Derives the drawable area of a `width` by `height` canvas once
    /// `margin` is removed from every side.
    ///
    /// Returns `None` when the margins leave no drawable area.
    ///
    /// # Examples
    /// ```
    /// use graphwalk_core::CanvasBounds;
    ///
    /// let bounds = CanvasBounds::from_canvas(800, 600, 50).expect("area remains");
    /// assert_eq!((bounds.width(), bounds.height()), (700, 500));
    /// assert!(CanvasBounds::from_canvas(100, 100, 50).is_none());
    /// ```
    #[must_use]
    pub fn from_canvas(width: u32, height: u32, margin: u32) -> Option<Self> {
        let inset = margin.checked_mul(2)?;
        let inner_width = NonZeroU32::new(width.checked_sub(inset)?)?;
        let inner_height = NonZeroU32::new(height.checked_sub(inset)?)?;
        Self::new(margin, margin, inner_width, inner_height)
    }

    /// Returns the smallest `x` a node may receive.
    #[must_use]
    pub const fn min_x(&self) -> u32 {
        self.min_x
    }

    /// Returns the smallest `y` a node may receive.
    #[must_use]
    pub const fn min_y(&self) -> u32 {
        self.min_y
    }

    /// Returns the horizontal extent.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width.get()
    }

    /// Returns the vertical extent.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height.get()
    }

    /// Returns whether `position` lies inside the bounds.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        let within = |value: u32, start: u32, extent: NonZeroU32| {
            value
                .checked_sub(start)
                .is_some_and(|offset| offset < extent.get())
        };
        within(position.x, self.min_x, self.width) && within(position.y, self.min_y, self.height)
    }

    /// Draws a uniform position; `new` guarantees the sums stay in range.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(
            self.min_x + rng.gen_range(0..self.width.get()),
            self.min_y + rng.gen_range(0..self.height.get()),
        )
    }
}

/// Upper bounds on the counts accepted by [`generate_with_limits`].
///
/// Depth-first and breadth-first scans cost up to `nodes * edges` steps, so
/// front-ends cap both counts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenerationLimits {
    /// Largest accepted node count.
    pub max_nodes: usize,
    /// Largest accepted edge count.
    pub max_edges: usize,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            max_nodes: 5_000,
            max_edges: 50_000,
        }
    }
}

impl GenerationLimits {
    /// Creates limits with no effective cap.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_nodes: usize::MAX,
            max_edges: usize::MAX,
        }
    }

    fn check(&self, field: CountField, got: usize) -> Result<()> {
        let max = match field {
            CountField::Nodes => self.max_nodes,
            CountField::Edges => self.max_edges,
        };
        if got > max {
            warn!(%field, got, max, "count exceeds generation limit");
            return Err(GraphWalkError::invalid_input(
                field,
                InvalidInputReason::ExceedsLimit { got, max },
            ));
        }
        Ok(())
    }
}

/// Generates a random graph with `node_count` nodes and up to `edge_count`
/// edges.
///
/// Each node gets an independent uniform position inside `bounds`. Each of
/// the `edge_count` draws picks two independent uniform endpoints; draws
/// whose endpoints coincide are discarded, so the realized edge count is
/// `edge_count` minus the number of self-draws. Parallel edges are kept.
///
/// # Errors
/// Returns [`GraphWalkError::InvalidInput`] when `edge_count` is positive but
/// `node_count` is zero, since no endpoint can be drawn.
///
/// # Examples
/// ```
/// use graphwalk_core::{CanvasBounds, generate};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let bounds = CanvasBounds::default();
/// let first = generate(5, 3, &bounds, &mut SmallRng::seed_from_u64(7))?;
/// let second = generate(5, 3, &bounds, &mut SmallRng::seed_from_u64(7))?;
/// assert_eq!(first, second);
/// assert_eq!(first.node_count(), 5);
/// assert!(first.edge_count() <= 3);
/// # Ok::<(), graphwalk_core::GraphWalkError>(())
/// ```
#[instrument(
    name = "core.generate",
    err,
    skip(bounds, rng),
    fields(realized_edges = field::Empty, discarded = field::Empty),
)]
pub fn generate<R: Rng + ?Sized>(
    node_count: usize,
    edge_count: usize,
    bounds: &CanvasBounds,
    rng: &mut R,
) -> Result<Graph> {
    if node_count == 0 && edge_count > 0 {
        warn!(edge_count, "edges requested for an empty node set");
        return Err(GraphWalkError::invalid_input(
            CountField::Edges,
            InvalidInputReason::EdgesWithoutNodes { edges: edge_count },
        ));
    }

    let nodes: Vec<Position> = (0..node_count).map(|_| bounds.sample(rng)).collect();

    let mut edges = Vec::with_capacity(edge_count);
    let mut discarded = 0_usize;
    for draw in 0..edge_count {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        if source == target {
            debug!(draw, node = source, "discarded self-loop draw");
            discarded = discarded.saturating_add(1);
            continue;
        }
        edges.push(Edge::new(source, target));
    }

    let span = Span::current();
    span.record("realized_edges", edges.len());
    span.record("discarded", discarded);
    info!(
        nodes = node_count,
        edges = edges.len(),
        discarded,
        "graph generated"
    );
    Ok(Graph::from_generated(nodes, edges, edge_count))
}

/// Like [`generate`], but first rejects counts above `limits`.
///
/// # Errors
/// Returns [`GraphWalkError::InvalidInput`] when either count exceeds its
/// limit, or for the conditions listed on [`generate`].
pub fn generate_with_limits<R: Rng + ?Sized>(
    node_count: usize,
    edge_count: usize,
    bounds: &CanvasBounds,
    limits: &GenerationLimits,
    rng: &mut R,
) -> Result<Graph> {
    limits.check(CountField::Nodes, node_count)?;
    limits.check(CountField::Edges, edge_count)?;
    generate(node_count, edge_count, bounds, rng)
}

/// Parses a count typed by a user, trimming surrounding whitespace.
pub(crate) fn parse_count(field: CountField, raw: &str) -> Result<usize> {
    raw.trim().parse::<usize>().map_err(|_| {
        warn!(%field, raw, "count is not a non-negative integer");
        GraphWalkError::invalid_input(
            field,
            InvalidInputReason::Unparsable {
                raw: raw.into(),
            },
        )
    })
}
