//! Builder for [`GraphSession`] configuration.

use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    generator::{CanvasBounds, GenerationLimits},
    session::GraphSession,
    traversal::ScanStrategy,
};

/// Configures and constructs [`GraphSession`] instances.
///
/// # Examples
/// ```
/// use graphwalk_core::{CanvasBounds, ScanStrategy, SessionBuilder};
///
/// let session = SessionBuilder::new()
///     .with_seed(42)
///     .with_scan_strategy(ScanStrategy::Adjacency)
///     .build();
/// assert_eq!(session.seed(), Some(42));
/// assert_eq!(session.scan_strategy(), ScanStrategy::Adjacency);
/// assert_eq!(session.bounds(), CanvasBounds::default());
/// assert!(session.graph().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    seed: Option<u64>,
    bounds: CanvasBounds,
    limits: GenerationLimits,
    strategy: ScanStrategy,
}

impl SessionBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use graphwalk_core::{GenerationLimits, ScanStrategy, SessionBuilder};
    ///
    /// let builder = SessionBuilder::new();
    /// assert_eq!(builder.seed(), None);
    /// assert_eq!(builder.limits(), GenerationLimits::default());
    /// assert_eq!(builder.scan_strategy(), ScanStrategy::EdgeList);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the random source so generated graphs are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Overrides the rectangle node positions are drawn from.
    #[must_use]
    pub fn with_bounds(mut self, bounds: CanvasBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Returns the configured canvas bounds.
    #[must_use]
    pub const fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    /// Overrides the largest node and edge counts the session accepts.
    #[must_use]
    pub fn with_limits(mut self, limits: GenerationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the configured generation limits.
    #[must_use]
    pub const fn limits(&self) -> GenerationLimits {
        self.limits
    }

    /// Selects how traversals discover neighbours.
    #[must_use]
    pub fn with_scan_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured scan strategy.
    #[must_use]
    pub const fn scan_strategy(&self) -> ScanStrategy {
        self.strategy
    }

    /// Constructs a session with an empty graph and no visit sequence.
    ///
    /// Without a seed the random source is seeded from operating system
    /// entropy.
    #[must_use]
    pub fn build(self) -> GraphSession {
        let rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        GraphSession::new(rng, self.seed, self.bounds, self.limits, self.strategy)
    }
}
