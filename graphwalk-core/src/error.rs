//! Error types for the graphwalk core library.
//!
//! Exposes the two recoverable failure kinds of the public API, their typed
//! reasons, stable machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Identifies which user-supplied quantity was rejected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CountField {
    /// The node count, or node data supplied with an explicit graph.
    Nodes,
    /// The edge count, or edge data supplied with an explicit graph.
    Edges,
}

impl fmt::Display for CountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nodes => "nodes",
            Self::Edges => "edges",
        })
    }
}

/// Why a node count, edge count or explicit graph was rejected.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InvalidInputReason {
    /// The text could not be parsed as a non-negative integer.
    #[error("`{raw}` is not a non-negative integer")]
    Unparsable {
        /// Raw text supplied by the caller.
        raw: Arc<str>,
    },
    /// The count exceeds the configured generation limit.
    #[error("{got} exceeds the limit of {max}")]
    ExceedsLimit {
        /// Requested count.
        got: usize,
        /// Largest accepted count.
        max: usize,
    },
    /// Edges were requested for a graph without nodes.
    #[error("{edges} edges requested but the graph has no nodes")]
    EdgesWithoutNodes {
        /// Number of edges requested.
        edges: usize,
    },
    /// An explicit edge referenced a node outside the graph.
    #[error("edge #{edge} references node {endpoint} but the graph has {node_count} nodes")]
    EndpointOutOfRange {
        /// Position of the offending edge in the edge list.
        edge: usize,
        /// Endpoint that fell outside `0..node_count`.
        endpoint: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// An explicit edge connected a node to itself.
    #[error("edge #{edge} is a self-loop on node {node}")]
    SelfLoop {
        /// Position of the offending edge in the edge list.
        edge: usize,
        /// Node used for both endpoints.
        node: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`InvalidInputReason`] variants.
    enum InvalidInputCode for InvalidInputReason {
        /// The text could not be parsed as a non-negative integer.
        Unparsable => Unparsable { .. } => "INVALID_INPUT_UNPARSABLE",
        /// The count exceeds the configured generation limit.
        ExceedsLimit => ExceedsLimit { .. } => "INVALID_INPUT_EXCEEDS_LIMIT",
        /// Edges were requested for a graph without nodes.
        EdgesWithoutNodes => EdgesWithoutNodes { .. } => "INVALID_INPUT_EDGES_WITHOUT_NODES",
        /// An explicit edge referenced a node outside the graph.
        EndpointOutOfRange => EndpointOutOfRange { .. } => "INVALID_INPUT_ENDPOINT_OUT_OF_RANGE",
        /// An explicit edge connected a node to itself.
        SelfLoop => SelfLoop { .. } => "INVALID_INPUT_SELF_LOOP",
    }
}

/// Why a traversal start node was rejected.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InvalidStartReason {
    /// The graph has no nodes, so no start node can be valid.
    #[error("the graph has no nodes")]
    EmptyGraph,
    /// The start text could not be parsed as an integer.
    #[error("`{raw}` is not a node index")]
    Unparsable {
        /// Raw text supplied by the caller.
        raw: Arc<str>,
    },
    /// The start index was negative.
    #[error("node index {start} is negative")]
    Negative {
        /// Parsed start value.
        start: i64,
    },
    /// The start index was not below the node count.
    #[error("node index {start} is outside 0..{node_count}")]
    OutOfRange {
        /// Requested start node.
        start: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// The start text is a well-formed integer too large in magnitude to be
    /// a node index on this platform.
    #[error("node index `{raw}` is outside 0..{node_count}")]
    Overflow {
        /// Raw text supplied by the caller.
        raw: Arc<str>,
        /// Number of nodes in the graph.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`InvalidStartReason`] variants.
    enum InvalidStartCode for InvalidStartReason {
        /// The graph has no nodes.
        EmptyGraph => EmptyGraph => "INVALID_START_EMPTY_GRAPH",
        /// The start text could not be parsed as an integer.
        Unparsable => Unparsable { .. } => "INVALID_START_UNPARSABLE",
        /// The start index was negative.
        Negative => Negative { .. } => "INVALID_START_NEGATIVE",
        /// The start index was not below the node count.
        OutOfRange => OutOfRange { .. } => "INVALID_START_OUT_OF_RANGE",
        /// The start text is an integer beyond the platform's index range.
        Overflow => Overflow { .. } => "INVALID_START_OVERFLOW",
    }
}

/// Error type produced by graph generation and traversal.
///
/// Both variants are recoverable: the operation that raised them leaves any
/// previously generated graph and visit sequence untouched.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphWalkError {
    /// A node or edge count, or an explicit graph, was rejected.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// Quantity that was rejected.
        field: CountField,
        /// Detailed cause.
        #[source]
        reason: InvalidInputReason,
    },
    /// The traversal start node was rejected.
    #[error("invalid start node: {reason}")]
    InvalidStart {
        /// Detailed cause.
        #[source]
        reason: InvalidStartReason,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphWalkError`] variants.
    enum GraphWalkErrorCode for GraphWalkError {
        /// A node or edge count, or an explicit graph, was rejected.
        InvalidInput => InvalidInput { .. } => "GRAPHWALK_INVALID_INPUT",
        /// The traversal start node was rejected.
        InvalidStart => InvalidStart { .. } => "GRAPHWALK_INVALID_START",
    }
}

impl GraphWalkError {
    pub(crate) const fn invalid_input(field: CountField, reason: InvalidInputReason) -> Self {
        Self::InvalidInput { field, reason }
    }

    pub(crate) const fn invalid_start(reason: InvalidStartReason) -> Self {
        Self::InvalidStart { reason }
    }

    /// Retrieve the stable code of the underlying reason.
    ///
    /// # Examples
    /// ```
    /// use graphwalk_core::{Graph, TraversalKind, traverse};
    ///
    /// let err = traverse(&Graph::empty(), 0, TraversalKind::DepthFirst)
    ///     .expect_err("empty graphs reject every start node");
    /// assert_eq!(err.code().as_str(), "GRAPHWALK_INVALID_START");
    /// assert_eq!(err.detail_code(), "INVALID_START_EMPTY_GRAPH");
    /// ```
    #[must_use]
    pub const fn detail_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { reason, .. } => reason.code().as_str(),
            Self::InvalidStart { reason } => reason.code().as_str(),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphWalkError>;
