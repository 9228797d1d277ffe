//! Graphwalk core library.
//!
//! Generates random undirected graphs over a 2D canvas and walks them
//! depth-first or breadth-first, returning the visit order together with
//! the time the walk took. [`GraphSession`] ties both halves together for
//! front-ends that hold one current graph at a time.

mod builder;
mod error;
mod generator;
mod graph;
mod session;
#[cfg(test)]
mod test_utils;
mod traversal;
mod visited;

pub use crate::{
    builder::SessionBuilder,
    error::{
        CountField, GraphWalkError, GraphWalkErrorCode, InvalidInputCode, InvalidInputReason,
        InvalidStartCode, InvalidStartReason, Result,
    },
    generator::{CanvasBounds, GenerationLimits, generate, generate_with_limits},
    graph::{Edge, Graph, Position},
    session::GraphSession,
    traversal::{
        Adjacency, ScanStrategy, TraversalKind, VisitSequence, traverse, traverse_with,
    },
    visited::VisitedSet,
};
