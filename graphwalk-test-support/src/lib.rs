//! Shared test utilities used across graphwalk crates.
//!
//! Provides a tracing layer that records spans and events for assertions,
//! hand-built graph fixtures with known traversal orders, and the
//! environment-driven property-test run profile.

pub mod ci;
pub mod graphs;
pub mod tracing;
