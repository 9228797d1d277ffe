//! Benchmark support crate for graphwalk.
//!
//! Builds seeded random graphs for the Criterion traversal benchmarks so
//! every run measures the same inputs.

pub mod params;
pub mod scenario;
