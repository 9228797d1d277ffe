//! Support library for the graphwalk CLI binary.
//!
//! Exposes the command pipeline and logging bootstrap so integration tests
//! and doctests can drive the CLI without spawning a subprocess.

pub mod cli;
pub mod logging;
