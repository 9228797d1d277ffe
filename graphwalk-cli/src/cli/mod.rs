//! Command-line front-end for graph generation and traversal.
//!
//! `run` generates one graph and optionally traces walks over it; the
//! `interactive` command keeps a session open and reads requests line by
//! line, reporting rejected input without exiting.

mod commands;
mod interactive;
mod render;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, InteractiveCommand, KindArg, RunCommand,
    SessionArgs, StrategyArg, execute_run, run_cli,
};
pub use interactive::{InteractiveSummary, run_interactive};
pub use render::{format_millis, render_graph, render_summary, render_visit};

#[cfg(test)]
mod tests;
