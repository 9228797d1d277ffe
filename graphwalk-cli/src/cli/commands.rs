//! Command definitions and argument parsing for the graphwalk CLI.

use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use graphwalk_core::{
    CanvasBounds, GenerationLimits, Graph, GraphSession, GraphWalkError, ScanStrategy,
    SessionBuilder, TraversalKind, VisitSequence,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::{interactive::run_interactive, render::render_summary};

const DEFAULT_CANVAS_WIDTH: u32 = 800;
const DEFAULT_CANVAS_HEIGHT: u32 = 600;
const DEFAULT_MARGIN: u32 = 50;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphwalk",
    about = "Generate random graphs and trace depth-first and breadth-first walks over them."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate one graph, optionally traverse it, and print a report.
    Run(RunCommand),
    /// Read `generate`, `dfs`, `bfs` and `show` requests from stdin.
    Interactive(InteractiveCommand),
}

/// Session configuration shared by every command.
#[derive(Debug, Args, Clone)]
pub struct SessionArgs {
    /// Seed for the random source; omit for a fresh graph every time.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: u32,

    /// Margin kept free of nodes on every canvas side.
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    pub margin: u32,

    /// Neighbour discovery strategy.
    #[arg(long, value_enum, default_value_t = StrategyArg::EdgeList)]
    pub strategy: StrategyArg,

    /// Largest node count accepted.
    #[arg(long, default_value_t = GenerationLimits::default().max_nodes)]
    pub max_nodes: usize,

    /// Largest edge count accepted.
    #[arg(long, default_value_t = GenerationLimits::default().max_edges)]
    pub max_edges: usize,
}

impl Default for SessionArgs {
    fn default() -> Self {
        let limits = GenerationLimits::default();
        Self {
            seed: None,
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            margin: DEFAULT_MARGIN,
            strategy: StrategyArg::EdgeList,
            max_nodes: limits.max_nodes,
            max_edges: limits.max_edges,
        }
    }
}

impl SessionArgs {
    /// Validates the geometry and builds a session.
    ///
    /// # Errors
    /// Returns [`CliError::InvalidCanvas`] when the margins leave no drawable
    /// area.
    pub fn build_session(&self) -> Result<GraphSession, CliError> {
        let bounds = CanvasBounds::from_canvas(self.width, self.height, self.margin).ok_or(
            CliError::InvalidCanvas {
                width: self.width,
                height: self.height,
                margin: self.margin,
            },
        )?;
        let builder = SessionBuilder::new()
            .with_bounds(bounds)
            .with_limits(GenerationLimits {
                max_nodes: self.max_nodes,
                max_edges: self.max_edges,
            })
            .with_scan_strategy(self.strategy.into());
        Ok(match self.seed {
            Some(seed) => builder.with_seed(seed).build(),
            None => builder.build(),
        })
    }
}

/// Options accepted by the `run` command.
///
/// Counts and the start node are taken as raw text so malformed values are
/// reported the same way a form-based front-end would report them.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Number of nodes to generate.
    #[arg(long)]
    pub nodes: String,

    /// Number of edge draws; self-loop draws are dropped.
    #[arg(long)]
    pub edges: String,

    /// Node to start traversals from; omit to skip traversal.
    #[arg(long)]
    pub start: Option<String>,

    /// Traversals to run when a start node is given.
    #[arg(long, value_enum, default_value_t = KindArg::Both)]
    pub kind: KindArg,

    /// Session configuration.
    #[command(flatten)]
    pub session: SessionArgs,
}

/// Options accepted by the `interactive` command.
#[derive(Debug, Args, Clone, Default)]
pub struct InteractiveCommand {
    /// Session configuration.
    #[command(flatten)]
    pub session: SessionArgs,
}

/// Traversal selection for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Depth-first only.
    Dfs,
    /// Breadth-first only.
    Bfs,
    /// Depth-first, then breadth-first.
    Both,
}

impl KindArg {
    fn kinds(self) -> &'static [TraversalKind] {
        match self {
            Self::Dfs => &[TraversalKind::DepthFirst],
            Self::Bfs => &[TraversalKind::BreadthFirst],
            Self::Both => &[TraversalKind::DepthFirst, TraversalKind::BreadthFirst],
        }
    }
}

/// Neighbour discovery strategy exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Rescan the full edge list for every node.
    EdgeList,
    /// Precompute adjacency lists.
    Adjacency,
}

impl From<StrategyArg> for ScanStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::EdgeList => Self::EdgeList,
            StrategyArg::Adjacency => Self::Adjacency,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Canvas margins leave no room for nodes.
    #[error("a {width}x{height} canvas has no drawable area with a {margin}-pixel margin")]
    InvalidCanvas {
        /// Requested canvas width.
        width: u32,
        /// Requested canvas height.
        height: u32,
        /// Requested margin.
        margin: u32,
    },
    /// Reading requests or writing the report failed.
    #[error("terminal I/O failed: {source}")]
    Io {
        /// Underlying operating system error.
        #[from]
        source: io::Error,
    },
    /// Generation or traversal rejected the input.
    #[error(transparent)]
    Core(#[from] GraphWalkError),
}

/// Outcome of the `run` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Seed the session was created with, if any.
    pub seed: Option<u64>,
    /// Generated graph.
    pub graph: Graph,
    /// Traversals in the order they ran.
    pub visits: Vec<VisitSequence>,
}

/// Executes `cli`, reading requests from `input` and writing reports to
/// `output`.
///
/// # Errors
/// Returns [`CliError`] when configuration is invalid, the `run` command's
/// input is rejected, or I/O fails. The `interactive` command reports
/// rejected input inline and only fails on I/O errors.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use graphwalk_cli::cli::{Cli, Command, KindArg, RunCommand, SessionArgs, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         nodes: "4".into(),
///         edges: "5".into(),
///         start: Some("0".into()),
///         kind: KindArg::Dfs,
///         session: SessionArgs { seed: Some(3), ..SessionArgs::default() },
///     }),
/// };
/// let mut output = Vec::new();
/// run_cli(cli, std::io::empty(), &mut output)?;
/// let report = String::from_utf8(output)?;
/// assert!(report.contains("nodes: 4"));
/// assert!(report.contains("DFS path: 0"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, input, output),
    fields(command = field::Empty),
)]
pub fn run_cli<R: BufRead, W: Write>(cli: Cli, input: R, mut output: W) -> Result<(), CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            let summary = execute_run(run)?;
            render_summary(&summary, &mut output)?;
        }
        Command::Interactive(interactive) => {
            span.record("command", field::display("interactive"));
            let mut session = interactive.session.build_session()?;
            run_interactive(&mut session, input, &mut output)?;
        }
    }
    Ok(())
}

/// Generates the requested graph and runs the selected traversals.
///
/// # Errors
/// Returns [`CliError::Core`] when the counts or start node are rejected
/// and [`CliError::InvalidCanvas`] for unusable canvas geometry.
#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(seed = field::Empty, kind = ?command.kind, strategy = ?command.session.strategy),
)]
pub fn execute_run(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        nodes,
        edges,
        start,
        kind,
        session: session_args,
    } = command;
    let mut session = session_args.build_session()?;
    if let Some(seed) = session.seed() {
        Span::current().record("seed", seed);
    }

    session.generate_from_text(&nodes, &edges)?;

    let mut visits = Vec::new();
    if let Some(raw_start) = start.as_deref() {
        for &traversal in kind.kinds() {
            let visit = session.traverse_from_text(raw_start, traversal)?;
            visits.push(visit.clone());
        }
    }

    info!(
        nodes = session.graph().node_count(),
        edges = session.graph().edge_count(),
        traversals = visits.len(),
        "run completed"
    );
    Ok(ExecutionSummary {
        seed: session.seed(),
        graph: session.graph().clone(),
        visits,
    })
}
