//! Line-driven front-end over a [`GraphSession`].
//!
//! Each input line is one request. Rejected input is answered with an
//! `error:` line and the loop carries on with the session state unchanged.

use std::io::{BufRead, Write};

use graphwalk_core::{GraphSession, TraversalKind};
use tracing::{Span, field, info, instrument, warn};

use super::{
    commands::CliError,
    render::{render_graph, render_visit},
};

const HELP: &str = "\
commands:
  generate <nodes> <edges>  replace the graph with a random one
  dfs <start>               depth-first traversal from <start>
  bfs <start>               breadth-first traversal from <start>
  show                      print the graph and the latest traversal
  help                      print this message
  quit                      leave";

/// Counters describing an interactive run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractiveSummary {
    /// Non-blank lines processed, `quit` included.
    pub commands: usize,
    /// Lines answered with an error.
    pub rejected: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum Request<'a> {
    Generate { nodes: &'a str, edges: &'a str },
    Traverse { kind: TraversalKind, start: &'a str },
    Show,
    Help,
    Quit,
    Blank,
    Usage(&'static str),
    Unknown(&'a str),
}

impl<'a> Request<'a> {
    fn parse(line: &'a str) -> Self {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Self::Blank;
        };
        let args: Vec<&str> = words.collect();
        match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("generate", &[nodes, edges]) => Self::Generate { nodes, edges },
            ("generate", _) => Self::Usage("generate <nodes> <edges>"),
            ("dfs", &[start]) => Self::Traverse {
                kind: TraversalKind::DepthFirst,
                start,
            },
            ("bfs", &[start]) => Self::Traverse {
                kind: TraversalKind::BreadthFirst,
                start,
            },
            ("dfs", _) => Self::Usage("dfs <start>"),
            ("bfs", _) => Self::Usage("bfs <start>"),
            ("show", []) => Self::Show,
            ("help", _) => Self::Help,
            ("quit" | "exit", _) => Self::Quit,
            _ => Self::Unknown(verb),
        }
    }
}

/// Serves requests read from `input` until `quit` or end of input.
///
/// # Errors
/// Returns [`CliError::Io`] when reading or writing fails. Rejected requests
/// are reported on `output` and do not end the loop.
///
/// # Examples
/// ```
/// use graphwalk_cli::cli::run_interactive;
/// use graphwalk_core::SessionBuilder;
///
/// let mut session = SessionBuilder::new().with_seed(2).build();
/// let mut out = Vec::new();
/// let summary = run_interactive(&mut session, "dfs 0\ngenerate 3 2\nquit\n".as_bytes(), &mut out)?;
/// assert_eq!(summary.commands, 3);
/// assert_eq!(summary.rejected, 1);
/// assert_eq!(session.graph().node_count(), 3);
/// # Ok::<(), graphwalk_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.interactive",
    err,
    skip(session, input, output),
    fields(commands = field::Empty, rejected = field::Empty),
)]
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut GraphSession,
    input: R,
    mut output: W,
) -> Result<InteractiveSummary, CliError> {
    let mut summary = InteractiveSummary::default();
    for line in input.lines() {
        let line = line?;
        let request = Request::parse(&line);
        if request == Request::Blank {
            continue;
        }
        summary.commands += 1;
        if request == Request::Quit {
            break;
        }
        if !serve(session, &request, &mut output)? {
            summary.rejected += 1;
        }
        output.flush()?;
    }
    output.flush()?;

    let span = Span::current();
    span.record("commands", summary.commands);
    span.record("rejected", summary.rejected);
    info!(
        commands = summary.commands,
        rejected = summary.rejected,
        "interactive session ended"
    );
    Ok(summary)
}

/// Answers one request; returns `false` when it was rejected.
fn serve<W: Write>(
    session: &mut GraphSession,
    request: &Request<'_>,
    output: &mut W,
) -> Result<bool, CliError> {
    match *request {
        Request::Generate { nodes, edges } => match session.generate_from_text(nodes, edges) {
            Ok(graph) => {
                writeln!(
                    output,
                    "generated {} nodes and {} edges ({} discarded)",
                    graph.node_count(),
                    graph.edge_count(),
                    graph.discarded_draws()
                )?;
                Ok(true)
            }
            Err(err) => reject(output, &err),
        },
        Request::Traverse { kind, start } => {
            let node_count = session.graph().node_count();
            match session.traverse_from_text(start, kind) {
                Ok(visit) => {
                    render_visit(visit, node_count, &mut *output)?;
                    Ok(true)
                }
                Err(err) => reject(output, &err),
            }
        }
        Request::Show => {
            render_graph(session.graph(), session.visit(), &mut *output)?;
            if let Some(visit) = session.visit() {
                render_visit(visit, session.graph().node_count(), &mut *output)?;
            }
            Ok(true)
        }
        Request::Help => {
            writeln!(output, "{HELP}")?;
            Ok(true)
        }
        Request::Usage(usage) => {
            warn!(usage, "malformed interactive request");
            writeln!(output, "usage: {usage}")?;
            Ok(false)
        }
        Request::Unknown(verb) => {
            warn!(verb, "unknown interactive request");
            writeln!(output, "error: unknown command `{verb}`; try `help`")?;
            Ok(false)
        }
        Request::Blank | Request::Quit => Ok(true),
    }
}

fn reject<W: Write>(output: &mut W, err: &dyn std::error::Error) -> Result<bool, CliError> {
    writeln!(output, "error: {err}")?;
    Ok(false)
}
