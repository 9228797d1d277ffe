//! Plain-text rendering of graphs and visit sequences.

use std::io::{self, Write};

use graphwalk_core::{Graph, VisitSequence};

use super::commands::ExecutionSummary;

const VISITED_MARK: &str = "*";

/// Formats a millisecond duration with three decimals.
///
/// # Examples
/// ```
/// use graphwalk_cli::cli::format_millis;
///
/// assert_eq!(format_millis(0.0123), "0.012");
/// assert_eq!(format_millis(4.0), "4.000");
/// ```
#[must_use]
pub fn format_millis(millis: f64) -> String {
    format!("{millis:.3}")
}

/// Writes the node and edge listing of `graph`.
///
/// Nodes contained in `highlight` carry a trailing `*`.
///
/// # Errors
/// Propagates failures from `writer`.
pub fn render_graph(
    graph: &Graph,
    highlight: Option<&VisitSequence>,
    mut writer: impl Write,
) -> io::Result<()> {
    writeln!(writer, "nodes: {}", graph.node_count())?;
    for (index, position) in graph.nodes().iter().enumerate() {
        let mark = if highlight.is_some_and(|visit| visit.contains(index)) {
            VISITED_MARK
        } else {
            ""
        };
        writeln!(writer, "  {index}\t({}, {}){mark}", position.x, position.y)?;
    }
    writeln!(
        writer,
        "edges: {} of {} requested ({} discarded)",
        graph.edge_count(),
        graph.requested_edges(),
        graph.discarded_draws()
    )?;
    for edge in graph.edges() {
        writeln!(writer, "  {} - {}", edge.source(), edge.target())?;
    }
    Ok(())
}

/// Writes the path, coverage and timing overlay of one traversal.
///
/// # Errors
/// Propagates failures from `writer`.
///
/// # Examples
/// ```
/// use graphwalk_cli::cli::render_visit;
/// use graphwalk_core::{Edge, Graph, Position, TraversalKind, traverse};
///
/// let graph = Graph::try_new(
///     vec![Position::new(60, 60); 3],
///     vec![Edge::new(0, 1)],
/// )?;
/// let visit = traverse(&graph, 0, TraversalKind::DepthFirst)?;
/// let mut out = Vec::new();
/// render_visit(&visit, graph.node_count(), &mut out)?;
/// let text = String::from_utf8(out)?;
/// assert!(text.starts_with("DFS path: 0 -> 1\nDFS visited 2 of 3 nodes\nDFS time: "));
/// assert!(text.ends_with(" ms\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_visit(
    visit: &VisitSequence,
    node_count: usize,
    mut writer: impl Write,
) -> io::Result<()> {
    let label = visit.kind().label();
    let path = visit
        .order()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ");
    writeln!(writer, "{label} path: {path}")?;
    writeln!(writer, "{label} visited {} of {node_count} nodes", visit.len())?;
    writeln!(
        writer,
        "{label} time: {} ms",
        format_millis(visit.elapsed_millis())
    )
}

/// Writes the full report for a `run` invocation.
///
/// The node listing marks the nodes reached by the last traversal, the one a
/// canvas would be left highlighting.
///
/// # Errors
/// Propagates failures from `writer`.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    if let Some(seed) = summary.seed {
        writeln!(writer, "seed: {seed}")?;
    }
    render_graph(&summary.graph, summary.visits.last(), &mut writer)?;
    for visit in &summary.visits {
        render_visit(visit, summary.graph.node_count(), &mut writer)?;
    }
    Ok(())
}
