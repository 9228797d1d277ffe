//! Unit tests for the CLI commands, renderer and interactive loop.

use super::{
    Cli, CliError, Command, InteractiveCommand, KindArg, RunCommand, SessionArgs, StrategyArg,
    execute_run, format_millis, render_graph, render_summary, run_cli, run_interactive,
};

use std::io;

use clap::Parser;
use graphwalk_core::{
    GraphWalkError, InvalidInputReason, InvalidStartReason, SessionBuilder, TraversalKind,
    traverse,
};
use graphwalk_test_support::{graphs::branching_graph, tracing::RecordingLayer};
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn run_command(nodes: &str, edges: &str, start: Option<&str>, kind: KindArg) -> RunCommand {
    RunCommand {
        nodes: nodes.to_owned(),
        edges: edges.to_owned(),
        start: start.map(str::to_owned),
        kind,
        session: SessionArgs {
            seed: Some(17),
            ..SessionArgs::default()
        },
    }
}

fn run_to_string(cli: Cli, input: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    run_cli(cli, input.as_bytes(), &mut output)?;
    Ok(String::from_utf8(output)?)
}

#[rstest]
fn parses_run_arguments() -> TestResult {
    let cli = Cli::try_parse_from([
        "graphwalk",
        "run",
        "--nodes",
        "6",
        "--edges",
        "9",
        "--start",
        "2",
        "--kind",
        "bfs",
        "--strategy",
        "adjacency",
        "--seed",
        "4",
    ])?;
    let Command::Run(run) = cli.command else {
        return Err("expected the run command".into());
    };
    assert_eq!(run.nodes, "6");
    assert_eq!(run.edges, "9");
    assert_eq!(run.start.as_deref(), Some("2"));
    assert_eq!(run.kind, KindArg::Bfs);
    assert_eq!(run.session.strategy, StrategyArg::Adjacency);
    assert_eq!(run.session.seed, Some(4));
    assert_eq!(run.session.width, 800);
    assert_eq!(run.session.margin, 50);
    Ok(())
}

#[rstest]
fn run_requires_counts() {
    let err = Cli::try_parse_from(["graphwalk", "run", "--nodes", "3"])
        .expect_err("edges are mandatory");
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[rstest]
#[case::dfs_only(KindArg::Dfs, &[TraversalKind::DepthFirst])]
#[case::bfs_only(KindArg::Bfs, &[TraversalKind::BreadthFirst])]
#[case::both(KindArg::Both, &[TraversalKind::DepthFirst, TraversalKind::BreadthFirst])]
fn execute_run_runs_selected_traversals(
    #[case] kind: KindArg,
    #[case] expected: &[TraversalKind],
) -> TestResult {
    let summary = execute_run(run_command("7", "12", Some("0"), kind))?;
    let kinds: Vec<TraversalKind> = summary.visits.iter().map(|visit| visit.kind()).collect();
    assert_eq!(kinds, expected);
    assert_eq!(summary.seed, Some(17));
    assert_eq!(summary.graph.node_count(), 7);
    assert!(summary.visits.iter().all(|visit| visit.start() == Some(0)));
    Ok(())
}

#[rstest]
fn execute_run_without_start_skips_traversal() -> TestResult {
    let summary = execute_run(run_command("3", "2", None, KindArg::Both))?;
    assert!(summary.visits.is_empty());
    Ok(())
}

#[rstest]
fn execute_run_is_reproducible_for_a_seed() -> TestResult {
    let first = execute_run(run_command("5", "3", Some("1"), KindArg::Both))?;
    let second = execute_run(run_command("5", "3", Some("1"), KindArg::Both))?;
    assert_eq!(first.graph, second.graph);
    let first_orders: Vec<&[usize]> = first.visits.iter().map(|visit| visit.order()).collect();
    let second_orders: Vec<&[usize]> = second.visits.iter().map(|visit| visit.order()).collect();
    assert_eq!(first_orders, second_orders);
    Ok(())
}

#[rstest]
fn execute_run_rejects_unparsable_nodes() {
    let err = execute_run(run_command("abc", "2", None, KindArg::Both))
        .expect_err("letters must be rejected");
    assert!(matches!(
        err,
        CliError::Core(GraphWalkError::InvalidInput {
            reason: InvalidInputReason::Unparsable { .. },
            ..
        })
    ));
}

#[rstest]
#[case::out_of_range("3")]
#[case::negative("-1")]
fn execute_run_rejects_bad_start(#[case] start: &str) {
    let err = execute_run(run_command("3", "2", Some(start), KindArg::Dfs))
        .expect_err("start must be rejected");
    assert!(matches!(err, CliError::Core(GraphWalkError::InvalidStart { .. })));
}

#[rstest]
fn execute_run_on_empty_graph_reports_empty_graph() {
    let err = execute_run(run_command("0", "0", Some("0"), KindArg::Bfs))
        .expect_err("nothing to traverse");
    assert!(matches!(
        err,
        CliError::Core(GraphWalkError::InvalidStart {
            reason: InvalidStartReason::EmptyGraph
        })
    ));
}

#[rstest]
#[case(100, 100, 50)]
#[case(10, 600, 5)]
fn unusable_canvas_is_rejected(#[case] width: u32, #[case] height: u32, #[case] margin: u32) {
    let mut command = run_command("3", "2", None, KindArg::Both);
    command.session.width = width;
    command.session.height = height;
    command.session.margin = margin;
    let err = execute_run(command).expect_err("canvas has no drawable area");
    assert!(matches!(err, CliError::InvalidCanvas { .. }));
}

#[rstest]
fn run_report_lists_graph_and_overlay() -> TestResult {
    let cli = Cli {
        command: Command::Run(run_command("4", "5", Some("0"), KindArg::Both)),
    };
    let report = run_to_string(cli, "")?;
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.first().copied(), Some("seed: 17"));
    assert_eq!(lines.get(1).copied(), Some("nodes: 4"));
    assert!(lines.iter().any(|line| line.starts_with("edges: ")));
    assert!(lines.iter().any(|line| line.starts_with("DFS path: 0")));
    assert!(lines.iter().any(|line| line.starts_with("BFS path: 0")));
    assert!(
        lines
            .iter()
            .any(|line| line.starts_with("DFS time: ") && line.ends_with(" ms"))
    );
    Ok(())
}

#[rstest]
fn render_summary_matches_fixture_layout() -> TestResult {
    let graph = branching_graph();
    let dfs = traverse(&graph, 0, TraversalKind::DepthFirst)?;
    let summary = super::ExecutionSummary {
        seed: None,
        graph,
        visits: vec![dfs],
    };
    let mut out = Vec::new();
    render_summary(&summary, &mut out)?;
    let report = String::from_utf8(out)?;
    let expected_head = "\
nodes: 4
  0\t(50, 50)*
  1\t(50, 50)*
  2\t(50, 50)*
  3\t(50, 50)*
edges: 3 of 3 requested (0 discarded)
  0 - 1
  1 - 2
  0 - 3
DFS path: 0 -> 1 -> 2 -> 3
DFS visited 4 of 4 nodes
DFS time: ";
    assert!(report.starts_with(expected_head), "unexpected report:\n{report}");
    Ok(())
}

#[rstest]
fn render_graph_marks_only_visited_nodes() -> TestResult {
    let graph = graphwalk_test_support::graphs::two_component_graph();
    let visit = traverse(&graph, 3, TraversalKind::BreadthFirst)?;
    let mut out = Vec::new();
    render_graph(&graph, Some(&visit), &mut out)?;
    let report = String::from_utf8(out)?;
    let marked: Vec<&str> = report.lines().filter(|line| line.ends_with('*')).collect();
    assert_eq!(marked, ["  3\t(50, 50)*", "  4\t(50, 50)*"]);
    Ok(())
}

#[rstest]
#[case(0.0, "0.000")]
#[case(0.0126, "0.013")]
#[case(12.3457, "12.346")]
fn millis_use_three_decimals(#[case] millis: f64, #[case] expected: &str) {
    assert_eq!(format_millis(millis), expected);
}

#[rstest]
fn interactive_session_reports_errors_and_continues() -> TestResult {
    let cli = Cli {
        command: Command::Interactive(InteractiveCommand {
            session: SessionArgs {
                seed: Some(8),
                ..SessionArgs::default()
            },
        }),
    };
    let script = "dfs 0\ngenerate abc 3\ngenerate 4 3\n\nbfs 9\nbfs 0\nfly\nquit\ndfs 0\n";
    let transcript = run_to_string(cli, script)?;
    let lines: Vec<&str> = transcript.lines().collect();
    assert_eq!(
        lines.first().copied(),
        Some("error: invalid start node: the graph has no nodes")
    );
    assert!(
        lines
            .get(1)
            .is_some_and(|line| line.starts_with("error: invalid nodes: "))
    );
    assert!(
        lines
            .get(2)
            .is_some_and(|line| line.starts_with("generated 4 nodes and "))
    );
    assert!(
        lines
            .get(3)
            .is_some_and(|line| line.starts_with("error: invalid start node: "))
    );
    assert!(lines.iter().any(|line| line.starts_with("BFS path: 0")));
    assert_eq!(lines.last().copied(), Some("error: unknown command `fly`; try `help`"));
    assert!(!lines.iter().any(|line| line.starts_with("DFS path")));
    Ok(())
}

#[rstest]
fn interactive_show_renders_latest_visit() -> TestResult {
    let mut session = SessionBuilder::new().with_seed(3).build();
    let mut out = Vec::new();
    let summary = run_interactive(&mut session, "generate 3 2\ndfs 1\nshow\n".as_bytes(), &mut out)?;
    assert_eq!(summary.commands, 3);
    assert_eq!(summary.rejected, 0);
    let transcript = String::from_utf8(out)?;
    assert!(transcript.contains("nodes: 3\n"));
    assert_eq!(transcript.matches("DFS path: 1").count(), 2);
    Ok(())
}

#[rstest]
fn interactive_help_lists_commands() -> TestResult {
    let mut session = SessionBuilder::new().with_seed(3).build();
    let mut out = Vec::new();
    run_interactive(&mut session, io::Cursor::new("help"), &mut out)?;
    let transcript = String::from_utf8(out)?;
    for verb in ["generate", "dfs", "bfs", "show", "quit"] {
        assert!(transcript.contains(verb), "help omits {verb}");
    }
    Ok(())
}

#[rstest]
fn run_cli_records_command_span() -> TestResult {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let cli = Cli {
        command: Command::Run(run_command("3", "3", Some("0"), KindArg::Dfs)),
    };
    tracing::subscriber::with_default(subscriber, || run_to_string(cli, ""))?;

    let run = layer.span_named("cli.run").ok_or("cli.run span missing")?;
    assert_eq!(run.field("command").as_deref(), Some("run"));
    let execute = layer
        .span_named("cli.execute")
        .ok_or("cli.execute span missing")?;
    assert_eq!(execute.field("seed").as_deref(), Some("17"));
    assert_eq!(execute.field("kind").as_deref(), Some("Dfs"));
    assert!(
        layer
            .events_at(Level::INFO)
            .iter()
            .any(|event| event.message() == Some("run completed"))
    );
    Ok(())
}

#[rstest]
fn interactive_span_counts_commands() -> TestResult {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let mut session = SessionBuilder::new().with_seed(1).build();
    tracing::subscriber::with_default(subscriber, || {
        run_interactive(&mut session, "generate 2 1\nbogus\n".as_bytes(), io::sink())
    })?;

    let span = layer
        .span_named("cli.interactive")
        .ok_or("cli.interactive span missing")?;
    assert_eq!(span.field("commands").as_deref(), Some("2"));
    assert_eq!(span.field("rejected").as_deref(), Some("1"));
    assert!(
        layer
            .events_at(Level::WARN)
            .iter()
            .any(|event| event.message() == Some("unknown interactive request"))
    );
    Ok(())
}
