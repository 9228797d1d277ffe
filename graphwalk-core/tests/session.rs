//! Tests for the `GraphSession` controller.

use graphwalk_core::{
    CanvasBounds, CountField, GenerationLimits, GraphWalkError, InvalidInputReason,
    ScanStrategy, SessionBuilder, TraversalKind,
};
use graphwalk_test_support::tracing::RecordingLayer;
use rstest::{fixture, rstest};
use tracing_subscriber::layer::SubscriberExt;

#[fixture]
fn builder() -> SessionBuilder {
    SessionBuilder::new().with_seed(2024)
}

#[rstest]
fn builder_defaults() {
    let builder = SessionBuilder::new();
    assert_eq!(builder.seed(), None);
    assert_eq!(builder.bounds(), CanvasBounds::default());
    assert_eq!(builder.limits(), GenerationLimits::default());
    assert_eq!(builder.scan_strategy(), ScanStrategy::EdgeList);

    let session = builder.build();
    assert_eq!(session.seed(), None);
    assert!(session.graph().is_empty());
}

#[rstest]
fn generate_five_by_three_is_reproducible(builder: SessionBuilder) {
    let mut first = builder.clone().build();
    let mut second = builder.build();
    let a = first.generate_from_text("5", "3").expect("generation succeeds").clone();
    let b = second.generate_from_text("5", "3").expect("generation succeeds").clone();
    assert_eq!(a, b);
    assert_eq!(a.node_count(), 5);
    assert_eq!(a.edge_count() + a.discarded_draws(), 3);
}

#[rstest]
fn positions_respect_custom_bounds(builder: SessionBuilder) {
    let bounds = CanvasBounds::from_canvas(200, 120, 10).expect("area remains");
    let mut session = builder.with_bounds(bounds).build();
    let graph = session.generate(50, 0).expect("generation succeeds");
    assert!(graph.nodes().iter().all(|&position| bounds.contains(position)));
}

#[rstest]
#[case::letters_in_nodes("abc", "3", CountField::Nodes)]
#[case::letters_in_edges("3", "abc", CountField::Edges)]
#[case::negative_nodes("-4", "3", CountField::Nodes)]
#[case::both_invalid_reports_nodes("x", "y", CountField::Nodes)]
fn unparsable_counts_leave_graph_unchanged(
    builder: SessionBuilder,
    #[case] nodes: &str,
    #[case] edges: &str,
    #[case] field: CountField,
) {
    let mut session = builder.build();
    session.generate(6, 9).expect("generation succeeds");
    session
        .traverse(0, TraversalKind::DepthFirst)
        .expect("traversal succeeds");
    let graph_before = session.graph().clone();
    let visit_before = session.visit().cloned();

    let err = session
        .generate_from_text(nodes, edges)
        .expect_err("invalid text must be rejected");
    assert!(matches!(
        err,
        GraphWalkError::InvalidInput {
            field: rejected,
            reason: InvalidInputReason::Unparsable { .. },
        } if rejected == field
    ));
    assert_eq!(session.graph(), &graph_before);
    assert_eq!(session.visit().cloned(), visit_before);
}

#[rstest]
fn limits_are_enforced(builder: SessionBuilder) {
    let mut session = builder
        .with_limits(GenerationLimits {
            max_nodes: 10,
            max_edges: 20,
        })
        .build();
    let err = session.generate(11, 0).expect_err("node limit applies");
    assert_eq!(err.detail_code(), "INVALID_INPUT_EXCEEDS_LIMIT");
    let err = session.generate(10, 21).expect_err("edge limit applies");
    assert!(matches!(
        err,
        GraphWalkError::InvalidInput {
            field: CountField::Edges,
            ..
        }
    ));
    assert!(session.generate(10, 20).is_ok());
}

#[rstest]
fn strategies_give_identical_sessions(builder: SessionBuilder) {
    let mut scanned = builder.clone().build();
    let mut indexed = builder.with_scan_strategy(ScanStrategy::Adjacency).build();
    scanned.generate(30, 60).expect("generation succeeds");
    indexed.generate(30, 60).expect("generation succeeds");

    for kind in [TraversalKind::DepthFirst, TraversalKind::BreadthFirst] {
        let a = scanned.traverse(7, kind).expect("traversal succeeds").order().to_vec();
        let b = indexed.traverse(7, kind).expect("traversal succeeds").order().to_vec();
        assert_eq!(a, b);
    }
}

#[rstest]
fn session_spans_are_recorded(builder: SessionBuilder) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let mut session = builder.build();

    tracing::subscriber::with_default(subscriber, || {
        session.generate_from_text("8", "12").expect("generation succeeds");
        session
            .traverse_from_text("3", TraversalKind::DepthFirst)
            .expect("traversal succeeds");
    });

    let generate = layer
        .span_named("session.generate")
        .expect("session.generate span must exist");
    assert_eq!(generate.field("node_count"), Some("8".to_owned()));
    assert_eq!(generate.field("edge_count"), Some("12".to_owned()));

    let core = layer
        .span_named("core.generate")
        .expect("core.generate span must exist");
    assert!(core.field("realized_edges").is_some());

    let traverse = layer
        .span_named("session.traverse_text")
        .expect("session.traverse_text span must exist");
    assert_eq!(traverse.field("raw"), Some("3".to_owned()));
    assert_eq!(traverse.field("start"), Some("3".to_owned()));
}
