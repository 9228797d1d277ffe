use std::sync::Arc;

use graphwalk_core::{
    CountField, GraphWalkError, GraphWalkErrorCode, InvalidInputCode, InvalidInputReason,
    InvalidStartCode, InvalidStartReason,
};
use rstest::rstest;

#[rstest]
#[case(InvalidInputReason::Unparsable { raw: Arc::from("abc") }, InvalidInputCode::Unparsable)]
#[case(InvalidInputReason::ExceedsLimit { got: 9, max: 5 }, InvalidInputCode::ExceedsLimit)]
#[case(
    InvalidInputReason::EdgesWithoutNodes { edges: 3 },
    InvalidInputCode::EdgesWithoutNodes,
)]
#[case(
    InvalidInputReason::EndpointOutOfRange { edge: 0, endpoint: 4, node_count: 2 },
    InvalidInputCode::EndpointOutOfRange,
)]
#[case(InvalidInputReason::SelfLoop { edge: 1, node: 0 }, InvalidInputCode::SelfLoop)]
fn input_reasons_map_to_codes(#[case] reason: InvalidInputReason, #[case] expected: InvalidInputCode) {
    assert_eq!(reason.code(), expected);
    let err = GraphWalkError::InvalidInput {
        field: CountField::Nodes,
        reason,
    };
    assert_eq!(err.code(), GraphWalkErrorCode::InvalidInput);
    assert_eq!(err.detail_code(), expected.as_str());
}

#[rstest]
#[case(InvalidStartReason::EmptyGraph, InvalidStartCode::EmptyGraph)]
#[case(InvalidStartReason::Unparsable { raw: Arc::from("x") }, InvalidStartCode::Unparsable)]
#[case(InvalidStartReason::Negative { start: -1 }, InvalidStartCode::Negative)]
#[case(
    InvalidStartReason::OutOfRange { start: 7, node_count: 3 },
    InvalidStartCode::OutOfRange,
)]
#[case(
    InvalidStartReason::Overflow { raw: Arc::from("99999999999999999999"), node_count: 3 },
    InvalidStartCode::Overflow,
)]
fn start_reasons_map_to_codes(#[case] reason: InvalidStartReason, #[case] expected: InvalidStartCode) {
    assert_eq!(reason.code(), expected);
    let err = GraphWalkError::InvalidStart { reason };
    assert_eq!(err.code(), GraphWalkErrorCode::InvalidStart);
    assert_eq!(err.code().to_string(), "GRAPHWALK_INVALID_START");
    assert_eq!(err.detail_code(), expected.as_str());
}

#[rstest]
#[case(
    GraphWalkError::InvalidInput {
        field: CountField::Nodes,
        reason: InvalidInputReason::Unparsable { raw: Arc::from("abc") },
    },
    "invalid nodes: `abc` is not a non-negative integer",
)]
#[case(
    GraphWalkError::InvalidStart {
        reason: InvalidStartReason::OutOfRange { start: 7, node_count: 3 },
    },
    "invalid start node: node index 7 is outside 0..3",
)]
#[case(
    GraphWalkError::InvalidStart {
        reason: InvalidStartReason::Overflow {
            raw: Arc::from("99999999999999999999"),
            node_count: 3,
        },
    },
    "invalid start node: node index `99999999999999999999` is outside 0..3",
)]
fn errors_render_user_facing_messages(#[case] err: GraphWalkError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}
