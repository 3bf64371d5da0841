//! Unit tests for core nlpflow types.
mod common;
use nlpflow::prelude::*;

#[test]
fn test_operation_kind_display() {
    assert_eq!(format!("{}", OperationKind::PosTagging), "posTagging");
    assert_eq!(OperationKind::PosTagging.display_name(), "POS Tagging");
    assert_eq!(OperationKind::from_type_name(INPUT_KIND), Some(OperationKind::TextInput));
}

#[test]
fn test_node_kind_lookup() {
    assert_eq!(
        Node::new("n", "keywordExtraction").operation_kind(),
        Some(OperationKind::KeywordExtraction)
    );
    assert_eq!(Node::new("n", "somethingElse").operation_kind(), None);
    assert!(Node::new("n", "textInput").is_input());
}

#[test]
fn test_default_graph() {
    let graph = PipelineGraph::with_default_input();
    let node = graph.node("1").unwrap();
    assert_eq!(node.kind, INPUT_KIND);
    assert_eq!(node.position, Position::new(100.0, 100.0));
    assert_eq!(node.data.text.as_deref(), Some("Input Text"));
    assert!(graph.edges().is_empty());
}

#[test]
fn test_error_display() {
    let err = GraphError::Rejected {
        source_id: "node_A".to_string(),
        target_id: "node_B".to_string(),
        reason: EdgeRejection::Cycle,
    };
    let message = err.to_string();
    assert!(message.contains("node_A"));
    assert!(message.contains("node_B"));
    assert!(message.contains("cycle"));

    let exec_err = ExecutionError::Status {
        status: 503,
        message: "busy".to_string(),
    };
    assert!(exec_err.to_string().contains("503"));
    assert!(exec_err.to_string().contains("busy"));

    let export_err = ExportError::from(GraphError::NodeNotFound("ghost".to_string()));
    assert!(export_err.to_string().contains("ghost"));
}

#[test]
fn test_check_connection_is_usable_standalone() {
    let edges = vec![Edge::new("1", "a", "b"), Edge::new("2", "b", "c")];
    assert_eq!(check_connection(&edges, "c", "a"), Err(EdgeRejection::Cycle));
    assert_eq!(check_connection(&edges, "a", "c"), Ok(()));
}
