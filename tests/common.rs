//! Common test utilities for building pipeline graphs.
use nlpflow::prelude::*;

/// Builds a graph from `(id, kind)` nodes and `(source, target)` connections,
/// panicking if any connection is rejected.
#[allow(dead_code)]
pub fn build_graph(nodes: &[(&str, &str)], edges: &[(&str, &str)]) -> PipelineGraph {
    let mut graph = PipelineGraph::new();
    for (id, kind) in nodes {
        graph
            .add_node(Node::new(*id, *kind))
            .expect("fixture node ids must be unique");
    }
    for (source, target) in edges {
        graph
            .connect(source, target)
            .unwrap_or_else(|e| panic!("fixture edge {} -> {} rejected: {}", source, target, e));
    }
    graph
}

/// A single text input labelled "Hello world" with nothing attached.
#[allow(dead_code)]
pub fn create_single_input() -> PipelineGraph {
    let mut graph = PipelineGraph::new();
    graph
        .add_node(Node::new("input", "textInput").with_data(NodeData::with_label("Hello world")))
        .unwrap();
    graph
}

/// `input -> tokenization -> stopwordRemoval`
#[allow(dead_code)]
pub fn create_linear_chain() -> PipelineGraph {
    build_graph(
        &[
            ("input", "textInput"),
            ("tok", "tokenization"),
            ("stop", "stopwordRemoval"),
        ],
        &[("input", "tok"), ("tok", "stop")],
    )
}

/// `input -> a`, `input -> b`, `a -> c`, `b -> c`
#[allow(dead_code)]
pub fn create_diamond() -> PipelineGraph {
    build_graph(
        &[
            ("input", "textInput"),
            ("a", "tokenization"),
            ("b", "sentimentAnalysis"),
            ("c", "keywordExtraction"),
        ],
        &[("input", "a"), ("input", "b"), ("a", "c"), ("b", "c")],
    )
}

/// Editor export of a small pipeline, including transient UI fields.
#[allow(dead_code)]
pub const EDITOR_EXPORT_JSON: &str = r#"{
  "nodes": [
    {
      "id": "1",
      "type": "textInput",
      "position": { "x": 100, "y": 100 },
      "data": { "text": "Input Text", "label": "The quick brown fox jumps." },
      "selected": true,
      "width": 180,
      "height": 40
    },
    {
      "id": "5f0c",
      "type": "posTagging",
      "position": { "x": 320.5, "y": 80 },
      "data": { "text": "POS Tagging", "description": "tag every token" }
    },
    {
      "id": "9ab1",
      "type": "namedEntityRecognition",
      "position": { "x": 320, "y": 220 },
      "data": { "text": "Named Entity Recognition", "color": "orange" }
    }
  ],
  "edges": [
    { "id": "1", "source": "1", "target": "5f0c", "type": "customEdge", "animated": true },
    { "id": "2", "source": "1", "target": "9ab1", "type": "customEdge", "animated": true }
  ]
}"#;
