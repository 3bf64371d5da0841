//! # nlpflow - NLP Pipeline Graph Compiler
//!
//! **nlpflow** is the core of a visual editor for natural-language-processing pipelines.
//! A pipeline is a directed acyclic graph of typed nodes (a text input, tokenization,
//! sentiment analysis, ...). nlpflow keeps that graph valid while it is edited and
//! compiles it into a runnable Python script.
//!
//! ## Core Workflow
//!
//! 1.  **Build or load a graph**: Create a `PipelineGraph`, or load one from the editor's
//!     JSON export with `PipelineGraph::from_json`. Custom formats can implement
//!     `IntoPipeline`.
//! 2.  **Edit it**: `connect` proposes an edge. Self-loops, duplicates and cycle-forming
//!     edges are rejected with a classified `EdgeRejection`, and the graph is left untouched.
//! 3.  **Compile**: `Compiler::compile` walks the graph breadth-first from its text input
//!     and emits one function definition per operation kind used and one invocation and
//!     print statement per visited node.
//! 4.  **Run** (optional): hand the script to a `CodeExecutor` such as `HttpExecutor`.
//!
//! ## Quick Start
//!
//! ```rust
//! use nlpflow::prelude::*;
//!
//! let mut graph = PipelineGraph::new();
//! graph.add_node(Node::new("in", "textInput").with_data(NodeData::with_label("Hello world")))?;
//! graph.add_node(Node::new("tok", "tokenization"))?;
//! graph.add_node(Node::new("stop", "stopwordRemoval"))?;
//!
//! graph.connect("in", "tok")?;
//! graph.connect("tok", "stop")?;
//!
//! // Closing the loop is refused and the graph is unchanged.
//! let err = graph.connect("stop", "in").unwrap_err();
//! assert_eq!(err.rejection(), Some(EdgeRejection::Cycle));
//!
//! let script = Compiler::default().compile(&graph);
//! assert_eq!(script.execution_order, vec!["in", "tok", "stop"]);
//! assert!(script.text.contains("text = \"Hello world\""));
//! assert!(script.text.contains("tokens = tokenization(doc)"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compiler;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod pipeline;
pub mod prelude;
pub mod validator;
