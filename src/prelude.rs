//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the nlpflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use nlpflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph = PipelineGraph::from_file("path/to/nlp_pipeline.json")?;
//! let script = Compiler::default().compile(&graph);
//! std::fs::write("nlp_pipeline.py", script.as_str())?;
//! # Ok(())
//! # }
//! ```

// Graph model and editing
pub use crate::pipeline::{
    Edge, INPUT_KIND, IntoPipeline, Node, NodeData, OperationKind, PipelineDocument,
    PipelineGraph, Position,
};
pub use crate::validator::{Notice, Severity, check_connection};

// Compilation
pub use crate::compiler::{
    CompiledScript, Compiler, CompilerBuilder, ScriptTemplate, compile_pipeline,
};

// Execution
pub use crate::executor::{CodeExecutor, ExecutionOutput, HttpExecutor};

// Configuration
pub use crate::config::NlpflowConfig;

// Error types
pub use crate::error::{
    ConfigError, ConversionError, EdgeRejection, ExecutionError, ExportError, GraphError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
