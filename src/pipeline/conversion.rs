use super::definition::PipelineGraph;
use super::export::PipelineDocument;
use crate::error::{ConversionError, ExportError};

/// A trait for custom data models that can be converted into a `PipelineDocument`.
///
/// This is the extension point for feeding graphs from other editors or storage formats
/// into the compiler. The resulting document still goes through full validation when it
/// is turned into a [`PipelineGraph`].
///
/// # Example
///
/// ```rust,no_run
/// use nlpflow::prelude::*;
/// use nlpflow::error::ConversionError;
///
/// // A linear list of steps, e.g. read from a config file.
/// struct StepList { steps: Vec<String> }
///
/// impl IntoPipeline for StepList {
///     fn into_pipeline(self) -> std::result::Result<PipelineDocument, ConversionError> {
///         let mut document = PipelineDocument::default();
///         document.nodes.push(Node::new("input", "textInput"));
///         let mut previous = "input".to_string();
///         for (i, step) in self.steps.into_iter().enumerate() {
///             let id = format!("step-{}", i);
///             document.nodes.push(Node::new(id.clone(), step));
///             document.edges.push(Edge::new(format!("{}", i + 1), previous, id.clone()));
///             previous = id;
///         }
///         Ok(document)
///     }
/// }
/// ```
pub trait IntoPipeline {
    /// Consumes the object and converts it into the pipeline exchange format.
    fn into_pipeline(self) -> Result<PipelineDocument, ConversionError>;

    /// Converts and validates in one step.
    fn into_graph(self) -> Result<PipelineGraph, ExportError>
    where
        Self: Sized,
    {
        let document = self.into_pipeline()?;
        Ok(PipelineGraph::from_document(document)?)
    }
}

impl IntoPipeline for PipelineDocument {
    fn into_pipeline(self) -> Result<PipelineDocument, ConversionError> {
        Ok(self)
    }
}
