use super::definition::{Edge, Node, PipelineGraph};
use crate::error::{ExportError, GraphError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The graph exchange format: two top-level arrays, `nodes` and `edges`.
///
/// Deserializing tolerates the editor's transient fields (`selected`, `animated`, edge
/// `type`, handle styling); they are dropped and never written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineDocument {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl PipelineDocument {
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        serde_json::from_str(json).map_err(|e| ExportError::JsonParseError(e.to_string()))
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(|e| ExportError::SerializeError(e.to_string()))
    }
}

impl From<&PipelineGraph> for PipelineDocument {
    fn from(graph: &PipelineGraph) -> Self {
        Self {
            nodes: graph.nodes().to_vec(),
            edges: graph.edges().to_vec(),
        }
    }
}

impl PipelineGraph {
    /// Rebuilds a graph from a document, replaying every node and edge through the
    /// same checks interactive edits go through. The first violation aborts the load.
    pub fn from_document(document: PipelineDocument) -> Result<Self, GraphError> {
        let mut graph = PipelineGraph::new();
        for node in document.nodes {
            graph.add_node(node)?;
        }
        for edge in document.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !graph.contains_node(endpoint) {
                    return Err(GraphError::NodeNotFound(endpoint.clone()));
                }
            }
            crate::validator::check_connection(graph.edges(), &edge.source, &edge.target)
                .map_err(|reason| GraphError::Rejected {
                    source_id: edge.source.clone(),
                    target_id: edge.target.clone(),
                    reason,
                })?;
            graph.push_validated_edge(edge);
        }
        tracing::debug!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len(),
            "pipeline graph loaded"
        );
        Ok(graph)
    }

    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let document = PipelineDocument::from_json(json)?;
        Ok(Self::from_document(document)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ExportError::Io(format!("Could not read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn to_document(&self) -> PipelineDocument {
        PipelineDocument::from(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        self.to_document().to_json_pretty()
    }

    /// Writes the export JSON to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json)
            .map_err(|e| ExportError::Io(format!("Could not write '{}': {}", path.display(), e)))
    }
}
