use super::kind::{INPUT_KIND, OperationKind};
use crate::error::GraphError;
use crate::validator;
use serde::{Deserialize, Serialize};

/// Layout position of a node on the canvas. Never consulted by the compiler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Free-form payload attached to a node.
///
/// `label`, `text` and `description` are the fields the editor writes. They are only
/// picked out when they hold strings; anything else, including a non-string `label`, is
/// kept in `extra` and written back out untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Map<String, serde_json::Value>")]
pub struct NodeData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl From<serde_json::Map<String, serde_json::Value>> for NodeData {
    fn from(mut extra: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut take_string = |key: &str| {
            if !extra.get(key).is_some_and(serde_json::Value::is_string) {
                return None;
            }
            match extra.remove(key) {
                Some(serde_json::Value::String(s)) => Some(s),
                _ => None,
            }
        };
        let label = take_string("label");
        let text = take_string("text");
        let description = take_string("description");
        Self {
            label,
            text,
            description,
            extra,
        }
    }
}

impl NodeData {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Sets a single field by name, as the node settings panel does.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        if matches!(field, "label" | "text" | "description") {
            self.extra.remove(field);
        }
        match field {
            "label" => self.label = Some(value),
            "text" => self.text = Some(value),
            "description" => self.description = Some(value),
            other => {
                self.extra
                    .insert(other.to_string(), serde_json::Value::String(value));
            }
        }
    }
}

/// A typed unit of the pipeline graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    /// Operation kind identifier, e.g. `"tokenization"`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: NodeData,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            position: Position::default(),
            data: NodeData::default(),
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_data(mut self, data: NodeData) -> Self {
        self.data = data;
        self
    }

    /// The typed kind, or `None` when the identifier is not one the editor knows.
    pub fn operation_kind(&self) -> Option<OperationKind> {
        OperationKind::from_type_name(&self.kind)
    }

    pub fn is_input(&self) -> bool {
        self.kind == INPUT_KIND
    }
}

/// A directed dependency from a producing node to a consuming node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The node and edge sets of a pipeline at a point in time.
///
/// Every mutation goes through a method that upholds the graph invariants: node ids are
/// unique, and the edge set never holds a self-loop, a duplicate (source, target) pair or a
/// directed cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl PipelineGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The graph a fresh editor session starts with: a single text input node.
    pub fn with_default_input() -> Self {
        let mut graph = Self::new();
        graph.nodes.push(
            Node::new("1", INPUT_KIND)
                .at(Position::new(100.0, 100.0))
                .with_data(NodeData::with_text("Input Text")),
        );
        graph
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == source && e.target == target)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a node, refusing ids that are already taken.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.contains_node(&node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        tracing::debug!(node_id = %node.id, kind = %node.kind, "node added");
        self.nodes.push(node);
        Ok(())
    }

    /// Adds a fresh node of the given kind under a random id and returns that id.
    ///
    /// The node's text is set to the kind's display name, matching what the task palette
    /// creates.
    pub fn add_operation(&mut self, kind: OperationKind, position: Position) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let node = Node::new(id.clone(), kind.as_str())
            .at(position)
            .with_data(NodeData::with_text(kind.display_name()));
        tracing::debug!(node_id = %id, kind = %kind, "operation node added");
        self.nodes.push(node);
        id
    }

    /// Removes a node together with every edge touching it.
    pub fn remove_node(&mut self, id: &str) -> Option<Node> {
        let index = self.nodes.iter().position(|n| n.id == id)?;
        let node = self.nodes.remove(index);
        let before = self.edges.len();
        self.edges.retain(|e| e.source != id && e.target != id);
        tracing::debug!(
            node_id = %id,
            removed_edges = before - self.edges.len(),
            "node removed"
        );
        Some(node)
    }

    pub fn remove_edge(&mut self, id: &str) -> Option<Edge> {
        let index = self.edges.iter().position(|e| e.id == id)?;
        Some(self.edges.remove(index))
    }

    /// Updates one data field of a node.
    pub fn update_node_data(
        &mut self,
        id: &str,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), GraphError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
        node.data.set_field(field, value);
        Ok(())
    }

    /// Proposes a connection from `source` to `target`.
    ///
    /// On success the edge is appended and its id returned. On failure nothing changes and
    /// the error carries the reason, classified for display.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<String, GraphError> {
        for endpoint in [source, target] {
            if !self.contains_node(endpoint) {
                tracing::debug!(node_id = %endpoint, "connection endpoint missing, ignored");
                return Err(GraphError::NodeNotFound(endpoint.to_string()));
            }
        }

        if let Err(reason) = validator::check_connection(&self.edges, source, target) {
            tracing::warn!(%source, %target, %reason, "connection rejected");
            return Err(GraphError::Rejected {
                source_id: source.to_string(),
                target_id: target.to_string(),
                reason,
            });
        }

        let id = self.next_edge_id();
        tracing::debug!(edge_id = %id, %source, %target, "connection accepted");
        self.edges.push(Edge::new(id.clone(), source, target));
        Ok(id)
    }

    /// First free decimal id, counting up from `edges.len() + 1`.
    fn next_edge_id(&self) -> String {
        (self.edges.len() + 1..)
            .map(|n| n.to_string())
            .find(|candidate| self.edges.iter().all(|e| &e.id != candidate))
            .unwrap_or_default()
    }

    /// Pushes an edge that has already been validated, keeping its id.
    pub(crate) fn push_validated_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_ids_skip_ids_still_in_use() {
        let mut graph = PipelineGraph::new();
        for id in ["a", "b", "c"] {
            graph.add_node(Node::new(id, "tokenization")).unwrap();
        }
        assert_eq!(graph.connect("a", "b").unwrap(), "1");
        assert_eq!(graph.connect("b", "c").unwrap(), "2");
        graph.remove_edge("1");
        // len is 1 again, but "2" is taken
        assert_eq!(graph.connect("a", "c").unwrap(), "3");
    }

    #[test]
    fn non_string_editor_fields_stay_in_extra() {
        let data: NodeData =
            serde_json::from_str(r#"{"label": 42, "text": "Input Text", "description": null}"#)
                .unwrap();
        assert_eq!(data.label, None);
        assert_eq!(data.text.as_deref(), Some("Input Text"));
        assert_eq!(data.extra.get("label"), Some(&serde_json::json!(42)));
        assert_eq!(data.extra.get("description"), Some(&serde_json::Value::Null));

        let written = serde_json::to_value(&data).unwrap();
        assert_eq!(written, serde_json::json!({"label": 42, "text": "Input Text", "description": null}));
    }

    #[test]
    fn set_field_replaces_a_non_string_value() {
        let mut data: NodeData = serde_json::from_str(r#"{"label": [1, 2]}"#).unwrap();
        data.set_field("label", "Hello");
        assert_eq!(data.label.as_deref(), Some("Hello"));
        assert!(data.extra.is_empty());
    }

    #[test]
    fn set_field_routes_unknown_fields_to_extra() {
        let mut data = NodeData::default();
        data.set_field("label", "Hello");
        data.set_field("model", "en_core_web_sm");
        assert_eq!(data.label.as_deref(), Some("Hello"));
        assert_eq!(
            data.extra.get("model"),
            Some(&serde_json::Value::String("en_core_web_sm".to_string()))
        );
    }
}
