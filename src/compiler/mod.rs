use crate::pipeline::PipelineGraph;
use ahash::AHashMap;
use itertools::Itertools;

mod script;
mod templates;
mod traversal;

pub use script::{CompiledScript, DEFAULT_SAMPLE_TEXT};
pub use templates::{ScriptTemplate, builtin_template};

use script::ScriptWriter;
use templates::{register_default_templates, template_by_name};
use traversal::ExecutionPlanner;

/// Turns pipeline graphs into runnable scripts.
///
/// A `Compiler` holds only its template table and defaults, so one instance can compile
/// any number of graphs.
pub struct Compiler {
    templates: AHashMap<String, ScriptTemplate>,
    default_sample_text: String,
}

pub struct CompilerBuilder {
    templates: AHashMap<String, ScriptTemplate>,
    default_sample_text: String,
}

impl Default for CompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilerBuilder {
    pub fn new() -> Self {
        let mut templates: AHashMap<String, ScriptTemplate> = AHashMap::new();
        register_default_templates(&mut templates);
        Self {
            templates,
            default_sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
        }
    }

    /// Makes nodes of kind `user_kind` compile like the built-in kind `builtin_kind`.
    /// Unknown built-in names are ignored.
    pub fn with_type_mapping(mut self, user_kind: &str, builtin_kind: &str) -> Self {
        if let Some(template) = template_by_name(builtin_kind) {
            self.templates.insert(user_kind.to_string(), template);
        }
        self
    }

    /// Registers or replaces the template for a kind.
    pub fn with_template(mut self, kind: &str, template: ScriptTemplate) -> Self {
        self.templates.insert(kind.to_string(), template);
        self
    }

    pub fn with_default_sample_text(mut self, text: impl Into<String>) -> Self {
        self.default_sample_text = text.into();
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            templates: self.templates,
            default_sample_text: self.default_sample_text,
        }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        CompilerBuilder::new().build()
    }
}

impl Compiler {
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    pub fn template(&self, kind: &str) -> Option<&ScriptTemplate> {
        self.templates.get(kind)
    }

    /// Compiles a graph snapshot into a script.
    ///
    /// Never fails: a graph without roots (including an empty one) yields the prologue and
    /// an empty results section.
    pub fn compile(&self, graph: &PipelineGraph) -> CompiledScript {
        tracing::info!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len(),
            "compiling pipeline"
        );

        // Phase 1: traversal
        let planner = ExecutionPlanner::new(graph);
        let order = planner.execution_order();
        if order.is_empty() {
            tracing::warn!("pipeline has no root text input, emitting an empty script");
        }

        let used_kinds: Vec<&str> = order.iter().map(|n| n.kind.as_str()).unique().collect();
        tracing::debug!(
            order = ?order.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
            kinds = ?used_kinds,
            "execution order resolved"
        );

        // Phase 2: sample text from the first input node
        let sample_text = order
            .iter()
            .find(|n| n.is_input())
            .and_then(|n| n.data.label.as_deref())
            .filter(|label| !label.is_empty())
            .unwrap_or(self.default_sample_text.as_str());

        // Phase 3: emission
        let mut writer = ScriptWriter::new(sample_text);
        for kind in &used_kinds {
            match self.templates.get(*kind) {
                Some(template) => writer.define(&template.definition),
                None => tracing::debug!(%kind, "no template registered, skipping kind"),
            }
        }
        for node in &order {
            if let Some(template) = self.templates.get(node.kind.as_str()) {
                writer.invoke(&template.invocation, &template.print);
            }
        }

        let text = writer.render();
        tracing::info!(
            visited = order.len(),
            bytes = text.len(),
            "pipeline compiled"
        );

        CompiledScript {
            text,
            execution_order: order.iter().map(|n| n.id.clone()).collect(),
            used_kinds: used_kinds.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Compiles a graph with the built-in templates.
pub fn compile_pipeline(graph: &PipelineGraph) -> CompiledScript {
    Compiler::default().compile(graph)
}
