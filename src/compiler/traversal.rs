use crate::pipeline::{Node, PipelineGraph};
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// Computes the order in which pipeline nodes are emitted.
pub(super) struct ExecutionPlanner<'a> {
    graph: &'a PipelineGraph,
    node_map: AHashMap<&'a str, &'a Node>,
    successors: AHashMap<&'a str, Vec<&'a str>>,
    in_degree: AHashMap<&'a str, usize>,
}

impl<'a> ExecutionPlanner<'a> {
    pub(super) fn new(graph: &'a PipelineGraph) -> Self {
        let node_map: AHashMap<&'a str, &'a Node> =
            graph.nodes().iter().map(|n| (n.id.as_str(), n)).collect();

        let mut successors: AHashMap<&'a str, Vec<&'a str>> = AHashMap::new();
        let mut in_degree: AHashMap<&'a str, usize> = AHashMap::new();
        for edge in graph.edges() {
            // Edges leaving an unknown node carry no information.
            if !node_map.contains_key(edge.source.as_str()) {
                continue;
            }
            successors
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
            *in_degree.entry(edge.target.as_str()).or_default() += 1;
        }

        Self {
            graph,
            node_map,
            successors,
            in_degree,
        }
    }

    /// Input nodes with no incoming edges, in node-list order.
    pub(super) fn roots(&self) -> Vec<&'a Node> {
        self.graph
            .nodes()
            .iter()
            .filter(|n| n.is_input() && !self.in_degree.contains_key(n.id.as_str()))
            .collect()
    }

    /// Breadth-first walk from the roots.
    ///
    /// A node is emitted the first time it is dequeued. Successors are enqueued as soon as
    /// a predecessor is emitted, whether or not their other predecessors have been, so the
    /// result is reachability order rather than a dependency-complete topological order.
    pub(super) fn execution_order(&self) -> Vec<&'a Node> {
        let mut queue: VecDeque<&'a Node> = self.roots().into();
        let mut visited: AHashSet<&'a str> = AHashSet::new();
        let mut order = Vec::new();

        while let Some(node) = queue.pop_front() {
            if !visited.insert(node.id.as_str()) {
                continue;
            }
            order.push(node);

            let Some(next) = self.successors.get(node.id.as_str()) else {
                continue;
            };
            for target in next {
                if visited.contains(target) {
                    continue;
                }
                if let Some(&successor) = self.node_map.get(target) {
                    queue.push_back(successor);
                }
            }
        }

        order
    }
}
