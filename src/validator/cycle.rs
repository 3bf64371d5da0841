use crate::pipeline::Edge;
use ahash::{AHashMap, AHashSet};

/// Outgoing adjacency built from an edge list, used to answer "would this edge close a
/// cycle?" questions.
pub(crate) struct ReachabilityIndex<'a> {
    adjacency: AHashMap<&'a str, Vec<&'a str>>,
}

impl<'a> ReachabilityIndex<'a> {
    pub(crate) fn build(edges: &'a [Edge]) -> Self {
        let mut adjacency: AHashMap<&'a str, Vec<&'a str>> = AHashMap::new();
        for edge in edges {
            adjacency
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
        }
        Self { adjacency }
    }

    fn neighbours(&self, node: &str) -> &[&'a str] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` when adding `source -> target` would close a directed cycle.
    ///
    /// Walks depth-first from `target` along outgoing edges. `path` holds the nodes on the
    /// current directed path, seeded with `source`; meeting one of them again is a cycle.
    /// A node reached a second time through a different branch is not.
    ///
    /// Nodes whose whole subtree has been walked without meeting the path are remembered
    /// in `cleared` and not walked again. The existing edges are acyclic, so the only path
    /// member such a subtree could ever reach is `source` itself.
    pub(crate) fn closes_cycle<'b>(&'b self, source: &'b str, target: &'b str) -> bool {
        let mut path: AHashSet<&'b str> = AHashSet::new();
        path.insert(source);
        if !path.insert(target) {
            return true;
        }

        let mut cleared: AHashSet<&'b str> = AHashSet::new();
        let mut stack: Vec<(&'b str, usize)> = vec![(target, 0)];

        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;
            frame.1 += 1;

            match self.neighbours(node).get(cursor).copied() {
                Some(next) => {
                    if path.contains(next) {
                        return true;
                    }
                    if cleared.contains(next) {
                        continue;
                    }
                    path.insert(next);
                    stack.push((next, 0));
                }
                None => {
                    stack.pop();
                    path.remove(node);
                    cleared.insert(node);
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (s, t))| Edge::new((i + 1).to_string(), *s, *t))
            .collect()
    }

    #[test]
    fn detects_back_edge_over_long_chain() {
        let edges = edges(&[("a", "b"), ("b", "c"), ("c", "d")]);
        let index = ReachabilityIndex::build(&edges);
        assert!(index.closes_cycle("d", "a"));
        assert!(!index.closes_cycle("a", "d"));
    }

    #[test]
    fn diamond_is_not_a_cycle() {
        let edges = edges(&[("in", "a"), ("in", "b"), ("a", "c")]);
        let index = ReachabilityIndex::build(&edges);
        assert!(!index.closes_cycle("b", "c"));
    }

    #[test]
    fn cleared_subtrees_are_reused_without_hiding_cycles() {
        // Two branches share "shared"; only the second branch leads back to "x".
        let edges = edges(&[
            ("t", "p"),
            ("t", "q"),
            ("p", "shared"),
            ("q", "shared"),
            ("q", "x"),
        ]);
        let index = ReachabilityIndex::build(&edges);
        assert!(index.closes_cycle("x", "t"));
        assert!(!index.closes_cycle("shared", "x"));
    }

    #[test]
    fn unconnected_nodes_never_close_a_cycle() {
        let index = ReachabilityIndex::build(&[]);
        assert!(!index.closes_cycle("a", "b"));
    }
}
