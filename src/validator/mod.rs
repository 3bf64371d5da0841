//! Connection validation for pipeline graphs.
//!
//! Every proposed edge is checked before it is stored, so a [`PipelineGraph`] can never
//! hold a self-loop, a duplicate connection or a directed cycle.
//!
//! [`PipelineGraph`]: crate::pipeline::PipelineGraph

use crate::error::EdgeRejection;
use crate::pipeline::Edge;

mod cycle;

use cycle::ReachabilityIndex;

/// Decides whether `source -> target` may be added to `edges`.
///
/// Checks run in a fixed order: self-loop, duplicate, cycle. The first failing check
/// determines the reported reason.
pub fn check_connection(edges: &[Edge], source: &str, target: &str) -> Result<(), EdgeRejection> {
    if source == target {
        return Err(EdgeRejection::SelfLoop);
    }

    if edges
        .iter()
        .any(|e| e.source == source && e.target == target)
    {
        return Err(EdgeRejection::Duplicate);
    }

    if ReachabilityIndex::build(edges).closes_cycle(source, target) {
        return Err(EdgeRejection::Cycle);
    }

    Ok(())
}

/// How prominently a rejection notice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A user-facing message describing a rejected connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
}

impl EdgeRejection {
    pub fn notice(self) -> Notice {
        match self {
            EdgeRejection::SelfLoop => Notice {
                title: "Invalid Connection",
                description: "A node cannot connect to itself.",
                severity: Severity::Error,
            },
            EdgeRejection::Duplicate => Notice {
                title: "Duplicate Connection",
                description: "This connection already exists.",
                severity: Severity::Warning,
            },
            EdgeRejection::Cycle => Notice {
                title: "Invalid Connection",
                description: "This connection would create a cycle.",
                severity: Severity::Error,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loop_wins_over_other_checks() {
        let edges = vec![Edge::new("1", "a", "a")];
        assert_eq!(
            check_connection(&edges, "a", "a"),
            Err(EdgeRejection::SelfLoop)
        );
    }

    #[test]
    fn duplicate_is_reported_before_cycle() {
        let edges = vec![Edge::new("1", "a", "b")];
        assert_eq!(
            check_connection(&edges, "a", "b"),
            Err(EdgeRejection::Duplicate)
        );
        assert_eq!(check_connection(&edges, "b", "a"), Err(EdgeRejection::Cycle));
    }

    #[test]
    fn notices_are_distinct_per_reason() {
        let notices = [
            EdgeRejection::SelfLoop.notice(),
            EdgeRejection::Duplicate.notice(),
            EdgeRejection::Cycle.notice(),
        ];
        assert_ne!(notices[0], notices[1]);
        assert_ne!(notices[1], notices[2]);
        assert_ne!(notices[0], notices[2]);
        assert_eq!(notices[1].severity, Severity::Warning);
    }
}
