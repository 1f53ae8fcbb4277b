//! Search outcomes.

use nav_core::NodeId;

/// Counters collected over one `find_path` call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Frontier pops that closed a node.
    pub expanded: u64,
    /// Frontier pushes, including the start node.
    pub pushed: u64,
    /// Pops discarded because the node was already closed.
    pub stale_pops: u64,
    /// Root-level lookahead evaluations (one per improved neighbor).
    pub lookahead_calls: u64,
    /// Neighbors dropped because their lookahead task failed.
    pub skipped_neighbors: u64,
}

/// A path from start to goal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Nodes in travel order.  First is the start, last is the goal.
    pub nodes: Vec<NodeId>,
    /// Sum of edge weights along `nodes`.
    pub cost: f64,
    pub stats: SearchStats,
}

impl Route {
    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn goal(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Result of a search that ran to completion.
#[derive(Clone, Debug, PartialEq)]
pub enum PathResult {
    Found(Route),
    /// The frontier emptied before the goal was reached.
    NotFound { reason: String, stats: SearchStats },
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            PathResult::Found(route) => Some(route),
            PathResult::NotFound { .. } => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            PathResult::Found(route) => Some(route),
            PathResult::NotFound { .. } => None,
        }
    }

    /// Node sequence of a found route.
    pub fn nodes(&self) -> Option<&[NodeId]> {
        self.route().map(|r| r.nodes.as_slice())
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            PathResult::Found(route) => route.stats,
            PathResult::NotFound { stats, .. } => *stats,
        }
    }
}

/// Follow predecessor links from `goal` back to `start`, then reverse.
///
/// Returns `None` if the chain breaks before reaching `start`.
pub(crate) fn reconstruct(predecessor: &[NodeId], start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
    let mut nodes = vec![goal];
    let mut cur = goal;
    while cur != start {
        let prev = *predecessor.get(cur.index())?;
        if !prev.is_valid() {
            return None;
        }
        nodes.push(prev);
        cur = prev;
    }
    nodes.reverse();
    Some(nodes)
}
