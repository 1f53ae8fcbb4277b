//! Bounded multi-hop lookahead scoring.
//!
//! From a candidate node the evaluator walks up to `steps` hops forward and
//! returns the cheapest `cumulative edge cost + estimate(reached, goal)` it
//! finds.  Each branch carries its own visited set (the parent's set plus
//! the current node), so cycle avoidance is local to one lookahead window
//! and sibling branches never see each other's nodes.
//!
//! Recursion depth is bounded by `steps`; fan-out by node degree.

use rustc_hash::FxHashSet;

use nav_core::NodeId;
use nav_graph::RoadNetwork;

use crate::{Heuristic, HeuristicCache};

/// Best endpoint found by a lookahead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lookahead {
    /// Edge cost from the lookahead root to `node` plus `node`'s estimate.
    pub cost: f64,
    /// Node the winning branch stopped at.
    pub node: NodeId,
}

/// Scores candidates against a fixed goal.
///
/// Holds only shared references, so one evaluator serves every worker of a
/// search.
pub struct LookaheadEvaluator<'a, H: ?Sized> {
    network: &'a RoadNetwork,
    goal:    NodeId,
    cache:   &'a HeuristicCache<'a, H>,
}

impl<'a, H: Heuristic + ?Sized> LookaheadEvaluator<'a, H> {
    pub fn new(network: &'a RoadNetwork, goal: NodeId, cache: &'a HeuristicCache<'a, H>) -> Self {
        Self { network, goal, cache }
    }

    pub fn goal(&self) -> NodeId {
        self.goal
    }

    /// Score `node` with a budget of `steps` hops.
    ///
    /// `steps == 0` is a single heuristic lookup with no recursion.
    pub fn evaluate(&self, node: NodeId, steps: u32) -> Lookahead {
        self.descend(node, steps, &FxHashSet::default(), 0.0)
    }

    fn descend(
        &self,
        node:       NodeId,
        steps:      u32,
        visited:    &FxHashSet<NodeId>,
        cumulative: f64,
    ) -> Lookahead {
        if steps == 0 || node == self.goal {
            return self.settle(node, cumulative);
        }

        let mut branch = visited.clone();
        branch.insert(node);

        let mut best: Option<Lookahead> = None;
        for (_, next, weight) in self.network.neighbors(node) {
            if branch.contains(&next) {
                continue;
            }
            let candidate = self.descend(next, steps - 1, &branch, cumulative + weight);
            if candidate.node == self.goal {
                return candidate;
            }
            if best.is_none_or(|b| candidate.cost < b.cost) {
                best = Some(candidate);
            }
        }

        // Dead end inside the window: score where we stand.
        best.unwrap_or_else(|| self.settle(node, cumulative))
    }

    #[inline]
    fn settle(&self, node: NodeId, cumulative: f64) -> Lookahead {
        Lookahead {
            cost: cumulative + self.cache.estimate(self.network, node, self.goal),
            node,
        }
    }
}
