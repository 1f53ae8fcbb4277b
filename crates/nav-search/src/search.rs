//! The search driver.
//!
//! # Loop
//!
//! ```text
//! push (0, start); cost[start] = 0
//! while frontier not empty:
//!   pop (_, u); skip if u closed; close u
//!   u == goal → reconstruct and return
//!   for each (u → v, w) with v open:
//!     c = cost[u] + w
//!     if c < cost[v]: cost[v] = c; pred[v] = u; candidates += (v, c)
//!   score candidates with lookahead (sequential, or fanned out to workers)
//!   push (c + lookahead(v).cost, v) for each candidate that scored
//! frontier empty → NotFound
//! ```
//!
//! Only this loop mutates search state.  Workers receive shared references
//! to the network and heuristic cache and return plain values.

use std::cmp::Ordering;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, trace, warn};

use nav_core::NodeId;
use nav_graph::RoadNetwork;

use crate::route::reconstruct;
use crate::{
    EuclideanHeuristic, Heuristic, HeuristicCache, KaryHeap, Lookahead, LookaheadEvaluator,
    PathResult, Route, SearchConfig, SearchError, SearchResult, SearchStats,
};

// ── Frontier entry ────────────────────────────────────────────────────────────

/// `(estimated total cost, node)`, ordered by cost then node id.
#[derive(Copy, Clone, Debug)]
struct FrontierEntry {
    cost: f64,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Secondary key NodeId keeps tie-breaking deterministic.
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

// ── LookaheadSearch ───────────────────────────────────────────────────────────

/// Lookahead-augmented A* with a k-ary frontier.
///
/// A `LookaheadSearch` is immutable and reusable; every call to
/// [`find_path`](Self::find_path) builds fresh frontier, cost, predecessor,
/// closed-set, and heuristic-cache state and drops it on return.
///
/// # Example
///
/// ```
/// use nav_core::GeoPoint;
/// use nav_graph::RoadNetworkBuilder;
/// use nav_search::{LookaheadSearch, SearchConfig};
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_node(GeoPoint::new(0.0, 0.0));
/// let c = b.add_node(GeoPoint::new(0.0, 1.0));
/// b.add_road(a, c, Some(1.0));
/// let net = b.build();
///
/// let search = LookaheadSearch::new(SearchConfig::new(2, 4)).unwrap();
/// let result = search.find_path(&net, a, c).unwrap();
/// assert_eq!(result.nodes(), Some(&[a, c][..]));
/// ```
pub struct LookaheadSearch<H = EuclideanHeuristic> {
    config:    SearchConfig,
    heuristic: H,
}

impl LookaheadSearch<EuclideanHeuristic> {
    /// Validate `config` and pair it with the planar Euclidean heuristic.
    pub fn new(config: SearchConfig) -> SearchResult<Self> {
        Self::with_heuristic(config, EuclideanHeuristic)
    }
}

impl<H: Heuristic> LookaheadSearch<H> {
    pub fn with_heuristic(config: SearchConfig, heuristic: H) -> SearchResult<Self> {
        config.validate()?;
        Ok(Self { config, heuristic })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search from `start` to `goal`.
    ///
    /// Errors only if either endpoint is missing from `network` (or the
    /// worker pool cannot start).  An unreachable goal yields
    /// [`PathResult::NotFound`].  A found route always begins at `start`
    /// and ends at `goal`.
    pub fn find_path(
        &self,
        network: &RoadNetwork,
        start:   NodeId,
        goal:    NodeId,
    ) -> SearchResult<PathResult> {
        network.check_node(start)?;
        network.check_node(goal)?;

        let depth = self.config.lookahead_depth;
        // Dropped on every return path below, which shuts its workers down.
        let pool = if self.config.is_parallel() {
            Some(self.build_pool()?)
        } else {
            None
        };

        debug!(
            %start, %goal, depth,
            arity = self.config.heap_arity,
            parallel = pool.is_some(),
            "starting lookahead search"
        );

        let cache     = HeuristicCache::new(&self.heuristic);
        let evaluator = LookaheadEvaluator::new(network, goal, &cache);

        let n = network.node_count();
        let mut cost_so_far = vec![f64::INFINITY; n];
        let mut predecessor = vec![NodeId::INVALID; n];
        let mut closed      = vec![false; n];
        let mut frontier    = KaryHeap::new(self.config.heap_arity)?;
        let mut stats       = SearchStats::default();

        cost_so_far[start.index()] = 0.0;
        frontier.push(FrontierEntry { cost: 0.0, node: start });
        stats.pushed += 1;

        let mut candidates: Vec<(NodeId, f64)> = Vec::new();

        while !frontier.is_empty() {
            let FrontierEntry { cost: estimate, node: current } = frontier.pop()?;

            if closed[current.index()] {
                stats.stale_pops += 1;
                continue;
            }
            closed[current.index()] = true;
            stats.expanded += 1;
            trace!(node = %current, estimate, "expanding");

            if current == goal {
                let cost = cost_so_far[goal.index()];
                return Ok(match reconstruct(&predecessor, start, goal) {
                    Some(nodes) => {
                        debug!(hops = nodes.len() - 1, cost, ?stats, "route found");
                        PathResult::Found(Route { nodes, cost, stats })
                    }
                    None => PathResult::NotFound {
                        reason: format!("predecessor chain from {goal} does not reach {start}"),
                        stats,
                    },
                });
            }

            candidates.clear();
            let base = cost_so_far[current.index()];
            for (_, next, weight) in network.neighbors(current) {
                if closed[next.index()] {
                    continue;
                }
                let new_cost = base + weight;
                if new_cost < cost_so_far[next.index()] {
                    cost_so_far[next.index()] = new_cost;
                    predecessor[next.index()] = current;
                    candidates.push((next, new_cost));
                }
            }

            let scored = match &pool {
                Some(pool) => score_parallel(pool, &evaluator, &candidates, depth),
                None => candidates
                    .iter()
                    .map(|&(next, new_cost)| (next, new_cost, Ok(evaluator.evaluate(next, depth))))
                    .collect(),
            };

            for (next, new_cost, outcome) in scored {
                stats.lookahead_calls += 1;
                match outcome {
                    Ok(lookahead) => {
                        frontier.push(FrontierEntry { cost: new_cost + lookahead.cost, node: next });
                        stats.pushed += 1;
                    }
                    Err(err) => {
                        // Skipped for this search: `next` keeps the cost and
                        // predecessor recorded above, so costlier routes to it
                        // are not retried.
                        warn!(%err, node = %next, "lookahead task failed; skipping neighbor");
                        stats.skipped_neighbors += 1;
                    }
                }
            }
        }

        debug!(?stats, "frontier exhausted");
        Ok(PathResult::NotFound {
            reason: format!("no path from {start} to {goal}: frontier exhausted"),
            stats,
        })
    }

    fn build_pool(&self) -> SearchResult<ThreadPool> {
        Ok(ThreadPoolBuilder::new()
            .num_threads(self.config.worker_threads)
            .thread_name(|i| format!("nav-lookahead-{i}"))
            .build()?)
    }
}

// ── Parallel scoring ──────────────────────────────────────────────────────────

type Scored = (NodeId, f64, SearchResult<Lookahead>);

/// Evaluate every candidate's lookahead on `pool` and wait for all of them.
///
/// A panicking evaluation is caught in its own task and returned as
/// [`SearchError::LookaheadTaskFailure`]; the other candidates still score.
/// Output order matches `candidates`.
fn score_parallel<H: Heuristic>(
    pool:       &ThreadPool,
    evaluator:  &LookaheadEvaluator<'_, H>,
    candidates: &[(NodeId, f64)],
    depth:      u32,
) -> Vec<Scored> {
    pool.install(|| {
        candidates
            .par_iter()
            .map(|&(next, new_cost)| {
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| evaluator.evaluate(next, depth)))
                    .map_err(|payload| SearchError::LookaheadTaskFailure {
                        node:   next,
                        reason: panic_message(payload.as_ref()),
                    });
                (next, new_cost, outcome)
            })
            .collect()
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "lookahead task panicked".to_string()
    }
}
