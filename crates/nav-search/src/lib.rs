//! `nav-search` — lookahead-augmented A* over a [`RoadNetwork`].
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`heap`]      | `KaryHeap` — branching-factor-k min-heap (the frontier)  |
//! | [`heuristic`] | `Heuristic` trait, `EuclideanHeuristic`, `HeuristicCache`|
//! | [`lookahead`] | `LookaheadEvaluator` — bounded multi-hop scoring         |
//! | [`search`]    | `LookaheadSearch` — the search driver                    |
//! | [`route`]     | `PathResult`, `Route`, `SearchStats`                     |
//! | [`config`]    | `SearchConfig`                                           |
//! | [`error`]     | `SearchError`, `SearchResult<T>`                         |
//!
//! # Scoring
//!
//! Each neighbor pushed onto the frontier is keyed by its accumulated edge
//! cost plus the best `cost + estimate` found within `lookahead_depth` hops
//! of it.  The combined key is not an admissible A* bound, so returned
//! routes are valid but not guaranteed shortest.
//!
//! # Parallelism
//!
//! When `lookahead_depth` exceeds `parallel_threshold`, the per-neighbor
//! lookahead calls of one expansion run on a rayon pool sized by
//! `worker_threads`.  The pool lives for a single `find_path` call.

pub mod config;
pub mod error;
pub mod heap;
pub mod heuristic;
pub mod lookahead;
pub mod route;
pub mod search;


pub use config::SearchConfig;
pub use error::{SearchError, SearchResult};
pub use heap::KaryHeap;
pub use heuristic::{EuclideanHeuristic, Heuristic, HeuristicCache};
pub use lookahead::{Lookahead, LookaheadEvaluator};
pub use route::{PathResult, Route, SearchStats};
pub use search::LookaheadSearch;

use nav_core::NodeId;
use nav_graph::RoadNetwork;

/// Search `network` from `start` to `goal` with the default Euclidean
/// heuristic and default parallel settings.
///
/// Fails only for an invalid configuration (`heap_arity < 2`) or an
/// endpoint outside the network.  An unreachable goal is
/// [`PathResult::NotFound`].
pub fn find_path(
    network:         &RoadNetwork,
    start:           NodeId,
    goal:            NodeId,
    lookahead_depth: u32,
    heap_arity:      usize,
) -> SearchResult<PathResult> {
    LookaheadSearch::new(SearchConfig::new(lookahead_depth, heap_arity))?
        .find_path(network, start, goal)
}
