//! Cost-to-goal estimates and their per-search memo.
//!
//! # Concurrency
//!
//! [`HeuristicCache`] is shared by reference between the search driver and
//! the lookahead workers.  It is backed by a `DashMap`, so reads and writes
//! are synchronized per shard, but a miss is not: two threads missing on the
//! same `(from, to)` key both compute the estimate and both insert it.  The
//! second insert overwrites the first with an identical value, because an
//! estimate is a pure function of its key.  The cost is duplicated work,
//! never a wrong answer.

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use nav_core::NodeId;
use nav_graph::RoadNetwork;

/// Pluggable cost-to-goal estimate.
///
/// Implementations must be pure: the same network and node pair must always
/// produce the same value, since results are memoized and may be computed
/// concurrently.  `Send + Sync` lets lookahead workers share one instance.
pub trait Heuristic: Send + Sync {
    fn estimate(&self, network: &RoadNetwork, from: NodeId, to: NodeId) -> f64;
}

/// Planar Euclidean distance between node coordinates.
///
/// Latitude and longitude are treated as Cartesian axes; no geodesic
/// correction is applied.
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanHeuristic;

impl Heuristic for EuclideanHeuristic {
    #[inline]
    fn estimate(&self, network: &RoadNetwork, from: NodeId, to: NodeId) -> f64 {
        network.position(from).planar_distance(network.position(to))
    }
}

/// Memoizes a [`Heuristic`] by `(from, to)` for the duration of one search.
pub struct HeuristicCache<'h, H: ?Sized> {
    heuristic: &'h H,
    memo:      DashMap<(NodeId, NodeId), f64, FxBuildHasher>,
}

impl<'h, H: Heuristic + ?Sized> HeuristicCache<'h, H> {
    pub fn new(heuristic: &'h H) -> Self {
        Self { heuristic, memo: DashMap::with_hasher(FxBuildHasher) }
    }

    /// Cached estimate from `from` to `to`; computed and stored on a miss.
    pub fn estimate(&self, network: &RoadNetwork, from: NodeId, to: NodeId) -> f64 {
        let key = (from, to);
        if let Some(hit) = self.memo.get(&key) {
            return *hit;
        }
        // Shard lock released above; the estimate runs unlocked.
        let value = self.heuristic.estimate(network, from, to);
        self.memo.insert(key, value);
        value
    }

    /// Number of distinct pairs memoized so far.
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }
}
