//! Search configuration.

use crate::{SearchError, SearchResult};

/// Lookahead depths above this run each neighbor's lookahead on the worker
/// pool; at or below it, evaluation stays on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: u32 = 7;

/// Worker threads in the per-search lookahead pool.
pub const DEFAULT_WORKER_THREADS: usize = 16;

/// Tunables for one [`LookaheadSearch`](crate::LookaheadSearch).
///
/// `lookahead_depth` and `heap_arity` are independent: the first sets how
/// many hops each candidate is scored over, the second only the shape of
/// the frontier heap.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Forward hops explored when scoring a neighbor.  0 = plain A* scoring.
    pub lookahead_depth: u32,
    /// Children per frontier heap node.  Must be ≥ 2.
    pub heap_arity: usize,
    /// Depths strictly above this use the worker pool.
    pub parallel_threshold: u32,
    /// Size of the worker pool.  Must be ≥ 1.
    pub worker_threads: usize,
}

impl SearchConfig {
    pub fn new(lookahead_depth: u32, heap_arity: usize) -> Self {
        Self {
            lookahead_depth,
            heap_arity,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            worker_threads:     DEFAULT_WORKER_THREADS,
        }
    }

    pub fn with_parallel_threshold(mut self, threshold: u32) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads;
        self
    }

    /// `true` if this configuration dispatches lookahead to a worker pool.
    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.lookahead_depth > self.parallel_threshold
    }

    pub fn validate(&self) -> SearchResult<()> {
        if self.heap_arity < 2 {
            return Err(SearchError::InvalidConfiguration(format!(
                "heap arity must be at least 2, got {}",
                self.heap_arity
            )));
        }
        if self.worker_threads == 0 {
            return Err(SearchError::InvalidConfiguration(
                "worker_threads must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(2, 4)
    }
}
