//! Search-engine error type.

use thiserror::Error;

use nav_core::{NavError, NodeId};

/// Errors produced by `nav-search`.
///
/// An unreachable goal is not an error; see [`crate::PathResult::NotFound`].
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search configuration: {0}")]
    InvalidConfiguration(String),

    /// Popping an empty frontier.  Unreachable through `find_path`.
    #[error("pop from an empty priority queue")]
    EmptyQueue,

    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),

    /// A parallel lookahead task panicked.  The driver logs it and skips
    /// the neighbor; it never escapes `find_path`.
    #[error("lookahead from {node} failed: {reason}")]
    LookaheadTaskFailure { node: NodeId, reason: String },

    #[error("failed to start lookahead worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl From<NavError> for SearchError {
    fn from(err: NavError) -> Self {
        match err {
            NavError::NodeNotFound(node) => SearchError::NodeNotFound(node),
        }
    }
}

pub type SearchResult<T> = Result<T, SearchError>;
