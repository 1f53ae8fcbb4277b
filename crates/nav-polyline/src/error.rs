//! Polyline error type.

use thiserror::Error;

use nav_core::{NavError, NodeId};

/// Errors produced by `nav-polyline`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolylineError {
    #[error("invalid polyline character {ch:?} at byte {index}")]
    InvalidCharacter { index: usize, ch: char },

    #[error("polyline ends in the middle of a value")]
    Truncated,

    #[error("polyline value at byte {index} overflows 64 bits")]
    Overflow { index: usize },

    #[error("polyline has a latitude without a matching longitude")]
    UnpairedCoordinate,

    #[error("precision {0} outside supported range 0..=10")]
    InvalidPrecision(u32),

    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),
}

impl From<NavError> for PolylineError {
    fn from(err: NavError) -> Self {
        match err {
            NavError::NodeNotFound(node) => PolylineError::NodeNotFound(node),
        }
    }
}

pub type PolylineResult<T> = Result<T, PolylineError>;
