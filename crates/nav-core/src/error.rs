//! Shared error type.
//!
//! Sub-crates define their own error enums and convert `NavError` into them
//! via `From` where a core failure can surface through their API.

use thiserror::Error;

use crate::NodeId;

/// The base error type for `nav-core` and a common variant for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NavError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),
}

/// Shorthand result type for `nav-core`.
pub type NavResult<T> = Result<T, NavError>;
