//! `nav-core` — foundational types for the `nav` lookahead router.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and a single required external one (`thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                  |
//! |-----------|-------------------------------------------|
//! | [`ids`]   | `NodeId`, `EdgeId`                        |
//! | [`geo`]   | `GeoPoint`, planar distance               |
//! | [`error`] | `NavError`, `NavResult`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NavError, NavResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
