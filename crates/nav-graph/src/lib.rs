//! `nav-graph` — the road network consumed by search and polyline building.
//!
//! # Crate layout
//!
//! | Module      | Contents                                         |
//! |-------------|--------------------------------------------------|
//! | [`network`] | `RoadNetwork` (CSR + edge geometry), `RoadNetworkBuilder` |
//!
//! The network is read-only once built.  Acquiring map data and snapping raw
//! coordinates to nodes happen upstream; callers hand this crate finished
//! nodes and edges.

pub mod network;

#[cfg(test)]
mod tests;

pub use network::{DEFAULT_EDGE_WEIGHT, RoadNetwork, RoadNetworkBuilder};
