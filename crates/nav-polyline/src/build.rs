//! Expand a node path into coordinates and encode it.

use nav_core::{GeoPoint, NodeId};
use nav_graph::RoadNetwork;

use crate::{PolylineResult, encode};

/// Coordinates along `path`.
///
/// For each consecutive pair `(u, v)`: if the lightest `u → v` edge has
/// curve geometry, all of its points are appended in order; otherwise `u`'s
/// position is appended.  The last node's position closes the sequence.
/// Pairs with no connecting edge are treated as straight segments.
///
/// An empty path yields no points.  Fails if any node is outside `network`.
pub fn path_points(network: &RoadNetwork, path: &[NodeId]) -> PolylineResult<Vec<GeoPoint>> {
    for &node in path {
        network.check_node(node)?;
    }
    let Some(&last) = path.last() else {
        return Ok(Vec::new());
    };

    let mut points = Vec::with_capacity(path.len());
    for pair in path.windows(2) {
        let (u, v) = (pair[0], pair[1]);
        match network.edge_between(u, v).map(|e| network.edge_geometry(e)) {
            Some(curve) if !curve.is_empty() => points.extend_from_slice(curve),
            _ => points.push(network.position(u)),
        }
    }
    points.push(network.position(last));
    Ok(points)
}

/// Encoded five-decimal polyline for `path`; `""` for an empty path.
pub fn build_polyline(network: &RoadNetwork, path: &[NodeId]) -> PolylineResult<String> {
    Ok(encode(&path_points(network, path)?))
}
