//! Synthetic riverside road network.
//!
//! A 6-node network loosely shaped like a downtown grid with a curving
//! river road along its south edge.  Weights are planar lengths in degrees,
//! matching the search heuristic's units.

use nav_core::{GeoPoint, NodeId};
use nav_graph::{RoadNetwork, RoadNetworkBuilder};

/// Build the network.
///
/// Returns `(network, [west_end, market, old_town, harbor, east_gate, island])`.
/// `island` has no roads.
pub fn build_network() -> (RoadNetwork, [NodeId; 6]) {
    let mut b = RoadNetworkBuilder::new();

    let west_end  = b.add_node(GeoPoint::new(30.700, -88.080));
    let market    = b.add_node(GeoPoint::new(30.705, -88.060));
    let old_town  = b.add_node(GeoPoint::new(30.706, -88.040));
    let harbor    = b.add_node(GeoPoint::new(30.690, -88.055));
    let east_gate = b.add_node(GeoPoint::new(30.700, -88.020));
    let island    = b.add_node(GeoPoint::new(30.650, -88.000));

    let planar = |b: &RoadNetworkBuilder, x: NodeId, y: NodeId| {
        Some(b.node_pos(x).planar_distance(b.node_pos(y)))
    };

    let w = planar(&b, west_end, market);
    b.add_road(west_end, market, w);
    let w = planar(&b, market, old_town);
    b.add_road(market, old_town, w);
    let w = planar(&b, old_town, east_gate);
    b.add_road(old_town, east_gate, w);
    let w = planar(&b, market, harbor);
    b.add_road(market, harbor, w);

    // River road: longer than the straight line, with its true shape.
    b.add_curved_road(
        west_end,
        harbor,
        Some(0.030),
        vec![
            GeoPoint::new(30.700, -88.080),
            GeoPoint::new(30.692, -88.072),
            GeoPoint::new(30.689, -88.063),
            GeoPoint::new(30.690, -88.055),
        ],
    );
    b.add_curved_road(
        harbor,
        east_gate,
        Some(0.040),
        vec![
            GeoPoint::new(30.690, -88.055),
            GeoPoint::new(30.688, -88.040),
            GeoPoint::new(30.694, -88.028),
            GeoPoint::new(30.700, -88.020),
        ],
    );
    // One-way ferry spur with unknown length.
    b.add_directed_edge(harbor, old_town, None);

    let net = b.build();
    (net, [west_end, market, old_town, harbor, east_gate, island])
}
