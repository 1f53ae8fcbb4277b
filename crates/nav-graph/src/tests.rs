//! Unit tests for nav-graph.
//!
//! All tests use hand-crafted networks.

#[cfg(test)]
mod helpers {
    use nav_core::{GeoPoint, NodeId};
    use crate::{RoadNetwork, RoadNetworkBuilder};

    /// Build a small grid network for testing.
    ///
    /// Nodes (lat, lon):
    ///   0:(0,0)  1:(0,1)  2:(0,2)
    ///   3:(1,0)           4:(1,2)
    ///
    /// Undirected edges: 0-1, 1-2, 0-3, 2-4, 3-4
    pub fn grid_network() -> (RoadNetwork, [NodeId; 5]) {
        let mut b = RoadNetworkBuilder::new();

        let n0 = b.add_node(GeoPoint::new(0.0, 0.0));
        let n1 = b.add_node(GeoPoint::new(0.0, 1.0));
        let n2 = b.add_node(GeoPoint::new(0.0, 2.0));
        let n3 = b.add_node(GeoPoint::new(1.0, 0.0));
        let n4 = b.add_node(GeoPoint::new(1.0, 2.0));

        b.add_road(n0, n1, Some(1.0));
        b.add_road(n1, n2, Some(1.0));
        b.add_road(n2, n4, Some(1.0));
        b.add_road(n0, n3, Some(5.0)); // long road
        b.add_road(n3, n4, Some(1.0));

        (b.build(), [n0, n1, n2, n3, n4])
    }
}

// ── Builder & network structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use nav_core::GeoPoint;
    use crate::{DEFAULT_EDGE_WEIGHT, RoadNetwork, RoadNetworkBuilder};

    #[test]
    fn empty_build() {
        let net = RoadNetwork::empty();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
        assert_eq!(net.edge_geom_start, vec![0]);
    }

    #[test]
    fn single_road() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(30.0, -88.0));
        let c = b.add_node(GeoPoint::new(30.1, -88.0));
        b.add_road(a, c, Some(0.1));
        let net = b.build();
        assert_eq!(net.node_count(), 2);
        assert_eq!(net.edge_count(), 2); // bidirectional
    }

    #[test]
    fn csr_out_edges() {
        let (net, [n0, n1, n2, n3, n4]) = super::helpers::grid_network();

        let n1_out: Vec<_> = net.out_edges(n1).collect();
        assert_eq!(n1_out.len(), 2, "n1 should have 2 outgoing edges");

        assert_eq!(net.out_degree(n0), 2); // n0→n1, n0→n3
        assert_eq!(net.out_degree(n2), 2); // n2→n1, n2→n4
        assert_eq!(net.out_degree(n3), 2); // n3→n0, n3→n4
        assert_eq!(net.out_degree(n4), 2); // n4→n2, n4→n3
    }

    #[test]
    fn out_edges_source_correctness() {
        let (net, [n0, n1, ..]) = super::helpers::grid_network();
        for e in net.out_edges(n0) {
            assert_eq!(net.edge_from[e.index()], n0);
        }
        assert!(net.neighbors(n0).any(|(_, to, _)| to == n1));
    }

    #[test]
    fn directed_only_edge() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 1.0));
        b.add_directed_edge(a, c, Some(1.0));
        let net = b.build();
        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.out_degree(a), 1);
        assert_eq!(net.out_degree(c), 0);
        assert!(net.edge_between(a, c).is_some());
        assert!(net.edge_between(c, a).is_none());
    }

    #[test]
    fn malformed_weights_fall_back_to_default() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 1.0));
        b.add_directed_edge(a, c, None);
        b.add_directed_edge(a, c, Some(-3.0));
        b.add_directed_edge(a, c, Some(f64::NAN));
        b.add_directed_edge(a, c, Some(f64::INFINITY));
        b.add_directed_edge(c, a, Some(0.0));
        let net = b.build();
        for e in net.out_edges(a) {
            assert_eq!(net.edge_weight[e.index()], DEFAULT_EDGE_WEIGHT);
        }
        let back = net.edge_between(c, a).unwrap();
        assert_eq!(net.edge_weight[back.index()], 0.0);
    }

    #[test]
    fn edges_added_out_of_order_are_grouped_by_source() {
        let mut b = RoadNetworkBuilder::with_capacity(3, 3);
        let n0 = b.add_node(GeoPoint::new(0.0, 0.0));
        let n1 = b.add_node(GeoPoint::new(0.0, 1.0));
        let n2 = b.add_node(GeoPoint::new(0.0, 2.0));
        b.add_directed_edge(n2, n0, Some(3.0));
        b.add_directed_edge(n0, n1, Some(1.0));
        b.add_directed_edge(n1, n2, Some(2.0));
        assert_eq!(b.node_count(), 3);
        assert_eq!(b.edge_count(), 3);
        assert_eq!(b.node_pos(n1), GeoPoint::new(0.0, 1.0));
        let net = b.build();
        assert_eq!(net.node_out_start, vec![0, 1, 2, 3]);
        assert_eq!(net.edge_to, vec![n1, n2, n0]);
        assert_eq!(net.edge_weight, vec![1.0, 2.0, 3.0]);
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use nav_core::GeoPoint;
    use crate::RoadNetworkBuilder;

    #[test]
    fn curve_points_follow_sorted_edge_order() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 2.0));
        let bend = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.5, 1.0), GeoPoint::new(0.0, 2.0)];
        b.add_curved_road(a, c, Some(2.5), bend.clone());
        let net = b.build();

        let fwd = net.edge_between(a, c).unwrap();
        let rev = net.edge_between(c, a).unwrap();
        assert_eq!(net.edge_geometry(fwd), bend.as_slice());
        let reversed: Vec<_> = bend.iter().rev().copied().collect();
        assert_eq!(net.edge_geometry(rev), reversed.as_slice());
    }

    #[test]
    fn straight_edges_have_empty_geometry() {
        let (net, [n0, n1, ..]) = super::helpers::grid_network();
        let e = net.edge_between(n0, n1).unwrap();
        assert!(net.edge_geometry(e).is_empty());
        assert!(net.geom_points.is_empty());
    }
}

// ── Lookups & path helpers ────────────────────────────────────────────────────

#[cfg(test)]
mod lookups {
    use nav_core::{GeoPoint, NavError, NodeId};
    use crate::RoadNetworkBuilder;

    #[test]
    fn check_node_reports_missing() {
        let (net, [n0, ..]) = super::helpers::grid_network();
        assert!(net.check_node(n0).is_ok());
        assert_eq!(net.check_node(NodeId(99)), Err(NavError::NodeNotFound(NodeId(99))));
        assert!(!net.contains_node(NodeId::INVALID));
    }

    #[test]
    fn edge_between_prefers_lightest_parallel_edge() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 1.0));
        b.add_directed_edge(a, c, Some(4.0));
        b.add_directed_edge(a, c, Some(2.0));
        b.add_directed_edge(a, c, Some(2.0));
        let net = b.build();
        let e = net.edge_between(a, c).unwrap();
        assert_eq!(net.edge_weight[e.index()], 2.0);
        assert_eq!(e.index(), 1, "first of equally light edges wins");
        assert!(net.edge_between(NodeId(50), c).is_none());
    }

    #[test]
    fn path_weight_and_connectivity() {
        let (net, [n0, n1, n2, n3, n4]) = super::helpers::grid_network();
        assert_eq!(net.path_weight(&[n0, n1, n2, n4]), Some(3.0));
        assert_eq!(net.path_weight(&[n0, n3, n4]), Some(6.0));
        assert_eq!(net.path_weight(&[n2]), Some(0.0));
        assert_eq!(net.path_weight(&[n0, n4]), None);
        assert!(net.is_connected_path(&[n0, n1, n2]));
        assert!(!net.is_connected_path(&[n0, n2]));
        assert!(net.is_connected_path(&[]));
    }

    #[test]
    fn position_lookup() {
        let (net, [_, _, n2, ..]) = super::helpers::grid_network();
        assert_eq!(net.position(n2), GeoPoint::new(0.0, 2.0));
    }
}
