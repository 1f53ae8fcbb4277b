//! Unit tests for nav-polyline.

#[cfg(test)]
mod codec {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use nav_core::GeoPoint;

    use crate::{PolylineError, decode, decode_with_precision, encode, encode_with_precision};

    const CANONICAL: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    fn canonical_points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(38.5, -120.2),
            GeoPoint::new(40.7, -120.95),
            GeoPoint::new(43.252, -126.453),
        ]
    }

    #[test]
    fn canonical_string() {
        assert_eq!(encode(&canonical_points()), CANONICAL);
    }

    #[test]
    fn canonical_decodes() {
        let decoded = decode(CANONICAL).unwrap();
        assert_eq!(decoded.len(), 3);
        for (got, want) in decoded.iter().zip(canonical_points()) {
            assert!(got.approx_eq(want, 1e-9), "{got} vs {want}");
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<GeoPoint>::new());
    }

    #[test]
    fn random_sequences_round_trip_within_precision() {
        let mut rng = SmallRng::seed_from_u64(5);
        for len in 1..40 {
            let points: Vec<GeoPoint> = (0..len)
                .map(|_| GeoPoint::new(rng.gen_range(-90.0..90.0), rng.gen_range(-180.0..180.0)))
                .collect();
            let decoded = decode(&encode(&points)).unwrap();
            assert_eq!(decoded.len(), points.len());
            for (got, want) in decoded.iter().zip(&points) {
                assert!(got.approx_eq(*want, 0.5e-5 + 1e-12), "{got} vs {want}");
            }
        }
    }

    #[test]
    fn precision_six() {
        let points = vec![GeoPoint::new(52.123456, 13.654321), GeoPoint::new(52.1, 13.7)];
        let encoded = encode_with_precision(&points, 6).unwrap();
        assert_ne!(encoded, encode(&points));
        let decoded = decode_with_precision(&encoded, 6).unwrap();
        for (got, want) in decoded.iter().zip(&points) {
            assert!(got.approx_eq(*want, 0.5e-6 + 1e-12));
        }
        assert_eq!(encode_with_precision(&points, 5).unwrap(), encode(&points));
    }

    #[test]
    fn precision_out_of_range() {
        assert_eq!(encode_with_precision(&[], 11), Err(PolylineError::InvalidPrecision(11)));
        assert_eq!(decode_with_precision("", 42), Err(PolylineError::InvalidPrecision(42)));
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            decode("_p~iF ~ps|U"),
            Err(PolylineError::InvalidCharacter { index: 5, ch: ' ' })
        );
        assert!(matches!(decode("_p~iF~ps|Ué"), Err(PolylineError::InvalidCharacter { .. })));
    }

    #[test]
    fn truncated_value() {
        let cut = &CANONICAL[..CANONICAL.len() - 1];
        assert_eq!(decode(cut), Err(PolylineError::Truncated));
    }

    #[test]
    fn unpaired_latitude() {
        assert_eq!(decode("_p~iF"), Err(PolylineError::UnpairedCoordinate));
    }

    #[test]
    fn overlong_value_overflows() {
        let junk = "~".repeat(20);
        assert!(matches!(decode(&junk), Err(PolylineError::Overflow { .. })));
    }

    #[test]
    fn thirteenth_group_must_fit_remaining_bits() {
        // Twelve full groups reach shift 60; 0x1f there needs five bits.
        assert_eq!(decode("~~~~~~~~~~~~^?"), Err(PolylineError::Overflow { index: 12 }));
        // 0xf is the largest value that still fits.
        assert!(decode("~~~~~~~~~~~~N?").is_ok());
    }

    #[test]
    fn accumulated_coordinate_overflows() {
        // Zigzag of i64::MAX as a latitude delta, twice.
        let big = "}~~~~~~~~~~~N";
        assert!(decode(&format!("{big}?")).is_ok());
        assert_eq!(
            decode(&format!("{big}?{big}?")),
            Err(PolylineError::Overflow { index: 14 })
        );
    }

    #[test]
    fn out_of_range_coordinates_encode_without_panicking() {
        let points = [GeoPoint::new(1e300, 0.0), GeoPoint::new(-1e300, 0.0)];
        let encoded = encode(&points);
        assert!(!encoded.is_empty());
        assert!(matches!(decode(&encoded), Err(PolylineError::Overflow { .. })));
        assert_eq!(encode(&[GeoPoint::new(f64::NAN, 0.0)]), "??");
    }

    #[test]
    fn negative_and_zero_deltas() {
        let points = vec![
            GeoPoint::new(-33.86785, 151.20732),
            GeoPoint::new(-33.86785, 151.20732),
            GeoPoint::new(0.0, 0.0),
        ];
        let decoded = decode(&encode(&points)).unwrap();
        for (got, want) in decoded.iter().zip(&points) {
            assert!(got.approx_eq(*want, 1e-9));
        }
    }
}

#[cfg(test)]
mod build {
    use nav_core::{GeoPoint, NodeId};
    use nav_graph::{RoadNetwork, RoadNetworkBuilder};

    use crate::{PolylineError, build_polyline, encode, path_points};

    /// a ── b (straight), b ~~ c (curved via two shape points).
    fn curved_network() -> (RoadNetwork, [NodeId; 3]) {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let m = b.add_node(GeoPoint::new(0.0, 1.0));
        let c = b.add_node(GeoPoint::new(0.0, 2.0));
        b.add_road(a, m, Some(1.0));
        b.add_curved_road(
            m,
            c,
            Some(1.4),
            vec![GeoPoint::new(0.0, 1.0), GeoPoint::new(0.3, 1.5), GeoPoint::new(0.0, 2.0)],
        );
        (b.build(), [a, m, c])
    }

    #[test]
    fn empty_path_is_empty_string() {
        let (net, _) = curved_network();
        assert_eq!(build_polyline(&net, &[]).unwrap(), "");
        assert!(path_points(&net, &[]).unwrap().is_empty());
    }

    #[test]
    fn single_node_path() {
        let (net, [a, ..]) = curved_network();
        assert_eq!(path_points(&net, &[a]).unwrap(), vec![GeoPoint::new(0.0, 0.0)]);
    }

    #[test]
    fn straight_segments_use_node_positions() {
        let (net, [a, m, _]) = curved_network();
        let points = path_points(&net, &[a, m]).unwrap();
        assert_eq!(points, vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)]);
    }

    #[test]
    fn curved_edges_contribute_their_geometry() {
        let (net, [a, m, c]) = curved_network();
        let points = path_points(&net, &[a, m, c]).unwrap();
        assert_eq!(
            points,
            vec![
                GeoPoint::new(0.0, 0.0), // a (straight a→m)
                GeoPoint::new(0.0, 1.0), // m→c geometry
                GeoPoint::new(0.3, 1.5),
                GeoPoint::new(0.0, 2.0),
                GeoPoint::new(0.0, 2.0), // final node
            ]
        );
        assert_eq!(build_polyline(&net, &[a, m, c]).unwrap(), encode(&points));
    }

    #[test]
    fn reverse_curve_is_reversed() {
        let (net, [_, m, c]) = curved_network();
        let points = path_points(&net, &[c, m]).unwrap();
        assert_eq!(points[1], GeoPoint::new(0.3, 1.5));
        assert_eq!(points.first(), Some(&GeoPoint::new(0.0, 2.0)));
    }

    #[test]
    fn unconnected_pair_falls_back_to_straight() {
        let (net, [a, _, c]) = curved_network();
        let points = path_points(&net, &[a, c]).unwrap();
        assert_eq!(points, vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 2.0)]);
    }

    #[test]
    fn unknown_node_is_error() {
        let (net, [a, ..]) = curved_network();
        assert_eq!(
            build_polyline(&net, &[a, NodeId(9)]),
            Err(PolylineError::NodeNotFound(NodeId(9)))
        );
    }

    #[test]
    fn straight_line_known_encoding() {
        let mut b = RoadNetworkBuilder::new();
        let nodes: Vec<NodeId> = (0..4).map(|i| b.add_node(GeoPoint::new(0.0, i as f64))).collect();
        for w in nodes.windows(2) {
            b.add_road(w[0], w[1], None);
        }
        let net = b.build();
        assert_eq!(build_polyline(&net, &nodes).unwrap(), "???_ibE?_ibE?_ibE");
    }
}
