//! Unit tests for wr-ingest.

#[cfg(test)]
mod parse {
    use wr_core::Coordinate;
    use crate::{parse_coordinate, parse_coordinate_list, parse_query, IngestError};

    #[test]
    fn lon_lat_pair() {
        let c = parse_coordinate("-112.4509615,34.6147979").unwrap();
        assert_eq!(c, Coordinate::new(-112.4509615, 34.6147979));
    }

    #[test]
    fn altitude_is_ignored() {
        let c = parse_coordinate(" -112.45,34.61,1620.5 ").unwrap();
        assert_eq!(c, Coordinate::new(-112.45, 34.61));
    }

    #[test]
    fn wrong_arity_rejected() {
        for bad in ["", "1.0", "1,2,3,4", ","] {
            assert!(
                matches!(parse_coordinate(bad), Err(IngestError::MalformedCoordinate { .. })),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn non_numeric_and_non_finite_rejected() {
        for bad in ["a,b", "1.0,north", "NaN,1", "1,inf", "1,2,nan"] {
            assert!(parse_coordinate(bad).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn query_requires_exactly_two_components() {
        assert_eq!(parse_query("-112.4489055,34.6159122").unwrap(), Coordinate::new(-112.4489055, 34.6159122));
        assert!(parse_query("-112.44,34.61,0").is_err());
        assert!(parse_query("-112.44").is_err());
        assert!(parse_query("lon,lat").is_err());
    }

    #[test]
    fn list_skips_blank_and_reports_bad_tuples() {
        let text = "\n\t-112.45,34.61,0 \n  -112.44,34.62,0  oops  -112.43,34.63\n";
        let (coords, errors) = parse_coordinate_list(text);
        assert_eq!(
            coords,
            vec![
                Coordinate::new(-112.45, 34.61),
                Coordinate::new(-112.44, 34.62),
                Coordinate::new(-112.43, 34.63),
            ]
        );
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], IngestError::MalformedCoordinate { input, .. } if input == "oops"));
    }

    #[test]
    fn empty_list() {
        let (coords, errors) = parse_coordinate_list("   ");
        assert!(coords.is_empty());
        assert!(errors.is_empty());
    }
}

#[cfg(test)]
mod materialize {
    use wr_core::{Coordinate, RoutingConfig};
    use crate::{
        build_graph, line_to_edge, materialize, point_to_node, IngestError, LineRecord,
        PointRecord, RecordKind, Recovery,
    };

    #[test]
    fn valid_point() {
        let (node, issue) = point_to_node(&PointRecord::new("Library", "-112.45,34.61,0"));
        assert_eq!(node.id(), "Library");
        assert_eq!(node.coord(), Coordinate::new(-112.45, 34.61));
        assert!(issue.is_none());
    }

    #[test]
    fn malformed_point_lands_on_origin() {
        let (node, issue) = point_to_node(&PointRecord::new("Broken", "-112.45"));
        assert_eq!(node.coord(), Coordinate::ZERO);
        let issue = issue.unwrap();
        assert_eq!(issue.kind, RecordKind::Point);
        assert_eq!(issue.recovery, Recovery::ZeroCoordinate);
        assert_eq!(issue.record_id, "Broken");
    }

    #[test]
    fn line_drops_bad_tuples() {
        let (edge, issues) = line_to_edge(&LineRecord::new("Path", "0,0,0 x,y 0,0.001,0"));
        assert_eq!(edge.coords(), &[Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001)]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].recovery, Recovery::DroppedTuple);
    }

    #[test]
    fn short_line_becomes_degenerate() {
        let (edge, issues) = line_to_edge(&LineRecord::new("Stub", "1,1 bad"));
        assert_eq!(edge.coords(), &[Coordinate::ZERO, Coordinate::ZERO]);
        assert_eq!(edge.length_m(), 0.0);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[1].recovery, Recovery::DegenerateEdge);
        assert_eq!(issues[1].error, IngestError::TooFewCoordinates { found: 1 });
    }

    #[test]
    fn batch_preserves_order_and_counts() {
        let points = vec![
            PointRecord::new("A", "0,0"),
            PointRecord::new("B", "garbage"),
            PointRecord::new("C", "0,0.002"),
        ];
        let lines = vec![LineRecord::new("A-C", "0,0 0,0.001 0,0.002"), LineRecord::new("empty", "")];
        let out = materialize(&points, &lines);
        let ids: Vec<_> = out.nodes.iter().map(|n| n.id()).collect();
        assert_eq!(ids, ["A", "B", "C"]);
        assert_eq!(out.edges.len(), 2);
        assert_eq!(out.report.points, 3);
        assert_eq!(out.report.lines, 2);
        assert_eq!(out.report.issues.len(), 2);
        assert!(!out.report.is_clean());
    }

    #[test]
    fn build_graph_connects_clean_records() {
        let points = vec![
            PointRecord::new("A", "-112.4509615,34.6147979,0"),
            PointRecord::new("B", "-112.4500000,34.6150000,0"),
        ];
        let lines = vec![LineRecord::new(
            "A-B",
            "-112.4509615,34.6147979,0 -112.4505,34.6149,0 -112.4500000,34.6150000,0",
        )];
        let (graph, report) = build_graph(&points, &lines, &RoutingConfig::default());
        assert!(report.is_clean());
        assert_eq!(graph.connection_count(), 1);
        assert_eq!(graph.snap_tolerance_m(), 5.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn records_from_json() {
        let p: PointRecord =
            serde_json::from_str(r#"{"id":"Gate","coordinates":"-112.45,34.61,0"}"#).unwrap();
        assert_eq!(p, PointRecord::new("Gate", "-112.45,34.61,0"));
    }
}
