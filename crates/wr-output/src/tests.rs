//! Unit tests for wr-output.

#[cfg(test)]
mod helpers {
    use wr_core::{CancelToken, Coordinate};
    use wr_spatial::{route_between, DijkstraRouter, Edge, Graph, GraphBuilder, Node, RouteOutcome};

    pub fn p(x: f64, y: f64) -> Coordinate {
        Coordinate::new(-112.45 + x * 0.001, 34.61 + y * 0.001)
    }

    /// `A ── B ── C` plus isolated `D`.  `B-C` is stored back to front, and
    /// `A-B` bends through an intermediate vertex.
    pub fn campus() -> Graph {
        let mut b = GraphBuilder::new(5.0);
        b.add_node(Node::new("A", p(0.0, 0.0)));
        b.add_node(Node::new("B", p(0.0, 1.0)));
        b.add_node(Node::new("C", p(0.0, 2.0)));
        b.add_node(Node::new("D", p(5.0, 5.0)));
        b.add_edge(Edge::new("A-B", vec![p(0.0, 0.0), p(0.2, 0.5), p(0.0, 1.0)]));
        b.add_edge(Edge::new("C-B", vec![p(0.0, 2.0), p(0.0, 1.0)]));
        // Only one end near a node; never routable.
        b.add_edge(Edge::new("spur", vec![p(0.0, 2.0), p(1.0, 3.0)]));
        b.build()
    }

    pub fn query(g: &Graph, from: Coordinate, to: Coordinate) -> RouteOutcome {
        route_between(g, &DijkstraRouter, from, to, &CancelToken::new()).unwrap()
    }
}

#[cfg(test)]
mod route {
    use geojson::{feature::Id, Feature, Value};
    use wr_core::{Coordinate, OutputConfig, PixelProjection};
    use wr_spatial::{QueryEndpoint, RouteOutcome};

    use super::helpers::{campus, p, query};
    use crate::{route_collection, to_json_string};

    fn id_of(f: &Feature) -> &str {
        match &f.id {
            Some(Id::String(s)) => s,
            other => panic!("unexpected id {other:?}"),
        }
    }

    fn value_of(f: &Feature) -> &Value {
        &f.geometry.as_ref().expect("geometry").value
    }

    fn endpoints(v: &Value) -> (Coordinate, Coordinate) {
        let to_c = |pos: &Vec<f64>| Coordinate::new(pos[0], pos[1]);
        match v {
            Value::Point(pos) => (to_c(pos), to_c(pos)),
            Value::LineString(line) => (to_c(&line[0]), to_c(&line[line.len() - 1])),
            other => panic!("unexpected geometry {other:?}"),
        }
    }

    #[test]
    fn start_edges_end_in_order() {
        let g = campus();
        let out = query(&g, p(0.0, 0.0), p(0.0, 2.0));
        let fc = route_collection(&g, &out, &OutputConfig::default()).unwrap();
        let ids: Vec<_> = fc.features.iter().map(id_of).collect();
        assert_eq!(ids, ["A", "A-B", "C-B", "C"]);

        let kinds: Vec<_> = fc
            .features
            .iter()
            .map(|f| matches!(value_of(f), Value::Point(_)))
            .collect();
        assert_eq!(kinds, [true, false, false, true]);

        let members = fc.foreign_members.as_ref().unwrap();
        assert_eq!(members["status"], "ok");
        let length = members["length_m"].as_f64().unwrap();
        let expected = g.edges()[0].length_m() + g.edges()[1].length_m();
        assert!((length - expected).abs() < 1e-9);
    }

    #[test]
    fn features_form_a_contiguous_chain() {
        let g = campus();
        for (from, to) in [(p(0.0, 0.0), p(0.0, 2.0)), (p(0.0, 2.0), p(0.0, 0.0))] {
            let fc = route_collection(&g, &query(&g, from, to), &OutputConfig::default()).unwrap();
            let mut cursor = endpoints(value_of(&fc.features[0])).1;
            for f in &fc.features[1..] {
                let (head, tail) = endpoints(value_of(f));
                assert!(cursor.distance_m(head) <= 5.0, "gap before {}", id_of(f));
                cursor = tail;
            }
        }
    }

    #[test]
    fn reversed_leg_is_flipped() {
        let g = campus();
        let fc = route_collection(&g, &query(&g, p(0.0, 0.0), p(0.0, 2.0)), &OutputConfig::default())
            .unwrap();
        // Stored C → B, walked B → C.
        match value_of(&fc.features[2]) {
            Value::LineString(line) => {
                assert_eq!(line[0], p(0.0, 1.0).to_position());
                assert_eq!(line[1], p(0.0, 2.0).to_position());
            }
            other => panic!("unexpected geometry {other:?}"),
        }
        // Walked the stored way round, the bend vertex stays in the middle.
        match value_of(&fc.features[1]) {
            Value::LineString(line) => {
                assert_eq!(line.len(), 3);
                assert_eq!(line[0], p(0.0, 0.0).to_position());
            }
            other => panic!("unexpected geometry {other:?}"),
        }
    }

    #[test]
    fn trivial_route_is_single_point() {
        let g = campus();
        let fc = route_collection(&g, &query(&g, p(0.0, 1.0), p(0.0, 1.0)), &OutputConfig::default())
            .unwrap();
        assert_eq!(fc.features.len(), 1);
        assert_eq!(id_of(&fc.features[0]), "B");
    }

    #[test]
    fn end_node_is_not_duplicated() {
        let g = campus();
        let fc = route_collection(&g, &query(&g, p(0.0, 0.0), p(0.0, 1.0)), &OutputConfig::default())
            .unwrap();
        let ids: Vec<_> = fc.features.iter().map(id_of).collect();
        assert_eq!(ids, ["A", "A-B", "B"]);
    }

    #[test]
    fn failures_are_empty_with_status() {
        let g = campus();
        let no_path = query(&g, p(0.0, 0.0), p(5.0, 5.0));
        assert!(matches!(no_path, RouteOutcome::NoPath { .. }));
        let fc = route_collection(&g, &no_path, &OutputConfig::default()).unwrap();
        assert!(fc.features.is_empty());
        assert_eq!(fc.foreign_members.as_ref().unwrap()["status"], "no_path");

        let no_node = RouteOutcome::NoNodeFound(QueryEndpoint::End);
        let fc = route_collection(&g, &no_node, &OutputConfig::default()).unwrap();
        assert!(fc.features.is_empty());
        let members = fc.foreign_members.as_ref().unwrap();
        assert_eq!(members["status"], "no_node_found");
        assert!(members.get("length_m").is_none());
    }

    #[test]
    fn projection_applies_to_every_position() {
        let g = campus();
        let proj = PixelProjection::default();
        let config = OutputConfig { projection: Some(proj.clone()) };
        let fc = route_collection(&g, &query(&g, p(0.0, 0.0), p(0.0, 2.0)), &config).unwrap();
        match value_of(&fc.features[0]) {
            Value::Point(pos) => assert_eq!(pos, &proj.project(p(0.0, 0.0)).to_vec()),
            other => panic!("unexpected geometry {other:?}"),
        }
        match value_of(&fc.features[1]) {
            Value::LineString(line) => assert_eq!(line[1], proj.project(p(0.2, 0.5)).to_vec()),
            other => panic!("unexpected geometry {other:?}"),
        }
    }

    #[test]
    fn wire_format() {
        let g = campus();
        let fc = route_collection(&g, &query(&g, p(0.0, 0.0), p(0.0, 1.0)), &OutputConfig::default())
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&to_json_string(&fc).unwrap()).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["status"], "ok");
        let first = &json["features"][0];
        assert_eq!(first["type"], "Feature");
        assert_eq!(first["id"], "A");
        assert_eq!(first["properties"]["name"], "A");
        assert_eq!(first["geometry"]["type"], "Point");
        assert_eq!(json["features"][1]["geometry"]["type"], "LineString");
    }

    #[test]
    fn identical_queries_serialize_identically() {
        let g = campus();
        let a = to_json_string(
            &route_collection(&g, &query(&g, p(0.0, 0.0), p(0.0, 2.0)), &OutputConfig::default()).unwrap(),
        )
        .unwrap();
        let b = to_json_string(
            &route_collection(&g, &query(&g, p(0.0, 0.0), p(0.0, 2.0)), &OutputConfig::default()).unwrap(),
        )
        .unwrap();
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod map {
    use geojson::{feature::Id, Value};
    use wr_core::{NodeId, OutputConfig};
    use wr_spatial::{Route, RouteOutcome};

    use super::helpers::campus;
    use crate::{map_collection, route_collection, OutputError};

    #[test]
    fn nodes_then_all_edges() {
        let g = campus();
        let fc = map_collection(&g, &OutputConfig::default());
        assert_eq!(fc.features.len(), 4 + 3);
        let ids: Vec<_> = fc
            .features
            .iter()
            .map(|f| match &f.id {
                Some(Id::String(s)) => s.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(ids, ["A", "B", "C", "D", "A-B", "C-B", "spur"]);
        assert!(matches!(fc.features[3].geometry.as_ref().unwrap().value, Value::Point(_)));
        assert!(matches!(fc.features[6].geometry.as_ref().unwrap().value, Value::LineString(_)));
    }

    #[test]
    fn route_from_another_graph_is_rejected() {
        let g = campus();
        let foreign = RouteOutcome::Found(Route::trivial(NodeId(40)));
        let err = route_collection(&g, &foreign, &OutputConfig::default()).unwrap_err();
        assert!(matches!(err, OutputError::MissingNode(NodeId(40))));
    }
}
