//! Single-feature builders.

use geojson::{feature::Id, Feature, Geometry, JsonObject, JsonValue, Value};

use wr_core::OutputConfig;
use wr_spatial::{Edge, Graph, Node, Route};

use crate::{OutputError, OutputResult};

fn named_feature(id: &str, geometry: Value) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("name".to_owned(), JsonValue::from(id));
    Feature {
        bbox:            None,
        geometry:        Some(Geometry::new(geometry)),
        id:              Some(Id::String(id.to_owned())),
        properties:      Some(properties),
        foreign_members: None,
    }
}

/// `Point` feature for a node.
pub fn node_feature(node: &Node, config: &OutputConfig) -> Feature {
    named_feature(node.id(), Value::Point(config.position(node.coord())))
}

/// `LineString` feature for an edge, optionally walked back to front.
pub fn edge_feature(edge: &Edge, reversed: bool, config: &OutputConfig) -> Feature {
    let positions: Vec<Vec<f64>> = if reversed {
        edge.coords().iter().rev().map(|&c| config.position(c)).collect()
    } else {
        edge.coords().iter().map(|&c| config.position(c)).collect()
    };
    named_feature(edge.id(), Value::LineString(positions))
}

/// Features for a found route: start node, each leg in order, end node.
///
/// A trivial route yields only the start node.
pub fn route_features(graph: &Graph, route: &Route, config: &OutputConfig) -> OutputResult<Vec<Feature>> {
    let node = |id| graph.node(id).ok_or(OutputError::MissingNode(id));

    let mut features = Vec::with_capacity(route.legs.len() + 2);
    features.push(node_feature(node(route.start)?, config));
    if route.is_trivial() {
        return Ok(features);
    }
    for leg in &route.legs {
        let edge = graph.edge(leg.edge).ok_or(OutputError::MissingEdge(leg.edge))?;
        features.push(edge_feature(edge, leg.is_reversed(graph), config));
    }
    features.push(node_feature(node(route.end)?, config));
    Ok(features)
}
