//! Feature-collection assembly and JSON encoding.

use geojson::{FeatureCollection, JsonObject, JsonValue};

use wr_core::OutputConfig;
use wr_spatial::{Graph, RouteOutcome};

use crate::feature::{edge_feature, node_feature, route_features};
use crate::OutputResult;

/// Query status carried in the collection's `"status"` member.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RouteStatus {
    Ok,
    NoNodeFound,
    NoPath,
}

impl RouteStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteStatus::Ok          => "ok",
            RouteStatus::NoNodeFound => "no_node_found",
            RouteStatus::NoPath      => "no_path",
        }
    }
}

impl From<&RouteOutcome> for RouteStatus {
    fn from(outcome: &RouteOutcome) -> Self {
        match outcome {
            RouteOutcome::Found(_)       => RouteStatus::Ok,
            RouteOutcome::NoNodeFound(_) => RouteStatus::NoNodeFound,
            RouteOutcome::NoPath { .. }  => RouteStatus::NoPath,
        }
    }
}

/// Serialize a routing outcome.
///
/// Failures produce an empty feature list.  The `"status"` member is always
/// present; `"length_m"` only for found routes.
pub fn route_collection(
    graph: &Graph,
    outcome: &RouteOutcome,
    config: &OutputConfig,
) -> OutputResult<FeatureCollection> {
    let mut members = JsonObject::new();
    members.insert("status".to_owned(), JsonValue::from(RouteStatus::from(outcome).as_str()));

    let features = match outcome {
        RouteOutcome::Found(route) => {
            members.insert("length_m".to_owned(), JsonValue::from(route.total_length_m));
            route_features(graph, route, config)?
        }
        RouteOutcome::NoNodeFound(_) | RouteOutcome::NoPath { .. } => Vec::new(),
    };

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(members),
    })
}

/// Every node, then every edge (routable or not), in arena order.
pub fn map_collection(graph: &Graph, config: &OutputConfig) -> FeatureCollection {
    let mut features = Vec::with_capacity(graph.node_count() + graph.edge_count());
    features.extend(graph.nodes().iter().map(|n| node_feature(n, config)));
    features.extend(graph.edges().iter().map(|e| edge_feature(e, false, config)));
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

pub fn to_json_string(collection: &FeatureCollection) -> OutputResult<String> {
    Ok(serde_json::to_string(collection)?)
}
