//! `RouteService` — snapshot-swapping front end over the router.

use std::sync::{Arc, PoisonError, RwLock};

use geojson::FeatureCollection;
use tracing::{debug, info};

use wr_core::{CancelToken, Coordinate, RoutingConfig};
use wr_ingest::{build_graph, parse_query, IngestReport, LineRecord, PointRecord};
use wr_output::route_collection;
use wr_spatial::{route_between, DijkstraRouter, Graph, RouteOutcome, Router};

use crate::ServiceResult;

struct Current {
    graph:    Arc<Graph>,
    revision: u64,
}

/// Loads walkway maps and answers route queries against the latest one.
///
/// Graph rebuilds happen outside the lock; only the `Arc` swap is guarded.
pub struct RouteService<R: Router = DijkstraRouter> {
    config:  RoutingConfig,
    router:  R,
    current: RwLock<Current>,
}

impl<R: Router> RouteService<R> {
    /// Create a service with an empty graph.
    ///
    /// Fails if `config` does not validate.
    pub fn new(config: RoutingConfig, router: R) -> ServiceResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            router,
            current: RwLock::new(Current { graph: Arc::new(Graph::empty()), revision: 0 }),
        })
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Materialize `points` and `lines`, build a graph, and make it current.
    pub fn load(&self, points: &[PointRecord], lines: &[LineRecord]) -> IngestReport {
        let (graph, report) = build_graph(points, lines, &self.config);
        self.replace_graph(graph);
        report
    }

    /// Swap in a prebuilt graph.  Snapshots taken earlier are unaffected.
    pub fn replace_graph(&self, graph: Graph) {
        let (nodes, connections) = (graph.node_count(), graph.connection_count());
        let graph = Arc::new(graph);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        current.graph = graph;
        current.revision += 1;
        info!(revision = current.revision, nodes, connections, "walkway graph replaced");
    }

    /// The graph new queries will run against.
    pub fn snapshot(&self) -> Arc<Graph> {
        Arc::clone(&self.read().graph)
    }

    /// Number of graph swaps since construction.
    pub fn revision(&self) -> u64 {
        self.read().revision
    }

    pub fn route(&self, start: Coordinate, end: Coordinate) -> ServiceResult<RouteOutcome> {
        self.route_with_cancel(start, end, &CancelToken::new())
    }

    pub fn route_with_cancel(
        &self,
        start:  Coordinate,
        end:    Coordinate,
        cancel: &CancelToken,
    ) -> ServiceResult<RouteOutcome> {
        let graph = self.snapshot();
        self.route_on(&graph, start, end, cancel)
    }

    /// Decode two `"lon,lat"` query strings, route, and serialize the result.
    pub fn route_geojson(&self, start: &str, end: &str) -> ServiceResult<FeatureCollection> {
        let start = parse_query(start)?;
        let end = parse_query(end)?;
        let graph = self.snapshot();
        let outcome = self.route_on(&graph, start, end, &CancelToken::new())?;
        Ok(route_collection(&graph, &outcome, &self.config.output)?)
    }

    /// Answer every query against a single snapshot, results in input order.
    pub fn route_batch(&self, queries: &[(Coordinate, Coordinate)]) -> Vec<ServiceResult<RouteOutcome>> {
        let graph = self.snapshot();
        let cancel = CancelToken::new();
        debug!(queries = queries.len(), "routing batch");

        #[cfg(not(feature = "parallel"))]
        {
            queries
                .iter()
                .map(|&(start, end)| self.route_on(&graph, start, end, &cancel))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            queries
                .par_iter()
                .map(|&(start, end)| self.route_on(&graph, start, end, &cancel))
                .collect()
        }
    }

    fn route_on(
        &self,
        graph:  &Graph,
        start:  Coordinate,
        end:    Coordinate,
        cancel: &CancelToken,
    ) -> ServiceResult<RouteOutcome> {
        let outcome = route_between(graph, &self.router, start, end, cancel)?;
        debug!(%start, %end, found = outcome.is_found(), "route query");
        Ok(outcome)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Current> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }
}
