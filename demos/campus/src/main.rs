//! campus — walkway routing over a small synthetic campus map.
//!
//! Loads the map from [`map::campus_records`], answers a handful of queries,
//! and prints each result as a GeoJSON `FeatureCollection` on stdout.
//!
//! ```text
//! campus [config.json]
//! ```
//!
//! The optional argument is a JSON `RoutingConfig`, e.g.
//! `{"snap_tolerance_m": 8.0, "output": {"projection": {...}}}`.
//! Set `RUST_LOG=debug` to watch snapping and search decisions.

mod map;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wr_core::{Coordinate, RoutingConfig};
use wr_ingest::parse_query;
use wr_output::{map_collection, to_json_string};
use wr_service::RouteService;
use wr_spatial::DijkstraRouter;

use map::{campus_records, ADMIN, CHAPEL, DORMS, GYM, LIBRARY, SCIENCE};

// Query text far from every building.
const PARKING_LOT: &str = "-112.4400000,34.6100000";

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => RoutingConfig::default(),
    };
    let service = RouteService::new(config, DijkstraRouter)?;

    // 1. Load the map.
    let (points, lines) = campus_records();
    let report = service.load(&points, &lines);
    let graph = service.snapshot();
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        connections = graph.connection_count(),
        issues = report.issues.len(),
        "campus map loaded"
    );

    // 2. Whole map, for drawing.
    let whole = map_collection(&graph, &service.config().output);
    println!("{}", to_json_string(&whole)?);

    // 3. Individual queries.
    let queries = [
        ("admin → dorms", ADMIN, DORMS),
        ("gym → library", GYM, LIBRARY),
        ("science → science", SCIENCE, SCIENCE),
        ("admin → chapel", ADMIN, CHAPEL),
        ("admin → parking lot", ADMIN, PARKING_LOT),
    ];
    for (label, from, to) in queries {
        let fc = service
            .route_geojson(from, to)
            .with_context(|| format!("routing {label}"))?;
        info!(query = label, features = fc.features.len(), "route serialized");
        println!("{}", to_json_string(&fc)?);
    }

    // 4. Same queries as one batch.
    let pairs: Vec<(Coordinate, Coordinate)> = queries
        .iter()
        .map(|&(_, from, to)| Ok((parse_query(from)?, parse_query(to)?)))
        .collect::<Result<_>>()?;
    let found = service
        .route_batch(&pairs)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?
        .iter()
        .filter(|o| o.is_found())
        .count();
    info!(queries = pairs.len(), found, "batch complete");

    Ok(())
}

fn load_config(path: &Path) -> Result<RoutingConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: RoutingConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
