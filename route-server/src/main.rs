use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use route_server::config::ServerConfig;
use route_server::graph::load_stations_and_graph;
use route_server::stations::StationDirectory;
use route_server::store::SqliteStore;
use route_server::store::seed::{SCHEMA_SQL, SEED_SQL, load_script};
use route_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "route_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Open the database, creating and seeding it on first run
    let store = SqliteStore::open(&config.database_path).await?;
    let schema = load_script(config.schema_path.as_deref(), SCHEMA_SQL);
    let seed = load_script(config.seed_path.as_deref(), SEED_SQL);
    store.initialize_if_needed(&schema, &seed).await?;

    let (stations, graph) = load_stations_and_graph(&store, config.planner.weight).await?;
    let directory = StationDirectory::new(stations);

    let state = AppState::new(store, directory, graph, config.planner);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Route finder listening");
    info!("  GET  /health    - Health check");
    info!("  GET  /stations  - List stations");
    info!("  GET  /route     - Find a route (?from=&to=&algorithm=)");
    info!("  POST /reload    - Reload the network from the database");

    axum::serve(listener, app).await?;
    Ok(())
}
