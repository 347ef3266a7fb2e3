use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trip_server::cache::{CacheConfig, CachedOsrmClient};
use trip_server::candidates::BridgeTable;
use trip_server::catalog::TableCatalog;
use trip_server::config::ServerConfig;
use trip_server::osrm::{OsrmClient, OsrmConfig};
use trip_server::planner::PlanConfig;
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trip_server=info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // Reference catalog: file if configured, built-in tables otherwise
    let catalog = match &config.catalog_path {
        Some(path) => {
            let catalog = TableCatalog::load(path).expect("Failed to load reference catalog");
            info!(path = %path.display(), countries = catalog.len(), "loaded reference catalog");
            catalog
        }
        None => TableCatalog::builtin(),
    };

    let mut state = AppState::new(catalog, BridgeTable::builtin(), PlanConfig::default());

    match &config.osrm_base_url {
        Some(base_url) => {
            let osrm_config = OsrmConfig::new()
                .with_base_url(base_url)
                .with_timeout(config.osrm_timeout_secs);
            let client = OsrmClient::new(osrm_config).expect("Failed to create OSRM client");
            state = state.with_routing(CachedOsrmClient::new(client, &CacheConfig::default()));
            info!(%base_url, "driving routes enabled");
        }
        None => warn!("OSRM_BASE_URL not set; using geometric estimates only"),
    }

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listen address");
    info!(addr = %config.addr, "trip planner listening");

    axum::serve(listener, app).await.expect("Server error");
}
