use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_router::network::{CONFIG_ENV, Network, NetworkConfig, delhi_metro};
use metro_router::web::{AppState, create_router};

/// Address to listen on.
const LISTEN_ENV: &str = "METRO_LISTEN_ADDR";
const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load the network description; the built-in Delhi Metro network is
    // used when no file is named
    let config = match NetworkConfig::from_env() {
        Ok(Some(config)) => config,
        Ok(None) => {
            info!("{CONFIG_ENV} not set, using built-in Delhi Metro network");
            delhi_metro()
        }
        Err(e) => {
            error!(error = %e, "Invalid network configuration");
            return ExitCode::FAILURE;
        }
    };

    // Build once; every request borrows this network
    let network = match Network::from_config(&config) {
        Ok(network) => network,
        Err(e) => {
            error!(error = %e, "Failed to build network");
            return ExitCode::FAILURE;
        }
    };
    info!(
        stops = network.stop_count(),
        lines = network.line_count(),
        interchanges = network.interchanges().len(),
        "Network ready"
    );

    let listen = std::env::var(LISTEN_ENV).unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
    let addr: SocketAddr = match listen.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(%listen, error = %e, "Invalid listen address");
            return ExitCode::FAILURE;
        }
    };

    let app = create_router(AppState::new(network));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!("Metro route finder listening on http://{addr}");
    info!("  GET /health                 - Health check");
    info!("  GET /stops                  - List stops");
    info!("  GET /lines                  - List lines");
    info!("  GET /route?from=..&to=..    - Find a route");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
