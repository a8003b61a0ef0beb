use dotenvy::dotenv;
use std::process::ExitCode;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use events_server::config::{Config, SHUTDOWN_GRACE_PERIOD};
use events_server::routes::create_routes;
use events_server::server::{serve, shutdown_signal};
use events_server::state::AppState;
use events_server::store::JsonFileEventStore;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let store = JsonFileEventStore::new(config.events_path.clone());
    tracing::info!(path = %store.path().display(), "Serving events from file");
    let state = AppState::new(store);
    let app = create_routes(state);

    let addr = config.addr();
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to bind address");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("🚀 Server running at http://{}", addr);

    match serve(listener, app, shutdown_signal(), SHUTDOWN_GRACE_PERIOD).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "Server forced to shutdown");
            ExitCode::FAILURE
        }
    }
}
