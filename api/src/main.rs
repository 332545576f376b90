// ============================================================================
// USER-MANAGEMENT PLACEHOLDER SERVICE
// ============================================================================

// - GET /        service status (name, environment, UTC timestamp)
// - GET /health  load-balancer liveness probe
// - Environment configuration (PORT, APP_ENV, RUST_LOG, .env)
// - Structured logging with per-request IDs
// - Graceful shutdown on SIGINT/SIGTERM

mod config;
mod dto;
mod errors;
mod middleware;
mod routes;
mod server;
mod states;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    config::{Config, DEFAULT_LOG_FILTER},
    errors::StartupError,
    routes::create_router,
    states::AppState,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(false)
        .compact()
        .init();

    exit_code(run().await)
}

/// Log a startup failure once and map it to a non-zero exit status.
fn exit_code(result: Result<(), StartupError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::load()?;
    let addr = config.bind_addr();

    info!(env = %config.app_env, "Loaded configuration");

    let app = create_router(AppState::new(config));
    let listener = server::bind(addr).await?;

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /                 - Service status");
    info!("  GET    /health           - Health check");

    server::serve(listener, app, server::shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}
