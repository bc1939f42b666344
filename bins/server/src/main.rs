//! fxgate API Server
//!
//! Main entry point for the exchange rate gateway.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxgate_api::openapi::DOCS_PATH;
use fxgate_api::{AppState, create_router};
use fxgate_shared::{AppConfig, RunEnvironment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment-specific file first; dotenvy never overrides a set variable
    let environment = RunEnvironment::current();
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load_for(environment)?;

    // Initialize tracing
    let level = &config.log.level;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "fxgate={level},fxgate_api={level},fxgate_upstream={level},tower_http={level}"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        environment = %config.environment,
        exchange_rate_host = %config.exchange_rate.host,
        decimal_places = config.exchange_rate.decimal_places,
        "Configuration loaded"
    );

    // Create application state
    let state = AppState::from_config(&config);

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);
    info!("API documentation at http://{}{}/", addr, DOCS_PATH);

    axum::serve(listener, app).await?;

    Ok(())
}
