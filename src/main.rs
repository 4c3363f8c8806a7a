use chain_explorer_service::{api, config::Config, db, state::AppState, SqliteStore};

use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting chain-explorer-service");

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    // Setup database connection
    let db_pool = db::connection::establish_connection(&config).await?;
    sqlx::query("SELECT 1").execute(&db_pool).await?;
    info!("Database connection verified");

    // Create shared state
    let store = Arc::new(SqliteStore::new(db_pool.clone()));
    let app_state = Arc::new(AppState::new(config.clone(), store.clone(), store));

    // Cancel on Ctrl-C so the server drains in-flight requests
    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
        }
        info!("Shutdown signal received");
        signal_token.cancel();
    });

    // Start HTTP server
    let app = api::create_router(app_state);
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Starting server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    db_pool.close().await;
    info!("Server stopped");
    Ok(())
}
