mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod startup;
mod stoic;
mod store;

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use handlers::MetricsState;
pub use store::EntryStore;

pub struct AppState {
    pub store: EntryStore,
    pub config: AppConfig,
    pub metrics: Arc<MetricsState>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with conditional JSON/text output
    let use_json = std::env::var("LOG_FORMAT")
        .unwrap_or_else(|_| "text".to_string()) == "json";

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,stoic_diary=debug,tower_http=debug".into());

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    handlers::health::mark_started();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Configuration error: {}", e);
        e
    })?;

    let metrics = Arc::new(handlers::setup_metrics_recorder().map_err(|e| {
        tracing::error!("Failed to install metrics recorder: {}", e);
        e
    })?);
    tracing::info!("Metrics recorder initialized");

    let bind_addr = config.bind_addr();

    // Entries live only as long as this process
    let state = Arc::new(AppState {
        store: EntryStore::new(),
        config,
        metrics,
    });

    let app = startup::build_router(state);

    let listener = TcpListener::bind(&bind_addr).await.map_err(|e| {
        tracing::error!("Failed to bind {}: {}", bind_addr, e);
        e
    })?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
