use axum::{extract::State, Json};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;

use crate::AppState;

/// Process start time for uptime reporting
static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

pub fn mark_started() {
    Lazy::force(&START_TIME);
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check OK")
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "entries": state.store.count().await,
        "uptime_seconds": START_TIME.elapsed().as_secs(),
    }))
}
