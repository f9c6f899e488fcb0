use axum::{extract::State, http::StatusCode, response::IntoResponse};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::Arc;

use crate::AppState;

pub struct MetricsState {
    pub handle: PrometheusHandle,
}

impl MetricsState {
    /// Handle over a recorder that is not installed globally, so several
    /// routers can coexist in one test binary.
    #[cfg(test)]
    pub fn detached() -> Self {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        MetricsState { handle }
    }
}

/// Set up the Prometheus metrics recorder
pub fn setup_metrics_recorder() -> Result<MetricsState, BuildError> {
    // Latency buckets in seconds
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0],
        )?
        .install_recorder()?;

    Ok(MetricsState { handle })
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, state.metrics.handle.render())
}
