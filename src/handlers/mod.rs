pub mod analytics_handler;
pub mod entries_handler;
pub mod health;
pub mod metrics;
pub mod root_handler;

pub use health::health_check;
pub use metrics::{metrics_handler, setup_metrics_recorder, MetricsState};
