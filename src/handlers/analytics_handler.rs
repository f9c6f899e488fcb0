use axum::{extract::Query, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{models::MoodAnalytics, stoic::mood_analytics};

#[derive(Debug, Deserialize, IntoParams)]
pub struct MoodAnalyticsQuery {
    /// Free-form period label, echoed back as-is
    #[serde(default = "default_period")]
    pub period: String,
}

fn default_period() -> String {
    "week".to_string()
}

/// GET /analytics/mood?period=
#[utoipa::path(
    get,
    path = "/analytics/mood",
    params(MoodAnalyticsQuery),
    responses(
        (status = 200, description = "Sample mood analytics", body = MoodAnalytics)
    ),
    tag = "analytics"
)]
pub async fn get_mood_analytics(Query(query): Query<MoodAnalyticsQuery>) -> Json<MoodAnalytics> {
    Json(mood_analytics(&query.period))
}
