use axum::Json;

use crate::models::{EndpointIndex, WelcomeResponse};

/// GET / - Service banner with an index of the main endpoints
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    ),
    tag = "info"
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Stoic Diary API".to_string(),
        endpoints: EndpointIndex {
            docs: "/docs".to_string(),
            entries: "/entries".to_string(),
            entry_by_id: "/entries/{entry_id}".to_string(),
            analytics: "/analytics/mood".to_string(),
        },
    })
}
