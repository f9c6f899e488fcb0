use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EndpointIndex {
    pub docs: String,
    pub entries: String,
    pub entry_by_id: String,
    pub analytics: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub endpoints: EndpointIndex,
}
