use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn entry_not_found(id: i64) -> Self {
        AppError::NotFound(format!("Entry {} not found", id))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_id() {
        let err = AppError::entry_not_found(42);
        assert_eq!(err.to_string(), "Not Found: Entry 42 not found");
    }

    #[test]
    fn test_not_found_status() {
        let response = AppError::entry_not_found(7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
