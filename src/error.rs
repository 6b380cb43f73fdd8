use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Itinerary planning failed: {0}")]
    Planning(String),
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Planning(err.to_string())
    }
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::UnknownPreset(ref e) => {
                tracing::info!("Unknown preset requested: {}", e);
                (StatusCode::NOT_FOUND, e.as_str())
            }
            AppError::Planning(ref e) => {
                tracing::error!("Itinerary planning failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Itinerary planning failed")
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::UnknownPreset("x".into()), StatusCode::NOT_FOUND),
            (
                AppError::Planning("join".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[tokio::test]
    async fn test_join_error_becomes_planning_error() {
        let join_error = tokio::spawn(async { panic!("boom") }).await.unwrap_err();
        assert!(matches!(AppError::from(join_error), AppError::Planning(_)));
    }
}
