use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Terminal failures of the intake route. Upstream and persistence failures
/// are recovered inside the pipeline and never surface here.
#[derive(Debug)]
pub enum AppError {
    MethodNotAllowed,
    Validation(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed" }),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Internal(msg) => {
                tracing::error!("Error processing request: {msg}");
                // The message is echoed to the caller as-is.
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error", "message": msg }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
