use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::demo_request::{pipeline, DemoRequestPayload};
use crate::error::AppError;
use crate::state::SharedState;

pub async fn submit(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Response, AppError> {
    // The body is parsed by hand so malformed JSON takes the 500 path
    // instead of axum's own rejection.
    let request = DemoRequestPayload::from_json(&body)?.validate()?;

    let result = pipeline::run(&state, &request).await;

    let body = if result.forwarded() {
        json!({
            "success": true,
            "message": "Demo request submitted successfully",
        })
    } else {
        // Still a 200: the request was accepted and recorded.
        json!({
            "success": false,
            "error": "Failed to submit to Sendy",
            "message": "We've saved your request and will contact you soon.",
        })
    };

    Ok((StatusCode::OK, Json(body)).into_response())
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
