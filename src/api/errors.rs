use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// API-specific error wrapper that converts AppError into HTTP responses.
///
/// Existing clients only ever see the fixed generic 500 body, so both
/// variants map to it — including bad pagination input, which would be a
/// 400 in a fresh design. The real error goes to the log and never into
/// the response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::ClientInput(msg) => tracing::error!("rejected query input: {msg}"),
            AppError::Database(msg) => tracing::error!("storage query failed: {msg}"),
        }

        let body = serde_json::json!({
            "error": "Internal Server Error"
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
