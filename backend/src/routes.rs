//! Handlers for the `/api` surface.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Wire shape of the greeting payload.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// GET /api/message — the greeting the front-end displays.
pub async fn message() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Hello from Flask!",
    })
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Any other `/api/*` path answers with a JSON 404 instead of the SPA
/// fallback page.
pub async fn api_not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody { error: "Not found" }),
    )
}
