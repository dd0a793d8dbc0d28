//! HTTP backend for the starter: the message API plus static serving of the
//! built front-end.

pub mod routes;

use std::path::Path;

use anyhow::Result;
use axum::routing::{any, get};
use axum::Router;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Builds the application router.
///
/// `/api/message` answers with the greeting, every other `/api/*` path gets a
/// JSON 404, and anything else is served from `static_dir` with an
/// `index.html` fallback so client-side routes still load the app.
///
/// CORS headers are only added when `cors_origins` is non-empty; an origin
/// that is not a valid header value is a startup error.
pub fn app(static_dir: &Path, cors_origins: &[String]) -> Result<Router> {
    let spa = ServeDir::new(static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    let mut router = Router::new()
        .route("/api/message", get(routes::message))
        .route("/api/*path", any(routes::api_not_found))
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http());

    if !cors_origins.is_empty() {
        let origins = cors_origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;
        router = router.layer(CorsLayer::new().allow_origin(AllowOrigin::list(origins)));
    }

    Ok(router)
}
