//! HTTP route handlers.
//!
//! The service exposes a single route on `/`. Unmatched paths get a plain
//! 404; other methods on `/` get axum's 405 from the method router.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod home;

use axum::{middleware, routing::get, Router};
use http::StatusCode;

use crate::middleware::request_id_layer;

/// Fallback handler for unmatched paths.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}

/// Creates the Axum router.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home::index))
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
