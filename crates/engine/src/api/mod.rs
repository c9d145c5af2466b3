//! API layer - HTTP entry points.

pub mod error;
pub mod extract;
pub mod http;

pub use error::ApiError;
pub use extract::ApiJson;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::app::App;
use crate::infrastructure::cors::build_cors_layer;

/// Build the full router with state, body limit, request tracing and CORS.
pub fn router(app: Arc<App>) -> Router {
    let body_limit = app.config.max_body_bytes;
    let mut router = http::routes()
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http());
    if let Some(cors) = build_cors_layer(&app.config) {
        router = router.layer(cors);
    }
    router.with_state(app)
}
