//! Top-level router: every feature's routes plus the cross-cutting layers.

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::chat::chat_routes;
use super::contact::contact_routes;
use super::diagnostics::diagnostics_routes;
use super::early_access::early_access_routes;
use super::state::AppState;

/// Build the application router.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(early_access_routes())
        .merge(contact_routes())
        .merge(chat_routes())
        .merge(diagnostics_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// GET /
async fn root() -> Json<Value> {
    Json(json!({ "message": "ROME backend running" }))
}

/// Any origin unless an explicit list is configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
