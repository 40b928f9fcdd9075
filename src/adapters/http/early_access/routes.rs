//! HTTP routes for early access endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{get_stats, sign_up};

pub fn early_access_routes() -> Router<AppState> {
    Router::new()
        // POST /api/early-access
        .route("/api/early-access", post(sign_up))
        // GET /api/stats
        .route("/api/stats", get(get_stats))
}
