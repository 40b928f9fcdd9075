//! HTTP routes for the contact endpoint.

use axum::routing::post;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::submit_contact;

pub fn contact_routes() -> Router<AppState> {
    // POST /api/contact
    Router::new().route("/api/contact", post(submit_contact))
}
