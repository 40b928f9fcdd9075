//! `GET /test` - service and store status. Always answers 200.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::adapters::http::state::AppState;
use crate::application::RunDiagnosticsQuery;
use crate::domain::diagnostics::DiagnosticsReport;

pub fn diagnostics_routes() -> Router<AppState> {
    Router::new().route("/test", get(run_diagnostics))
}

/// GET /test
async fn run_diagnostics(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    Json(state.run_diagnostics_handler().handle(RunDiagnosticsQuery).await)
}
