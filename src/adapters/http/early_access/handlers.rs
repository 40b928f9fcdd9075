//! HTTP handlers for early access endpoints.

use axum::extract::State;
use axum::Json;

use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::state::AppState;
use crate::application::{GetStatsQuery, SignUpCommand};

use super::dto::{SignupRequest, SignupResponse, StatsResponse};

/// POST /api/early-access
pub async fn sign_up(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    let cmd = SignUpCommand {
        email: request.email,
        source: request.source,
        referral: request.referral,
    };

    let outcome = state.sign_up_handler().handle(cmd).await?;
    Ok(Json(outcome.into()))
}

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.get_stats_handler().handle(GetStatsQuery).await?;
    Ok(Json(stats.into()))
}
