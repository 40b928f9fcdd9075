//! HTTP handlers for the contact endpoint.

use axum::extract::State;
use axum::Json;

use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::state::AppState;

use super::dto::{ContactRequest, ContactResponse};

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ContactRequest>,
) -> Result<Json<ContactResponse>, ApiError> {
    let id = state.submit_contact_handler().handle(request.into()).await?;
    Ok(Json(id.into()))
}
