//! HTTP handler for the chat endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::state::AppState;
use crate::application::SendChatMessageCommand;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/chat
pub async fn send_chat_message(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let reply = state
        .send_chat_message_handler()
        .handle(SendChatMessageCommand {
            message: request.message,
        })
        .await?;

    Ok(Json(ChatResponse { reply: reply.text }))
}
