//! HTTP routes for the chat endpoint.

use axum::routing::post;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::send_chat_message;

pub fn chat_routes() -> Router<AppState> {
    // POST /api/chat
    Router::new().route("/api/chat", post(send_chat_message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostics::StoreSettings;
    use crate::ports::StoreHandle;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn chat(message: Value) -> (StatusCode, Value) {
        let app = chat_routes().with_state(AppState::new(
            StoreHandle::NotConfigured,
            StoreSettings::default(),
        ));
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(message.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn privacy_beats_greeting() {
        let (status, body) = chat(json!({"message": "hi there, is my data secure?"})).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["reply"]
            .as_str()
            .unwrap()
            .starts_with("In ROME, privacy comes first."));
    }

    #[tokio::test]
    async fn fallback_echoes_trimmed_message() {
        let (_, body) = chat(json!({"message": "  what is ROME  "})).await;
        assert_eq!(
            body["reply"],
            "You said: ‘what is ROME’. I’m here to help you explore ROME."
        );
    }

    #[tokio::test]
    async fn works_without_a_store() {
        let (status, body) = chat(json!({"message": ""})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], "Say something and I’ll respond!");
    }

    #[tokio::test]
    async fn missing_message_is_422() {
        let (status, body) = chat(json!({})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }
}
