//! HTTP adapter for the lobby chat.

mod handlers;
mod routes;

pub use handlers::{ChatRequest, ChatResponse};
pub use routes::chat_routes;
