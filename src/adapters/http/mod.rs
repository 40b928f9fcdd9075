//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own module exposing a `Router<AppState>`;
//! [`app_router`] merges them and applies tracing, CORS and timeouts.

pub mod chat;
pub mod contact;
pub mod diagnostics;
pub mod early_access;
mod error;
mod router;
mod state;

pub use error::{ApiError, ApiJson, ErrorResponse};
pub use router::app_router;
pub use state::AppState;
