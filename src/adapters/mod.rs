//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `document_store` - PostgreSQL and in-memory document stores
//! - `http` - axum REST API

pub mod document_store;
pub mod http;
