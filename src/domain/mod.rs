//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (email address, document IDs, timestamps, errors)
//! - `early_access` - Early access registrations and capacity statistics
//! - `contact` - Contact form submissions
//! - `chat` - Ordered keyword rules for the lobby companion
//! - `diagnostics` - Store health report served at `/test`

pub mod chat;
pub mod contact;
pub mod diagnostics;
pub mod early_access;
pub mod foundation;
