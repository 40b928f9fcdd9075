//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chat;
pub mod contact;
pub mod diagnostics;
pub mod early_access;

pub use chat::{SendChatMessageCommand, SendChatMessageHandler};
pub use contact::{SubmitContactCommand, SubmitContactHandler};
pub use diagnostics::{RunDiagnosticsHandler, RunDiagnosticsQuery};
pub use early_access::{GetStatsHandler, GetStatsQuery, SignUpCommand, SignUpHandler};
