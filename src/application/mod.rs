//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

mod error;
pub mod handlers;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::ServiceError;
pub use handlers::{
    GetStatsHandler, GetStatsQuery, RunDiagnosticsHandler, RunDiagnosticsQuery,
    SendChatMessageCommand, SendChatMessageHandler, SignUpCommand, SignUpHandler,
    SubmitContactCommand, SubmitContactHandler,
};
