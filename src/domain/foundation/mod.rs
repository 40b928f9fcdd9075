//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the ROME backend domain.

mod email;
mod errors;
mod ids;
mod timestamp;

pub use email::EmailAddress;
pub use errors::{ErrorCode, ValidationError};
pub use ids::DocumentId;
pub use timestamp::Timestamp;
