//! Application-level error type shared by all handlers.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::ports::StoreError;

/// Failure of an application operation.
///
/// Carries the underlying message so the HTTP boundary can echo it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Database not available")]
    StoreUnavailable,

    #[error("Database write failed: {0}")]
    StoreWrite(String),

    #[error("Database read failed: {0}")]
    StoreRead(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Machine-readable category, used in logs.
    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::StoreUnavailable => ErrorCode::StoreUnavailable,
            ServiceError::StoreWrite(_) => ErrorCode::StoreWriteError,
            ServiceError::StoreRead(_) => ErrorCode::StoreReadError,
            ServiceError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable => ServiceError::StoreUnavailable,
            StoreError::Write(msg) => ServiceError::StoreWrite(msg),
            StoreError::Read(msg) => ServiceError::StoreRead(msg),
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Internal(format!("Serialization failed: {}", err))
    }
}
