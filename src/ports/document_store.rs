//! Document store port - the only persistence seam of the backend.
//!
//! Services never talk to a store directly. They receive a [`StoreHandle`],
//! which is either a configured [`DocumentStore`] or explicitly
//! `NotConfigured`. Reads against an unconfigured handle degrade to "nothing
//! there"; writes fail with [`StoreError::Unavailable`].
//!
//! # Example
//!
//! ```ignore
//! let handle = StoreHandle::configured(Arc::new(InMemoryDocumentStore::new()));
//! let id = handle.insert("contact", serde_json::json!({"email": "a@b.io"})).await?;
//! let n = handle.count("contact", &Filter::all()).await?;
//! ```

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::domain::foundation::DocumentId;

/// Errors that can occur during store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Database not available")]
    Unavailable,

    #[error("Database write failed: {0}")]
    Write(String),

    #[error("Database read failed: {0}")]
    Read(String),
}

/// Field equality constraints. The empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter(Map<String, Value>);

impl Filter {
    /// Filter matching all documents.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter requiring `field == value`.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::all().and_eq(field, value)
    }

    /// Adds another equality constraint.
    pub fn and_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// True when every constrained field is present in `document` with an equal value.
    pub fn matches(&self, document: &Value) -> bool {
        self.0
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }

    /// The constraints as a JSON object (used for JSONB containment).
    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// A document as read back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub body: Value,
}

/// Result of a conditional insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(DocumentId),
    /// A document with the same key already exists; nothing was written.
    Duplicate,
}

/// Capability surface of a document store.
///
/// Implementations must be safe for concurrent use by many requests.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Append `document` to `collection`, returning the store-assigned id.
    async fn insert(&self, collection: &str, document: Value) -> Result<DocumentId, StoreError>;

    /// Atomically insert `document` unless a document in `collection` already
    /// has the same string value at `key_field`.
    ///
    /// The check and the write must not be separable by a concurrent insert.
    async fn insert_unique(
        &self,
        collection: &str,
        key_field: &str,
        document: Value,
    ) -> Result<InsertOutcome, StoreError>;

    /// Number of documents in `collection` matching `filter`.
    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError>;

    /// First document in `collection` matching `filter`.
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<StoredDocument>, StoreError>;

    /// Names of all collections holding at least one document.
    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;
}

/// The store dependency handed to every service.
#[derive(Clone, Default)]
pub enum StoreHandle {
    /// No store location was configured.
    #[default]
    NotConfigured,
    Configured(Arc<dyn DocumentStore>),
}

impl StoreHandle {
    pub fn configured(store: Arc<dyn DocumentStore>) -> Self {
        StoreHandle::Configured(store)
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, StoreHandle::Configured(_))
    }

    /// Insert; fails with [`StoreError::Unavailable`] when not configured.
    pub async fn insert(&self, collection: &str, document: Value) -> Result<DocumentId, StoreError> {
        match self {
            StoreHandle::NotConfigured => Err(StoreError::Unavailable),
            StoreHandle::Configured(store) => store.insert(collection, document).await,
        }
    }

    /// Conditional insert; fails with [`StoreError::Unavailable`] when not configured.
    pub async fn insert_unique(
        &self,
        collection: &str,
        key_field: &str,
        document: Value,
    ) -> Result<InsertOutcome, StoreError> {
        match self {
            StoreHandle::NotConfigured => Err(StoreError::Unavailable),
            StoreHandle::Configured(store) => {
                store.insert_unique(collection, key_field, document).await
            }
        }
    }

    /// Count; zero when not configured.
    pub async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        match self {
            StoreHandle::NotConfigured => Ok(0),
            StoreHandle::Configured(store) => store.count(collection, filter).await,
        }
    }

    /// Find; `None` when not configured.
    pub async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<StoredDocument>, StoreError> {
        match self {
            StoreHandle::NotConfigured => Ok(None),
            StoreHandle::Configured(store) => store.find_one(collection, filter).await,
        }
    }

    /// Collection names; empty when not configured.
    pub async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        match self {
            StoreHandle::NotConfigured => Ok(Vec::new()),
            StoreHandle::Configured(store) => store.list_collections().await,
        }
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreHandle::NotConfigured => write!(f, "StoreHandle::NotConfigured"),
            StoreHandle::Configured(_) => write!(f, "StoreHandle::Configured"),
        }
    }
}
