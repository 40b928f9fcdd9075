//! In-Memory Document Store Adapter
//!
//! Keeps collections in process memory. Used by tests and for `memory://`
//! configuration during local development; contents are lost on restart.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DocumentId;
use crate::ports::{DocumentStore, Filter, InsertOutcome, StoreError, StoredDocument};

/// In-memory storage for documents, grouped by collection in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<BTreeMap<String, Vec<StoredDocument>>>>,
}

impl InMemoryDocumentStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// All documents of a collection, in insertion order
    pub async fn documents(&self, collection: &str) -> Vec<StoredDocument> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<DocumentId, StoreError> {
        let id = DocumentId::new();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, body: document });
        Ok(id)
    }

    async fn insert_unique(
        &self,
        collection: &str,
        key_field: &str,
        document: Value,
    ) -> Result<InsertOutcome, StoreError> {
        let key = document
            .get(key_field)
            .and_then(Value::as_str)
            .ok_or_else(|| StoreError::Write(format!("document has no string field '{}'", key_field)))?
            .to_string();

        // Check and insert under one write lock
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        let taken = docs
            .iter()
            .any(|d| d.body.get(key_field).and_then(Value::as_str) == Some(key.as_str()));
        if taken {
            return Ok(InsertOutcome::Duplicate);
        }

        let id = DocumentId::new();
        docs.push(StoredDocument { id, body: document });
        Ok(InsertOutcome::Inserted(id))
    }

    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        let collections = self.collections.read().await;
        let count = collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(&d.body)).count())
            .unwrap_or(0);
        Ok(count as u64)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(&d.body)))
            .cloned())
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect())
    }
}
