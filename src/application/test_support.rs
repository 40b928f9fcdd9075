//! Shared test doubles for handler tests.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

use crate::domain::foundation::DocumentId;
use crate::ports::{DocumentStore, Filter, InsertOutcome, StoreError, StoredDocument};

/// Store whose every call fails with a fixed error, recording what was asked.
pub struct FailingStore {
    error: StoreError,
    calls: Mutex<Vec<String>>,
}

impl FailingStore {
    pub fn new(error: StoreError) -> Self {
        Self {
            error,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn read_error(message: &str) -> Self {
        Self::new(StoreError::Read(message.to_string()))
    }

    pub fn write_error(message: &str) -> Self {
        Self::new(StoreError::Write(message.to_string()))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn fail<T>(&self, call: &str) -> Result<T, StoreError> {
        self.calls.lock().unwrap().push(call.to_string());
        Err(self.error.clone())
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert(&self, _collection: &str, _document: Value) -> Result<DocumentId, StoreError> {
        self.fail("insert")
    }

    async fn insert_unique(
        &self,
        _collection: &str,
        _key_field: &str,
        _document: Value,
    ) -> Result<InsertOutcome, StoreError> {
        self.fail("insert_unique")
    }

    async fn count(&self, _collection: &str, _filter: &Filter) -> Result<u64, StoreError> {
        self.fail("count")
    }

    async fn find_one(
        &self,
        _collection: &str,
        _filter: &Filter,
    ) -> Result<Option<StoredDocument>, StoreError> {
        self.fail("find_one")
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        self.fail("list_collections")
    }
}

/// Store that reports a fixed count and never finds or keeps anything.
pub struct FixedCountStore {
    pub total: u64,
}

#[async_trait]
impl DocumentStore for FixedCountStore {
    async fn insert(&self, _collection: &str, _document: Value) -> Result<DocumentId, StoreError> {
        Ok(DocumentId::new())
    }

    async fn insert_unique(
        &self,
        _collection: &str,
        _key_field: &str,
        _document: Value,
    ) -> Result<InsertOutcome, StoreError> {
        Ok(InsertOutcome::Inserted(DocumentId::new()))
    }

    async fn count(&self, _collection: &str, _filter: &Filter) -> Result<u64, StoreError> {
        Ok(self.total)
    }

    async fn find_one(
        &self,
        _collection: &str,
        _filter: &Filter,
    ) -> Result<Option<StoredDocument>, StoreError> {
        Ok(None)
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        Ok(Vec::new())
    }
}
