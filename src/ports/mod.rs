//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DocumentStore` - Collection-addressed JSON document persistence
//! - `StoreHandle` - Configured store or explicit absence, injected into services

mod document_store;

pub use document_store::{
    DocumentStore, Filter, InsertOutcome, StoreError, StoreHandle, StoredDocument,
};
