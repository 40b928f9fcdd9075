//! Document Store Adapters
//!
//! Implementations of the DocumentStore port.
//!
//! ## Available Adapters
//!
//! - **PostgresDocumentStore** - JSONB documents in a single PostgreSQL table
//! - **InMemoryDocumentStore** - Stores documents in memory (testing/development)
//!
//! [`connect`] picks one from [`DatabaseConfig`] and wraps it in a
//! [`StoreHandle`]; with no URL configured the handle is `NotConfigured`.

mod in_memory;
mod postgres;

pub use in_memory::InMemoryDocumentStore;
pub use postgres::PostgresDocumentStore;

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use crate::config::{DatabaseConfig, StoreKind, ValidationError};
use crate::ports::StoreHandle;

/// Errors raised while building the store at startup
#[derive(Debug, thiserror::Error)]
pub enum StoreSetupError {
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("Failed to create connection pool: {0}")]
    Pool(#[from] sqlx::Error),
}

/// Build the store handle described by `config`.
///
/// The Postgres pool connects lazily so the service starts even when the
/// database is down; diagnostics then report the failure. Migrations, when
/// enabled, are attempted once and logged on failure.
pub async fn connect(config: &DatabaseConfig) -> Result<StoreHandle, StoreSetupError> {
    let (Some(kind), Some(url)) = (config.store_kind()?, config.trimmed_url()) else {
        tracing::warn!("No database URL configured; running without a document store");
        return Ok(StoreHandle::NotConfigured);
    };

    match kind {
        StoreKind::InMemory => {
            tracing::info!("Using in-memory document store");
            Ok(StoreHandle::configured(Arc::new(InMemoryDocumentStore::new())))
        }
        StoreKind::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(config.acquire_timeout())
                .connect_lazy(url)?;
            let store = PostgresDocumentStore::new(pool);

            if config.run_migrations {
                match store.migrate().await {
                    Ok(()) => tracing::info!("Database migrations applied"),
                    Err(e) => tracing::warn!(error = %e, "Database migrations failed"),
                }
            }

            tracing::info!(
                database = config.name.as_deref().unwrap_or("<unnamed>"),
                "Using PostgreSQL document store"
            );
            Ok(StoreHandle::configured(Arc::new(store)))
        }
    }
}
