//! PostgreSQL implementation of DocumentStore.
//!
//! All collections share one `documents` table; the collection name is a
//! column and the record is a JSONB body. Filters are evaluated with JSONB
//! containment (`body @> filter`), and uniqueness is enforced by the
//! `(collection, unique_key)` index so concurrent signups cannot both insert.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::DocumentId;
use crate::ports::{DocumentStore, Filter, InsertOutcome, StoreError, StoredDocument};

/// PostgreSQL implementation of DocumentStore.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    /// Creates a new PostgresDocumentStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the bundled schema migrations.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<DocumentId, StoreError> {
        let id = DocumentId::new();
        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id.as_uuid())
        .bind(collection)
        .bind(Json(&document))
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Write(format!("Failed to insert document: {}", e)))?;

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
            .ok_or_else(|| {
                StoreError::Write(format!("document has no string field '{}'", key_field))
            })?
            .to_string();

        let id = DocumentId::new();
        let row = sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body, unique_key)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (collection, unique_key) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(id.as_uuid())
        .bind(collection)
        .bind(Json(&document))
        .bind(&key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Write(format!("Failed to insert document: {}", e)))?;

        Ok(match row {
            Some(_) => InsertOutcome::Inserted(id),
            None => InsertOutcome::Duplicate,
        })
    }

    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM documents WHERE collection = $1 AND body @> $2",
        )
        .bind(collection)
        .bind(Json(filter.to_json()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Read(format!("Failed to count documents: {}", e)))?;

        Ok(result.0.max(0) as u64)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<StoredDocument>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(collection)
        .bind(Json(filter.to_json()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Read(format!("Failed to fetch document: {}", e)))?;

        match row {
            Some(row) => {
                let id: Uuid = row
                    .try_get("id")
                    .map_err(|e| StoreError::Read(format!("Invalid document id: {}", e)))?;
                let Json(body): Json<Value> = row
                    .try_get("body")
                    .map_err(|e| StoreError::Read(format!("Invalid document body: {}", e)))?;
                Ok(Some(StoredDocument {
                    id: DocumentId::from_uuid(id),
                    body,
                }))
            }
            None => Ok(None),
        }
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT collection FROM documents ORDER BY collection")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| StoreError::Read(e.to_string()))?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    fn lazy_store(url: &str) -> PostgresDocumentStore {
        let pool = PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(200))
            .connect_lazy(url)
            .unwrap();
        PostgresDocumentStore::new(pool)
    }

    #[test]
    fn postgres_store_is_a_document_store() {
        fn _accepts(_store: &dyn DocumentStore) {}
    }

    #[tokio::test]
    async fn unreachable_database_surfaces_read_error() {
        // Port 1 is never a Postgres server
        let store = lazy_store("postgres://rome@127.0.0.1:1/rome");
        let result = store.count("earlyaccess", &Filter::all()).await;
        assert!(matches!(result, Err(StoreError::Read(_))));
    }

    #[tokio::test]
    async fn list_collections_error_is_the_driver_message() {
        let store = lazy_store("postgres://rome@127.0.0.1:1/rome");
        let Err(StoreError::Read(msg)) = store.list_collections().await else {
            panic!("expected a read error");
        };
        assert!(!msg.is_empty());
        assert!(!msg.starts_with("Failed to"));
    }

    #[tokio::test]
    async fn unreachable_database_surfaces_write_error() {
        let store = lazy_store("postgres://rome@127.0.0.1:1/rome");
        let result = store.insert("contact", serde_json::json!({"m": 1})).await;
        assert!(matches!(result, Err(StoreError::Write(_))));
    }
}
