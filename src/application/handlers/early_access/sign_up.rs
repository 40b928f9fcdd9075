//! SignUpHandler - Command handler for early access registration.

use crate::application::ServiceError;
use crate::domain::early_access::{EarlyAccessRecord, SignupOutcome};
use crate::domain::foundation::EmailAddress;
use crate::ports::{Filter, InsertOutcome, StoreHandle};

/// Command to register interest in early access.
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub email: EmailAddress,
    pub source: Option<String>,
    pub referral: Option<String>,
}

/// Handler for early access signups.
///
/// An email is registered at most once. A repeated signup is not an error;
/// it reports `AlreadyRegistered` and writes nothing.
pub struct SignUpHandler {
    store: StoreHandle,
}

impl SignUpHandler {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SignUpCommand) -> Result<SignupOutcome, ServiceError> {
        let existing = self
            .store
            .find_one(
                EarlyAccessRecord::COLLECTION,
                &Filter::eq(EarlyAccessRecord::KEY_FIELD, cmd.email.as_str()),
            )
            .await?;

        if existing.is_some() {
            tracing::debug!(email = %cmd.email, "Early access signup already registered");
            return Ok(SignupOutcome::AlreadyRegistered { email: cmd.email });
        }

        let record = EarlyAccessRecord::new(cmd.email, cmd.source, cmd.referral);
        let document = serde_json::to_value(&record)?;

        // find_one and insert_unique can interleave with another signup;
        // the store decides the winner.
        match self
            .store
            .insert_unique(
                EarlyAccessRecord::COLLECTION,
                EarlyAccessRecord::KEY_FIELD,
                document,
            )
            .await?
        {
            InsertOutcome::Inserted(id) => {
                tracing::info!(document_id = %id, "Early access signup registered");
                Ok(SignupOutcome::Registered { id })
            }
            InsertOutcome::Duplicate => {
                tracing::debug!(email = %record.email, "Early access signup lost insert race");
                Ok(SignupOutcome::AlreadyRegistered {
                    email: record.email,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::document_store::InMemoryDocumentStore;
    use crate::application::test_support::FailingStore;
    use crate::domain::foundation::DocumentId;
    use crate::ports::{DocumentStore, StoreError, StoredDocument};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    /// Never sees an existing record but always loses the conditional insert.
    struct RacingStore {
        inserted: Mutex<Vec<Value>>,
    }

    #[async_trait]
    impl DocumentStore for RacingStore {
        async fn insert(&self, _collection: &str, _document: Value) -> Result<DocumentId, StoreError> {
            Ok(DocumentId::new())
        }

        async fn insert_unique(
            &self,
            _collection: &str,
            _key_field: &str,
            document: Value,
        ) -> Result<InsertOutcome, StoreError> {
            self.inserted.lock().unwrap().push(document);
            Ok(InsertOutcome::Duplicate)
        }

        async fn count(&self, _collection: &str, _filter: &Filter) -> Result<u64, StoreError> {
            Ok(1)
        }

        async fn find_one(
            &self,
            _collection: &str,
            _filter: &Filter,
        ) -> Result<Option<StoredDocument>, StoreError> {
            Ok(None)
        }

        async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
            Ok(vec![EarlyAccessRecord::COLLECTION.to_string()])
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn command(email: &str) -> SignUpCommand {
        SignUpCommand {
            email: EmailAddress::parse(email).unwrap(),
            source: Some("landing".to_string()),
            referral: Some("FRIEND42".to_string()),
        }
    }

    fn in_memory() -> (InMemoryDocumentStore, SignUpHandler) {
        let store = InMemoryDocumentStore::new();
        let handler = SignUpHandler::new(StoreHandle::configured(Arc::new(store.clone())));
        (store, handler)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn registers_new_email() {
        let (store, handler) = in_memory();

        let outcome = handler.handle(command("new@example.com")).await.unwrap();

        let SignupOutcome::Registered { id } = outcome else {
            panic!("expected Registered, got {:?}", outcome);
        };
        let docs = store.documents(EarlyAccessRecord::COLLECTION).await;
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, id);
        assert_eq!(docs[0].body["email"], "new@example.com");
        assert_eq!(docs[0].body["source"], "landing");
        assert_eq!(docs[0].body["ref"], "FRIEND42");
        assert!(docs[0].body["created_at"].is_string());
    }

    #[tokio::test]
    async fn second_signup_reports_already_registered() {
        let (store, handler) = in_memory();

        let first = handler.handle(command("twice@example.com")).await.unwrap();
        let second = handler.handle(command("twice@example.com")).await.unwrap();

        assert!(matches!(first, SignupOutcome::Registered { .. }));
        assert_eq!(
            second,
            SignupOutcome::AlreadyRegistered {
                email: EmailAddress::parse("twice@example.com").unwrap()
            }
        );
        assert_eq!(store.documents(EarlyAccessRecord::COLLECTION).await.len(), 1);
    }

    #[tokio::test]
    async fn email_match_is_case_sensitive() {
        let (store, handler) = in_memory();

        handler.handle(command("case@example.com")).await.unwrap();
        let outcome = handler.handle(command("Case@example.com")).await.unwrap();

        assert!(matches!(outcome, SignupOutcome::Registered { .. }));
        assert_eq!(store.documents(EarlyAccessRecord::COLLECTION).await.len(), 2);
    }

    #[tokio::test]
    async fn lost_insert_race_reports_already_registered() {
        let store = Arc::new(RacingStore {
            inserted: Mutex::new(Vec::new()),
        });
        let handler = SignUpHandler::new(StoreHandle::configured(store.clone()));

        let outcome = handler.handle(command("race@example.com")).await.unwrap();

        assert!(matches!(outcome, SignupOutcome::AlreadyRegistered { .. }));
        assert_eq!(store.inserted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_signups_store_one_record() {
        let (store, handler) = in_memory();
        let handler = Arc::new(handler);

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let handler = handler.clone();
                tokio::spawn(async move { handler.handle(command("rush@example.com")).await })
            })
            .collect();

        let mut registered = 0;
        for task in tasks {
            if let SignupOutcome::Registered { .. } = task.await.unwrap().unwrap() {
                registered += 1;
            }
        }

        assert_eq!(registered, 1);
        assert_eq!(store.documents(EarlyAccessRecord::COLLECTION).await.len(), 1);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn unconfigured_store_fails_with_unavailable() {
        let handler = SignUpHandler::new(StoreHandle::NotConfigured);

        let result = handler.handle(command("nobody@example.com")).await;

        assert_eq!(result, Err(ServiceError::StoreUnavailable));
    }

    #[tokio::test]
    async fn read_failure_propagates_without_write() {
        let store = Arc::new(FailingStore::read_error("connection refused"));
        let handler = SignUpHandler::new(StoreHandle::configured(store.clone()));

        let result = handler.handle(command("x@example.com")).await;

        assert_eq!(
            result,
            Err(ServiceError::StoreRead("connection refused".to_string()))
        );
        assert_eq!(store.calls(), vec!["find_one".to_string()]);
    }
}
