//! SubmitContactHandler - Command handler for contact form messages.

use crate::application::ServiceError;
use crate::domain::contact::ContactRecord;
use crate::domain::foundation::{DocumentId, EmailAddress};
use crate::ports::StoreHandle;

/// Command carrying one contact form submission.
#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    pub name: Option<String>,
    pub email: EmailAddress,
    pub subject: Option<String>,
    pub message: String,
    pub source: Option<String>,
}

/// Handler storing contact messages. Every submission is stored.
pub struct SubmitContactHandler {
    store: StoreHandle,
}

impl SubmitContactHandler {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SubmitContactCommand) -> Result<DocumentId, ServiceError> {
        let record = ContactRecord::new(cmd.name, cmd.email, cmd.subject, cmd.message, cmd.source);
        let document = serde_json::to_value(&record)?;

        let id = self.store.insert(ContactRecord::COLLECTION, document).await?;
        tracing::info!(document_id = %id, "Contact message stored");
        Ok(id)
    }
}
