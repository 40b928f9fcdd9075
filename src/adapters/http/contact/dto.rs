//! Request and response bodies for the contact endpoint.

use serde::{Deserialize, Serialize};

use crate::application::SubmitContactCommand;
use crate::domain::foundation::{DocumentId, EmailAddress};

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub email: EmailAddress,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    #[serde(default)]
    pub source: Option<String>,
}

impl From<ContactRequest> for SubmitContactCommand {
    fn from(req: ContactRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            subject: req.subject,
            message: req.message,
            source: req.source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub status: String,
    pub id: String,
}

impl From<DocumentId> for ContactResponse {
    fn from(id: DocumentId) -> Self {
        Self {
            status: "ok".to_string(),
            id: id.to_string(),
        }
    }
}
