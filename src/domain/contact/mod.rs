//! Contact domain - inbound messages from the site's contact form.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmailAddress, Timestamp};

/// A contact form submission. Never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: Option<String>,
    pub email: EmailAddress,
    pub subject: Option<String>,
    /// Stored as supplied, including empty or whitespace-only text.
    pub message: String,
    pub source: Option<String>,
    pub created_at: Timestamp,
}

impl ContactRecord {
    /// Collection holding contact submissions.
    pub const COLLECTION: &'static str = "contact";

    /// Creates a record stamped with the current time.
    pub fn new(
        name: Option<String>,
        email: EmailAddress,
        subject: Option<String>,
        message: String,
        source: Option<String>,
    ) -> Self {
        Self {
            name,
            email,
            subject,
            message,
            source,
            created_at: Timestamp::now(),
        }
    }
}
