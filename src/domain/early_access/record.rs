//! Early access registration record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmailAddress, Timestamp};

/// One person's registration of interest.
///
/// `email` is the logical unique key of the `earlyaccess` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarlyAccessRecord {
    pub email: EmailAddress,
    pub source: Option<String>,
    #[serde(rename = "ref")]
    pub referral: Option<String>,
    pub created_at: Timestamp,
}

impl EarlyAccessRecord {
    /// Collection holding early access records.
    pub const COLLECTION: &'static str = "earlyaccess";

    /// Document field used as the uniqueness key.
    pub const KEY_FIELD: &'static str = "email";

    /// Creates a record stamped with the current time.
    pub fn new(email: EmailAddress, source: Option<String>, referral: Option<String>) -> Self {
        Self {
            email,
            source,
            referral,
            created_at: Timestamp::now(),
        }
    }
}
