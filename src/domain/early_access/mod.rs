//! Early access domain - registrations and capacity.

mod record;
mod stats;

pub use record::EarlyAccessRecord;
pub use stats::{CapacityStats, EARLY_ACCESS_CAP};

use crate::domain::foundation::{DocumentId, EmailAddress};

/// Result of a signup attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// A new record was stored.
    Registered { id: DocumentId },
    /// A record for this email already existed; nothing was written.
    AlreadyRegistered { email: EmailAddress },
}
