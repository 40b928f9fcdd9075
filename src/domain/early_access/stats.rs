//! Capacity statistics for the early access programme.

use serde::{Deserialize, Serialize};

/// Maximum number of early access spots.
pub const EARLY_ACCESS_CAP: u64 = 10_000;

/// Registration count against the fixed cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityStats {
    pub total: u64,
    pub spots_left: u64,
    pub cap: u64,
}

impl CapacityStats {
    /// Computes stats for `total` registrations against [`EARLY_ACCESS_CAP`].
    pub fn from_total(total: u64) -> Self {
        Self::with_cap(total, EARLY_ACCESS_CAP)
    }

    /// Computes stats against an arbitrary cap. `spots_left` saturates at zero.
    pub fn with_cap(total: u64, cap: u64) -> Self {
        Self {
            total,
            spots_left: cap.saturating_sub(total),
            cap,
        }
    }
}
