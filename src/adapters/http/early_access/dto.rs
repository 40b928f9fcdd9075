//! Request and response bodies for early access endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::early_access::{CapacityStats, SignupOutcome};
use crate::domain::foundation::EmailAddress;

/// Body of `POST /api/early-access`.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub email: EmailAddress,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, rename = "ref")]
    pub referral: Option<String>,
}

/// Signup result. `id` is set for a new record; `message` and `email` for
/// a repeat signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl From<SignupOutcome> for SignupResponse {
    fn from(outcome: SignupOutcome) -> Self {
        match outcome {
            SignupOutcome::Registered { id } => Self {
                status: "ok".to_string(),
                message: None,
                email: None,
                id: Some(id.to_string()),
            },
            SignupOutcome::AlreadyRegistered { email } => Self {
                status: "ok".to_string(),
                message: Some("Already signed up".to_string()),
                email: Some(email.into()),
                id: None,
            },
        }
    }
}

/// Body of `GET /api/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_opted_in: u64,
    pub spots_left: u64,
    pub cap: u64,
}

impl From<CapacityStats> for StatsResponse {
    fn from(stats: CapacityStats) -> Self {
        Self {
            total_opted_in: stats.total,
            spots_left: stats.spots_left,
            cap: stats.cap,
        }
    }
}
