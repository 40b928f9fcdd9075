//! Diagnostics domain - the `/test` status document.
//!
//! The report is assembled from plain values so that building it can never
//! fail; every store problem becomes status text.

use serde::Serialize;

/// Maximum collection names listed in a report.
pub const MAX_LISTED_COLLECTIONS: usize = 10;

/// Maximum characters of a store error echoed into the report.
pub const MAX_ERROR_CHARS: usize = 50;

const BACKEND_RUNNING: &str = "✅ Running";
const SETTING_SET: &str = "✅ Set";
const SETTING_NOT_SET: &str = "❌ Not Set";

/// What the process knows about its store settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSettings {
    /// Whether a store location (URL) was configured.
    pub url_present: bool,
    /// Configured store name, if any.
    pub name: Option<String>,
}

/// Store availability as rendered in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAvailability {
    /// No store configured.
    NotAvailable,
    /// The store answered a collection listing.
    Connected,
    /// The store is configured but the listing failed.
    ConnectedWithError(String),
}

impl StoreAvailability {
    /// Status text for the `database` field.
    pub fn label(&self) -> String {
        match self {
            StoreAvailability::NotAvailable => "❌ Not Available".to_string(),
            StoreAvailability::Connected => "✅ Connected & Working".to_string(),
            StoreAvailability::ConnectedWithError(msg) => {
                format!("⚠️  Connected but Error: {}", truncate_chars(msg, MAX_ERROR_CHARS))
            }
        }
    }
}

/// Outcome of interrogating a configured store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreProbe {
    NotConfigured,
    Listed(Vec<String>),
    Failed(String),
}

/// The status document served at `/test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl DiagnosticsReport {
    /// Builds the report from the configured settings and a probe result.
    pub fn build(settings: &StoreSettings, probe: StoreProbe) -> Self {
        let mut report = Self {
            backend: BACKEND_RUNNING.to_string(),
            database: StoreAvailability::NotAvailable.label(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        };

        let availability = match probe {
            StoreProbe::NotConfigured => return report,
            StoreProbe::Listed(mut names) => {
                names.truncate(MAX_LISTED_COLLECTIONS);
                report.collections = names;
                StoreAvailability::Connected
            }
            StoreProbe::Failed(msg) => StoreAvailability::ConnectedWithError(msg),
        };

        report.database = availability.label();
        let url_status = if settings.url_present {
            SETTING_SET
        } else {
            SETTING_NOT_SET
        };
        report.database_url = Some(url_status.to_string());
        report.database_name = Some(
            settings
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| SETTING_NOT_SET.to_string()),
        );
        report.connection_status = "Connected".to_string();
        report
    }
}

/// First `max` characters of `s`, never splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
