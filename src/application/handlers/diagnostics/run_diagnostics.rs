//! RunDiagnosticsHandler - Query handler for the status document.

use crate::domain::diagnostics::{DiagnosticsReport, StoreProbe, StoreSettings};
use crate::ports::{StoreError, StoreHandle};

/// Query for the current service status.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunDiagnosticsQuery;

/// Handler probing the store and describing what it found.
///
/// Never fails: store errors are folded into the report text.
pub struct RunDiagnosticsHandler {
    store: StoreHandle,
    settings: StoreSettings,
}

impl RunDiagnosticsHandler {
    pub fn new(store: StoreHandle, settings: StoreSettings) -> Self {
        Self { store, settings }
    }

    pub async fn handle(&self, _query: RunDiagnosticsQuery) -> DiagnosticsReport {
        let probe = if self.store.is_configured() {
            match self.store.list_collections().await {
                Ok(names) => StoreProbe::Listed(names),
                Err(e) => {
                    tracing::warn!(error = %e, "Diagnostics could not list collections");
                    StoreProbe::Failed(failure_cause(e))
                }
            }
        } else {
            StoreProbe::NotConfigured
        };

        DiagnosticsReport::build(&self.settings, probe)
    }
}

/// The store's own message, without the category prefix, so the cause
/// survives truncation in the report.
fn failure_cause(error: StoreError) -> String {
    match error {
        StoreError::Read(msg) | StoreError::Write(msg) => msg,
        StoreError::Unavailable => error.to_string(),
    }
}
