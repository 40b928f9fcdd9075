//! Diagnostics handlers.

mod run_diagnostics;

pub use run_diagnostics::{RunDiagnosticsHandler, RunDiagnosticsQuery};
