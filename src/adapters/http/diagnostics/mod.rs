//! HTTP adapter for service diagnostics.

mod routes;

pub use routes::diagnostics_routes;
