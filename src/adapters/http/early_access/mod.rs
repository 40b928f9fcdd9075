//! HTTP adapter for early access signup and capacity.

mod dto;
mod handlers;
mod routes;

pub use dto::{SignupRequest, SignupResponse, StatsResponse};
pub use routes::early_access_routes;
