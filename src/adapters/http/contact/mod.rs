//! HTTP adapter for the contact form.

mod dto;
mod handlers;
mod routes;

pub use dto::{ContactRequest, ContactResponse};
pub use routes::contact_routes;
