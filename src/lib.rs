//! ROME backend - early access signups, contact form and lobby chat.
//!
//! A small HTTP service backed by an optional document store. Without a
//! store the service still answers: reads report nothing stored, writes
//! fail, and `/test` explains why.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
