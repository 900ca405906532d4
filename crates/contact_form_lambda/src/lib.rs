//! AWS-oriented adapters and handlers for the contact form Lambda.
//!
//! This crate owns runtime integration details (the API Gateway handler,
//! backend ports, configuration and logging) and re-exports the domain
//! primitives from `contact_form_core` as `runtime`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod telemetry;

pub use contact_form_core as runtime;
