//! Contact form domain primitives.
//!
//! This crate owns request field extraction, the submission record, the
//! notification text and the error union. It intentionally excludes AWS SDK
//! and Lambda runtime concerns.

pub mod contract;
pub mod error;
pub mod notification;
pub mod submission;
