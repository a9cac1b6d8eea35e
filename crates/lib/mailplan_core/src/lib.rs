//! # mailplan_core
//!
//! Core domain logic for Mailplan.

pub mod auth;
pub mod forms;
pub mod models;
pub mod schedule;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
