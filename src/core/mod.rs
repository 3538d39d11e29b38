//! Core module for the gradebook domain

pub mod config;
pub mod export;
pub mod gpa;
pub mod models;
pub mod ranking;
pub mod report;
pub mod roster;
pub mod store;

/// Returns the current version of the `Gradebook` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
