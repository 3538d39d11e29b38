//! CLI command handlers for `Gradebook`.
//!
//! This module provides handlers for the CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod export;
pub mod menu;
pub mod rank;
pub mod report;
