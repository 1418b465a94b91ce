//! Contract roster partitioning for a fantasy basketball league.
//!
//! The core entry point is [`core::RosterPartitioner`], which splits a team's
//! contracts into the active, injured reserve and rookie development groups
//! shown on a roster page. The rest of the crate layers cap figures, roster
//! limit checks and a CLI on top of it.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod test_utils;
pub mod utils;

pub use error::{Result, RosterError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
