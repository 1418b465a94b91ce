//! Shared helpers for formatting and ordering.

pub mod collate;
pub mod format;
