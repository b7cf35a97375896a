//! Shared helpers for process execution and path handling.

pub mod command;
pub mod path;
