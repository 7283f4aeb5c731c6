//! CLI command handlers.

pub mod config;
pub mod print;
pub mod view;
