//! CLI command handlers

pub mod commands;

pub use commands::{init_spreadsheet, update_json};
