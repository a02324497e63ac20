//! CLI argument parsing and command dispatch

pub mod add;
pub mod args;
pub mod common;
pub mod delete;
pub mod dispatch;
pub mod list;
pub mod mark;
pub mod update;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, OutputFormat};
pub use common::Settings;
