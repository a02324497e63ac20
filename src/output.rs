//! Output formatters (human and JSON)

pub mod human;
pub mod json;

pub use human::{HumanFormatter, write_not_found, write_success};
pub use json::JsonFormatter;
