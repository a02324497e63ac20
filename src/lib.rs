#![forbid(unsafe_code)]

//! task-cli: a small command-line task tracker
//!
//! Tasks live in a single JSON document, split into `todo`, `in-progress`
//! and `done`. Each invocation loads the document, applies one command and
//! writes it back.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod store;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, StorageError, TaskError, TrackerError};

// Re-export core domain types for convenient access
pub use store::{
    Document, JsonFileRepository, Listing, MemoryRepository, Repository, Task, TaskManager,
};
pub use types::{Category, TaskId};
