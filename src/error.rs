//! Error types for task-cli
//!
//! This module defines the error types used throughout task-cli, following
//! a hierarchical structure with specific error variants for different
//! error categories.

use crate::types::TaskId;
use std::path::PathBuf;

/// Errors about tasks or categories that a command refers to
///
/// These are reported to the user and abort the command before anything
/// is written back to disk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// No task with this id in the searched categories
    #[error("No task found with ID {0}")]
    NotFound(TaskId),

    /// An id given on the command line that no task can carry
    #[error("No task found with ID {0}")]
    InvalidId(i64),

    /// The id counter has reached its maximum; no new task can be added
    #[error("Task id counter is exhausted; no more tasks can be added")]
    IdExhausted,

    /// The category name given to `list` is not recognized
    #[error("No tasks found for category: {0}")]
    UnknownCategory(String),
}

/// Errors reading or writing the task document
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document is not a valid task document
    #[error("Malformed task document {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document could not be serialized
    #[error("Failed to serialize task document: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level error type for task-cli
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Task or category lookup error
    #[error(transparent)]
    Task(#[from] TaskError),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error writing command output
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}
