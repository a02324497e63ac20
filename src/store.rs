//! Task document storage
//!
//! The document model, its JSON codec, the repository boundary and the
//! manager that ties them together.

pub mod codec;
pub mod document;
pub mod manager;
pub mod repository;

pub use document::{Document, Task};
pub use manager::{Listing, TaskManager};
pub use repository::{JsonFileRepository, MemoryRepository, Repository};
