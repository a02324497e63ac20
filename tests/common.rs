//! Test utilities for task-cli integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use task_cli::store::{Document, codec};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Read and parse the task document at `path`
pub fn read_document(path: &Path) -> TestResult<Document> {
    let content = fs::read_to_string(path)?;
    Ok(codec::decode(&content)?)
}

/// Write `document` to `path` in the on-disk layout
pub fn write_document(path: &Path, document: &Document) -> TestResult {
    fs::write(path, codec::encode(document)?)?;
    Ok(())
}
