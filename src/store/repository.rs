//! Persistence boundary for the task document
//!
//! The `Repository` trait is what `TaskManager` loads from and saves to.
//! `JsonFileRepository` is used by the CLI; `MemoryRepository` keeps the
//! document in memory for tests.

use crate::error::StorageError;
use crate::store::codec;
use crate::store::document::Document;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load/save access to a single task document
pub trait Repository {
    /// Whether a document has been persisted yet
    fn exists(&self) -> bool;

    /// Loads the full document
    fn load(&self) -> Result<Document, StorageError>;

    /// Replaces the persisted document with `document`
    fn save(&mut self, document: &Document) -> Result<(), StorageError>;
}

/// Repository backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path the document is staged at before being renamed into place
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Repository for JsonFileRepository {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Result<Document, StorageError> {
        debug!(path = %self.path.display(), "loading task document");
        let content = fs::read_to_string(&self.path)?;
        codec::decode(&content).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, document: &Document) -> Result<(), StorageError> {
        let content = codec::encode(document).map_err(StorageError::Serialize)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        // Write the whole document next to the target, then swap it in
        let staging = self.staging_path();
        fs::write(&staging, content)?;
        fs::rename(&staging, &self.path)?;

        debug!(
            path = %self.path.display(),
            tasks = document.len(),
            "saved task document"
        );
        Ok(())
    }
}

/// Repository that keeps the document in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    document: Option<Document>,
    saves: usize,
}

impl MemoryRepository {
    /// Creates a repository with nothing persisted
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds `document`
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Some(document),
            saves: 0,
        }
    }

    /// The currently persisted document, if any
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Number of times `save` has been called
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl Repository for MemoryRepository {
    fn exists(&self) -> bool {
        self.document.is_some()
    }

    fn load(&self) -> Result<Document, StorageError> {
        self.document.clone().ok_or_else(|| {
            StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no task document has been saved",
            ))
        })
    }

    fn save(&mut self, document: &Document) -> Result<(), StorageError> {
        self.document = Some(document.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_repository_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(temp_dir.path().join("tasks.json"));

        assert!(!repo.exists());
        assert!(matches!(repo.load(), Err(StorageError::Io(_))));
    }

    #[test]
    fn test_file_repository_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = JsonFileRepository::new(temp_dir.path().join("tasks.json"));

        let mut doc = Document::new();
        doc.add("Buy milk").unwrap();
        repo.save(&doc).unwrap();

        assert!(repo.exists());
        assert_eq!(repo.load().unwrap(), doc);
    }

    #[test]
    fn test_file_repository_writes_four_space_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");
        let mut repo = JsonFileRepository::new(&path);

        repo.save(&Document::new()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n    \"id\": 0,"));
    }

    #[test]
    fn test_file_repository_leaves_no_staging_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");
        let mut repo = JsonFileRepository::new(&path);

        repo.save(&Document::new()).unwrap();

        assert!(!temp_dir.path().join("tasks.json.tmp").exists());
        assert_eq!(repo.staging_path(), temp_dir.path().join("tasks.json.tmp"));
    }

    #[test]
    fn test_file_repository_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("tasks.json");
        let mut repo = JsonFileRepository::new(&path);

        repo.save(&Document::new()).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_file_repository_malformed_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");
        fs::write(&path, "{ this is not json").unwrap();
        let repo = JsonFileRepository::new(&path);

        match repo.load() {
            Err(StorageError::Malformed { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected Malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_memory_repository_counts_saves() {
        let mut repo = MemoryRepository::new();
        assert!(!repo.exists());
        assert!(repo.load().is_err());

        repo.save(&Document::new()).unwrap();
        repo.save(&Document::new()).unwrap();

        assert!(repo.exists());
        assert_eq!(repo.saves(), 2);
        assert_eq!(repo.document(), Some(&Document::new()));
    }

    #[test]
    fn test_memory_repository_with_document() {
        let mut doc = Document::new();
        doc.add("seeded").unwrap();
        let repo = MemoryRepository::with_document(doc.clone());

        assert!(repo.exists());
        assert_eq!(repo.saves(), 0);
        assert_eq!(repo.load().unwrap(), doc);
    }
}
