//! Storage manager: one load/mutate/save cycle per operation
//!
//! `TaskManager` is the only place that decides when the document is written.
//! Every mutating operation loads the full document, applies the change in
//! memory and saves the full document back. When a lookup fails the
//! operation returns before saving.

use crate::error::{StorageError, TaskError, TrackerError};
use crate::store::document::{Document, Task};
use crate::store::repository::Repository;
use crate::types::{Category, TaskId};
use tracing::info;

/// Result of a `list` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The whole document
    All(Document),
    /// The tasks of a single category
    Category(Category, Vec<Task>),
}

/// Task operations over an injected repository
#[derive(Debug)]
pub struct TaskManager<R: Repository> {
    repository: R,
}

impl<R: Repository> TaskManager<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Creates an empty document if none exists yet
    ///
    /// Returns `true` when a document was created.
    pub fn initialize(&mut self) -> Result<bool, StorageError> {
        if self.repository.exists() {
            return Ok(false);
        }
        self.repository.save(&Document::new())?;
        info!("initialized empty task document");
        Ok(true)
    }

    /// Adds a task to `todo` and returns it
    pub fn add_task(&mut self, description: &str) -> Result<Task, TrackerError> {
        let mut document = self.repository.load()?;
        let task = document.add(description)?;
        self.repository.save(&document)?;
        info!(id = %task.id, "added task");
        Ok(task)
    }

    /// Replaces the description of a task in any category
    pub fn update_task(&mut self, id: TaskId, description: &str) -> Result<Category, TrackerError> {
        let mut document = self.repository.load()?;
        let category = document.update(id, description)?;
        self.repository.save(&document)?;
        info!(%id, %category, "updated task");
        Ok(category)
    }

    /// Removes a task from whichever category holds it
    pub fn delete_task(&mut self, id: TaskId) -> Result<Task, TrackerError> {
        let mut document = self.repository.load()?;
        let (category, task) = document.delete(id)?;
        self.repository.save(&document)?;
        info!(%id, %category, "deleted task");
        Ok(task)
    }

    /// Returns the whole document, or one category when `category` is given
    ///
    /// The category is matched against its wire name; anything else is
    /// reported as `TaskError::UnknownCategory`.
    pub fn list_tasks(&self, category: Option<&str>) -> Result<Listing, TrackerError> {
        let document = self.repository.load()?;
        match category {
            None => Ok(Listing::All(document)),
            Some(name) => {
                let category: Category = name
                    .parse()
                    .map_err(|_| TaskError::UnknownCategory(name.to_string()))?;
                Ok(Listing::Category(category, document.tasks(category).to_vec()))
            }
        }
    }

    /// Moves a task from `todo` to `in-progress`
    pub fn mark_in_progress(&mut self, id: TaskId) -> Result<Task, TrackerError> {
        self.transition(id, Category::Todo, Category::InProgress)
    }

    /// Moves a task from `in-progress` to `done`
    pub fn mark_done(&mut self, id: TaskId) -> Result<Task, TrackerError> {
        self.transition(id, Category::InProgress, Category::Done)
    }

    fn transition(&mut self, id: TaskId, from: Category, to: Category) -> Result<Task, TrackerError> {
        let mut document = self.repository.load()?;
        let task = document.move_task(id, from, to)?;
        self.repository.save(&document)?;
        info!(%id, %from, %to, "moved task");
        Ok(task)
    }
}
