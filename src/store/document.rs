//! The task document and its in-memory mutations
//!
//! A `Document` is the complete persisted state: the id counter and one
//! ordered task list per category. Every operation here is pure; loading
//! and saving is the repository's job.

use crate::error::TaskError;
use crate::types::{Category, TaskId};
use serde::{Deserialize, Serialize};

/// A single unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
}

/// Full persisted state of the tracker
///
/// Field order matches the on-disk key order: `id`, `todo`, `in-progress`, `done`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Last assigned task id (0 when nothing has been added yet)
    pub id: u64,

    pub todo: Vec<Task>,

    #[serde(rename = "in-progress")]
    pub in_progress: Vec<Task>,

    pub done: Vec<Task>,
}

impl Document {
    /// Creates an empty document with the counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks currently in `category`, in insertion order
    pub fn tasks(&self, category: Category) -> &[Task] {
        match category {
            Category::Todo => &self.todo,
            Category::InProgress => &self.in_progress,
            Category::Done => &self.done,
        }
    }

    /// Mutable access to the task list of `category`
    pub fn tasks_mut(&mut self, category: Category) -> &mut Vec<Task> {
        match category {
            Category::Todo => &mut self.todo,
            Category::InProgress => &mut self.in_progress,
            Category::Done => &mut self.done,
        }
    }

    /// Total number of tasks across all categories
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.tasks(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds a task anywhere in the document, scanning categories in order
    pub fn find(&self, id: TaskId) -> Option<(Category, &Task)> {
        Category::ALL.into_iter().find_map(|category| {
            self.tasks(category)
                .iter()
                .find(|task| task.id == id)
                .map(|task| (category, task))
        })
    }

    /// Appends a new task to `todo` and returns it
    ///
    /// The counter is bumped before the id is handed out, so the first task
    /// gets id 1 and ids of deleted tasks are never reused. Once the counter
    /// reaches `u64::MAX` no further ids can be issued and the document is
    /// left unchanged.
    pub fn add(&mut self, description: impl Into<String>) -> Result<Task, TaskError> {
        let next = self.id.checked_add(1).ok_or(TaskError::IdExhausted)?;
        let task = Task {
            id: TaskId::new(next),
            description: description.into(),
        };
        self.id = next;
        self.todo.push(task.clone());
        Ok(task)
    }

    /// Overwrites the description of the first task matching `id`
    ///
    /// Returns the category the task was found in.
    pub fn update(
        &mut self,
        id: TaskId,
        description: impl Into<String>,
    ) -> Result<Category, TaskError> {
        for category in Category::ALL {
            if let Some(task) = self.tasks_mut(category).iter_mut().find(|t| t.id == id) {
                task.description = description.into();
                return Ok(category);
            }
        }
        Err(TaskError::NotFound(id))
    }

    /// Removes the first task matching `id` and returns it with its former category
    pub fn delete(&mut self, id: TaskId) -> Result<(Category, Task), TaskError> {
        for category in Category::ALL {
            let tasks = self.tasks_mut(category);
            if let Some(index) = tasks.iter().position(|t| t.id == id) {
                return Ok((category, tasks.remove(index)));
            }
        }
        Err(TaskError::NotFound(id))
    }

    /// Moves a task from `from` to the end of `to`
    ///
    /// The task must currently be in `from`; its presence in any other
    /// category does not count.
    pub fn move_task(&mut self, id: TaskId, from: Category, to: Category) -> Result<Task, TaskError> {
        let source = self.tasks_mut(from);
        let index = source
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        let task = source.remove(index);

        self.tasks_mut(to).push(task.clone());
        Ok(task)
    }

    /// Moves a task from `todo` to `in-progress`
    pub fn mark_in_progress(&mut self, id: TaskId) -> Result<Task, TaskError> {
        self.move_task(id, Category::Todo, Category::InProgress)
    }

    /// Moves a task from `in-progress` to `done`
    pub fn mark_done(&mut self, id: TaskId) -> Result<Task, TaskError> {
        self.move_task(id, Category::InProgress, Category::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> TaskId {
        TaskId::new(n)
    }

    fn ids(tasks: &[Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id.get()).collect()
    }

    #[test]
    fn test_new_document_is_empty() {
        let doc = Document::new();
        assert_eq!(doc.id, 0);
        assert!(doc.is_empty());
        for category in Category::ALL {
            assert!(doc.tasks(category).is_empty());
        }
    }

    #[test]
    fn test_add_assigns_incrementing_ids_in_todo() {
        let mut doc = Document::new();
        assert_eq!(doc.add("Buy milk").unwrap().id, id(1));
        assert_eq!(doc.add("Walk dog").unwrap().id, id(2));

        assert_eq!(doc.id, 2);
        assert_eq!(ids(&doc.todo), vec![1, 2]);
        assert_eq!(doc.todo[0].description, "Buy milk");
        assert!(doc.in_progress.is_empty());
        assert!(doc.done.is_empty());
    }

    #[test]
    fn test_add_never_reuses_deleted_ids() {
        let mut doc = Document::new();
        doc.add("a").unwrap();
        doc.add("b").unwrap();
        doc.delete(id(2)).unwrap();

        assert_eq!(doc.add("c").unwrap().id, id(3));
    }

    #[test]
    fn test_add_with_exhausted_counter_fails() {
        let mut doc = Document {
            id: u64::MAX,
            ..Document::default()
        };
        let before = doc.clone();

        assert_eq!(doc.add("overflow"), Err(TaskError::IdExhausted));
        assert_eq!(doc, before);
        assert!(doc.todo.is_empty());
    }

    #[test]
    fn test_add_issues_the_final_id() {
        let mut doc = Document {
            id: u64::MAX - 1,
            ..Document::default()
        };

        assert_eq!(doc.add("last").unwrap().id, id(u64::MAX));
        assert_eq!(doc.id, u64::MAX);
        assert_eq!(doc.add("one more"), Err(TaskError::IdExhausted));
        assert_eq!(ids(&doc.todo), vec![u64::MAX]);
    }

    #[test]
    fn test_update_in_any_category() {
        let mut doc = Document::new();
        doc.add("a").unwrap();
        doc.add("b").unwrap();
        doc.mark_in_progress(id(2)).unwrap();

        assert_eq!(doc.update(id(2), "b2"), Ok(Category::InProgress));
        assert_eq!(doc.in_progress[0].description, "b2");

        doc.mark_done(id(2)).unwrap();
        assert_eq!(doc.update(id(2), "b3"), Ok(Category::Done));
        assert_eq!(doc.done[0].description, "b3");
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut doc = Document::new();
        doc.add("a").unwrap();
        let before = doc.clone();

        assert_eq!(doc.update(id(5), "x"), Err(TaskError::NotFound(id(5))));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_delete_removes_from_holding_category() {
        let mut doc = Document::new();
        doc.add("a").unwrap();
        doc.add("b").unwrap();
        doc.add("c").unwrap();
        doc.mark_in_progress(id(2)).unwrap();

        let (category, task) = doc.delete(id(2)).unwrap();
        assert_eq!(category, Category::InProgress);
        assert_eq!(task.description, "b");
        assert!(doc.find(id(2)).is_none());
        assert_eq!(ids(&doc.todo), vec![1, 3]);
        // Counter is untouched by deletes
        assert_eq!(doc.id, 3);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut doc = Document::new();
        assert_eq!(doc.delete(id(99)), Err(TaskError::NotFound(id(99))));
        assert_eq!(doc, Document::new());
    }

    #[test]
    fn test_mark_in_progress_moves_to_end() {
        let mut doc = Document::new();
        doc.add("a").unwrap();
        doc.add("b").unwrap();
        doc.mark_in_progress(id(2)).unwrap();
        let moved = doc.mark_in_progress(id(1)).unwrap();

        assert_eq!(moved, Task { id: id(1), description: "a".to_string() });
        assert!(doc.todo.is_empty());
        assert_eq!(ids(&doc.in_progress), vec![2, 1]);
    }

    #[test]
    fn test_mark_in_progress_requires_todo() {
        let mut doc = Document::new();
        doc.add("a").unwrap();
        doc.mark_in_progress(id(1)).unwrap();

        // Already in progress: strict source category
        assert_eq!(doc.mark_in_progress(id(1)), Err(TaskError::NotFound(id(1))));

        doc.mark_done(id(1)).unwrap();
        assert_eq!(doc.mark_in_progress(id(1)), Err(TaskError::NotFound(id(1))));
        assert_eq!(ids(&doc.done), vec![1]);
    }

    #[test]
    fn test_mark_done_requires_in_progress() {
        let mut doc = Document::new();
        doc.add("a").unwrap();
        let before = doc.clone();

        assert_eq!(doc.mark_done(id(1)), Err(TaskError::NotFound(id(1))));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_find_reports_category() {
        let mut doc = Document::new();
        doc.add("a").unwrap();
        doc.add("b").unwrap();
        doc.mark_in_progress(id(1)).unwrap();

        let (category, task) = doc.find(id(1)).unwrap();
        assert_eq!(category, Category::InProgress);
        assert_eq!(task.description, "a");
        assert_eq!(doc.find(id(2)).map(|(c, _)| c), Some(Category::Todo));
        assert!(doc.find(id(3)).is_none());
    }

    #[test]
    fn test_len_counts_all_categories() {
        let mut doc = Document::new();
        doc.add("a").unwrap();
        doc.add("b").unwrap();
        doc.add("c").unwrap();
        doc.mark_in_progress(id(1)).unwrap();
        doc.mark_in_progress(id(2)).unwrap();
        doc.mark_done(id(2)).unwrap();

        assert_eq!(doc.len(), 3);
        assert!(!doc.is_empty());
    }
}
