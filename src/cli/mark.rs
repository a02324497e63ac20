//! mark-in-progress and mark-done command implementations
//!
//! Each transition only looks in its source category: a task must be in
//! `todo` to be marked in progress and in `in-progress` to be marked done.

use crate::error::TrackerError;
use crate::output::write_success;
use crate::store::{Repository, TaskManager};
use crate::types::TaskId;
use termcolor::WriteColor;

/// Move task `taskid` from todo to in-progress
pub fn run_mark_in_progress<R: Repository>(
    manager: &mut TaskManager<R>,
    taskid: TaskId,
    out: &mut dyn WriteColor,
) -> Result<(), TrackerError> {
    manager.mark_in_progress(taskid)?;
    write_success(out, "Task has been marked in progress")?;
    Ok(())
}

/// Move task `taskid` from in-progress to done
pub fn run_mark_done<R: Repository>(
    manager: &mut TaskManager<R>,
    taskid: TaskId,
    out: &mut dyn WriteColor,
) -> Result<(), TrackerError> {
    manager.mark_done(taskid)?;
    write_success(out, "Task has been marked done")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::store::MemoryRepository;
    use crate::types::Category;
    use termcolor::Buffer;

    fn manager_with_task() -> TaskManager<MemoryRepository> {
        let mut manager = TaskManager::new(MemoryRepository::new());
        manager.initialize().unwrap();
        manager.add_task("Buy milk").unwrap();
        manager
    }

    #[test]
    fn test_mark_in_progress_then_done() {
        let mut manager = manager_with_task();
        let mut out = Buffer::no_color();

        run_mark_in_progress(&mut manager, TaskId::new(1), &mut out).unwrap();
        run_mark_done(&mut manager, TaskId::new(1), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out.into_inner()).unwrap(),
            "Task has been marked in progress\nTask has been marked done\n"
        );
        let doc = manager.repository().document().unwrap();
        assert_eq!(
            doc.find(TaskId::new(1)).map(|(c, _)| c),
            Some(Category::Done)
        );
    }

    #[test]
    fn test_mark_done_skips_todo() {
        let mut manager = manager_with_task();
        let mut out = Buffer::no_color();

        let result = run_mark_done(&mut manager, TaskId::new(1), &mut out);

        assert!(matches!(
            result,
            Err(TrackerError::Task(TaskError::NotFound(_)))
        ));
        let doc = manager.repository().document().unwrap();
        assert_eq!(doc.todo.len(), 1);
        assert!(doc.done.is_empty());
    }
}
