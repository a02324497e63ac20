//! Add command implementation
//!
//! Appends a new task to `todo` with the next id from the document counter.

use crate::error::TrackerError;
use crate::output::write_success;
use crate::store::{Repository, TaskManager};
use termcolor::WriteColor;

/// Add `task` to the todo list and confirm on `out`
pub fn run_add<R: Repository>(
    manager: &mut TaskManager<R>,
    task: &str,
    out: &mut dyn WriteColor,
) -> Result<(), TrackerError> {
    manager.add_task(task)?;
    write_success(out, "Task has been added to the list")?;
    Ok(())
}
