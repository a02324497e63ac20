//! Update command implementation

use crate::error::TrackerError;
use crate::output::write_success;
use crate::store::{Repository, TaskManager};
use crate::types::TaskId;
use termcolor::WriteColor;

/// Replace the description of task `taskid`, wherever it currently lives
pub fn run_update<R: Repository>(
    manager: &mut TaskManager<R>,
    taskid: TaskId,
    task: &str,
    out: &mut dyn WriteColor,
) -> Result<(), TrackerError> {
    manager.update_task(taskid, task)?;
    write_success(out, "Task has been updated")?;
    Ok(())
}
