//! Delete command implementation

use crate::error::TrackerError;
use crate::output::write_success;
use crate::store::{Repository, TaskManager};
use crate::types::TaskId;
use termcolor::WriteColor;

/// Remove task `taskid` from whichever category holds it
pub fn run_delete<R: Repository>(
    manager: &mut TaskManager<R>,
    taskid: TaskId,
    out: &mut dyn WriteColor,
) -> Result<(), TrackerError> {
    manager.delete_task(taskid)?;
    write_success(out, "Task has been deleted")?;
    Ok(())
}
