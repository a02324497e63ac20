//! List command implementation
//!
//! This module implements `task-cli list [modifier]`, which:
//! - Prints the whole document when no modifier is given
//! - Prints a single category for `todo`, `in-progress` or `done`
//! - Reports unknown categories without failing
//! - Always ends with a "Tasks have been listed" line

use crate::config::OutputFormat;
use crate::error::{TaskError, TrackerError};
use crate::output::{HumanFormatter, JsonFormatter, write_not_found, write_success};
use crate::store::{Repository, TaskManager};
use std::io::Write;
use termcolor::WriteColor;

/// List tasks in `format`
pub fn run_list<R: Repository>(
    manager: &TaskManager<R>,
    modifier: Option<&str>,
    format: OutputFormat,
    out: &mut dyn WriteColor,
) -> Result<(), TrackerError> {
    match manager.list_tasks(modifier) {
        Ok(listing) => match format {
            OutputFormat::Json => {
                let json = JsonFormatter::new()
                    .format(&listing)
                    .map_err(crate::error::StorageError::Serialize)?;
                writeln!(out, "{}", json)?;
            }
            OutputFormat::Human => HumanFormatter::new().write_listing(out, &listing)?,
        },
        Err(TrackerError::Task(err @ TaskError::UnknownCategory(_))) => {
            write_not_found(out, &err.to_string())?;
        }
        Err(err) => return Err(err),
    }

    write_success(out, "Tasks have been listed")?;
    Ok(())
}
