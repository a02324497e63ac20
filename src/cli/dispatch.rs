//! Command dispatch
//!
//! `execute` maps a parsed `Command` onto its handler for any repository and
//! output sink. `run` is the binary's entry point: it loads the configuration,
//! opens the task document, makes sure it exists and turns errors into exit
//! codes.

use crate::cli::args::{Cli, Command};
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, Settings, open_manager};
use crate::cli::{add, delete, list, mark, update};
use crate::config::{Config, OutputFormat};
use crate::error::{TaskError, TrackerError};
use crate::output::write_not_found;
use crate::store::{Repository, TaskManager};
use crate::types::TaskId;
use termcolor::{StandardStream, WriteColor};

/// Run `command` against `manager`, writing results to `out`
///
/// A missing task is reported on `out` and treated as handled; only storage,
/// configuration and output failures are returned as errors.
pub fn execute<R: Repository>(
    command: &Command,
    manager: &mut TaskManager<R>,
    default_format: OutputFormat,
    out: &mut dyn WriteColor,
) -> Result<(), TrackerError> {
    match run_command(command, manager, default_format, out) {
        Err(TrackerError::Task(err)) => {
            tracing::debug!(error = %err, "lookup failed, document left unchanged");
            write_not_found(out, &err.to_string())?;
            Ok(())
        }
        other => other,
    }
}

fn run_command<R: Repository>(
    command: &Command,
    manager: &mut TaskManager<R>,
    default_format: OutputFormat,
    out: &mut dyn WriteColor,
) -> Result<(), TrackerError> {
    match command {
        Command::Add { task } => add::run_add(manager, task, out),
        Command::Update { taskid, task } => {
            update::run_update(manager, task_id(*taskid)?, task, out)
        }
        Command::Delete { taskid } => delete::run_delete(manager, task_id(*taskid)?, out),
        Command::List { modifier, format } => list::run_list(
            manager,
            modifier.as_deref(),
            format.map(OutputFormat::from).unwrap_or(default_format),
            out,
        ),
        Command::MarkInProgress { taskid } => {
            mark::run_mark_in_progress(manager, task_id(*taskid)?, out)
        }
        Command::MarkDone { taskid } => mark::run_mark_done(manager, task_id(*taskid)?, out),
    }
}

/// Convert a command-line id into a `TaskId`
///
/// No task carries a negative id, so one is reported like any missing task.
fn task_id(raw: i64) -> Result<TaskId, TaskError> {
    u64::try_from(raw)
        .map(TaskId::new)
        .map_err(|_| TaskError::InvalidId(raw))
}

/// Run `command` against the configured task document in the working directory
///
/// # Returns
///
/// Exit code:
/// - 0: Success (including reported not-found lookups)
/// - 1: Error (configuration, storage or output)
pub fn run(cli: &Cli, command: &Command) -> i32 {
    match run_inner(cli, command) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_inner(cli: &Cli, command: &Command) -> Result<(), TrackerError> {
    let config = Config::discover(".")?;
    let settings = Settings::resolve(cli, &config);
    tracing::debug!(?settings, "resolved settings");

    let mut manager = open_manager(&settings);
    manager.initialize()?;

    let mut stdout = StandardStream::stdout(settings.color_choice());
    execute(command, &mut manager, settings.format, &mut stdout)
}
