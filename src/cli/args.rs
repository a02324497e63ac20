//! CLI argument parsing using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for `list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// One section per category
    Human,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// task-cli main entry point
#[derive(Parser, Debug)]
#[command(name = "task-cli")]
#[command(about = "Track todo, in-progress and done tasks in a local JSON file")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (prints help when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Task document to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output coloring
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    /// Log to stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,
}

/// Available task-cli subcommands
///
/// Task ids are parsed as signed integers so that a negative id reaches the
/// command and is reported as a missing task instead of a usage error.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a task to the todo list
    Add {
        /// The task to be added to the list
        task: String,
    },

    /// Change the description of a task
    Update {
        /// The id of the task to be updated
        #[arg(allow_negative_numbers = true)]
        taskid: i64,

        /// The new description
        task: String,
    },

    /// Delete a task
    Delete {
        /// The id of the task to delete
        #[arg(allow_negative_numbers = true)]
        taskid: i64,
    },

    /// List all tasks, or the tasks of one category
    List {
        /// Category to list (todo, in-progress, done)
        modifier: Option<String>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Move a task from todo to in-progress
    MarkInProgress {
        /// The task to mark as in progress
        #[arg(allow_negative_numbers = true)]
        taskid: i64,
    },

    /// Move a task from in-progress to done
    MarkDone {
        /// The task to mark as done
        #[arg(allow_negative_numbers = true)]
        taskid: i64,
    },
}
