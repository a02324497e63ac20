//! Common helpers shared across CLI commands
//!
//! This module resolves the effective settings of an invocation from the
//! command line and task-cli.toml, and opens the task manager over the
//! configured document.

use crate::cli::args::{self, Cli};
use crate::config::{ColorOption, Config, OutputFormat};
use crate::store::{JsonFileRepository, TaskManager};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Success, including reported not-found lookups
pub const EXIT_SUCCESS: i32 = 0;
/// Storage, configuration or output failure
pub const EXIT_ERROR: i32 = 1;

/// Effective settings for one invocation
///
/// Precedence is command-line flag, then task-cli.toml, then the built-in
/// default.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub document_path: PathBuf,
    pub format: OutputFormat,
    pub color: ColorOption,
}

impl Settings {
    /// Combine global CLI flags with the loaded configuration
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            document_path: cli
                .file
                .clone()
                .unwrap_or_else(|| config.storage.path.clone()),
            format: config.output.format,
            color: cli.color.map(ColorOption::from).unwrap_or(config.output.color),
        }
    }

    /// termcolor setting for stdout
    pub fn color_choice(&self) -> termcolor::ColorChoice {
        match self.color {
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
            ColorOption::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
            ColorOption::Auto => termcolor::ColorChoice::Never,
        }
    }
}

impl From<args::ColorChoice> for ColorOption {
    fn from(choice: args::ColorChoice) -> Self {
        match choice {
            args::ColorChoice::Auto => ColorOption::Auto,
            args::ColorChoice::Always => ColorOption::Always,
            args::ColorChoice::Never => ColorOption::Never,
        }
    }
}

impl From<args::OutputFormat> for OutputFormat {
    fn from(format: args::OutputFormat) -> Self {
        match format {
            args::OutputFormat::Json => OutputFormat::Json,
            args::OutputFormat::Human => OutputFormat::Human,
        }
    }
}

/// Open the task manager over the document at `settings.document_path`
pub(crate) fn open_manager(settings: &Settings) -> TaskManager<JsonFileRepository> {
    TaskManager::new(JsonFileRepository::new(&settings.document_path))
}
