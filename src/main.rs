//! task-cli entry point

use clap::{CommandFactory, Parser};
use std::process;
use task_cli::cli::args::Cli;
use task_cli::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let exit_code = match &cli.command {
        Some(command) => task_cli::cli::dispatch::run(&cli, command),
        None => match Cli::command().print_help() {
            Ok(()) => {
                println!();
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_ERROR
            }
        },
    };

    process::exit(exit_code);
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Logs go to stderr so stdout stays parseable
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!(level = %filter, "logging initialized");
}
