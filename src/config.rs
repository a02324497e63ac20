//! Configuration file parsing and validation

pub mod task_cli_toml;

pub use task_cli_toml::{
    CONFIG_FILE_NAME, ColorOption, Config, DEFAULT_DOCUMENT_PATH, OutputConfig, OutputFormat,
    StorageConfig,
};
