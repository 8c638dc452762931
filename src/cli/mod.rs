//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Boot the catalog and serve HTTP
//! - check-config: Validate a configuration file

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{boot_store, check_config, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
