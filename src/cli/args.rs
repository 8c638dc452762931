//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf serve [--config <path>] [--host <host>] [--port <port>] [--no-seed]
//! - bookshelf check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bookshelf - an in-memory book catalog served over HTTP
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to, overriding the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to, overriding the config file
        #[arg(long)]
        port: Option<u16>,

        /// Start with an empty catalog instead of the seed records
        #[arg(long)]
        no_seed: bool,
    },

    /// Validate a configuration file and print the resolved settings
    CheckConfig {
        /// Path to configuration file
        #[arg(long)]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
