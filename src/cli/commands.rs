//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::catalog::BookStore;
use crate::http_server::{AppState, HttpServer};
use crate::observability::{log_event, log_event_with_fields, Event};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            no_seed,
        } => {
            let config = Config::load_or_default(config.as_deref())?
                .with_overrides(host, port, no_seed)?;
            serve(config)
        }
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Build the initial store for `config`
pub fn boot_store(config: &Config) -> BookStore {
    if config.seed_books {
        BookStore::seeded()
    } else {
        BookStore::new()
    }
}

/// Boot the catalog and serve HTTP until shutdown
///
/// 1. Build the store (seeded unless disabled)
/// 2. Create the tokio runtime
/// 3. Bind and serve, draining on Ctrl-C / SIGTERM
pub fn serve(config: Config) -> CliResult<()> {
    log_event(Event::BootStart);
    let addr = config.http.socket_addr();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("addr", addr.as_str()),
            ("seed_books", if config.seed_books { "true" } else { "false" }),
        ],
    );

    let state = Arc::new(AppState::new(boot_store(&config))?);
    let count = state.store.len()?.to_string();
    log_event_with_fields(Event::StoreSeeded, &[("books", count.as_str())]);

    let server = HttpServer::new(config.http, state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async { server.start().await }).map_err(|e| {
        let message = e.to_string();
        log_event_with_fields(Event::BootFailed, &[("error", message.as_str())]);
        CliError::boot_failed(format!("HTTP server failed: {}", message))
    })
}

/// Load and validate a config file, printing the resolved settings
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let rendered = serde_json::to_string_pretty(&config)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    Ok(())
}
