//! CLI command implementations
//!
//! `serve` boots the directory from its seed dataset and runs the HTTP
//! server until the process is stopped. `check-seed` validates a dataset
//! and reports its size.

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::info;

use crate::directory::{seed, AirportDirectory, CompatMode};
use crate::http_server::{AirportServer, ServerConfig};
use crate::observability::{init_logging, LogFormat};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub seed: Option<PathBuf>,
    pub compat: Option<CompatMode>,
    pub log_format: Option<LogFormat>,
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
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
            seed,
            compat,
            log_format,
        } => {
            let overrides = ServeOverrides {
                host,
                port,
                seed,
                compat,
                log_format,
            };
            serve(config.as_deref(), overrides)
        }
        Command::CheckSeed { seed } => check_seed(seed.as_deref()),
    }
}

/// Build the effective configuration: file (or defaults), then overrides
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: ServeOverrides,
) -> CliResult<ServerConfig> {
    let mut config = match config_path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = overrides.host {
        config.host = host;
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(seed) = overrides.seed {
        config.seed_path = Some(seed);
    }
    if let Some(compat) = overrides.compat {
        config.compat = compat;
    }
    if let Some(log_format) = overrides.log_format {
        config.log_format = log_format;
    }

    Ok(config)
}

fn seed_source(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "embedded".to_string())
}

/// Load the seed dataset named by the config into a fresh directory
pub fn build_directory(config: &ServerConfig) -> CliResult<AirportDirectory> {
    let records = seed::load(config.seed_path.as_deref())?;
    let source = seed_source(config.seed_path.as_deref());
    info!(airports = records.len(), %source, "seed dataset loaded");
    Ok(AirportDirectory::from_records(records, config.compat))
}

/// Serve the airport API
pub fn serve(config_path: Option<&Path>, overrides: ServeOverrides) -> CliResult<()> {
    let config = resolve_config(config_path, overrides)?;
    init_logging(config.log_format);

    let directory = build_directory(&config)?;
    let server = AirportServer::new(config, directory);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate a seed dataset and print its record count
pub fn check_seed(seed_path: Option<&Path>) -> CliResult<()> {
    let records = seed::load(seed_path)?;
    write_response(json!({
        "airports": records.len(),
        "source": seed_source(seed_path)
    }))
}
