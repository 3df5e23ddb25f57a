//! CLI module for the airport service
//!
//! Provides command-line interface for:
//! - serve: Load the seed dataset and serve the HTTP API
//! - check-seed: Validate a seed dataset and exit

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{build_directory, check_seed, resolve_config, run, run_command, serve, ServeOverrides};
pub use errors::{CliError, CliErrorCode, CliResult};
