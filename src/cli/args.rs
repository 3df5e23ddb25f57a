//! CLI argument definitions using clap
//!
//! Commands:
//! - airports serve [--config <path>] [--host <host>] [--port <port>] [--seed <path>] [--compat <mode>]
//! - airports check-seed [--seed <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::directory::CompatMode;
use crate::observability::LogFormat;

/// Airports - an in-memory REST directory of airport records
#[derive(Parser, Debug)]
#[command(name = "airports")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the airport API over HTTP
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Seed dataset file (overrides config)
        #[arg(long)]
        seed: Option<PathBuf>,

        /// Status-code compatibility mode (overrides config)
        #[arg(long, value_enum)]
        compat: Option<CompatMode>,

        /// Log output format (overrides config)
        #[arg(long, value_enum)]
        log_format: Option<LogFormat>,
    },

    /// Load and validate a seed dataset, then exit
    CheckSeed {
        /// Seed dataset file; the embedded dataset when omitted
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "airports", "serve", "--port", "8080", "--compat", "corrected", "--log-format", "json",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                port,
                compat,
                log_format,
                config,
                ..
            } => {
                assert_eq!(port, Some(8080));
                assert_eq!(compat, Some(CompatMode::Corrected));
                assert_eq!(log_format, Some(LogFormat::Json));
                assert!(config.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_seed() {
        let cli = Cli::try_parse_from(["airports", "check-seed", "--seed", "a.json"]).unwrap();
        match cli.command {
            Command::CheckSeed { seed } => assert_eq!(seed, Some(PathBuf::from("a.json"))),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_invalid_compat_rejected() {
        assert!(Cli::try_parse_from(["airports", "serve", "--compat", "strict"]).is_err());
    }
}
