//! CLI module for Teamgate
//!
//! Subcommands:
//! - `serve`: run the HTTP server
//! - `migrate`: apply PostgreSQL migrations and exit

pub mod migrate;
pub mod serve;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;

/// Teamgate - user and team management service
#[derive(Parser)]
#[command(name = "teamgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Apply database migrations and exit
    Migrate,
}

/// Load configuration and install logging, shared by every subcommand
fn bootstrap() -> anyhow::Result<AppConfig> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["teamgate", "serve"]).unwrap();
        assert_eq!(cli.command, Command::Serve);

        let cli = Cli::try_parse_from(["teamgate", "migrate"]).unwrap();
        assert_eq!(cli.command, Command::Migrate);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["teamgate"]).is_err());
        assert!(Cli::try_parse_from(["teamgate", "bogus"]).is_err());
    }
}
