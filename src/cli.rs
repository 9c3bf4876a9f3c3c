//! Command-line argument parsing for Pitwall.

use crate::config::{Config, DEFAULT_DATABASE_PATH};
use crate::error::Result;
use crate::headless::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// A terminal dashboard for Formula 1 race analytics.
#[derive(Parser, Debug)]
#[command(name = "pitwall")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the Formula 1 results SQLite database
    #[arg(value_name = "DB_PATH", env = "PITWALL_DB")]
    pub database: Option<PathBuf>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run a single catalog query and print the results (no terminal UI)
    #[arg(short = 'q', long, value_name = "NAME")]
    pub query: Option<String>,

    /// List the available query names and exit
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Output format for --query (text or json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: String,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns true if no terminal UI should be started.
    pub fn is_headless(&self) -> bool {
        self.query.is_some() || self.list
    }

    /// Returns the config file path to use.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Resolves the database path with precedence:
    /// CLI argument (or PITWALL_DB) > config file > built-in default.
    pub fn resolve_database(&self, config: &Config) -> PathBuf {
        self.database
            .clone()
            .or_else(|| config.database_path().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH))
    }

    /// Parses the output format from the --output argument.
    pub fn parse_output_format(&self) -> Result<OutputFormat> {
        self.output
            .parse()
            .map_err(crate::error::PitwallError::config)
    }
}
