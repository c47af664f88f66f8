//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "migcheck")]
#[command(author, version, about = "SQL migration safety checker")]
#[command(propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check migration files for destructive changes and naming violations
    Check {
        /// Migration files or directories containing .sql files
        paths: Vec<PathBuf>,

        /// Configuration file (defaults to migcheck.toml in this or a parent directory)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// SQL dialect
        #[arg(short, long)]
        dialect: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Parse the up section of a migration and display its AST (for debugging)
    Parse {
        /// Migration file to parse
        file: PathBuf,

        /// SQL dialect
        #[arg(short, long, default_value = "postgresql")]
        dialect: String,
    },

    /// List the naming checker kinds accepted in configuration
    Checkers,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
}
