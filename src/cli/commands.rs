//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resilient pager CLI
#[derive(Parser, Debug)]
#[command(name = "resilient-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dataset file (CSV, first row is the header)
    #[arg(short, long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page by page number
    Page {
        /// Page number (1-indexed)
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        page: i64,

        /// Records per page (defaults to the configured page size)
        #[arg(long, allow_hyphen_values = true)]
        page_size: Option<i64>,
    },

    /// Print one page by page number with navigation metadata
    Hyper {
        /// Page number (1-indexed)
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        page: i64,

        /// Records per page (defaults to the configured page size)
        #[arg(long, allow_hyphen_values = true)]
        page_size: Option<i64>,
    },

    /// Print one page starting at a stable record index
    HyperIndex {
        /// Start key (0-based)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        index: i64,

        /// Records per page (defaults to the configured page size)
        #[arg(long, allow_hyphen_values = true)]
        page_size: Option<i64>,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
