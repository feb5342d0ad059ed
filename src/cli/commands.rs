//! CLI commands and argument parsing

use crate::api::DEFAULT_BASE_URL;
use crate::types::StatusFilter;
use clap::{Parser, Subcommand};

/// Browse paginated character listings from the command line
#[derive(Parser, Debug)]
#[command(name = "castlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the character API
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
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
    /// Test the API connection and report totals for a query
    Check {
        /// Search text matched against character names
        #[arg(long, default_value = "")]
        name: String,

        /// Life-status filter (any, alive, dead, unknown)
        #[arg(long, default_value = "any")]
        status: StatusFilter,
    },

    /// Fetch a single page of characters
    Fetch {
        /// Search text matched against character names
        #[arg(long, default_value = "")]
        name: String,

        /// Life-status filter (any, alive, dead, unknown)
        #[arg(long, default_value = "any")]
        status: StatusFilter,

        /// Page number, 1-based
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Browse with infinite scroll, accumulating pages until the end
    Scroll {
        /// Search text matched against character names
        #[arg(long, default_value = "")]
        name: String,

        /// Life-status filter (any, alive, dead, unknown)
        #[arg(long, default_value = "any")]
        status: StatusFilter,

        /// Stop after this many pages (default: scroll to the last page)
        #[arg(long)]
        max_pages: Option<u32>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
