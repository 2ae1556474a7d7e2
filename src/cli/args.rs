//! Command line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Movie Finder - Search movies and read about them on Wikipedia
#[derive(Parser, Debug)]
#[command(name = "movie-finder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog
    Search {
        /// Search term
        #[arg(value_name = "TERM", required = true, num_args = 1..)]
        term: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show a movie with its related movies
    Related {
        /// Catalog ID of the movie
        #[arg(value_name = "ID")]
        id: String,

        /// Maximum number of related movies
        #[arg(short, long)]
        limit: Option<u32>,

        /// Skip the Wikipedia summary
        #[arg(long)]
        no_summary: bool,
    },

    /// Look up the Wikipedia summary for a title
    Summary {
        /// Movie title
        #[arg(value_name = "NAME", required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Browse interactively
    Browse,

    /// Check that the catalog and Wikipedia are reachable
    Check,
}

/// Output format for result lists.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Simple,
    Json,
}
