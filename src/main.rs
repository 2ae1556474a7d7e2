//! Movie Finder CLI
//!
//! Search a TMDB movie catalog, browse related titles and read Wikipedia
//! summaries from the terminal.

use clap::Parser;
use movie_finder::cli::{
    args::{Cli, Commands},
    commands::{browse, check, related, search, summary},
};
use movie_finder::models::config::{self, Config};
use movie_finder::preflight;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = config::load_config();

    // Run the appropriate command
    match cli.command {
        Commands::Search { term, format } => {
            search::execute_search(&config, &term.join(" "), format).await?;
        }

        Commands::Related { id, limit, no_summary } => {
            related::execute_related(&config, &id, limit, no_summary).await?;
        }

        Commands::Summary { name } => {
            summary::execute_summary(&config, &name.join(" ")).await?;
        }

        Commands::Browse => {
            // Run preflight checks unless skipped
            if !cli.skip_preflight {
                run_preflight_checks(&config).await?;
            }
            browse::browse(&config).await?;
        }

        Commands::Check => {
            check::check(&config).await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("movie_finder=debug")
    } else {
        EnvFilter::new("movie_finder=info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks(config: &Config) -> anyhow::Result<()> {
    let results = preflight::run_preflight_checks(config).await;

    if !preflight::all_passed(&results) {
        preflight::print_results(&results);
        println!();
        anyhow::bail!("Preflight checks failed. Fix the issues above or pass --skip-preflight.");
    }

    Ok(())
}
