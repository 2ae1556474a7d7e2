//! Search command implementation.

use super::spinner;
use crate::cli::args::OutputFormat;
use crate::cli::render;
use crate::core::session::BrowseSession;
use crate::models::config::Config;
use crate::services::catalog::CatalogClient;
use anyhow::Result;
use colored::Colorize;

/// Execute search command.
pub async fn execute_search(config: &Config, term: &str, format: OutputFormat) -> Result<()> {
    let client = CatalogClient::new(config.catalog.clone())?;
    let mut session = BrowseSession::new(client, &config.catalog);

    let pb = spinner(&format!("Searching for {:?}...", term.trim()));
    let accepted = session.submit_search(term).await;
    pb.finish_and_clear();

    if !accepted {
        anyhow::bail!("Search term is empty");
    }
    if let Some(err) = session.load_failed() {
        println!("{}", "Failed to load results.".red());
        anyhow::bail!("Catalog search failed: {}", err);
    }

    let results = session.active_list();
    match format {
        OutputFormat::Json => render::print_json(results)?,
        OutputFormat::Simple => render::print_simple(results),
        OutputFormat::Table => render::print_table(&session.header_label(), results),
    }

    Ok(())
}
