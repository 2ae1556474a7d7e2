//! Related command implementation.

use super::{spinner, summary_resolver};
use crate::cli::render;
use crate::core::navigation::related_label;
use crate::models::config::Config;
use crate::models::summary::SummaryState;
use crate::services::catalog::{CatalogClient, CatalogService};
use crate::Error;
use anyhow::Result;

/// Show one movie with its Wikipedia summary and related movies.
pub async fn execute_related(
    config: &Config,
    id: &str,
    limit: Option<u32>,
    no_summary: bool,
) -> Result<()> {
    let client = CatalogClient::new(config.catalog.clone())?;
    let limit = limit.unwrap_or(config.catalog.related_limit);
    let ids = vec![id.to_string()];

    let pb = spinner("Loading details...");
    let records = client
        .movies_with_similar(&ids, &config.catalog.language, limit)
        .await;
    pb.finish_and_clear();

    let records = records?;
    let record = records
        .iter()
        .find(|r| r.id == id)
        .or_else(|| records.first())
        .ok_or_else(|| Error::CatalogEmpty(id.to_string()))?;

    render::print_detail(record);

    if !no_summary {
        let resolver = summary_resolver(&config.wikipedia)?;
        let pb = spinner("Searching Wikipedia...");
        let summary = resolver.resolve(&record.name).await;
        pb.finish_and_clear();
        render::print_summary(&SummaryState::from(summary));
    }

    println!();
    render::print_table(
        &related_label(&record.name),
        record.similar_items(),
    );
    Ok(())
}
