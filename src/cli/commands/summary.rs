//! Summary command implementation.

use super::{spinner, summary_resolver};
use crate::cli::render;
use crate::models::config::Config;
use crate::models::summary::SummaryState;
use anyhow::Result;

/// Look up and print the Wikipedia summary for a title.
pub async fn execute_summary(config: &Config, name: &str) -> Result<()> {
    let resolver = summary_resolver(&config.wikipedia)?;

    let pb = spinner("Searching Wikipedia...");
    let result = resolver.resolve(name.trim()).await;
    pb.finish_and_clear();

    if let Some(ref summary) = result {
        println!("{}", summary.title);
    }
    render::print_summary(&SummaryState::from(result));
    Ok(())
}
