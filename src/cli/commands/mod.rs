//! CLI command implementations.

pub mod browse;
pub mod check;
pub mod related;
pub mod search;
pub mod summary;

use crate::models::config::WikipediaConfig;
use crate::services::http::ReqwestFetcher;
use crate::services::wikipedia::SummaryResolver;
use indicatif::{ProgressBar, ProgressStyle};

/// Start a spinner with a message.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Wikipedia resolver over the real HTTP transport.
pub(crate) fn summary_resolver(
    config: &WikipediaConfig,
) -> crate::Result<SummaryResolver<ReqwestFetcher>> {
    let fetcher = ReqwestFetcher::new(config.timeout)?;
    Ok(SummaryResolver::new(config.clone(), fetcher))
}
