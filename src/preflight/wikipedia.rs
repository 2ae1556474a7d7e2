//! Wikipedia preflight check.

use super::CheckResult;
use crate::models::config::WikipediaConfig;
use crate::services::http::{HttpFetch, ReqwestFetcher, ACCEPT_JSON};

/// Check if the Wikipedia search endpoint responds.
pub async fn check(config: &WikipediaConfig) -> CheckResult {
    let fetcher = match ReqwestFetcher::new(config.timeout) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            return CheckResult::fail(
                "Wikipedia",
                &format!("client setup failed: {}", e),
                "Check the [wikipedia] section of your config.toml",
            )
        }
    };

    let url = format!("{}?q=film&limit=1", config.search_url);
    match fetcher.get(&url, ACCEPT_JSON).await {
        Ok(resp) if resp.is_success() => CheckResult::ok("Wikipedia", "reachable"),
        Ok(resp) => CheckResult::fail(
            "Wikipedia",
            &format!("unexpected status {}", resp.status),
            "Check MOVIE_FINDER_WIKI_SEARCH",
        ),
        Err(_) => CheckResult::fail(
            "Wikipedia",
            "not reachable",
            "Check your network connection",
        ),
    }
}
