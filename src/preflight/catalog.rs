//! Catalog service preflight check.

use super::CheckResult;
use crate::models::config::CatalogConfig;
use crate::services::catalog::CatalogClient;

/// Check if the catalog endpoint answers GraphQL requests.
pub async fn check(config: &CatalogConfig) -> CheckResult {
    let client = match CatalogClient::new(config.clone()) {
        Ok(client) => client,
        Err(e) => {
            return CheckResult::fail(
                "Catalog",
                &format!("client setup failed: {}", e),
                "Check the [catalog] section of your config.toml",
            )
        }
    };

    match client.ping().await {
        Ok(true) => CheckResult::ok("Catalog", &format!("reachable ({})", config.endpoint)),
        Ok(false) | Err(_) => CheckResult::fail(
            "Catalog",
            "not reachable",
            "Check your network connection or set MOVIE_FINDER_CATALOG_URL",
        ),
    }
}
