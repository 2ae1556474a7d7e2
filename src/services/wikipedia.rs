//! Wikipedia summary resolver.
//!
//! Looks a movie up by display name: first as an exact page under a few
//! disambiguated titles, then through a one-hit title search. Any failure
//! along the way ends in `None`; callers never see an error.

use super::http::{HttpFetch, ACCEPT_JSON};
use crate::models::config::WikipediaConfig;
use crate::models::summary::SummaryResult;
use crate::Result;
use serde::Deserialize;

/// Disambiguation suffixes tried after the bare title.
const TITLE_QUALIFIERS: [&str; 2] = ["film", "movie"];

/// Page summary payload (only the fields we read).
#[derive(Debug, Default, Deserialize)]
struct PageSummary {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentUrls {
    #[serde(default)]
    desktop: Option<PageUrls>,
}

#[derive(Debug, Default, Deserialize)]
struct PageUrls {
    #[serde(default)]
    page: Option<String>,
}

/// Title search payload.
#[derive(Debug, Default, Deserialize)]
struct TitleSearch {
    #[serde(default)]
    pages: Option<Vec<SearchHit>>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchHit {
    #[serde(default)]
    title: Option<String>,
}

impl PageSummary {
    /// A page is usable only with both an extract and a desktop URL.
    fn accept(self, requested: &str) -> Option<SummaryResult> {
        let extract = self.extract.filter(|e| !e.is_empty())?;
        let url = self
            .content_urls
            .and_then(|c| c.desktop)
            .and_then(|d| d.page)
            .filter(|u| !u.is_empty())?;
        Some(SummaryResult {
            title: self.title.unwrap_or_else(|| requested.to_string()),
            extract,
            url,
        })
    }
}

/// Candidate page titles for a display name, in lookup order.
pub fn title_variations(name: &str) -> Vec<String> {
    std::iter::once(name.to_string())
        .chain(TITLE_QUALIFIERS.iter().map(|q| format!("{} ({})", name, q)))
        .collect()
}

/// Best-effort Wikipedia summary lookup.
pub struct SummaryResolver<F> {
    config: WikipediaConfig,
    fetch: F,
}

impl<F: HttpFetch> SummaryResolver<F> {
    /// Create a resolver over the given transport.
    pub fn new(config: WikipediaConfig, fetch: F) -> Self {
        Self { config, fetch }
    }

    /// Summary page URL for a title.
    pub fn summary_url(&self, title: &str) -> String {
        format!(
            "{}/page/summary/{}",
            self.config.rest_base.trim_end_matches('/'),
            urlencoding::encode(title)
        )
    }

    /// Title search URL for a query, limited to one hit.
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}?q={}&limit=1",
            self.config.search_url,
            urlencoding::encode(query)
        )
    }

    /// Resolve a display name to a summary.
    ///
    /// Returns `None` when nothing acceptable is found or when any request
    /// fails; failures are logged once.
    pub async fn resolve(&self, display_name: &str) -> Option<SummaryResult> {
        match self.try_resolve(display_name).await {
            Ok(result) => {
                if result.is_none() {
                    tracing::debug!("No Wikipedia summary for {:?}", display_name);
                }
                result
            }
            Err(e) => {
                tracing::error!("Error fetching Wikipedia summary for {:?}: {}", display_name, e);
                None
            }
        }
    }

    async fn try_resolve(&self, display_name: &str) -> Result<Option<SummaryResult>> {
        for title in title_variations(display_name) {
            if let Some(result) = self.lookup(&title).await? {
                return Ok(Some(result));
            }
        }

        let resp = self
            .fetch
            .get(&self.search_url(display_name), ACCEPT_JSON)
            .await?;
        if !resp.is_success() {
            return Ok(None);
        }

        // `null` bodies and `"pages": null` both mean no hits
        let search: Option<TitleSearch> = serde_json::from_str(&resp.body)?;
        let hit = search
            .and_then(|s| s.pages)
            .and_then(|pages| pages.into_iter().next())
            .and_then(|hit| hit.title)
            .filter(|t| !t.is_empty());

        match hit {
            Some(title) => self.lookup(&title).await,
            None => Ok(None),
        }
    }

    /// Direct page summary lookup.
    async fn lookup(&self, title: &str) -> Result<Option<SummaryResult>> {
        let resp = self.fetch.get(&self.summary_url(title), ACCEPT_JSON).await?;
        if !resp.is_success() {
            return Ok(None);
        }
        let page: Option<PageSummary> = serde_json::from_str(&resp.body)?;
        Ok(page.and_then(|p| p.accept(title)))
    }
}
