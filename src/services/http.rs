//! HTTP transport used by the Wikipedia resolver.

use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

pub const ACCEPT_JSON: &str = "application/json";

/// A fetched response: status code and raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Read-only GET transport.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// Issue a GET request with the given `Accept` header.
    ///
    /// Non-success statuses are returned as responses; only transport
    /// failures are errors.
    async fn get(&self, url: &str, accept: &str) -> Result<HttpResponse>;
}

/// `reqwest` backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Create a fetcher with the given request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("movie_finder/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &str, accept: &str) -> Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, accept)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(HttpResponse { status, body })
    }
}
