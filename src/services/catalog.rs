//! Catalog (TMDB GraphQL) client.

use crate::models::catalog::CatalogItem;
use crate::models::config::CatalogConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const SEARCH_MOVIES: &str = r#"
query SearchMovies($query: String!) {
  searchMovies(query: $query) {
    id
    name
    overview
    releaseDate
    score
    genres { id name }
    poster { small }
    runtime
    tagline
    votes
    adult
  }
}
"#;

pub const MOVIES_WITH_SIMILAR: &str = r#"
query MoviesWithSimilar($ids: [ID!]!, $language: Translations = English, $limit: Int = 20) {
  movies(ids: $ids, language: $language) {
    id
    name
    tagline
    overview
    releaseDate
    score
    runtime
    status
    genres { id name }
    languages { name }
    country { name }
    votes
    adult
    poster { small large }
    backdrop { large }
    similar(language: $language, limit: $limit) {
      id
      name
      overview
      releaseDate
      score
      runtime
      tagline
      adult
      genres { id name }
      poster { small }
    }
  }
}
"#;

/// Read-only catalog queries.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Movies matching a free-text term, in service order.
    async fn search_movies(&self, term: &str) -> Result<Vec<CatalogItem>>;

    /// Full records for `ids`, each with up to `limit` related movies.
    async fn movies_with_similar(
        &self,
        ids: &[String],
        language: &str,
        limit: u32,
    ) -> Result<Vec<CatalogItem>>;
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Serialize)]
struct SearchVariables<'a> {
    query: &'a str,
}

#[derive(Debug, Serialize)]
struct SimilarVariables<'a> {
    ids: &'a [String],
    language: &'a str,
    limit: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchData {
    search_movies: Option<Vec<CatalogItem>>,
}

#[derive(Debug, Deserialize)]
struct MoviesData {
    movies: Option<Vec<CatalogItem>>,
}

/// Decode a GraphQL response body, turning reported errors into `Error`.
fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    let resp: GraphqlResponse<T> = serde_json::from_str(body)?;
    if !resp.errors.is_empty() {
        let messages: Vec<_> = resp.errors.into_iter().map(|e| e.message).collect();
        return Err(Error::CatalogQuery(messages.join("; ")));
    }
    resp.data
        .ok_or_else(|| Error::CatalogQuery("response has no data".to_string()))
}

/// GraphQL catalog client.
pub struct CatalogClient {
    config: CatalogConfig,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a new catalog client.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Check that the endpoint answers a trivial query.
    pub async fn ping(&self) -> Result<bool> {
        let request = GraphqlRequest {
            query: "{ __typename }",
            variables: serde_json::json!({}),
        };
        match self.client.post(&self.config.endpoint).json(&request).send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) => {
                tracing::debug!("Catalog ping to {} failed: {}", self.config.endpoint, e);
                Ok(false)
            }
        }
    }

    async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        let request = GraphqlRequest { query, variables };
        let resp = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::CatalogStatus(status.as_u16()));
        }

        let body = resp.text().await?;
        decode_response(&body)
    }
}

#[async_trait]
impl CatalogService for CatalogClient {
    async fn search_movies(&self, term: &str) -> Result<Vec<CatalogItem>> {
        tracing::debug!("Catalog search: {:?}", term);
        let data: SearchData = self
            .execute(SEARCH_MOVIES, SearchVariables { query: term })
            .await?;
        Ok(data.search_movies.unwrap_or_default())
    }

    async fn movies_with_similar(
        &self,
        ids: &[String],
        language: &str,
        limit: u32,
    ) -> Result<Vec<CatalogItem>> {
        tracing::debug!("Catalog related lookup: {:?} ({}, limit {})", ids, language, limit);
        let data: MoviesData = self
            .execute(
                MOVIES_WITH_SIMILAR,
                SimilarVariables {
                    ids,
                    language,
                    limit,
                },
            )
            .await?;
        Ok(data.movies.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_search_response() {
        let body = r#"{"data": {"searchMovies": [{"id": "550", "name": "Fight Club"}]}}"#;
        let data: SearchData = decode_response(body).unwrap();
        let movies = data.search_movies.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].name, "Fight Club");
    }

    #[test]
    fn test_decode_errors() {
        let body = r#"{"data": null, "errors": [{"message": "boom"}, {"message": "again"}]}"#;
        match decode_response::<SearchData>(body) {
            Err(Error::CatalogQuery(msg)) => assert_eq!(msg, "boom; again"),
            other => panic!("Expected CatalogQuery error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_missing_data() {
        assert!(matches!(
            decode_response::<MoviesData>("{}"),
            Err(Error::CatalogQuery(_))
        ));
    }

    #[test]
    fn test_similar_variables_shape() {
        let ids = vec!["550".to_string()];
        let value = serde_json::to_value(SimilarVariables {
            ids: &ids,
            language: "English",
            limit: 20,
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({"ids": ["550"], "language": "English", "limit": 20})
        );
    }

    #[tokio::test]
    async fn test_ping_unreachable_endpoint_logs_cause() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;
        use tracing_subscriber::layer::{Context, Layer};
        use tracing_subscriber::prelude::*;

        struct DebugCounter(Arc<AtomicUsize>);

        impl<S: tracing::Subscriber> Layer<S> for DebugCounter {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                if *event.metadata().level() == tracing::Level::DEBUG {
                    self.0.fetch_add(1, Ordering::SeqCst);
                }
            }
        }

        // Bind then drop a listener so the port refuses connections
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let logged = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(DebugCounter(Arc::clone(&logged)));
        let _guard = tracing::subscriber::set_default(subscriber);

        let client = CatalogClient::new(CatalogConfig {
            endpoint: format!("http://127.0.0.1:{}/", port),
            timeout: 2,
            ..CatalogConfig::default()
        })
        .unwrap();

        assert!(!client.ping().await.unwrap());
        assert!(logged.load(Ordering::SeqCst) >= 1);
    }
}
