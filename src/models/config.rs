//! Configuration model.
//!
//! Loaded from `<config dir>/movie_finder/config.toml` when present, then
//! overridden by environment variables:
//! - `MOVIE_FINDER_CATALOG_URL`: GraphQL endpoint of the catalog
//! - `MOVIE_FINDER_LANGUAGE`: catalog translation (default: English)
//! - `MOVIE_FINDER_RELATED_LIMIT`: maximum related movies per lookup
//! - `MOVIE_FINDER_WIKI_REST`: Wikipedia REST base URL
//! - `MOVIE_FINDER_WIKI_SEARCH`: Wikipedia title search URL
//! - `MOVIE_FINDER_TIMEOUT`: request timeout in seconds for both services

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CATALOG_URL: &str = "https://tmdb.sandbox.zoosh.ie/";
const DEFAULT_LANGUAGE: &str = "English";
const DEFAULT_RELATED_LIMIT: u32 = 20;
const DEFAULT_WIKI_REST: &str = "https://en.wikipedia.org/api/rest_v1";
const DEFAULT_WIKI_SEARCH: &str = "https://en.wikipedia.org/w/rest.php/v1/search/title";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog service configuration.
    pub catalog: CatalogConfig,
    /// Wikipedia configuration.
    pub wikipedia: WikipediaConfig,
}

/// Catalog service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// GraphQL endpoint.
    pub endpoint: String,
    /// Translation requested for related lookups.
    pub language: String,
    /// Maximum number of related movies.
    pub related_limit: u32,
    /// Request timeout in seconds.
    pub timeout: u64,
}

/// Wikipedia configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikipediaConfig {
    /// REST API base (page summaries).
    pub rest_base: String,
    /// Title search endpoint.
    pub search_url: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CATALOG_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            related_limit: DEFAULT_RELATED_LIMIT,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            rest_base: DEFAULT_WIKI_REST.to_string(),
            search_url: DEFAULT_WIKI_SEARCH.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Apply environment overrides.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("MOVIE_FINDER_CATALOG_URL") {
            self.catalog.endpoint = url;
        }
        if let Some(language) = lookup("MOVIE_FINDER_LANGUAGE") {
            self.catalog.language = language;
        }
        if let Some(limit) = lookup("MOVIE_FINDER_RELATED_LIMIT").and_then(|s| s.parse().ok()) {
            self.catalog.related_limit = limit;
        }
        if let Some(base) = lookup("MOVIE_FINDER_WIKI_REST") {
            self.wikipedia.rest_base = base.trim_end_matches('/').to_string();
        }
        if let Some(url) = lookup("MOVIE_FINDER_WIKI_SEARCH") {
            self.wikipedia.search_url = url;
        }
        if let Some(timeout) = lookup("MOVIE_FINDER_TIMEOUT").and_then(|s| s.parse().ok()) {
            self.catalog.timeout = timeout;
            self.wikipedia.timeout = timeout;
        }
    }
}

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movie_finder")
}

/// Read a configuration file.
pub fn read_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration from file and environment.
pub fn load_config() -> Config {
    let config_path = config_dir().join("config.toml");

    let mut config = if config_path.exists() {
        match read_config(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", config_path.display(), e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    config.apply_env();
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[catalog]\nrelated_limit = 5\n").unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.catalog.related_limit, 5);
        assert_eq!(config.catalog.endpoint, DEFAULT_CATALOG_URL);
        assert_eq!(config.wikipedia, WikipediaConfig::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[catalog\n").unwrap();

        assert!(matches!(read_config(&path), Err(crate::Error::Toml(_))));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("MOVIE_FINDER_CATALOG_URL", "http://localhost:4000/"),
            ("MOVIE_FINDER_RELATED_LIMIT", "not a number"),
            ("MOVIE_FINDER_WIKI_REST", "http://localhost:9000/rest/"),
            ("MOVIE_FINDER_TIMEOUT", "3"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.catalog.endpoint, "http://localhost:4000/");
        assert_eq!(config.catalog.related_limit, DEFAULT_RELATED_LIMIT);
        assert_eq!(config.wikipedia.rest_base, "http://localhost:9000/rest");
        assert_eq!(config.catalog.timeout, 3);
        assert_eq!(config.wikipedia.timeout, 3);
    }
}
