//! Error types for the movie finder.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the movie finder.
#[derive(Error, Debug)]
pub enum Error {
    // Catalog errors
    #[error("Catalog request failed with status {0}")]
    CatalogStatus(u16),

    #[error("Catalog query failed: {0}")]
    CatalogQuery(String),

    #[error("Catalog response missing data for: {0}")]
    CatalogEmpty(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // TOML errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
