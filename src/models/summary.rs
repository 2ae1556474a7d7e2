//! Wikipedia summary models.

use serde::{Deserialize, Serialize};

/// A resolved Wikipedia summary for a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Page title as reported by Wikipedia.
    pub title: String,
    /// Plain-text extract.
    pub extract: String,
    /// Canonical desktop page URL.
    pub url: String,
}

/// What the detail view shows for the summary of the selected movie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SummaryState {
    /// No movie selected.
    #[default]
    Idle,
    /// A lookup is in flight for the selected movie.
    Loading,
    Found(SummaryResult),
    /// The lookup finished without a usable page.
    NotFound,
}

impl SummaryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SummaryState::Loading)
    }

    pub fn result(&self) -> Option<&SummaryResult> {
        match self {
            SummaryState::Found(result) => Some(result),
            _ => None,
        }
    }
}

impl From<Option<SummaryResult>> for SummaryState {
    fn from(result: Option<SummaryResult>) -> Self {
        match result {
            Some(result) => SummaryState::Found(result),
            None => SummaryState::NotFound,
        }
    }
}
