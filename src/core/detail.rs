//! Detail pane summary tracking.
//!
//! Every selection change resets the summary to `Loading` and issues a fresh
//! ticket. A resolved summary is applied only if its ticket still matches the
//! current selection, so a slow lookup for a previous movie can never show up
//! under a newer one.

use crate::models::catalog::CatalogItem;
use crate::models::summary::{SummaryResult, SummaryState};

/// Handle for one summary lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTicket {
    pub token: u64,
    pub item_id: String,
    /// Display name to resolve.
    pub name: String,
}

/// Summary state of the detail view.
#[derive(Debug, Default)]
pub struct DetailPane {
    current: Option<(String, String)>,
    token: u64,
    summary: SummaryState,
}

impl DetailPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `item`. Returns a ticket when a new lookup must be started.
    ///
    /// Re-selecting the movie already shown keeps the pending lookup.
    pub fn select(&mut self, item: &CatalogItem) -> Option<SummaryTicket> {
        let key = (item.id.clone(), item.name.clone());
        if self.current.as_ref() == Some(&key) {
            return None;
        }

        self.token += 1;
        self.summary = SummaryState::Loading;
        self.current = Some(key);
        Some(SummaryTicket {
            token: self.token,
            item_id: item.id.clone(),
            name: item.name.clone(),
        })
    }

    /// Nothing selected anymore; outstanding tickets become stale.
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            self.token += 1;
        }
        self.summary = SummaryState::Idle;
    }

    /// Apply a lookup result. Returns `false` when the ticket is stale.
    pub fn commit(&mut self, ticket: &SummaryTicket, result: Option<SummaryResult>) -> bool {
        let current_id = self.current.as_ref().map(|(id, _)| id.as_str());
        if ticket.token != self.token || current_id != Some(ticket.item_id.as_str()) {
            tracing::debug!("Dropping stale summary for {:?}", ticket.name);
            return false;
        }
        self.summary = result.into();
        true
    }

    pub fn summary(&self) -> &SummaryState {
        &self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, name: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn summary(title: &str) -> SummaryResult {
        SummaryResult {
            title: title.to_string(),
            extract: format!("{} is a film.", title),
            url: format!("https://en.wikipedia.org/wiki/{}", title),
        }
    }

    #[test]
    fn test_select_resets_to_loading() {
        let mut pane = DetailPane::new();
        let ticket = pane.select(&movie("1", "Heat")).unwrap();
        assert!(pane.commit(&ticket, Some(summary("Heat"))));
        assert_eq!(pane.summary().result().unwrap().title, "Heat");

        pane.select(&movie("2", "Alien")).unwrap();
        assert!(pane.summary().is_loading());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut pane = DetailPane::new();
        let first = pane.select(&movie("1", "Heat")).unwrap();
        let second = pane.select(&movie("2", "Alien")).unwrap();

        assert!(!pane.commit(&first, Some(summary("Heat"))));
        assert!(pane.summary().is_loading());

        assert!(pane.commit(&second, None));
        assert_eq!(pane.summary(), &SummaryState::NotFound);
    }

    #[test]
    fn test_reselecting_same_item_keeps_pending_lookup() {
        let mut pane = DetailPane::new();
        let ticket = pane.select(&movie("1", "Heat")).unwrap();
        assert!(pane.select(&movie("1", "Heat")).is_none());
        assert!(pane.commit(&ticket, Some(summary("Heat"))));
    }

    #[test]
    fn test_back_and_forth_uses_fresh_ticket() {
        let mut pane = DetailPane::new();
        let first = pane.select(&movie("1", "Heat")).unwrap();
        pane.select(&movie("2", "Alien")).unwrap();
        let again = pane.select(&movie("1", "Heat")).unwrap();

        assert_ne!(first.token, again.token);
        assert!(!pane.commit(&first, Some(summary("Heat"))));
        assert!(pane.commit(&again, Some(summary("Heat"))));
    }

    #[test]
    fn test_clear_invalidates_tickets() {
        let mut pane = DetailPane::new();
        let ticket = pane.select(&movie("1", "Heat")).unwrap();
        pane.clear();
        assert_eq!(pane.summary(), &SummaryState::Idle);
        assert!(!pane.commit(&ticket, Some(summary("Heat"))));
    }
}
