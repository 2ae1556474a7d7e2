//! Browse session: navigation, catalog queries and the detail pane together.

use super::detail::{DetailPane, SummaryTicket};
use super::navigation::{Mode, NavigationController, NavigationState, RelatedParams};
use super::query::Query;
use crate::models::catalog::CatalogItem;
use crate::models::config::CatalogConfig;
use crate::models::summary::{SummaryResult, SummaryState};
use crate::services::catalog::CatalogService;

/// Interactive browsing state over a catalog.
///
/// Transitions re-evaluate both catalog queries and run whichever one the
/// new state enables (unless its result is already cached). Summary lookups
/// are left to the caller: selecting a movie hands out a [`SummaryTicket`],
/// and the result comes back through [`BrowseSession::commit_summary`].
pub struct BrowseSession<C> {
    catalog: C,
    language: String,
    related_limit: u32,
    nav: NavigationController,
    search: Query<String, Vec<CatalogItem>>,
    related: Query<RelatedParams, Vec<CatalogItem>>,
    detail: DetailPane,
}

impl<C: CatalogService> BrowseSession<C> {
    pub fn new(catalog: C, config: &CatalogConfig) -> Self {
        Self {
            catalog,
            language: config.language.clone(),
            related_limit: config.related_limit,
            nav: NavigationController::new(),
            search: Query::new(),
            related: Query::new(),
            detail: DetailPane::new(),
        }
    }

    /// Run a new search. Blank terms are ignored and return `false`.
    pub async fn submit_search(&mut self, term: &str) -> bool {
        if !self.nav.submit_search(term) {
            return false;
        }
        self.detail.clear();
        self.refresh().await;
        true
    }

    /// Select the `index`-th movie (zero-based) of the active list.
    pub async fn select_index(&mut self, index: usize) -> Option<SummaryTicket> {
        let item = self.active_list().get(index).cloned()?;
        self.select_item(item).await
    }

    /// Select a movie. Returns a ticket when its summary must be looked up.
    pub async fn select_item(&mut self, item: CatalogItem) -> Option<SummaryTicket> {
        let ticket = self.detail.select(&item);
        self.nav.select_item(item);
        self.refresh().await;
        ticket
    }

    pub async fn show_related(&mut self) -> bool {
        if !self.nav.show_related() {
            return false;
        }
        self.refresh().await;
        true
    }

    pub async fn back_to_search(&mut self) -> bool {
        if !self.nav.back_to_search() {
            return false;
        }
        self.refresh().await;
        true
    }

    /// Apply a summary lookup result; stale tickets are ignored.
    pub fn commit_summary(&mut self, ticket: &SummaryTicket, result: Option<SummaryResult>) -> bool {
        self.detail.commit(ticket, result)
    }

    /// Sync both queries with the navigation state and fetch what is missing.
    async fn refresh(&mut self) {
        if let Some(term) = self.search.sync(self.nav.search_query()) {
            let outcome = self.catalog.search_movies(&term).await;
            self.search.finish(term, outcome);
        }

        let plan = self.nav.related_query(&self.language, self.related_limit);
        if let Some(params) = self.related.sync(plan) {
            let outcome = self
                .catalog
                .movies_with_similar(&params.ids, &params.language, params.limit)
                .await;
            self.related.finish(params, outcome);
        }
    }

    pub fn state(&self) -> &NavigationState {
        self.nav.state()
    }

    pub fn mode(&self) -> Mode {
        self.nav.mode()
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn active_list(&self) -> &[CatalogItem] {
        self.nav.active_list(
            self.search.data().map(Vec::as_slice),
            self.related.data().map(Vec::as_slice),
        )
    }

    pub fn displayed_item(&self) -> Option<&CatalogItem> {
        self.nav.displayed_item(self.related.data().map(Vec::as_slice))
    }

    pub fn header_label(&self) -> String {
        self.nav.header_label()
    }

    pub fn can_show_related(&self) -> bool {
        self.nav.can_show_related()
    }

    /// Whether the active query is still running.
    pub fn is_loading(&self) -> bool {
        match self.nav.mode() {
            Mode::Search => self.search.is_loading(),
            Mode::Related => self.related.is_loading(),
        }
    }

    /// Error of the active query, if its last fetch failed.
    pub fn load_failed(&self) -> Option<&str> {
        match self.nav.mode() {
            Mode::Search => self.search.error(),
            Mode::Related => self.related.error(),
        }
    }

    pub fn summary(&self) -> &SummaryState {
        self.detail.summary()
    }
}
