//! Navigation state controller.
//!
//! Two modes: the search results list and the related list of the selected
//! movie. All state changes go through the transition methods; the list,
//! detail and labels shown to the user are derived from the state on demand.

use crate::models::catalog::CatalogItem;

pub const SEARCH_RESULTS_LABEL: &str = "Search results";

/// Heading of the related list for a movie.
pub fn related_label(name: &str) -> String {
    format!("Movies related to \"{}\"", name)
}

/// Which list is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Search,
    Related,
}

/// Navigation state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    pub mode: Mode,
    pub search_term: String,
    pub selected: Option<CatalogItem>,
}

/// Whether a query should run, and with which parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan<P> {
    pub enabled: bool,
    pub params: P,
}

/// Parameters of the related movies lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedParams {
    pub ids: Vec<String>,
    pub language: String,
    pub limit: u32,
}

/// Owner of the navigation state.
#[derive(Debug, Default)]
pub struct NavigationController {
    state: NavigationState,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn selected(&self) -> Option<&CatalogItem> {
        self.state.selected.as_ref()
    }

    /// Start a new search. Blank terms are ignored.
    pub fn submit_search(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        self.state.mode = Mode::Search;
        self.state.search_term = term.to_string();
        self.state.selected = None;
        true
    }

    /// Select a movie from the active list.
    ///
    /// Picking from the related list starts over from that movie rather than
    /// nesting: the related list switches to the new movie's.
    pub fn select_item(&mut self, item: CatalogItem) {
        match self.state.mode {
            Mode::Search => self.state.selected = Some(item),
            Mode::Related => {
                self.back_to_search();
                self.state.selected = Some(item);
                self.show_related();
            }
        }
    }

    /// Switch to the related list of the selected movie.
    pub fn show_related(&mut self) -> bool {
        if !self.can_show_related() {
            return false;
        }
        self.state.mode = Mode::Related;
        true
    }

    /// Return to the search results, keeping term and selection.
    pub fn back_to_search(&mut self) -> bool {
        if self.state.mode != Mode::Related {
            return false;
        }
        self.state.mode = Mode::Search;
        true
    }

    /// The related affordance is offered only in search mode with a selection.
    pub fn can_show_related(&self) -> bool {
        self.state.mode == Mode::Search && self.state.selected.is_some()
    }

    /// Search query: runs only in search mode with a non-empty term.
    pub fn search_query(&self) -> QueryPlan<String> {
        QueryPlan {
            enabled: self.state.mode == Mode::Search && !self.state.search_term.is_empty(),
            params: self.state.search_term.clone(),
        }
    }

    /// Related query: runs only in related mode for the selected movie.
    pub fn related_query(&self, language: &str, limit: u32) -> QueryPlan<RelatedParams> {
        let ids = self
            .state
            .selected
            .as_ref()
            .map(|item| vec![item.id.clone()])
            .unwrap_or_default();
        QueryPlan {
            enabled: self.state.mode == Mode::Related && !ids.is_empty(),
            params: RelatedParams {
                ids,
                language: language.to_string(),
                limit,
            },
        }
    }

    /// Fetched record of the selected movie among related query results.
    pub fn detail_record<'a>(&self, records: Option<&'a [CatalogItem]>) -> Option<&'a CatalogItem> {
        let selected = self.state.selected.as_ref()?;
        let records = records?;
        records
            .iter()
            .find(|r| r.id == selected.id)
            .or_else(|| records.first())
    }

    /// The list shown to the user.
    pub fn active_list<'a>(
        &self,
        search_results: Option<&'a [CatalogItem]>,
        related_records: Option<&'a [CatalogItem]>,
    ) -> &'a [CatalogItem] {
        match self.state.mode {
            Mode::Search => search_results.unwrap_or(&[]),
            Mode::Related => self
                .detail_record(related_records)
                .map(|record| record.similar_items())
                .unwrap_or(&[]),
        }
    }

    /// The movie shown in the detail view.
    ///
    /// In related mode the fetched record replaces the clicked one once it
    /// has arrived.
    pub fn displayed_item<'a>(
        &'a self,
        related_records: Option<&'a [CatalogItem]>,
    ) -> Option<&'a CatalogItem> {
        if self.state.mode == Mode::Related {
            if let Some(record) = self.detail_record(related_records) {
                return Some(record);
            }
        }
        self.state.selected.as_ref()
    }

    /// Heading of the list. Uses the clicked record's name, not the refetched one.
    pub fn header_label(&self) -> String {
        match (self.state.mode, self.state.selected.as_ref()) {
            (Mode::Related, Some(item)) => related_label(&item.name),
            _ => SEARCH_RESULTS_LABEL.to_string(),
        }
    }
}
