//! Browser session state.

use std::collections::HashSet;

use crate::config::{DEFAULT_MAX_DUPLICATE_PAGES, DEFAULT_PAGE_SIZE};
use crate::models::PokemonSummary;

/// Tunables for a [`PokemonBrowser`](super::PokemonBrowser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Items requested per page. A shorter page ends pagination.
    pub page_size: u32,
    /// `load_more` gives up after this many consecutive pages that held
    /// nothing new.
    pub max_duplicate_pages: u32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_duplicate_pages: DEFAULT_MAX_DUPLICATE_PAGES,
        }
    }
}

impl BrowserConfig {
    /// Default config with `page_size` items per page (at least one).
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Both fields raised to at least one.
    pub fn normalized(self) -> Self {
        Self {
            page_size: self.page_size.max(1),
            max_duplicate_pages: self.max_duplicate_pages.max(1),
        }
    }
}

/// Mutable state of one browsing session.
///
/// Only [`PokemonBrowser`](super::PokemonBrowser) mutates it; everyone else
/// gets a shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    /// Accumulated list, unique by id, in fetch order
    pub items: Vec<PokemonSummary>,
    /// What the UI should render
    pub visible_items: Vec<PokemonSummary>,
    /// Next page cursor
    pub offset: u32,
    pub is_loading_initial: bool,
    pub is_loading_more: bool,
    pub can_load_more: bool,
    /// Empty when not searching
    pub search_query: String,
    known_ids: HashSet<u32>,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            visible_items: Vec::new(),
            offset: 0,
            is_loading_initial: false,
            is_loading_more: false,
            can_load_more: true,
            search_query: String::new(),
            known_ids: HashSet::new(),
        }
    }
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_searching(&self) -> bool {
        !self.search_query.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.known_ids.contains(&id)
    }

    /// Replace the accumulated list with `page`, dropping repeated ids.
    pub(crate) fn replace_items(&mut self, page: Vec<PokemonSummary>) {
        self.items.clear();
        self.known_ids.clear();
        self.append_new(page);
    }

    /// Append the entries of `page` whose id is not yet known.
    ///
    /// Returns how many were accepted.
    pub(crate) fn append_new(&mut self, page: Vec<PokemonSummary>) -> usize {
        let before = self.items.len();
        for pokemon in page {
            if self.known_ids.insert(pokemon.id) {
                self.items.push(pokemon);
            }
        }
        self.items.len() - before
    }

    /// Make the whole list visible.
    pub(crate) fn show_all(&mut self) {
        self.visible_items = self.items.clone();
    }

    /// Show loaded entries whose name contains `query`, ignoring case.
    pub(crate) fn show_matching(&mut self, query: &str) {
        let needle = query.to_lowercase();
        self.visible_items = self
            .items
            .iter()
            .filter(|pokemon| pokemon.name_contains(&needle))
            .cloned()
            .collect();
    }
}
