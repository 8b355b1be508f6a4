//! Paginated, de-duplicating, search-aware Pokémon list browser.
//!
//! [`PokemonBrowser`] backs the collection screen. It owns the pagination
//! cursor, the accumulated list and the search mode, issues requests to a
//! [`PokemonDataSource`] and reports state changes to a [`BrowserObserver`].
//!
//! # Threading
//!
//! Requests run as Tokio tasks and may complete on any worker thread. They
//! never touch the browser: each task sends a [`BrowserMessage`] back over a
//! channel, and the owner applies it with [`PokemonBrowser::handle_message`]
//! (or the `process_*` helpers). State mutation and observer calls therefore
//! always happen on the owner's context, and no locking is needed.
//!
//! # Superseded requests
//!
//! Every request category (initial load, load more, search) has a generation
//! counter. Issuing a request bumps its counter; a completion whose generation
//! is no longer current is dropped.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use pokedex::adapters::PokeApiClient;
//! use pokedex::browser::{BrowserConfig, PokemonBrowser};
//! use pokedex::traits::NoopObserver;
//!
//! let mut browser = PokemonBrowser::new(
//!     Arc::new(PokeApiClient::new()),
//!     Arc::new(NoopObserver),
//!     BrowserConfig::default(),
//! );
//! browser.load_initial();
//! browser.settle().await;
//! browser.search("pikachu");
//! browser.settle().await;
//! ```

mod messages;
mod state;

pub use messages::{BrowserMessage, PageRequest};
pub use state::{BrowserConfig, BrowserState};

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::{BrowserError, DataSourceError};
use crate::models::PokemonSummary;
use crate::traits::{BrowserObserver, PokemonDataSource};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Generations {
    initial: u64,
    more: u64,
    search: u64,
}

impl Generations {
    fn page(&self, kind: PageRequest) -> u64 {
        match kind {
            PageRequest::Initial => self.initial,
            PageRequest::More => self.more,
        }
    }

    fn current_for(&self, msg: &BrowserMessage) -> u64 {
        match msg {
            BrowserMessage::PageLoaded { kind, .. } | BrowserMessage::PageFailed { kind, .. } => {
                self.page(*kind)
            }
            BrowserMessage::SearchResolved { .. } | BrowserMessage::SearchMissed { .. } => {
                self.search
            }
        }
    }
}

/// The collection-screen controller.
///
/// Request-issuing methods must be called from within a Tokio runtime.
pub struct PokemonBrowser {
    source: Arc<dyn PokemonDataSource>,
    observer: Arc<dyn BrowserObserver>,
    config: BrowserConfig,
    state: BrowserState,
    generations: Generations,
    /// Consecutive load-more pages that contained nothing new
    duplicate_pages: u32,
    /// The current query resolved to a single remote match
    remote_hit: bool,
    /// Spawned requests whose message has not been handled yet
    in_flight: usize,
    last_error: Option<BrowserError>,
    message_tx: mpsc::UnboundedSender<BrowserMessage>,
    message_rx: mpsc::UnboundedReceiver<BrowserMessage>,
}

impl PokemonBrowser {
    /// Zero in either `config` field is raised to one.
    pub fn new(
        source: Arc<dyn PokemonDataSource>,
        observer: Arc<dyn BrowserObserver>,
        config: BrowserConfig,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            source,
            observer,
            config: config.normalized(),
            state: BrowserState::new(),
            generations: Generations::default(),
            duplicate_pages: 0,
            remote_hit: false,
            in_flight: 0,
            last_error: None,
            message_tx,
            message_rx,
        }
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn config(&self) -> BrowserConfig {
        self.config
    }

    pub fn items(&self) -> &[PokemonSummary] {
        &self.state.items
    }

    pub fn visible_items(&self) -> &[PokemonSummary] {
        &self.state.visible_items
    }

    pub fn offset(&self) -> u32 {
        self.state.offset
    }

    pub fn is_loading_initial(&self) -> bool {
        self.state.is_loading_initial
    }

    pub fn is_loading_more(&self) -> bool {
        self.state.is_loading_more
    }

    pub fn can_load_more(&self) -> bool {
        self.state.can_load_more
    }

    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    pub fn is_searching(&self) -> bool {
        self.state.is_searching()
    }

    /// The most recent failure reported to the observer.
    pub fn last_error(&self) -> Option<&BrowserError> {
        self.last_error.as_ref()
    }

    /// Whether any issued request has not been applied yet.
    pub fn has_pending_requests(&self) -> bool {
        self.in_flight > 0
    }

    /// The visible entry at `index`.
    pub fn select_item(&self, index: usize) -> Result<&PokemonSummary, BrowserError> {
        self.state
            .visible_items
            .get(index)
            .ok_or(BrowserError::IndexOutOfBounds {
                index,
                len: self.state.visible_items.len(),
            })
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Fetch the first page and replace the list with it.
    ///
    /// No-op while an initial load is already in flight. Supersedes any
    /// in-flight `load_more`.
    pub fn load_initial(&mut self) {
        if self.state.is_loading_initial {
            debug!("load_initial ignored: already loading");
            return;
        }

        self.state.is_loading_initial = true;
        self.state.is_loading_more = false;
        self.generations.initial += 1;
        self.generations.more += 1;
        self.duplicate_pages = 0;

        info!("Loading first page (limit={})", self.config.page_size);
        self.spawn_page_fetch(PageRequest::Initial, 0);
    }

    /// Fetch the page at the current offset and append what is new.
    ///
    /// Silently does nothing while any page load is in flight, after the end
    /// of the list has been reached, or while searching.
    pub fn load_more(&mut self) {
        if !self.can_request_more() {
            debug!(
                "load_more ignored (initial={}, more={}, can_load_more={}, searching={})",
                self.state.is_loading_initial,
                self.state.is_loading_more,
                self.state.can_load_more,
                self.state.is_searching()
            );
            return;
        }

        self.state.is_loading_more = true;
        self.generations.more += 1;

        debug!("Loading page at offset {}", self.state.offset);
        self.spawn_page_fetch(PageRequest::More, self.state.offset);
    }

    /// Enter, update or leave search mode.
    ///
    /// An empty query restores the full list immediately. Otherwise the query
    /// is looked up remotely (lowercased); a hit shows that single creature,
    /// a miss falls back to filtering the loaded list by name.
    pub fn search(&mut self, query: &str) {
        self.generations.search += 1;
        self.remote_hit = false;

        if query.is_empty() {
            self.state.search_query.clear();
            self.state.show_all();
            self.observer.on_list_updated();
            return;
        }

        self.state.search_query = query.to_string();
        self.spawn_search(query.to_string());
    }

    // ------------------------------------------------------------------
    // Completion handling
    // ------------------------------------------------------------------

    /// Apply a completed request.
    pub fn handle_message(&mut self, msg: BrowserMessage) {
        self.in_flight = self.in_flight.saturating_sub(1);

        let current = self.generations.current_for(&msg);
        if msg.generation() != current {
            debug!(
                "Discarding stale completion (generation {}, current {}): {:?}",
                msg.generation(),
                current,
                msg
            );
            return;
        }

        match msg {
            BrowserMessage::PageLoaded {
                kind: PageRequest::Initial,
                items,
                ..
            } => self.apply_initial_page(items),
            BrowserMessage::PageLoaded {
                kind: PageRequest::More,
                items,
                ..
            } => self.apply_more_page(items),
            BrowserMessage::PageFailed { kind, error, .. } => self.apply_page_failure(kind, error),
            BrowserMessage::SearchResolved { query, pokemon, .. } => {
                debug!("Search '{}' matched #{} {}", query, pokemon.id, pokemon.name);
                self.remote_hit = true;
                self.state.visible_items = vec![pokemon];
                self.observer.on_list_updated();
            }
            BrowserMessage::SearchMissed { query, error, .. } => {
                debug!("Search '{}' fell back to local filter: {}", query, error);
                self.remote_hit = false;
                self.state.show_matching(&query);
                self.observer.on_list_updated();
            }
        }
    }

    /// Apply every completion that has already arrived, without waiting.
    ///
    /// Returns the number of messages handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.message_rx.try_recv() {
            self.handle_message(msg);
            handled += 1;
        }
        handled
    }

    /// Wait for the next completion and apply it.
    ///
    /// Returns `false` immediately when nothing is in flight.
    pub async fn process_next(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.message_rx.recv().await {
            Some(msg) => {
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }

    /// Apply completions until nothing is in flight, including follow-up
    /// requests issued while handling them.
    pub async fn settle(&mut self) {
        while self.process_next().await {}
    }

    fn apply_initial_page(&mut self, items: Vec<PokemonSummary>) {
        let received = items.len() as u32;

        self.state.is_loading_initial = false;
        self.state.replace_items(items);
        self.state.offset = received;
        self.state.can_load_more = received >= self.config.page_size;

        // An active search keeps its remote match; a local filter is rerun
        // over the fresh list
        if !self.state.is_searching() {
            self.state.show_all();
        } else if !self.remote_hit {
            let query = self.state.search_query.clone();
            self.state.show_matching(&query);
        }

        self.last_error = None;
        info!(
            "Loaded {} Pokémon (can_load_more={})",
            self.state.items.len(),
            self.state.can_load_more
        );
        self.observer.on_list_loaded();
    }

    fn apply_more_page(&mut self, items: Vec<PokemonSummary>) {
        let received = items.len() as u32;
        let full_page = received >= self.config.page_size;

        self.state.is_loading_more = false;
        let accepted = self.state.append_new(items);
        self.state.offset += received;

        if accepted == 0 && full_page {
            self.duplicate_pages += 1;
            if self.duplicate_pages >= self.config.max_duplicate_pages {
                let err = BrowserError::PaginationStalled {
                    pages: self.duplicate_pages,
                };
                warn!("{}", err);
                self.duplicate_pages = 0;
                self.report_failure(err);
                return;
            }
            if !self.can_request_more() {
                debug!(
                    "Page held only known Pokémon, not retrying (offset now {})",
                    self.state.offset
                );
                self.duplicate_pages = 0;
                self.observer.on_more_loaded();
                return;
            }
            debug!(
                "Page held only known Pokémon ({} in a row), advancing to offset {}",
                self.duplicate_pages, self.state.offset
            );
            self.load_more();
            return;
        }

        self.duplicate_pages = 0;
        self.state.can_load_more = full_page;
        if !self.state.is_searching() {
            self.state.show_all();
        }

        debug!(
            "Appended {} of {} Pokémon, offset now {}",
            accepted, received, self.state.offset
        );
        self.observer.on_more_loaded();
    }

    fn apply_page_failure(&mut self, kind: PageRequest, error: DataSourceError) {
        match kind {
            PageRequest::Initial => self.state.is_loading_initial = false,
            PageRequest::More => {
                self.state.is_loading_more = false;
                self.duplicate_pages = 0;
            }
        }
        warn!("{:?} page load failed [{}]: {}", kind, error.error_code(), error);
        self.report_failure(error.into());
    }

    fn can_request_more(&self) -> bool {
        !self.state.is_loading_initial
            && !self.state.is_loading_more
            && self.state.can_load_more
            && !self.state.is_searching()
    }

    fn report_failure(&mut self, err: BrowserError) {
        let message = err.to_string();
        self.last_error = Some(err);
        self.observer.on_load_failed(&message);
    }

    fn spawn_page_fetch(&mut self, kind: PageRequest, offset: u32) {
        let generation = self.generations.page(kind);
        let limit = self.config.page_size;
        let source = Arc::clone(&self.source);
        let message_tx = self.message_tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let msg = match source.fetch_page(offset, limit).await {
                Ok(items) => BrowserMessage::PageLoaded {
                    kind,
                    generation,
                    offset,
                    items,
                },
                Err(error) => BrowserMessage::PageFailed {
                    kind,
                    generation,
                    error,
                },
            };
            let _ = message_tx.send(msg);
        });
    }

    fn spawn_search(&mut self, query: String) {
        let generation = self.generations.search;
        let source = Arc::clone(&self.source);
        let message_tx = self.message_tx.clone();
        self.in_flight += 1;

        debug!("Searching for '{}'", query);
        tokio::spawn(async move {
            let msg = match source.fetch_by_name(&query.to_lowercase()).await {
                Ok(pokemon) => BrowserMessage::SearchResolved {
                    generation,
                    query,
                    pokemon,
                },
                Err(error) => BrowserMessage::SearchMissed {
                    generation,
                    query,
                    error,
                },
            };
            let _ = message_tx.send(msg);
        });
    }
}
