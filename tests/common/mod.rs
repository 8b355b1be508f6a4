#![allow(dead_code)]

//! Shared fixtures for integration tests.

use std::sync::Arc;

use pokedex::adapters::{MockDataSource, RecordingObserver};
use pokedex::browser::{BrowserConfig, PokemonBrowser};

/// A browser wired to a scripted source and a recording observer.
pub struct Harness {
    pub browser: PokemonBrowser,
    pub source: Arc<MockDataSource>,
    pub observer: RecordingObserver,
}

impl Harness {
    pub fn new(config: BrowserConfig) -> Self {
        let source = Arc::new(MockDataSource::new());
        let observer = RecordingObserver::new();
        let browser = PokemonBrowser::new(source.clone(), Arc::new(observer.clone()), config);
        Self {
            browser,
            source,
            observer,
        }
    }

    /// Harness with the default page size of 20.
    pub fn standard() -> Self {
        Self::new(BrowserConfig::default())
    }

    /// Script and apply a first page holding `ids`.
    pub async fn load_first_page(&mut self, ids: std::ops::RangeInclusive<u32>) {
        self.source.set_page(0, MockDataSource::summaries(ids));
        self.browser.load_initial();
        self.browser.settle().await;
        self.observer.clear();
    }
}

/// Ids of `items`, in order.
pub fn ids(items: &[pokedex::models::PokemonSummary]) -> Vec<u32> {
    items.iter().map(|p| p.id).collect()
}

/// Panic if `items` repeats an id.
pub fn assert_unique_ids(items: &[pokedex::models::PokemonSummary]) {
    let mut seen = std::collections::HashSet::new();
    for pokemon in items {
        assert!(seen.insert(pokemon.id), "duplicate id {}", pokemon.id);
    }
}
