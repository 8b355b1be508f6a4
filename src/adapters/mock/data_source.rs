//! Scripted data source for testing.
//!
//! Responses are configured per page offset, per lookup name and per detail id.
//! Any of them can be gated: the call then waits until the test releases the
//! gate, which makes out-of-order completion reproducible.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::error::{DataSourceError, DataSourceResult};
use crate::models::{PokemonDetail, PokemonSummary};
use crate::traits::PokemonDataSource;

#[derive(Debug, Default)]
struct Script {
    pages: HashMap<u32, DataSourceResult<Vec<PokemonSummary>>>,
    names: HashMap<String, DataSourceResult<PokemonSummary>>,
    details: HashMap<u32, DataSourceResult<PokemonDetail>>,
    random: Option<DataSourceResult<PokemonSummary>>,
    page_gates: HashMap<u32, Arc<Notify>>,
    name_gates: HashMap<String, Arc<Notify>>,
}

/// Mock [`PokemonDataSource`].
///
/// Unscripted pages come back empty; unscripted names, details and the random
/// pick fail with an HTTP 404 `ServerError`.
///
/// # Example
///
/// ```ignore
/// use pokedex::adapters::MockDataSource;
///
/// let source = MockDataSource::new();
/// source.set_page(0, MockDataSource::summaries(1..=20));
/// let gate = source.gate_name("pika");
/// // ... issue a search, then later:
/// gate.notify_one();
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockDataSource {
    script: Arc<Mutex<Script>>,
    page_requests: Arc<Mutex<Vec<(u32, u32)>>>,
    name_requests: Arc<Mutex<Vec<String>>>,
}

impl MockDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summaries named `pokemon-{id}` for every id in `ids`.
    pub fn summaries(ids: impl IntoIterator<Item = u32>) -> Vec<PokemonSummary> {
        ids.into_iter()
            .map(|id| PokemonSummary::with_default_sprite(id, format!("pokemon-{}", id)))
            .collect()
    }

    fn not_found(what: &str) -> DataSourceError {
        DataSourceError::from_status(404, &format!("Not Found: {}", what))
    }

    /// Answer `fetch_page(offset, _)` with `items`.
    pub fn set_page(&self, offset: u32, items: Vec<PokemonSummary>) {
        self.script.lock().unwrap().pages.insert(offset, Ok(items));
    }

    /// Answer `fetch_page(offset, _)` with `err`.
    pub fn set_page_error(&self, offset: u32, err: DataSourceError) {
        self.script.lock().unwrap().pages.insert(offset, Err(err));
    }

    /// Answer `fetch_by_name(name)` with `pokemon`.
    pub fn set_name(&self, name: &str, pokemon: PokemonSummary) {
        self.script
            .lock()
            .unwrap()
            .names
            .insert(name.to_string(), Ok(pokemon));
    }

    /// Answer `fetch_by_name(name)` with `err`.
    pub fn set_name_error(&self, name: &str, err: DataSourceError) {
        self.script
            .lock()
            .unwrap()
            .names
            .insert(name.to_string(), Err(err));
    }

    pub fn set_detail(&self, detail: PokemonDetail) {
        self.script
            .lock()
            .unwrap()
            .details
            .insert(detail.id, Ok(detail));
    }

    pub fn set_random(&self, pokemon: PokemonSummary) {
        self.script.lock().unwrap().random = Some(Ok(pokemon));
    }

    /// Hold `fetch_page(offset, _)` until the returned gate is notified.
    pub fn gate_page(&self, offset: u32) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.script
            .lock()
            .unwrap()
            .page_gates
            .insert(offset, Arc::clone(&gate));
        gate
    }

    /// Hold `fetch_by_name(name)` until the returned gate is notified.
    pub fn gate_name(&self, name: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.script
            .lock()
            .unwrap()
            .name_gates
            .insert(name.to_string(), Arc::clone(&gate));
        gate
    }

    /// `(offset, limit)` of every page request, in call order.
    pub fn page_requests(&self) -> Vec<(u32, u32)> {
        self.page_requests.lock().unwrap().clone()
    }

    /// Every name passed to `fetch_by_name`, in call order.
    pub fn name_requests(&self) -> Vec<String> {
        self.name_requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.page_requests.lock().unwrap().len() + self.name_requests.lock().unwrap().len()
    }
}

#[async_trait]
impl PokemonDataSource for MockDataSource {
    async fn fetch_page(&self, offset: u32, limit: u32) -> DataSourceResult<Vec<PokemonSummary>> {
        self.page_requests.lock().unwrap().push((offset, limit));

        let gate = self.script.lock().unwrap().page_gates.get(&offset).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let script = self.script.lock().unwrap();
        match script.pages.get(&offset) {
            Some(result) => result.clone(),
            None => Ok(Vec::new()),
        }
    }

    async fn fetch_by_name(&self, name: &str) -> DataSourceResult<PokemonSummary> {
        self.name_requests.lock().unwrap().push(name.to_string());

        let gate = self.script.lock().unwrap().name_gates.get(name).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let script = self.script.lock().unwrap();
        script
            .names
            .get(name)
            .cloned()
            .unwrap_or_else(|| Err(Self::not_found(name)))
    }

    async fn fetch_detail(&self, id: u32) -> DataSourceResult<PokemonDetail> {
        let script = self.script.lock().unwrap();
        script
            .details
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Err(Self::not_found(&id.to_string())))
    }

    async fn fetch_random(&self) -> DataSourceResult<PokemonSummary> {
        let script = self.script.lock().unwrap();
        script
            .random
            .clone()
            .unwrap_or_else(|| Err(Self::not_found("random")))
    }
}
