//! Pokémon data source trait.

use async_trait::async_trait;

use crate::error::DataSourceResult;
use crate::models::{PokemonDetail, PokemonSummary};

/// Remote source of Pokémon records.
///
/// Implementations are free to complete on any worker thread; the browser
/// marshals results back onto its owning context before touching state.
/// Timeouts are the implementation's concern.
#[async_trait]
pub trait PokemonDataSource: Send + Sync {
    /// Fetch one page of the collection list, in upstream order.
    ///
    /// The result may be shorter than the upstream page when entries cannot
    /// be mapped to a summary; see
    /// [`PokemonListResponse::into_summaries`](crate::models::PokemonListResponse::into_summaries).
    async fn fetch_page(&self, offset: u32, limit: u32) -> DataSourceResult<Vec<PokemonSummary>>;

    /// Exact lookup by canonical name (or id). Fails when nothing matches exactly.
    async fn fetch_by_name(&self, name: &str) -> DataSourceResult<PokemonSummary>;

    /// Full record for the detail screen.
    async fn fetch_detail(&self, id: u32) -> DataSourceResult<PokemonDetail>;

    /// A randomly chosen creature for the home screen.
    async fn fetch_random(&self) -> DataSourceResult<PokemonSummary>;
}
