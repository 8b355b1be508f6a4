//! Messages delivered from data source tasks back to the browser's owner.

use crate::error::DataSourceError;
use crate::models::PokemonSummary;

/// Which page-fetch category a page message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Initial,
    More,
}

/// Completion of an asynchronous browser request.
///
/// Each message carries the generation of the request that produced it; the
/// browser drops messages whose generation is no longer current.
#[derive(Debug, Clone)]
pub enum BrowserMessage {
    /// A page fetch succeeded
    PageLoaded {
        kind: PageRequest,
        generation: u64,
        offset: u32,
        items: Vec<PokemonSummary>,
    },
    /// A page fetch failed
    PageFailed {
        kind: PageRequest,
        generation: u64,
        error: DataSourceError,
    },
    /// The remote lookup for a search query found an exact match
    SearchResolved {
        generation: u64,
        query: String,
        pokemon: PokemonSummary,
    },
    /// The remote lookup found nothing or failed
    SearchMissed {
        generation: u64,
        query: String,
        error: DataSourceError,
    },
}

impl BrowserMessage {
    pub fn generation(&self) -> u64 {
        match self {
            BrowserMessage::PageLoaded { generation, .. }
            | BrowserMessage::PageFailed { generation, .. }
            | BrowserMessage::SearchResolved { generation, .. }
            | BrowserMessage::SearchMissed { generation, .. } => *generation,
        }
    }
}
