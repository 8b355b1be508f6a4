//! Errors surfaced by the list browser.

use thiserror::Error;

use super::data_source::DataSourceError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    /// A page fetch failed. Carries the data source's rendered message.
    #[error("{message}")]
    NetworkFailure { message: String },

    /// Pagination kept returning pages made only of already-loaded entries.
    #[error("Stopped loading after {pages} consecutive pages of already-loaded Pokémon")]
    PaginationStalled { pages: u32 },

    /// `select_item` was called with an index outside the visible list.
    #[error("Index {index} is out of bounds for {len} visible items")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl From<DataSourceError> for BrowserError {
    fn from(err: DataSourceError) -> Self {
        BrowserError::NetworkFailure {
            message: err.to_string(),
        }
    }
}
