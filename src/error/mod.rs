//! Error types for the Pokédex.
//!
//! Two layers:
//!
//! - [`DataSourceError`]: what a [`PokemonDataSource`](crate::traits::PokemonDataSource)
//!   reports. Five kinds, mirroring the remote API contract.
//! - [`BrowserError`]: what the list browser surfaces. All data source failures
//!   collapse into [`BrowserError::NetworkFailure`]; an out-of-range selection is
//!   [`BrowserError::IndexOutOfBounds`].
//!
//! | Kind | Retryable | Surfaced to observer |
//! |------|-----------|----------------------|
//! | `NetworkError` | Yes | as `on_load_failed` |
//! | `ServerError` | Sometimes | as `on_load_failed` |
//! | `InvalidUrl` / `NoData` / `DecodingError` | No | as `on_load_failed` |
//! | `IndexOutOfBounds` | No | returned to caller |

mod browser;
mod data_source;

pub use browser::BrowserError;
pub use data_source::{DataSourceError, DataSourceResult};
