//! Trait abstractions for dependency injection and testability.
//!
//! The browser never talks to the network or to a UI directly; it goes through
//! these seams so tests can substitute in-memory implementations.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET operations
//! - [`PokemonDataSource`] - Remote Pokémon lookups (list pages, name lookup, detail)
//! - [`BrowserObserver`] - State-change notifications from the list browser

pub mod data_source;
pub mod http;
pub mod observer;

pub use data_source::PokemonDataSource;
pub use http::{Headers, HttpClient, HttpError, Response};
pub use observer::{BrowserObserver, NoopObserver};
