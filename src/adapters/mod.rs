//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`PokeApiClient`] - [`PokemonDataSource`](crate::traits::PokemonDataSource) backed by PokeAPI
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockDataSource`] - Scripted, optionally gated data source
//! - [`mock::RecordingObserver`] - Observer that records every notification

pub mod mock;
pub mod poke_api;
pub mod reqwest_http;

pub use mock::{MockDataSource, MockHttpClient, RecordingObserver};
pub use poke_api::{PokeApiClient, MAX_RANDOM_POKEMON_ID, POKEAPI_BASE_URL};
pub use reqwest_http::ReqwestHttpClient;
