//! Pokédex - a paginated, searchable Pokémon list browser backed by PokeAPI
//!
//! The library holds the list controller ([`browser`]), its data-source and
//! observer seams ([`traits`]), the PokeAPI and test adapters ([`adapters`])
//! and the command-line front end ([`cli`]).

pub mod adapters;
pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod traits;
