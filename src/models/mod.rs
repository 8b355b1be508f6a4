//! Domain and wire models for the Pokédex.
//!
//! Domain types (`PokemonSummary`, `PokemonDetail`) are what the browser and the
//! CLI work with. Wire types mirror the PokeAPI JSON documents and are converted
//! into domain types by the data source adapter.

mod api;
mod pokemon;

pub use api::{
    NamedResource, PokemonDetailResponse, PokemonListResponse, PokemonSprites, PokemonStatEntry,
    PokemonTypeEntry,
};
pub use pokemon::{capitalize, sprite_url, PokemonDetail, PokemonStat, PokemonSummary};
