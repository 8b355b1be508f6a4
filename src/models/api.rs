//! PokeAPI response documents.
//!
//! Only the fields the Pokédex reads are modelled; serde ignores the rest.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::pokemon::{capitalize, sprite_url, PokemonDetail, PokemonStat, PokemonSummary};

/// A `{ name, url }` pair, PokeAPI's generic reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Extract the numeric id from the resource URL.
    ///
    /// PokeAPI URLs end with the id and usually a trailing slash
    /// (`.../pokemon/25/`). Returns `None` for a missing, non-numeric or zero id.
    pub fn id(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse::<u32>().ok())
            .filter(|id| *id > 0)
    }
}

/// `GET /pokemon?offset=&limit=`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListResponse {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl PokemonListResponse {
    /// Convert the page into summaries, preserving order.
    ///
    /// Entries whose URL carries no usable id are dropped. The page then
    /// reports fewer entries than the server consumed, so a caller advancing
    /// its offset by the returned length trails the server by the number
    /// dropped, and a full page can read as short. PokeAPI links every list
    /// entry by id, so this only happens on malformed responses.
    pub fn into_summaries(self) -> Vec<PokemonSummary> {
        self.results
            .into_iter()
            .filter_map(|entry| match entry.id() {
                Some(id) => Some(PokemonSummary::with_default_sprite(id, entry.name)),
                None => {
                    warn!("Skipping list entry '{}' with unusable url '{}'", entry.name, entry.url);
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonTypeEntry {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// `GET /pokemon/{id or name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetailResponse {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub sprites: PokemonSprites,
    #[serde(default)]
    pub types: Vec<PokemonTypeEntry>,
    #[serde(default)]
    pub stats: Vec<PokemonStatEntry>,
}

impl PokemonDetailResponse {
    fn image_url(&self) -> String {
        self.sprites
            .front_default
            .clone()
            .unwrap_or_else(|| sprite_url(self.id))
    }

    /// Summary keeping the API's canonical (lowercase) name.
    pub fn to_summary(&self) -> PokemonSummary {
        PokemonSummary::new(self.id, self.name.clone(), self.image_url())
    }

    /// Detail record with a display name and types in slot order.
    pub fn into_detail(self) -> PokemonDetail {
        let image_url = self.image_url();
        let mut types = self.types;
        types.sort_by_key(|entry| entry.slot);

        PokemonDetail {
            id: self.id,
            name: capitalize(&self.name),
            height: self.height,
            weight: self.weight,
            image_url,
            types: types.into_iter().map(|entry| entry.kind.name).collect(),
            stats: self
                .stats
                .into_iter()
                .map(|entry| PokemonStat {
                    name: entry.stat.name,
                    value: entry.base_stat,
                })
                .collect(),
        }
    }
}
