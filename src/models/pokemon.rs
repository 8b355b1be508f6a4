use serde::{Deserialize, Serialize};

/// Base URL of the official sprite repository used for list entries.
pub const SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Build the default front sprite URL for a creature id.
pub fn sprite_url(id: u32) -> String {
    format!("{}/{}.png", SPRITE_BASE_URL, id)
}

/// Uppercase the first character of `name`, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A single entry in the collection list.
///
/// Identity is `id`: two summaries with the same id describe the same creature
/// even when their names or image URLs differ in case or source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    pub image_url: String,
}

impl PokemonSummary {
    pub fn new(id: u32, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: image_url.into(),
        }
    }

    /// Summary with the default sprite URL for `id`.
    pub fn with_default_sprite(id: u32, name: impl Into<String>) -> Self {
        Self::new(id, name, sprite_url(id))
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `needle` must already be lowercased.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// One base stat line on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub name: String,
    pub value: u32,
}

/// Full record shown on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    pub image_url: String,
    pub types: Vec<String>,
    pub stats: Vec<PokemonStat>,
}

impl PokemonDetail {
    /// Collapse the detail record into a list summary.
    pub fn summary(&self) -> PokemonSummary {
        PokemonSummary::new(self.id, self.name.clone(), self.image_url.clone())
    }
}
