use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Display name used for the stand-in record when a lookup fails
pub const PLACEHOLDER_NAME: &str = "MISSINGNO.";

/// Highest national dex number the lookups accept
pub const MAX_SPECIES_ID: u32 = 1025;

/// The 18 elemental types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    pub const ALL: [PokemonType; 18] = [
        PokemonType::Normal,
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Electric,
        PokemonType::Grass,
        PokemonType::Ice,
        PokemonType::Fighting,
        PokemonType::Poison,
        PokemonType::Ground,
        PokemonType::Flying,
        PokemonType::Psychic,
        PokemonType::Bug,
        PokemonType::Rock,
        PokemonType::Ghost,
        PokemonType::Dragon,
        PokemonType::Dark,
        PokemonType::Steel,
        PokemonType::Fairy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PokemonType::Normal => "normal",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Electric => "electric",
            PokemonType::Grass => "grass",
            PokemonType::Ice => "ice",
            PokemonType::Fighting => "fighting",
            PokemonType::Poison => "poison",
            PokemonType::Ground => "ground",
            PokemonType::Flying => "flying",
            PokemonType::Psychic => "psychic",
            PokemonType::Bug => "bug",
            PokemonType::Rock => "rock",
            PokemonType::Ghost => "ghost",
            PokemonType::Dragon => "dragon",
            PokemonType::Dark => "dark",
            PokemonType::Steel => "steel",
            PokemonType::Fairy => "fairy",
        }
    }

    /// Case-insensitive lookup; `None` for labels outside the known set
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PokemonType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::UnknownType(s.to_string()))
    }
}

/// One resolved Pokédex record.
///
/// `height` is stored in millimeters and `weight` in centigrams. Type labels
/// are kept as the source spelled them (lowercase identifiers) so that
/// labels outside [`PokemonType`] survive to the renderers untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub number: u32,
    pub name: String,
    /// Lowercase API identifier (`mr-mime`); empty when unknown
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub identifier: String,
    pub genus: String,
    pub flavor: String,
    pub types: Vec<String>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    /// Pokémon ids of the mega forms, used only for sprite lookup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mega_forms: Vec<u32>,
}

impl Pokemon {
    /// Stand-in record shown when `query` resolves to nothing.
    pub fn placeholder(query: &str) -> Self {
        Self {
            number: 0,
            name: PLACEHOLDER_NAME.to_string(),
            identifier: String::new(),
            genus: "???".to_string(),
            flavor: format!("Pokémon {} not found", query),
            types: vec!["flying".to_string(), "normal".to_string()],
            height: 1_000,
            weight: 1_000_000,
            weaknesses: Vec::new(),
            mega_forms: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.number == 0
    }

    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 1_000.0
    }

    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 100_000.0
    }

    /// Both data sources report height in decimeters
    pub fn height_from_decimeters(decimeters: u32) -> u32 {
        decimeters.saturating_mul(100)
    }

    /// Both data sources report weight in hectograms
    pub fn weight_from_hectograms(hectograms: u32) -> u32 {
        hectograms.saturating_mul(10_000)
    }
}
