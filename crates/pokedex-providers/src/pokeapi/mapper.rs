use pokedex_types::{NestedSpecies, Pokemon};

use super::schema::{ChainLink, PokemonResource, SpeciesResource};
use crate::{Error, Result};

const GENUS_SUFFIX: &str = " Pokémon";

/// Numeric id at the end of a resource URL such as
/// `https://pokeapi.co/api/v2/pokemon-species/133/`
pub fn id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

/// Upper-cases the first letter of an API identifier
pub fn capitalize(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Collapses the line and page breaks game text carries into single spaces
pub fn normalize_flavor(text: &str) -> String {
    text.replace(['\n', '\x0c', '\u{ad}'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn localized_name(species: &SpeciesResource, language: &str) -> Option<String> {
    species
        .names
        .iter()
        .find(|n| n.language.name == language)
        .map(|n| n.name.clone())
}

fn genus(species: &SpeciesResource, language: &str) -> Option<String> {
    species
        .genera
        .iter()
        .find(|g| g.language.name == language)
        .map(|g| {
            g.genus
                .strip_suffix(GENUS_SUFFIX)
                .unwrap_or(&g.genus)
                .trim()
                .to_string()
        })
}

/// Flavor text in `language`, taken from `version` when that game has one
fn flavor(species: &SpeciesResource, language: &str, version: &str) -> Option<String> {
    let in_language = || {
        species
            .flavor_text_entries
            .iter()
            .filter(|entry| entry.language.name == language)
    };

    in_language()
        .find(|entry| entry.version.as_ref().is_some_and(|v| v.name == version))
        .or_else(|| in_language().next())
        .map(|entry| normalize_flavor(&entry.flavor_text))
}

/// Pokemon ids of the species' mega varieties
fn mega_forms(species: &SpeciesResource) -> Vec<u32> {
    species
        .varieties
        .iter()
        .filter(|v| !v.is_default && v.pokemon.name.contains("-mega"))
        .filter_map(|v| id_from_url(&v.pokemon.url))
        .collect()
}

/// Combines the pokemon and species resources into a record.
///
/// Weaknesses are left empty; scoring belongs to the engine.
pub fn to_pokemon(
    pokemon: &PokemonResource,
    species: &SpeciesResource,
    language: &str,
    version: &str,
) -> Pokemon {
    let mut slots = pokemon.types.clone();
    slots.sort_by_key(|slot| slot.slot);

    Pokemon {
        number: species.id,
        name: localized_name(species, language).unwrap_or_else(|| capitalize(&pokemon.name)),
        identifier: pokemon.name.clone(),
        genus: genus(species, language).unwrap_or_else(|| "???".to_string()),
        flavor: flavor(species, language, version).unwrap_or_default(),
        types: slots.into_iter().map(|slot| slot.kind.name).collect(),
        height: Pokemon::height_from_decimeters(pokemon.height),
        weight: Pokemon::weight_from_hectograms(pokemon.weight),
        weaknesses: Vec::new(),
        mega_forms: mega_forms(species),
    }
}

/// Copies the API's nested chain, reading each species id from its URL.
pub fn to_nested(link: &ChainLink) -> Result<NestedSpecies> {
    let id = id_from_url(&link.species.url).ok_or_else(|| {
        Error::Parse(format!(
            "species URL without an id: {}",
            link.species.url
        ))
    })?;

    let evolves_to = link
        .evolves_to
        .iter()
        .map(to_nested)
        .collect::<Result<Vec<_>>>()?;

    Ok(NestedSpecies {
        id,
        name: capitalize(&link.species.name),
        evolves_to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_url() {
        assert_eq!(
            id_from_url("https://pokeapi.co/api/v2/pokemon-species/133/"),
            Some(133)
        );
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/10034"), Some(10034));
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/"), None);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("eevee"), "Eevee");
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_normalize_flavor() {
        assert_eq!(
            normalize_flavor("When the bulb on\nits back grows\x0clarge, it"),
            "When the bulb on its back grows large, it"
        );
    }
}
