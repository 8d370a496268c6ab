//! Mapping of recorded PokeAPI responses into records and nested chains.

use pokedex_providers::pokeapi::mapper::{to_nested, to_pokemon};
use pokedex_providers::pokeapi::schema::{
    EvolutionChainResource, PokemonResource, SpeciesResource,
};

const CHARIZARD: &str = r#"{
    "id": 6,
    "name": "charizard",
    "height": 17,
    "weight": 905,
    "base_experience": 267,
    "types": [
        {"slot": 2, "type": {"name": "flying", "url": "https://pokeapi.co/api/v2/type/3/"}},
        {"slot": 1, "type": {"name": "fire", "url": "https://pokeapi.co/api/v2/type/10/"}}
    ],
    "species": {"name": "charizard", "url": "https://pokeapi.co/api/v2/pokemon-species/6/"},
    "sprites": {"front_default": "https://example.test/6.png", "front_shiny": null}
}"#;

const CHARIZARD_SPECIES: &str = r#"{
    "id": 6,
    "name": "charizard",
    "names": [
        {"name": "Dracaufeu", "language": {"name": "fr", "url": "https://pokeapi.co/api/v2/language/5/"}},
        {"name": "Charizard", "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"}}
    ],
    "genera": [
        {"genus": "Pokémon Flamme", "language": {"name": "fr", "url": "https://pokeapi.co/api/v2/language/5/"}},
        {"genus": "Flame Pokémon", "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"}}
    ],
    "flavor_text_entries": [
        {
            "flavor_text": "Spits fire that\nis hot enough to\fmelt boulders.",
            "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"},
            "version": {"name": "red", "url": "https://pokeapi.co/api/v2/version/1/"}
        },
        {
            "flavor_text": "It flies around\nthe sky in search\nof powerful opponents.",
            "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"},
            "version": {"name": "x", "url": "https://pokeapi.co/api/v2/version/23/"}
        }
    ],
    "evolution_chain": {"url": "https://pokeapi.co/api/v2/evolution-chain/2/"},
    "varieties": [
        {"is_default": true, "pokemon": {"name": "charizard", "url": "https://pokeapi.co/api/v2/pokemon/6/"}},
        {"is_default": false, "pokemon": {"name": "charizard-mega-x", "url": "https://pokeapi.co/api/v2/pokemon/10034/"}},
        {"is_default": false, "pokemon": {"name": "charizard-mega-y", "url": "https://pokeapi.co/api/v2/pokemon/10035/"}},
        {"is_default": false, "pokemon": {"name": "charizard-gmax", "url": "https://pokeapi.co/api/v2/pokemon/10196/"}}
    ]
}"#;

const EEVEE_CHAIN: &str = r#"{
    "id": 67,
    "baby_trigger_item": null,
    "chain": {
        "species": {"name": "eevee", "url": "https://pokeapi.co/api/v2/pokemon-species/133/"},
        "evolves_to": [
            {"species": {"name": "vaporeon", "url": "https://pokeapi.co/api/v2/pokemon-species/134/"}, "evolves_to": []},
            {"species": {"name": "jolteon", "url": "https://pokeapi.co/api/v2/pokemon-species/135/"}, "evolves_to": []}
        ]
    }
}"#;

fn charizard() -> (PokemonResource, SpeciesResource) {
    (
        serde_json::from_str(CHARIZARD).unwrap(),
        serde_json::from_str(CHARIZARD_SPECIES).unwrap(),
    )
}

#[test]
fn test_record_fields_follow_language_and_version() {
    let (pokemon, species) = charizard();
    let record = to_pokemon(&pokemon, &species, "en", "x");

    insta::assert_json_snapshot!(record, @r#"
    {
      "number": 6,
      "name": "Charizard",
      "identifier": "charizard",
      "genus": "Flame",
      "flavor": "It flies around the sky in search of powerful opponents.",
      "types": [
        "fire",
        "flying"
      ],
      "height": 1700,
      "weight": 9050000,
      "weaknesses": [],
      "mega_forms": [
        10034,
        10035
      ]
    }
    "#);
}

#[test]
fn test_flavor_falls_back_to_first_entry_in_language() {
    let (pokemon, species) = charizard();
    let record = to_pokemon(&pokemon, &species, "en", "sapphire");
    assert_eq!(record.flavor, "Spits fire that is hot enough to melt boulders.");
}

#[test]
fn test_missing_language_uses_identifier_and_placeholder_genus() {
    let (pokemon, species) = charizard();
    let record = to_pokemon(&pokemon, &species, "de", "x");

    assert_eq!(record.name, "Charizard");
    assert_eq!(record.genus, "???");
    assert_eq!(record.flavor, "");
}

#[test]
fn test_localized_genus_keeps_prefix_forms() {
    let (pokemon, species) = charizard();
    let record = to_pokemon(&pokemon, &species, "fr", "x");

    assert_eq!(record.name, "Dracaufeu");
    assert_eq!(record.identifier, "charizard");
    // only an English-style trailing suffix is stripped
    assert_eq!(record.genus, "Pokémon Flamme");
}

#[test]
fn test_nested_chain_keeps_branch_order() {
    let chain: EvolutionChainResource = serde_json::from_str(EEVEE_CHAIN).unwrap();
    let nested = to_nested(&chain.chain).unwrap();

    assert_eq!((nested.id, nested.name.as_str()), (133, "Eevee"));
    let children: Vec<(u32, &str)> = nested
        .evolves_to
        .iter()
        .map(|n| (n.id, n.name.as_str()))
        .collect();
    assert_eq!(children, vec![(134, "Vaporeon"), (135, "Jolteon")]);
}

#[test]
fn test_chain_with_unparseable_url_is_rejected() {
    let mut chain: EvolutionChainResource = serde_json::from_str(EEVEE_CHAIN).unwrap();
    chain.chain.evolves_to[0].species.url = "https://pokeapi.co/api/v2/pokemon-species/".to_string();

    let err = to_nested(&chain.chain).unwrap_err();
    assert!(err.to_string().starts_with("Parse error"));
}
