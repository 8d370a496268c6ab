//! Integration tests for snapshot lookups
//!
//! Builds a small veekun-shaped snapshot on disk and reads it back through
//! `Database::open`.

use pokedex_index::{Database, Error, init_schema};
use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;

const SEED: &str = r#"
    INSERT INTO languages (id, identifier) VALUES (9, 'en'), (5, 'fr');
    INSERT INTO versions (id, identifier) VALUES (1, 'red'), (23, 'x'), (33, 'sword');

    INSERT INTO pokemon_species (id, identifier, evolves_from_species_id, evolution_chain_id) VALUES
        (133, 'eevee', NULL, 67),
        (134, 'vaporeon', 133, 67),
        (135, 'jolteon', 133, 67),
        (136, 'flareon', 133, 67),
        (6, 'charizard', NULL, 2),
        (810, 'grookey', NULL, 400);

    INSERT INTO pokemon (id, identifier, species_id, height, weight, is_default) VALUES
        (133, 'eevee', 133, 3, 65, 1),
        (134, 'vaporeon', 134, 10, 290, 1),
        (135, 'jolteon', 135, 8, 245, 1),
        (136, 'flareon', 136, 9, 250, 1),
        (6, 'charizard', 6, 17, 905, 1),
        (10034, 'charizard-mega-x', 6, 17, 1105, 0),
        (10035, 'charizard-mega-y', 6, 17, 1005, 0),
        (810, 'grookey', 810, 3, 50, 1);

    INSERT INTO pokemon_forms (id, pokemon_id, is_mega) VALUES
        (6, 6, 0), (10034, 10034, 1), (10035, 10035, 1);

    INSERT INTO pokemon_species_names (pokemon_species_id, local_language_id, name, genus) VALUES
        (133, 9, 'Eevee', 'Evolution'),
        (133, 5, 'Évoli', 'Évolutif'),
        (134, 9, 'Vaporeon', 'Bubble Jet'),
        (135, 9, 'Jolteon', 'Lightning'),
        (6, 9, 'Charizard', 'Flame'),
        (810, 9, 'Grookey', 'Chimp');

    INSERT INTO pokemon_species_flavor_text (species_id, version_id, language_id, flavor_text) VALUES
        (133, 23, 9, 'Its genetic code is irregular.'),
        (810, 33, 9, 'When it uses its special stick.');

    INSERT INTO types (id, identifier) VALUES
        (1, 'normal'), (3, 'flying'), (10, 'fire'), (11, 'water'), (12, 'grass'), (13, 'electric');

    INSERT INTO pokemon_types (pokemon_id, type_id, slot) VALUES
        (6, 3, 2), (6, 10, 1), (133, 1, 1), (134, 11, 1);

    INSERT INTO type_efficacy (damage_type_id, target_type_id, damage_factor) VALUES
        (13, 11, 200), (12, 11, 200), (10, 11, 50), (11, 10, 200);
"#;

fn create_snapshot(path: &Path) {
    let conn = Connection::open(path).unwrap();
    init_schema(&conn).unwrap();
    conn.execute_batch(SEED).unwrap();
}

fn open_fixture() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("veekun-pokedex.sqlite");
    create_snapshot(&path);
    let db = Database::open(&path).unwrap();
    (dir, db)
}

#[test]
fn test_open_missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.sqlite");
    match Database::open(&path) {
        Err(Error::SnapshotMissing(missing)) => assert_eq!(missing, path),
        other => panic!("expected SnapshotMissing, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_open_rejects_foreign_database() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("other.sqlite");
    Connection::open(&path)
        .unwrap()
        .execute_batch("CREATE TABLE notes (body TEXT);")
        .unwrap();

    let err = Database::open(&path).err().unwrap();
    assert!(matches!(err, Error::MissingTable(_)));
    assert!(err.is_outdated_dump());
}

#[test]
fn test_name_lookup_is_case_insensitive_and_localized() {
    let (_dir, db) = open_fixture();

    assert_eq!(db.species_id_by_name("EEVEE", "en").unwrap(), Some(133));
    assert_eq!(db.species_id_by_name("  eevee ", "en").unwrap(), Some(133));
    assert_eq!(db.species_id_by_name("eevee", "fr").unwrap(), None);
    assert_eq!(db.species_id_by_name("missingno", "en").unwrap(), None);

    let french = db.pokedex_entry(133, "fr", "x").unwrap().unwrap();
    assert_eq!(french.name, "Évoli");
}

#[test]
fn test_types_follow_slot_order() {
    let (_dir, db) = open_fixture();
    assert_eq!(db.types(6).unwrap(), vec!["fire", "flying"]);
    assert!(db.types(810).unwrap().is_empty());
}

#[test]
fn test_evolution_links_cover_whole_chain() {
    let (_dir, db) = open_fixture();

    let links = db.evolution_links(135, "en").unwrap();
    let ids: Vec<u32> = links.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![133, 134, 135, 136]);

    assert_eq!(links[0].evolves_from, None);
    assert_eq!(links[2].evolves_from, Some(133));
    // no English name for Flareon in the fixture
    assert_eq!(links[3].name, "flareon");
}

#[test]
fn test_entry_uses_requested_version() {
    let (_dir, db) = open_fixture();

    let row = db.pokedex_entry(133, "en", "x").unwrap().unwrap();
    assert_eq!(row.name, "Eevee");
    assert_eq!(row.genus.as_deref(), Some("Evolution"));
    assert_eq!(row.flavor.as_deref(), Some("Its genetic code is irregular."));
    assert_eq!((row.height_dm, row.weight_hg), (3, 65));
}

#[test]
fn test_entry_falls_back_to_newer_versions() {
    let (_dir, db) = open_fixture();

    let row = db.pokedex_entry(810, "en", "x").unwrap().unwrap();
    assert_eq!(row.flavor.as_deref(), Some("When it uses its special stick."));

    let unknown_version = db.pokedex_entry(810, "en", "stadium").unwrap().unwrap();
    assert_eq!(unknown_version.name, "Grookey");
}

#[test]
fn test_entry_without_any_flavor_keeps_the_row() {
    let (_dir, db) = open_fixture();

    let row = db.pokedex_entry(6, "en", "x").unwrap().unwrap();
    assert_eq!(row.name, "Charizard");
    // default form, not a mega
    assert_eq!(row.identifier, "charizard");
    assert_eq!(row.flavor, None);

    assert_eq!(db.pokedex_entry(9999, "en", "x").unwrap(), None);
}

#[test]
fn test_mega_forms_and_versions() {
    let (_dir, db) = open_fixture();

    assert_eq!(db.mega_forms(6).unwrap(), vec![10034, 10035]);
    assert!(db.mega_forms(133).unwrap().is_empty());

    assert_eq!(db.versions().unwrap(), vec!["red", "x", "sword"]);
    assert!(db.has_version("sword").unwrap());
    assert!(!db.has_version("stadium").unwrap());
}

#[test]
fn test_type_efficacy_resolves_labels() {
    let (_dir, db) = open_fixture();

    let entries = db.type_efficacy().unwrap();
    assert_eq!(entries.len(), 4);
    assert!(entries.iter().any(|e| {
        e.attacker.as_deref() == Some("electric")
            && e.defender.as_deref() == Some("water")
            && e.damage_factor == Some(200)
    }));
}

#[test]
fn test_unknown_type_ids_surface_as_missing_labels() {
    let db = Database::open_in_memory().unwrap();
    db.connection()
        .execute_batch(
            "INSERT INTO types (id, identifier) VALUES (1, 'normal');
             INSERT INTO type_efficacy VALUES (1, 42, 200);",
        )
        .unwrap();

    let entries = db.type_efficacy().unwrap();
    assert_eq!(entries[0].attacker.as_deref(), Some("normal"));
    assert_eq!(entries[0].defender, None);
}
