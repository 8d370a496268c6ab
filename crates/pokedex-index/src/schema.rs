use rusqlite::{Connection, OptionalExtension};

use crate::{Error, Result};

/// Tables of the veekun dump that lookups read
pub const REQUIRED_TABLES: [&str; 10] = [
    "languages",
    "versions",
    "pokemon",
    "pokemon_forms",
    "pokemon_species",
    "pokemon_species_names",
    "pokemon_species_flavor_text",
    "types",
    "pokemon_types",
    "type_efficacy",
];

/// Fails with the first required table the snapshot lacks.
pub fn verify(conn: &Connection) -> Result<()> {
    for table in REQUIRED_TABLES {
        let found: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [table],
                |row| row.get(0),
            )
            .optional()?;

        if found.is_none() {
            return Err(Error::MissingTable(table.to_string()));
        }
    }
    Ok(())
}

/// Creates the subset of the veekun schema that lookups read.
///
/// Real snapshots ship with these tables already; this exists so a small
/// snapshot can be assembled for fixtures.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS languages (
            id INTEGER PRIMARY KEY,
            identifier TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS versions (
            id INTEGER PRIMARY KEY,
            identifier TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS pokemon_species (
            id INTEGER PRIMARY KEY,
            identifier TEXT NOT NULL,
            evolves_from_species_id INTEGER,
            evolution_chain_id INTEGER
        );

        CREATE TABLE IF NOT EXISTS pokemon (
            id INTEGER PRIMARY KEY,
            identifier TEXT NOT NULL,
            species_id INTEGER NOT NULL,
            height INTEGER NOT NULL,
            weight INTEGER NOT NULL,
            is_default BOOLEAN NOT NULL DEFAULT 1,
            FOREIGN KEY (species_id) REFERENCES pokemon_species(id)
        );

        CREATE TABLE IF NOT EXISTS pokemon_forms (
            id INTEGER PRIMARY KEY,
            pokemon_id INTEGER NOT NULL,
            is_mega BOOLEAN NOT NULL DEFAULT 0,
            FOREIGN KEY (pokemon_id) REFERENCES pokemon(id)
        );

        CREATE TABLE IF NOT EXISTS pokemon_species_names (
            pokemon_species_id INTEGER NOT NULL,
            local_language_id INTEGER NOT NULL,
            name TEXT,
            genus TEXT,
            PRIMARY KEY (pokemon_species_id, local_language_id)
        );

        CREATE TABLE IF NOT EXISTS pokemon_species_flavor_text (
            species_id INTEGER NOT NULL,
            version_id INTEGER NOT NULL,
            language_id INTEGER NOT NULL,
            flavor_text TEXT NOT NULL,
            PRIMARY KEY (species_id, version_id, language_id)
        );

        CREATE TABLE IF NOT EXISTS types (
            id INTEGER PRIMARY KEY,
            identifier TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS pokemon_types (
            pokemon_id INTEGER NOT NULL,
            type_id INTEGER NOT NULL,
            slot INTEGER NOT NULL,
            PRIMARY KEY (pokemon_id, slot)
        );

        CREATE TABLE IF NOT EXISTS type_efficacy (
            damage_type_id INTEGER NOT NULL,
            target_type_id INTEGER NOT NULL,
            damage_factor INTEGER,
            PRIMARY KEY (damage_type_id, target_type_id)
        );
        "#,
    )?;

    Ok(())
}
