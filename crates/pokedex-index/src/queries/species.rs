use pokedex_types::SpeciesLink;
use rusqlite::{Connection, OptionalExtension, params};

use crate::{Result, records::EntryRow};

pub fn id_by_name(conn: &Connection, name: &str, language: &str) -> Result<Option<u32>> {
    let id = conn
        .query_row(
            r#"
            SELECT DISTINCT p.species_id
            FROM pokemon p
            JOIN pokemon_species_names s ON s.pokemon_species_id = p.species_id
            JOIN languages l ON l.id = s.local_language_id
            WHERE l.identifier = ?1 AND LOWER(s.name) = ?2
            ORDER BY p.species_id
            LIMIT 1
            "#,
            params![language, name.trim().to_lowercase()],
            |row| row.get(0),
        )
        .optional()?;

    Ok(id)
}

/// Every species sharing an evolution chain with `species_id`, in id order.
///
/// Species without a localized name fall back to their identifier.
pub fn evolution_links(
    conn: &Connection,
    species_id: u32,
    language: &str,
) -> Result<Vec<SpeciesLink>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT ps.id, COALESCE(n.name, ps.identifier), ps.evolves_from_species_id
        FROM pokemon_species ps
        LEFT JOIN pokemon_species_names n
            ON n.pokemon_species_id = ps.id
            AND n.local_language_id = (SELECT id FROM languages WHERE identifier = ?2)
        WHERE ps.evolution_chain_id = (
            SELECT evolution_chain_id FROM pokemon_species WHERE id = ?1
        )
        ORDER BY ps.id
        "#,
    )?;

    let links = stmt
        .query_map(params![species_id, language], |row| {
            Ok(SpeciesLink {
                id: row.get(0)?,
                name: row.get(1)?,
                evolves_from: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(links)
}

/// Joined entry for one species in one game version. `None` when the species
/// or the version is unknown, or the species has no name in `language`.
pub fn entry(
    conn: &Connection,
    species_id: u32,
    language: &str,
    version: &str,
) -> Result<Option<EntryRow>> {
    let row = conn
        .query_row(
            r#"
            SELECT p.species_id, p.identifier, s.name, s.genus, f.flavor_text, p.height, p.weight
            FROM pokemon p
            JOIN languages l ON l.identifier = ?2
            JOIN versions v ON v.identifier = ?3
            JOIN pokemon_species_names s
                ON s.local_language_id = l.id AND s.pokemon_species_id = p.species_id
            LEFT JOIN pokemon_species_flavor_text f
                ON f.language_id = l.id AND f.version_id = v.id AND f.species_id = p.species_id
            WHERE p.species_id = ?1
            ORDER BY p.is_default DESC, p.id
            LIMIT 1
            "#,
            params![species_id, language, version],
            |row| {
                Ok(EntryRow {
                    species_id: row.get(0)?,
                    identifier: row.get(1)?,
                    name: row.get(2)?,
                    genus: row.get(3)?,
                    flavor: row.get(4)?,
                    height_dm: row.get(5)?,
                    weight_hg: row.get(6)?,
                })
            },
        )
        .optional()?;

    Ok(row)
}

/// Pokemon ids of the species' mega forms, lowest first
pub fn mega_forms(conn: &Connection, species_id: u32) -> Result<Vec<u32>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT DISTINCT f.pokemon_id
        FROM pokemon_forms f
        JOIN pokemon p ON p.id = f.pokemon_id
        WHERE p.species_id = ?1 AND f.is_mega = 1
        ORDER BY f.pokemon_id
        "#,
    )?;

    let ids = stmt
        .query_map([species_id], |row| row.get(0))?
        .collect::<std::result::Result<Vec<u32>, _>>()?;

    Ok(ids)
}
