use pokedex_types::EfficacyEntry;
use rusqlite::Connection;

use crate::Result;

/// Type identifiers of the species' default pokemon, ordered by slot
pub fn of_species(conn: &Connection, species_id: u32) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT t.identifier
        FROM pokemon_types pt
        JOIN types t ON t.id = pt.type_id
        WHERE pt.pokemon_id = (
            SELECT id FROM pokemon
            WHERE species_id = ?1
            ORDER BY is_default DESC, id
            LIMIT 1
        )
        ORDER BY pt.slot
        "#,
    )?;

    let types = stmt
        .query_map([species_id], |row| row.get(0))?
        .collect::<std::result::Result<Vec<String>, _>>()?;

    Ok(types)
}

/// Every efficacy row with its type identifiers resolved.
///
/// Rows pointing at unknown type ids come back with `None` labels so table
/// validation can reject them.
pub fn efficacy(conn: &Connection) -> Result<Vec<EfficacyEntry>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT attacker.identifier, defender.identifier, te.damage_factor
        FROM type_efficacy te
        LEFT JOIN types attacker ON attacker.id = te.damage_type_id
        LEFT JOIN types defender ON defender.id = te.target_type_id
        WHERE te.damage_type_id < 10000 AND te.target_type_id < 10000
        ORDER BY te.damage_type_id, te.target_type_id
        "#,
    )?;

    let entries = stmt
        .query_map([], |row| {
            Ok(EfficacyEntry {
                attacker: row.get(0)?,
                defender: row.get(1)?,
                damage_factor: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(entries)
}
