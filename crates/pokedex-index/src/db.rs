use pokedex_types::{EfficacyEntry, SpeciesLink};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use crate::queries::{species, types, versions};
use crate::{EntryRow, Error, Result, schema};

/// Versions tried in order when the requested one has no flavor text
pub const FALLBACK_VERSIONS: [&str; 4] = ["sword", "shield", "scarlet", "violet"];

/// Read-only handle on a veekun snapshot
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens an existing snapshot read-only and checks its tables.
    pub fn open(db_path: &Path) -> Result<Self> {
        if !db_path.exists() {
            return Err(Error::SnapshotMissing(db_path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        schema::verify(&conn)?;

        tracing::debug!(path = %db_path.display(), "opened snapshot");
        Ok(Self { conn })
    }

    /// Empty in-memory snapshot with the schema created
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    // Species

    pub fn species_id_by_name(&self, name: &str, language: &str) -> Result<Option<u32>> {
        species::id_by_name(&self.conn, name, language)
    }

    pub fn evolution_links(&self, species_id: u32, language: &str) -> Result<Vec<SpeciesLink>> {
        species::evolution_links(&self.conn, species_id, language)
    }

    pub fn mega_forms(&self, species_id: u32) -> Result<Vec<u32>> {
        species::mega_forms(&self.conn, species_id)
    }

    /// Entry for `species_id` in `version`.
    ///
    /// When that version has no flavor text (or is unknown) the
    /// [`FALLBACK_VERSIONS`] are tried in order. The first row found is kept
    /// as the answer if none of them carries flavor text either.
    pub fn pokedex_entry(
        &self,
        species_id: u32,
        language: &str,
        version: &str,
    ) -> Result<Option<EntryRow>> {
        let mut first = species::entry(&self.conn, species_id, language, version)?;
        if first.as_ref().is_some_and(|row| row.flavor.is_some()) {
            return Ok(first);
        }

        for fallback in FALLBACK_VERSIONS.iter().filter(|v| **v != version) {
            let Some(row) = species::entry(&self.conn, species_id, language, fallback)? else {
                continue;
            };
            if row.flavor.is_some() {
                tracing::debug!(species_id, version, fallback, "flavor text from fallback version");
                return Ok(Some(row));
            }
            first.get_or_insert(row);
        }

        Ok(first)
    }

    // Types

    pub fn types(&self, species_id: u32) -> Result<Vec<String>> {
        types::of_species(&self.conn, species_id)
    }

    pub fn type_efficacy(&self) -> Result<Vec<EfficacyEntry>> {
        types::efficacy(&self.conn)
    }

    // Versions

    pub fn versions(&self) -> Result<Vec<String>> {
        versions::list(&self.conn)
    }

    pub fn has_version(&self, version: &str) -> Result<bool> {
        versions::exists(&self.conn, version)
    }
}
